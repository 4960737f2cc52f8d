//! Enrolled classes as cards.

use leptos::prelude::*;

use crate::state::portal::PortalState;

#[component]
pub fn ClassesPage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();

    view! {
        <div class="classes-grid" id="classes-grid">
            <For
                each=move || portal.with(|p| p.classes.visible_items())
                key=|item| item.key.clone()
                children=|item| {
                    let card = item.view;
                    view! {
                        <div class="class-card">
                            <div class="class-header">
                                <div>
                                    <div class="class-title">{card.title}</div>
                                    <div class="class-code">{card.code}</div>
                                </div>
                            </div>
                            <div class="class-instructor">{card.instructor}</div>
                            <div class="class-stats">
                                {card
                                    .stats
                                    .into_iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="class-stat">
                                                <div class="class-stat-value">{stat.value}</div>
                                                <div class="class-stat-label">{stat.label}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
