//! Weekly timetable grid with week navigation.

use leptos::prelude::*;

use crate::state::portal::PortalState;

#[component]
pub fn TimetablePage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();

    let grid_style = move || {
        let columns = portal.with(|p| p.timetable.columns).max(1);
        format!("grid-template-columns: 100px repeat({}, 1fr)", columns - 1)
    };

    view! {
        <div class="timetable-header">
            <button class="week-nav" title="Previous week" on:click=move |_| portal.update(|p| p.shift_week(-1))>
                <i class="fas fa-chevron-left"></i>
            </button>
            <h2 id="current-week">{move || portal.with(PortalState::week_label)}</h2>
            <button class="week-nav" title="Next week" on:click=move |_| portal.update(|p| p.shift_week(1))>
                <i class="fas fa-chevron-right"></i>
            </button>
        </div>
        <div class="timetable-grid" id="timetable-grid" style=grid_style>
            {move || {
                portal
                    .with(|p| p.timetable.cells.clone())
                    .into_iter()
                    .map(|cell| view! { <div class=cell.kind.class()>{cell.text}</div> })
                    .collect_view()
            }}
        </div>
    }
}
