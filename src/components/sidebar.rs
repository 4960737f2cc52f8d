//! Navigation sidebar with the pending-task badge and logout.

use leptos::prelude::*;

use crate::app::{go_to, logout};
use crate::components::toast_stack::Toaster;
use crate::config::PortalConfig;
use crate::state::page::PageId;
use crate::state::portal::PortalState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toaster = expect_context::<Toaster>();
    let reload_delay_ms = expect_context::<PortalConfig>().logout_reload_delay_ms;

    let sidebar_class = move || if ui.with(|u| u.menu_open) { "sidebar open" } else { "sidebar" };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <i class="fas fa-graduation-cap"></i>
                <span class="sidebar-title">"Student Portal"</span>
            </div>
            <nav class="sidebar-nav">
                {PageId::ALL
                    .into_iter()
                    .map(|page| {
                        let class = move || {
                            if portal.with(|p| p.is_active(page)) { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <a class=class data-page=page.as_str() on:click=move |_| go_to(portal, ui, page)>
                                <i class=page.icon()></i>
                                <span>{page.title()}</span>
                                {(page == PageId::Tasks)
                                    .then(|| {
                                        view! {
                                            <span class="badge" id="task-count">
                                                {move || portal.with(|p| p.pending_task_count().to_owned())}
                                            </span>
                                        }
                                    })}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="logout-btn" on:click=move |_| logout(session, toaster, reload_delay_ms)>
                <i class="fas fa-sign-out-alt"></i>
                <span>"Logout"</span>
            </button>
        </aside>
    }
}
