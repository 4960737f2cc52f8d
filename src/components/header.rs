//! Top bar: page title, search, date picker, theme toggle, and the student.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search box feeds the coordinator on every keystroke; the mobile menu
//! toggle only renders below the breakpoint.

use leptos::prelude::*;

use crate::app::toggle_theme;
use crate::components::toast_stack::Toaster;
use crate::config::PortalConfig;
use crate::render::views::{iso_date, parse_iso_date};
use crate::state::portal::PortalState;
use crate::state::session::SessionState;
use crate::state::toast::Severity;
use crate::state::ui::UiState;
use crate::util::dark_mode::theme_icon;

#[component]
pub fn Header() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toaster = expect_context::<Toaster>();
    let config = expect_context::<PortalConfig>();

    let is_mobile = move || ui.with(|u| u.is_mobile(&config));

    let on_search = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        portal.update(|p| p.search(&query));
    };

    let on_date_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match parse_iso_date(&raw) {
            Some(date) => {
                portal.update(|p| p.set_date(date));
                toaster.show("Date updated successfully", Severity::Success);
            }
            None => leptos::logging::warn!("ignoring date picker value {raw:?}"),
        }
    };

    view! {
        <header class="header">
            <div class="header-left">
                <Show when=is_mobile>
                    <button class="mobile-menu-toggle" on:click=move |_| ui.update(UiState::toggle_menu)>
                        <i class="fas fa-bars"></i>
                    </button>
                </Show>
                <h1 id="page-title">{move || portal.with(PortalState::title)}</h1>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search..."
                    prop:value=move || portal.with(|p| p.search_query().to_owned())
                    on:input=on_search
                />
            </div>
            <div class="header-right">
                <input
                    type="date"
                    id="date-picker"
                    class="date-picker"
                    prop:value=move || portal.with(|p| iso_date(p.selected_date()))
                    on:change=on_date_change
                />
                <button class="theme-toggle" title="Toggle dark mode" on:click=move |_| toggle_theme(session)>
                    <i class=move || theme_icon(session.with(|s| s.dark_mode))></i>
                </button>
                <div class="user-info">
                    <i class="fas fa-user-circle"></i>
                    <span id="student-name">{move || session.with(|s| s.profile.name.clone())}</span>
                </div>
            </div>
        </header>
    }
}
