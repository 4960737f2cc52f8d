//! Root application component and the actions shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every state signal, provides them as context, and installs the
//! window-level listeners: shortcuts, resize, click-outside, connectivity,
//! global errors, and the install prompt. It also starts the simulated update
//! feed and service worker registration.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::header::Header;
use crate::components::install_button::{InstallButton, InstallPrompt};
use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::{ToastStack, Toaster};
use crate::config::PortalConfig;
use crate::net::api::MockApi;
use crate::net::fixtures::Fixtures;
use crate::pages::classes::ClassesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::grades::GradesPage;
use crate::pages::settings::SettingsPage;
use crate::pages::tasks::TasksPage;
use crate::pages::timetable::TimetablePage;
use crate::state::page::PageId;
use crate::state::portal::PortalState;
use crate::state::session::SessionState;
use crate::state::toast::{Severity, ToastState};
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::{browser, dark_mode};

/// Activate `page` and close the mobile menu.
pub fn go_to(portal: RwSignal<PortalState>, ui: RwSignal<UiState>, page: PageId) {
    portal.update(|p| p.navigate(page));
    ui.update(UiState::close_menu);
}

pub fn toggle_theme(session: RwSignal<SessionState>) {
    session.update(|s| {
        s.toggle_theme(&BrowserStorage);
    });
}

pub fn set_theme(session: RwSignal<SessionState>, enabled: bool) {
    session.update(|s| s.set_theme(&BrowserStorage, enabled));
}

/// Confirm, forget the stored session, and reload once the toast has been seen.
/// The reload recreates the default student.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn logout(session: RwSignal<SessionState>, toaster: Toaster, reload_delay_ms: u64) {
    if !browser::confirm("Are you sure you want to logout?") {
        return;
    }
    session.update(|s| s.logout(&BrowserStorage));
    toaster.show("Logged out successfully", Severity::Success);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(reload_delay_ms)).await;
        browser::reload();
    });
}

/// Root application component.
///
/// Provides all shared state contexts and mounts every page section; the
/// coordinator decides which one carries the `active` class.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::default();
    let session = RwSignal::new(SessionState::restore(&BrowserStorage));
    let portal = RwSignal::new(PortalState::with_fixtures(browser::today()));
    let ui = RwSignal::new(UiState {
        viewport_width: browser::viewport_width(),
        online: browser::is_online(),
        ..UiState::default()
    });
    let toasts = RwSignal::new(ToastState::default());
    let toaster = Toaster::new(toasts, config.toast);
    let install = InstallPrompt::new(ui);

    provide_context(session);
    provide_context(portal);
    provide_context(ui);
    provide_context(toasts);
    provide_context(toaster);
    provide_context(install);
    provide_context(MockApi::new(Fixtures, &config));
    provide_context(config.clone());

    Effect::new(move || dark_mode::apply(session.with(|s| s.dark_mode)));

    #[cfg(feature = "csr")]
    {
        install_window_listeners(session, portal, ui, toaster, install, &config);
        start_update_feed(toaster, config.update_interval_secs);
        browser::register_service_worker(&config.service_worker_path);
        report_page_load(&config);
    }

    let page_class = move |page: PageId| move || if portal.with(|p| p.is_active(page)) { "page active" } else { "page" };

    view! {
        <Title text=move || format!("{} - Student Portal", portal.with(PortalState::title))/>

        <div class="container">
            <Sidebar/>
            <main class="main-content">
                <Header/>
                <div class="content">
                    <section id=PageId::Dashboard.container_id() class=page_class(PageId::Dashboard)>
                        <DashboardPage/>
                    </section>
                    <section id=PageId::Classes.container_id() class=page_class(PageId::Classes)>
                        <ClassesPage/>
                    </section>
                    <section id=PageId::Tasks.container_id() class=page_class(PageId::Tasks)>
                        <TasksPage/>
                    </section>
                    <section id=PageId::Timetable.container_id() class=page_class(PageId::Timetable)>
                        <TimetablePage/>
                    </section>
                    <section id=PageId::Grades.container_id() class=page_class(PageId::Grades)>
                        <GradesPage/>
                    </section>
                    <section id=PageId::Settings.container_id() class=page_class(PageId::Settings)>
                        <SettingsPage/>
                    </section>
                </div>
            </main>
        </div>

        <ToastStack/>
        <InstallButton/>
    }
}

#[cfg(feature = "csr")]
fn install_window_listeners(
    session: RwSignal<SessionState>,
    portal: RwSignal<PortalState>,
    ui: RwSignal<UiState>,
    toaster: Toaster,
    install: InstallPrompt,
    config: &PortalConfig,
) {
    use leptos::ev;

    use crate::util::shortcuts::{KeyPress, Shortcut, resolve};

    window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let tag = browser::target_tag(&ev);
        let press = KeyPress {
            key: &key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            target_tag: tag.as_deref(),
        };
        match resolve(&press) {
            Some(Shortcut::Navigate(page)) => go_to(portal, ui, page),
            Some(Shortcut::ToggleTheme) => {
                ev.prevent_default();
                toggle_theme(session);
            }
            None => {}
        }
    });

    let resize_config = config.clone();
    window_event_listener(ev::resize, move |_| {
        let width = browser::viewport_width();
        ui.update(|u| u.set_viewport_width(width, &resize_config));
    });

    window_event_listener(ev::click, move |ev| {
        if ui.with_untracked(|u| u.menu_open) && !browser::target_within(&ev, &[".sidebar", ".mobile-menu-toggle"]) {
            ui.update(UiState::close_menu);
        }
    });

    window_event_listener(ev::Custom::<web_sys::Event>::new("online"), move |_| {
        ui.update(|u| u.online = true);
        portal.update(PortalState::refresh);
        toaster.show("Connection restored", Severity::Success);
    });

    window_event_listener(ev::Custom::<web_sys::Event>::new("offline"), move |_| {
        ui.update(|u| u.online = false);
        toaster.show("You are currently offline", Severity::Warning);
    });

    window_event_listener(ev::Custom::<web_sys::ErrorEvent>::new("error"), move |ev| {
        leptos::logging::error!("global error: {}", ev.message());
        toaster.show("An error occurred. Please refresh the page.", Severity::Error);
    });

    window_event_listener(ev::Custom::<web_sys::Event>::new("beforeinstallprompt"), move |ev| {
        install.defer(ev);
    });
}

/// Raise one random informational toast per interval while the tab is shown.
#[cfg(feature = "csr")]
fn start_update_feed(toaster: Toaster, interval_secs: u64) {
    use crate::net::fixtures::pick_update;

    let interval = std::time::Duration::from_secs(interval_secs);
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(interval).await;
            if browser::document_visible() {
                toaster.show(pick_update(browser::random()), Severity::Info);
            }
        }
    });
}

#[cfg(feature = "csr")]
fn report_page_load(config: &PortalConfig) {
    let Some(load_ms) = browser::elapsed_since_navigation_ms() else {
        return;
    };
    leptos::logging::log!("Page load time: {load_ms:.0}ms");
    if config.is_slow_load(load_ms) {
        leptos::logging::warn!("Slow page load detected");
    }
}
