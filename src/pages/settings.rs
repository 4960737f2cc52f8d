//! Settings page: profile form, appearance, shortcut reference, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form holds its own draft signals, refilled from the session each time
//! the page is opened. Saving goes through the simulated write endpoint before
//! the session is updated and persisted.

use leptos::prelude::*;

use crate::app::{logout, set_theme};
use crate::components::toast_stack::Toaster;
use crate::config::PortalConfig;
use crate::net::api::{MockApi, PortalApi, profile_endpoint};
use crate::state::page::PageId;
use crate::state::portal::PortalState;
use crate::state::session::SessionState;
use crate::state::toast::Severity;
use crate::util::shortcuts::SHORTCUTS;
use crate::util::storage::BrowserStorage;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toaster = expect_context::<Toaster>();
    let api = expect_context::<MockApi>();
    let reload_delay_ms = expect_context::<PortalConfig>().logout_reload_delay_ms;

    let draft_name = RwSignal::new(String::new());
    let draft_email = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move || {
        if portal.with(|p| p.is_active(PageId::Settings)) {
            let profile = session.with_untracked(|s| s.profile.clone());
            draft_name.set(profile.name);
            draft_email.set(profile.email);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let name = draft_name.get_untracked();
        let email = draft_email.get_untracked();
        let payload = session.with_untracked(|s| s.edited_profile(&name, &email));
        leptos::task::spawn_local(async move {
            let body = serde_json::to_value(&payload).unwrap_or_default();
            let response = api.post(profile_endpoint(), body).await;
            if response.success {
                session.update(|s| s.update_profile(&BrowserStorage, &name, &email));
                toaster.show("Profile updated successfully", Severity::Success);
            } else {
                toaster.show(response.message, Severity::Error);
            }
            saving.set(false);
        });
    };

    view! {
        <div class="settings-grid">
            <section class="card settings-card">
                <h2>"Profile"</h2>
                <form id="profile-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="profile-name">"Full Name"</label>
                        <input
                            type="text"
                            id="profile-name"
                            prop:value=move || draft_name.get()
                            on:input=move |ev| draft_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-email">"Email"</label>
                        <input
                            type="email"
                            id="profile-email"
                            prop:value=move || draft_email.get()
                            on:input=move |ev| draft_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="profile-id">"Student ID"</label>
                        <input
                            type="text"
                            id="profile-id"
                            readonly=true
                            prop:value=move || session.with(|s| s.profile.id.clone())
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>

            <section class="card settings-card">
                <h2>"Appearance"</h2>
                <label class="toggle-row">
                    <span>"Dark Mode"</span>
                    <input
                        type="checkbox"
                        id="dark-mode-toggle"
                        prop:checked=move || session.with(|s| s.dark_mode)
                        on:change=move |ev| set_theme(session, event_target_checked(&ev))
                    />
                </label>
            </section>

            <section class="card settings-card">
                <h2>"Keyboard Shortcuts"</h2>
                <table class="shortcuts-table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Shortcut"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SHORTCUTS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.action}</td>
                                        <td class="shortcut-keys">{row.keys}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="card settings-card">
                <h2>"Account"</h2>
                <button class="btn-danger" on:click=move |_| logout(session, toaster, reload_delay_ms)>
                    <i class="fas fa-sign-out-alt"></i>
                    " Logout"
                </button>
            </section>
        </div>
    }
}
