//! Deferred PWA install prompt and its "Install App" button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Holds the `beforeinstallprompt` event until the user asks to install.
#[derive(Clone, Copy)]
pub struct InstallPrompt {
    ui: RwSignal<UiState>,
    #[cfg(feature = "csr")]
    deferred: StoredValue<Option<web_sys::Event>, LocalStorage>,
}

impl InstallPrompt {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self {
            ui,
            #[cfg(feature = "csr")]
            deferred: StoredValue::new_local(None),
        }
    }

    /// Suppress the browser's own prompt and keep the event for later.
    #[cfg(feature = "csr")]
    pub fn defer(self, event: web_sys::Event) {
        event.prevent_default();
        self.deferred.set_value(Some(event));
        self.ui.update(|u| u.install_available = true);
    }

    /// Hide the button and replay the deferred prompt, logging the choice.
    pub fn replay(self) {
        self.ui.update(|u| u.install_available = false);

        #[cfg(feature = "csr")]
        {
            let Some(event) = self.deferred.get_value() else {
                leptos::logging::warn!("install requested without a deferred prompt");
                return;
            };
            self.deferred.set_value(None);
            leptos::task::spawn_local(async move {
                match crate::util::browser::replay_install_prompt(&event).await {
                    Some(outcome) => leptos::logging::log!("{}", crate::util::browser::install_outcome_message(&outcome)),
                    None => leptos::logging::warn!("install prompt returned no outcome"),
                }
            });
        }
    }
}

#[component]
pub fn InstallButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let prompt = expect_context::<InstallPrompt>();

    view! {
        <Show when=move || ui.with(|u| u.install_available)>
            <button class="install-btn" on:click=move |_| prompt.replay()>
                "Install App"
            </button>
        </Show>
    }
}
