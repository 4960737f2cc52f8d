//! Toast notifications: the `Toaster` handle and the stack that draws them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any handler can raise a toast through the `Toaster` context. Each toast
//! runs its own timer task that walks it through its phases; toasts never
//! coordinate with each other.

use leptos::prelude::*;

use crate::config::ToastTimings;
use crate::state::toast::{Severity, ToastState};

/// Copyable handle for raising toasts.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<ToastState>,
    pub timings: ToastTimings,
}

impl Toaster {
    pub fn new(toasts: RwSignal<ToastState>, timings: ToastTimings) -> Self {
        Self { toasts, timings }
    }

    /// Queue a toast and schedule its enter, exit, and removal.
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    pub fn show(self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        let Some(id) = self.toasts.try_update(|t| t.push(message, severity)) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            use gloo_timers::future::sleep;
            use std::time::Duration;

            let toasts = self.toasts;
            let timings = self.timings;
            leptos::task::spawn_local(async move {
                sleep(Duration::from_millis(timings.enter_delay_ms)).await;
                toasts.update(|t| t.show(id));
                sleep(Duration::from_millis(timings.shown_ms())).await;
                toasts.update(|t| t.dismiss(id));
                sleep(Duration::from_millis(timings.exit_ms)).await;
                toasts.update(|t| t.remove(id));
            });
        }
    }
}

/// Fixed stack of live toasts, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = move || toasts.get().get(id).map(|t| t.class()).unwrap_or_default();
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
