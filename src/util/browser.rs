//! Thin wrappers over the browser APIs the portal touches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that needs `window` lives here so components stay free of
//! `cfg` noise. Native builds get inert fallbacks: no dialogs, no timers, a
//! desktop-sized viewport.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use time::Date;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Viewport width assumed when there is no window.
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// Local calendar date.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        month
            .zip(day)
            .and_then(|(month, day)| Date::from_calendar_date(year, month, day).ok())
            .unwrap_or(Date::MIN)
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().date()
    }
}

/// Blocking confirmation dialog. Declines when no dialog can be shown.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Whether the document is currently shown to the user.
pub fn document_visible() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .map_or(false, |d| !d.hidden())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

pub fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

pub fn is_online() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}

/// Uniform roll in `[0, 1)`.
pub fn random() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Reload the page.
pub fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(w) = web_sys::window() {
            if let Err(e) = w.location().reload() {
                leptos::logging::warn!("reload failed: {e:?}");
            }
        }
    }
}

/// Milliseconds since navigation start.
pub fn elapsed_since_navigation_ms() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.performance()).map(|p| p.now())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Register the service worker at `path` if the browser supports it. The
/// outcome is only logged.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn register_service_worker(path: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &wasm_bindgen::JsValue::from_str("serviceWorker"))
            .unwrap_or(false);
        if !supported {
            return;
        }
        let registration = navigator.service_worker().register(path);
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(registration).await {
                Ok(reg) => leptos::logging::log!("SW registered: {reg:?}"),
                Err(e) => leptos::logging::warn!("SW registration failed: {e:?}"),
            }
        });
    }
}

/// Log line for the user's answer to the install prompt.
pub fn install_outcome_message(outcome: &str) -> &'static str {
    if outcome == "accepted" {
        "User accepted the install prompt"
    } else {
        "User dismissed the install prompt"
    }
}

/// Replay a deferred `beforeinstallprompt` event and wait for the user's
/// choice. Returns the `outcome` string when the browser reports one.
#[cfg(feature = "csr")]
pub async fn replay_install_prompt(event: &web_sys::Event) -> Option<String> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::JsValue;

    let prompt: Function = Reflect::get(event, &JsValue::from_str("prompt")).ok()?.dyn_into().ok()?;
    prompt.call0(event).ok()?;
    let choice: Promise = Reflect::get(event, &JsValue::from_str("userChoice"))
        .ok()?
        .dyn_into()
        .ok()?;
    let result = wasm_bindgen_futures::JsFuture::from(choice).await.ok()?;
    Reflect::get(&result, &JsValue::from_str("outcome")).ok()?.as_string()
}

/// Tag name of an event's target element, if any.
#[cfg(feature = "csr")]
pub fn target_tag(event: &web_sys::Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.tag_name())
}

/// Whether an event's target sits inside any element matching one of
/// `selectors`.
#[cfg(feature = "csr")]
pub fn target_within(event: &web_sys::Event, selectors: &[&str]) -> bool {
    let Some(el) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    selectors
        .iter()
        .any(|selector| el.closest(selector).ok().flatten().is_some())
}
