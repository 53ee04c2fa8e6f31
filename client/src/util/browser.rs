//! Navigator and location access for the gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The playback decision needs the visitor's user agent and, on mobile, a
//! full-page navigation. Both are browser-only; SSR and native builds report
//! an empty agent (never mobile) and ignore navigation.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// User-agent string to classify: agent, then vendor, then `window.opera`.
pub fn user_agent() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        let navigator = window.navigator();
        let agent = navigator.user_agent().ok();
        let vendor = Some(navigator.vendor());
        let opera = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("opera"))
            .ok()
            .and_then(|value| value.as_string());
        site::user_agent_source(agent.as_deref(), vendor.as_deref(), opera.as_deref()).to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether the current visitor is on a mobile device.
pub fn is_mobile() -> bool {
    site::is_mobile(&user_agent())
}

/// Replace the current page with `url`.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::warn!("navigation to {url} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
