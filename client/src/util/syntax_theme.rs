//! Syntax-highlighting theme selection for the blog.
//!
//! Reads the stored theme from the `codestyle` cookie and points the
//! `#syntax-css` stylesheet link at `/css/<theme>.css`. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence and the link update are best-effort browser-only behavior;
//! SSR paths report the default theme and skip the DOM.

use site::ThemePreference;

use crate::util::cookie_store::CookieStore;

#[cfg(test)]
#[path = "syntax_theme_test.rs"]
mod syntax_theme_test;

fn preference() -> ThemePreference<CookieStore> {
    ThemePreference::new(CookieStore)
}

/// Theme currently stored for this browser, or the default.
pub fn current() -> String {
    preference().current_theme()
}

/// Point the syntax stylesheet link at `href`.
pub fn apply(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(link) = doc.get_element_by_id(site::theme::STYLESHEET_ID) {
                let _ = link.set_attribute("href", href);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Persist `name`, swap the stylesheet, and return the name for display.
pub fn select(name: &str) -> String {
    let href = preference().select_theme(name);
    apply(&href);
    #[cfg(feature = "hydrate")]
    log::debug!("syntax theme set to {name} ({href})");
    name.to_owned()
}

/// Re-apply the stored theme on page load and return its name.
pub fn restore() -> String {
    let mut pref = preference();
    let name = pref.current_theme();
    let href = pref.restore();
    apply(&href);
    name
}
