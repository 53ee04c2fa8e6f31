//! Browser cookie jar as a [`PreferenceStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog's theme choice lives in `document.cookie` so it survives reloads.
//! Values are URI-component encoded on write and decoded on read. SSR and
//! native test builds see an empty jar and drop writes.

use site::PreferenceStore;

#[cfg(test)]
#[path = "cookie_store_test.rs"]
mod cookie_store_test;

/// Session cookies on the current document, scoped to `/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            let value = site::cookie::lookup(&raw, key)?;
            js_sys::decode_uri_component(value).ok().map(String::from)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            let encoded = String::from(js_sys::encode_uri_component(value));
            if doc.set_cookie(&site::cookie::assignment(key, &encoded)).is_err() {
                log::warn!("failed to write cookie {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
