//! Browser glue for the pages: navigator lookups, the syntax stylesheet link,
//! and the cookie-backed preference store.
//!
//! Everything here compiles to a no-op outside the `hydrate` build, so
//! server rendering and native tests run the same call sites.

pub mod browser;
pub mod cookie_store;
pub mod syntax_theme;
