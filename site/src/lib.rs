//! Presentation logic for the blog and the poi video gallery.
//!
//! This crate is UI-framework agnostic: it returns plain values (a boolean,
//! a layout tag, a stylesheet path, a playback decision) and leaves applying
//! them to the page to the client crate.

pub mod catalog;
pub mod cookie;
pub mod device;
pub mod grid;
pub mod playback;
pub mod theme;

pub use catalog::{Catalog, CatalogError, VideoCategory, VideoEntry};
pub use device::{is_mobile, user_agent_source};
pub use grid::{LayoutTag, placement_class};
pub use playback::Playback;
pub use theme::{PreferenceStore, ThemePreference};
