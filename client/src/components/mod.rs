//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render gallery and blog chrome from values computed by the
//! `site` crate and from page-owned signals.

pub mod category_grid;
pub mod syntax_toggle;
pub mod thumbnail;
pub mod video_panel;
