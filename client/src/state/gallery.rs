//! Gallery panel state.
//!
//! DESIGN
//! ======
//! Holds only the selection; the catalog itself is immutable and comes from
//! context. Selecting another thumbnail replaces the current entry.

use site::{Playback, VideoEntry};

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Which video, if any, the overlay panel is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub selected: Option<VideoEntry>,
}

impl GalleryState {
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Handle a key pressed anywhere on the page. Escape closes an open
    /// panel; returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Apply a playback decision. Panel playback updates the selection;
    /// a redirect leaves it alone and hands back the target URL.
    pub fn apply(&mut self, playback: Playback) -> Option<String> {
        match playback {
            Playback::Panel(entry) => {
                self.selected = Some(entry);
                None
            }
            Playback::Redirect(url) => Some(url),
        }
    }
}
