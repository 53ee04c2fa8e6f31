//! Playback decision for a clicked gallery thumbnail.
//!
//! Desktop visitors get the video in an overlay panel. Mobile visitors are
//! sent to the video host's watch page, which is a terminal navigation.

use crate::catalog::VideoEntry;

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

/// Host serving the videos.
pub const VIDEO_HOST: &str = "www.youtube.com";

/// Outcome of selecting a video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Show the entry in the overlay panel.
    Panel(VideoEntry),
    /// Navigate the whole page to this URL.
    Redirect(String),
}

impl Playback {
    pub fn choose(entry: &VideoEntry, is_mobile: bool) -> Self {
        if is_mobile {
            Self::Redirect(watch_url(&entry.id))
        } else {
            Self::Panel(entry.clone())
        }
    }
}

/// Full-page watch URL for a video id.
pub fn watch_url(id: &str) -> String {
    format!("https://{VIDEO_HOST}/watch?v={id}")
}

/// Protocol-relative embed URL for the panel's player frame.
pub fn embed_url(id: &str) -> String {
    format!("//{VIDEO_HOST}/embed/{id}")
}
