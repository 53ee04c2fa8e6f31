//! Poi video gallery page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every catalog category as a centred grid of thumbnails. A click
//! either opens the overlay panel or, on mobile, leaves for the video host.

use leptos::prelude::*;
use site::{Catalog, Playback, VideoEntry};

use crate::components::category_grid::CategoryGrid;
use crate::components::video_panel::VideoPanel;
use crate::state::gallery::GalleryState;
use crate::util::browser;

#[component]
pub fn PoiPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let gallery = RwSignal::new(GalleryState::default());

    let on_select = Callback::new(move |entry: VideoEntry| {
        let playback = Playback::choose(&entry, browser::is_mobile());
        #[cfg(feature = "hydrate")]
        log::debug!("playing {} via {playback:?}", entry.id);
        let redirect = gallery.try_update(|state| state.apply(playback)).flatten();
        if let Some(url) = redirect {
            browser::navigate_to(&url);
        }
    });

    let sections = catalog
        .categories()
        .iter()
        .cloned()
        .map(|category| view! { <CategoryGrid category=category on_select=on_select/> })
        .collect_view();

    view! {
        <main class="poi container">
            <header class="poi__header">
                <h1>"Poi"</h1>
                <p class="poi__intro">
                    "Short lessons, from holding your poi to weaves and reels."
                </p>
            </header>
            {sections}
            <VideoPanel gallery=gallery/>
        </main>
    }
}
