//! One gallery category: heading plus a centred three-wide grid.
//!
//! DESIGN
//! ======
//! Column classes come from `site::grid`, so a trailing row of one or two
//! thumbnails is centred. Empty categories render the heading only.

use leptos::prelude::*;
use site::grid::{LayoutTag, placements};
use site::{VideoCategory, VideoEntry};

use crate::components::thumbnail::Thumbnail;

#[cfg(test)]
#[path = "category_grid_test.rs"]
mod category_grid_test;

/// Column classes for each of `count` thumbnails, in order.
pub fn column_classes(count: usize) -> Vec<&'static str> {
    placements(count)
        .into_iter()
        .map(LayoutTag::css_class)
        .collect()
}

#[component]
pub fn CategoryGrid(category: VideoCategory, on_select: Callback<VideoEntry>) -> impl IntoView {
    let classes = column_classes(category.videos.len());
    let has_videos = !category.videos.is_empty();
    let cells = category
        .videos
        .into_iter()
        .zip(classes)
        .map(|(entry, class)| {
            view! {
                <div class=class>
                    <Thumbnail entry=entry on_select=on_select/>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="category">
            <h2 class="category__title">{category.title}</h2>
            {has_videos.then(|| view! { <div class="row">{cells}</div> })}
        </section>
    }
}
