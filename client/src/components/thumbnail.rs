//! Clickable thumbnail for one gallery video.

use leptos::prelude::*;
use site::VideoEntry;

#[component]
pub fn Thumbnail(entry: VideoEntry, on_select: Callback<VideoEntry>) -> impl IntoView {
    let description = entry.has_description().then(|| entry.description.clone());
    let title = entry.title.clone();
    let image = entry.image.clone();
    let on_click = move |_| on_select.run(entry.clone());

    view! {
        <button class="thumbnail" on:click=on_click title=title.clone()>
            <img class="thumbnail__image" src=image alt=title.clone()/>
            <span class="thumbnail__title">{title.clone()}</span>
            {description.map(|text| view! { <span class="thumbnail__description">{text}</span> })}
        </button>
    }
}
