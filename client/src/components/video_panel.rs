//! Overlay panel that plays the selected gallery video.

use leptos::prelude::*;
use site::playback::embed_url;

use crate::state::gallery::GalleryState;

/// Embedded player for the selected entry. Renders nothing when closed.
///
/// Closes on the close button or a backdrop click. Escape is caught on the
/// window, since focus stays on the thumbnail that opened the panel.
#[component]
pub fn VideoPanel(gallery: RwSignal<GalleryState>) -> impl IntoView {
    let close = Callback::new(move |()| gallery.update(GalleryState::close));

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            let key = ev.key();
            if gallery.with_untracked(GalleryState::is_open)
                && gallery.try_update(|g| g.handle_key(&key)).unwrap_or(false)
            {
                ev.prevent_default();
            }
        });
        on_cleanup(move || handle.remove());
    }

    move || {
        gallery.get().selected.map(|video| {
            let description = video.has_description().then(|| video.description.clone());
            view! {
                <div class="video-panel__backdrop" on:click=move |_| close.run(())>
                    <div class="video-panel" on:click=move |ev| ev.stop_propagation()>
                        <div class="video-panel__header">
                            <h2>{video.title.clone()}</h2>
                            <button
                                class="video-panel__close"
                                on:click=move |_| close.run(())
                                title="Close video"
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="video-panel__player">
                            <iframe
                                src=embed_url(&video.id)
                                title=video.title.clone()
                                {..::leptos::tachys::html::attribute::custom::custom_attribute("frameborder", "0")}
                                allowfullscreen=true
                            ></iframe>
                        </div>
                        {description
                            .map(|text| view! { <p class="video-panel__description">{text}</p> })}
                    </div>
                </div>
            }
        })
    }
}
