//! Theme switcher for highlighted code blocks.
//!
//! DESIGN
//! ======
//! Server rendering always shows the default theme. After hydration the
//! stored theme is restored once, which also re-persists it and points the
//! stylesheet link at it.

use leptos::prelude::*;
use site::theme::{DEFAULT_THEME, KNOWN_THEMES};

use crate::util::syntax_theme;

/// Row of buttons, one per known theme, with the active one marked.
#[component]
pub fn SyntaxToggle() -> impl IntoView {
    let style = RwSignal::new(DEFAULT_THEME.to_owned());

    Effect::new(move || {
        style.set(syntax_theme::restore());
    });

    view! {
        <div class="syntax-toggle" role="group" aria-label="Code theme">
            <span class="syntax-toggle__label">"Code theme"</span>
            {KNOWN_THEMES
                .iter()
                .map(|&name| {
                    view! {
                        <button
                            class="syntax-toggle__option"
                            class:syntax-toggle__option--active=move || style.get() == name
                            on:click=move |_| style.set(syntax_theme::select(name))
                        >
                            {name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
