//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use site::Catalog;
use site::theme::{DEFAULT_THEME, STYLESHEET_ID, stylesheet_path};

use crate::pages::{blog::BlogPage, poi::PoiPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The syntax stylesheet starts on the default theme; hydration swaps it for
/// the visitor's stored choice.
pub fn shell(options: LeptosOptions, catalog: Catalog) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link id=STYLESHEET_ID rel="stylesheet" href=stylesheet_path(DEFAULT_THEME)/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App catalog=catalog/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The catalog is supplied once at construction and shared read-only through
/// context.
#[component]
pub fn App(catalog: Catalog) -> impl IntoView {
    provide_meta_context();
    provide_context(catalog);

    view! {
        <Stylesheet href="/css/grid.css"/>
        <Stylesheet href="/css/site.css"/>
        <Title text="Spinsite"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=StaticSegment("poi") view=PoiPage/>
            </Routes>
        </Router>
    }
}
