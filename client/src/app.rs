//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::todo::TodoPage;
use crate::util::storage::{SharedStorage, default_storage};

/// Document title for the single page.
pub const PAGE_TITLE: &str = "Todo List";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the storage backend used by the persisted task list and the
/// save panel, then routes `/` to the to-do page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context::<SharedStorage>(default_storage());

    view! {
        <Stylesheet id="leptos" href="/pkg/todo-list.css"/>
        <Title text=PAGE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TodoPage/>
            </Routes>
        </Router>
    }
}
