//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{BACKEND_URL_META, ClientConfig};
use crate::pages::shop::ShopPage;
use crate::state::{assist::AssistState, discovery::DiscoveryState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend URL is written into a `<meta>` tag so the hydrating client can
/// rebuild the same [`ClientConfig`].
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let backend_url = config.backend_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BACKEND_URL_META content=backend_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the injected config and all shared state contexts, then sets up
/// client-side routing.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(RwSignal::new(AssistState::default()));
    provide_context(RwSignal::new(DiscoveryState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/shopwise.css"/>
        <Title text="Shopwise"/>
        <Meta name="description" content="Chat-style shopping assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ShopPage/>
            </Routes>
        </Router>
    }
}
