//! Shopping assistant page: layout shell plus the two backend flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns no state of its own. It wires `AssistState` and
//! `DiscoveryState` (provided by `App`) to the backend:
//!
//! - `send_message`: one assist exchange per non-blank input.
//! - `load_trending`: one trending fetch per mount.
//!
//! Both run as `spawn_local` tasks on the browser event loop. Neither has a
//! timeout or cancellation; overlapping assist exchanges settle in arrival
//! order.

use leptos::prelude::*;

use crate::components::discovery_sections::DiscoverySections;
use crate::components::left_panel::LeftPanel;
use crate::components::message_list::MessageList;
use crate::components::product_card::ProductCard;
use crate::components::research_summary::ResearchSummary;
use crate::components::right_panel::RightPanel;
use crate::components::search_bar::{QuickActions, SearchBar};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::Product;
use crate::state::assist::AssistState;
use crate::state::discovery::DiscoveryState;
use crate::state::slices;

/// Start an assist exchange from the current input. Blank input is a no-op.
pub fn send_message(assist: RwSignal<AssistState>, config: ClientConfig) {
    let Some(request) = assist.try_update(AssistState::begin_send).flatten() else {
        return;
    };

    leptos::task::spawn_local(async move {
        let outcome = api::post_assist(&config, &request).await;
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = &outcome {
                log::warn!("assist request failed: {err}");
            }
        }
        assist.update(|state| state.finish_send(outcome));
    });
}

/// Fetch trending items once; failures leave an empty list.
pub fn load_trending(discovery: RwSignal<DiscoveryState>, config: ClientConfig) {
    leptos::task::spawn_local(async move {
        let outcome = api::fetch_trending(&config).await;
        #[cfg(feature = "hydrate")]
        {
            if let Err(err) = &outcome {
                log::warn!("trending request failed: {err}");
            }
        }
        discovery.update(|state| state.apply_trending(outcome));
    });
}

/// The single route: hero search, sidebars, chat, recommendations.
#[component]
pub fn ShopPage() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();
    let discovery = expect_context::<RwSignal<DiscoveryState>>();
    let config = expect_context::<ClientConfig>();

    // Effects only run in the browser, and this one tracks nothing, so the
    // fetch happens exactly once per mount.
    let trending_config = config.clone();
    Effect::new(move || load_trending(discovery, trending_config.clone()));

    let recommendations = slices::recommendations(assist);

    let on_send = Callback::new(move |()| send_message(assist, config.clone()));
    let on_select = Callback::new(move |product: Product| {
        assist.update(|state| {
            state.select(product);
        });
    });

    view! {
        <div class="shop-page">
            <header class="hero">
                <div class="hero__backdrop" aria-hidden="true"></div>
                <div class="hero__search">
                    <SearchBar on_send=on_send/>
                </div>
            </header>

            <div class="shop-page__layout">
                <LeftPanel/>

                <main class="shop-page__main">
                    <section class="chat-card">
                        <QuickActions/>
                        <MessageList/>
                        <ResearchSummary/>
                        {move || {
                            let products = recommendations.get();
                            (!products.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="product-grid">
                                            {products
                                                .into_iter()
                                                .map(|product| view! { <ProductCard product=product on_select=on_select/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                })
                        }}
                    </section>

                    <DiscoverySections/>
                </main>

                <RightPanel/>
            </div>

            <footer class="shop-page__footer">"Designed to feel minimalist, premium, and effortless."</footer>
        </div>
    }
}
