//! Retailer offer rows shared by product cards and the detail panel.

use leptos::prelude::*;

use crate::net::types::Retailer;
use crate::util::format::{format_price, retailer_href};

/// Links to each retailer; the best offer is highlighted.
#[component]
pub fn RetailerList(retailers: Vec<Retailer>, #[prop(optional)] compact: bool) -> impl IntoView {
    let rows = retailers
        .into_iter()
        .map(|retailer| {
            let href = retailer_href(&retailer).to_owned();
            let price = format_price(retailer.price);
            let is_best = retailer.is_best;
            view! {
                <a
                    class="retailer-row"
                    class:retailer-row--best=is_best
                    class:retailer-row--compact=compact
                    href=href
                    target="_blank"
                    rel="noreferrer"
                >
                    <span class="retailer-row__name">{retailer.name}</span>
                    <span class="retailer-row__price">{price}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="retailer-list">{rows}</div> }
}
