//! Recommendation card for a single product.
//!
//! DESIGN
//! ======
//! Pure presentation of a `Product`. The only side effect is `on_select`,
//! which receives the same product the card was rendered from.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::components::retailer_list::RetailerList;
use crate::net::types::Product;
use crate::util::format::{card_specs, format_price, format_rating};

/// Badge text naming the best-priced retailer, if one is flagged.
fn best_price_badge(product: &Product) -> Option<String> {
    product.best_retailer().map(|r| format!("Best price: {}", r.name))
}

/// Click action for the card: hands `on_select` the card's own product.
fn select_action(product: Product, on_select: Callback<Product>) -> impl Fn() + 'static {
    move || on_select.run(product.clone())
}

/// Card with price, rating, top specs, retailer offers, and a details button.
#[component]
pub fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let title = product.title.clone();
    let alt = product.title.clone();
    let image = product.image.clone();
    let price = format_price(product.price);
    let rating = format_rating(product.rating);
    let badge = best_price_badge(&product);
    let specs = card_specs(&product.specs).to_vec();
    let retailers = product.retailers.clone();
    let why = product.why.clone();

    let select = select_action(product, on_select);
    let on_details = move |_| select();

    view! {
        <article class="product-card">
            {image.map(|src| {
                view! {
                    <div class="product-card__thumb">
                        <img src=src alt=alt/>
                    </div>
                }
            })}
            <div class="product-card__body">
                <div class="product-card__header">
                    <h4 class="product-card__title">{title}</h4>
                    <button class="btn product-card__details" on:click=on_details>
                        "Details"
                    </button>
                </div>
                <div class="product-card__meta">
                    <span class="product-card__price">{price}</span>
                    <span class="product-card__rating">"★ " {rating}</span>
                    {badge.map(|text| view! { <span class="product-card__best">{text}</span> })}
                </div>
                {(!specs.is_empty())
                    .then(|| {
                        view! {
                            <div class="product-card__specs">
                                {specs
                                    .into_iter()
                                    .map(|spec| view! { <span class="product-card__spec">{spec}</span> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
                {(!retailers.is_empty()).then(|| view! { <RetailerList retailers=retailers compact=true/> })}
                {why.map(|why| {
                    view! { <div class="product-card__why" title=why>"ⓘ Why we recommend this"</div> }
                })}
            </div>
        </article>
    }
}
