//! Right panel with full details for the selected product.
//!
//! ARCHITECTURE
//! ============
//! Reads `AssistState::selected` only; selection is written by product cards
//! through `AssistState::select`.

#[cfg(all(test, feature = "ssr"))]
#[path = "right_panel_test.rs"]
mod right_panel_test;

use leptos::prelude::*;

use crate::components::retailer_list::RetailerList;
use crate::net::types::Product;
use crate::state::assist::AssistState;
use crate::state::slices;
use crate::util::format::{format_price, format_rating};

/// Shown when no product is selected.
pub const NO_SELECTION_TEXT: &str = "Select a product to see details.";

/// Detail sidebar for the selected product, or a placeholder.
#[component]
pub fn RightPanel() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();
    let selected = slices::selected(assist);

    view! {
        <aside class="right-panel">
            <div class="right-panel__title">"Product Details"</div>
            {move || match selected.get() {
                Some(product) => view! { <ProductDetail product=product/> }.into_any(),
                None => view! { <div class="right-panel__empty">{NO_SELECTION_TEXT}</div> }.into_any(),
            }}
        </aside>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let Product { title, price, rating, image, specs, retailers, .. } = product;
    let alt = title.clone();

    view! {
        <div class="product-detail">
            {image.map(|src| {
                view! {
                    <div class="product-detail__image">
                        <img src=src alt=alt/>
                    </div>
                }
            })}
            <div>
                <h3 class="product-detail__title">{title}</h3>
                <div class="product-detail__meta">
                    <span class="product-detail__price">{format_price(price)}</span>
                    <span class="product-detail__rating">"★ " {format_rating(rating)}</span>
                </div>
            </div>
            {(!specs.is_empty())
                .then(|| {
                    view! {
                        <div class="product-detail__section">
                            <div class="product-detail__label">"Key specs"</div>
                            <ul class="product-detail__specs">
                                {specs.into_iter().map(|spec| view! { <li>{spec}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })}
            {(!retailers.is_empty())
                .then(|| {
                    view! {
                        <div class="product-detail__section">
                            <div class="product-detail__label">"Retailers"</div>
                            <RetailerList retailers=retailers/>
                        </div>
                    }
                })}
        </div>
    }
}
