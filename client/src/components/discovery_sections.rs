//! Discovery cards below the chat: trending, daily essentials, personal picks.

use leptos::prelude::*;

use crate::state::assist::AssistState;
use crate::state::discovery::DiscoveryState;

pub const DAILY_ESSENTIALS: [&str; 4] = ["Home Office", "Fitness", "Kitchen", "Travel"];
pub const PERSONAL_PICKS: [&str; 3] = ["Headphones for focus", "Ergonomic chair", "Desk lighting"];

/// Three discovery cards. Trending entries and personal picks prefill the
/// search input with their title when clicked.
#[component]
pub fn DiscoverySections() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();
    let discovery = expect_context::<RwSignal<DiscoveryState>>();

    let prefill = move |text: String| assist.update(|a| a.set_input(text));

    view! {
        <div class="discovery">
            <section class="discovery__card">
                <div class="discovery__title">"↗ Trending This Week"</div>
                <div class="discovery__list">
                    {move || {
                        discovery
                            .get()
                            .trending
                            .into_iter()
                            .map(|item| {
                                let title = item.title.clone();
                                view! {
                                    <button class="discovery__row" on:click=move |_| prefill(title.clone())>
                                        <span>{item.title}</span>
                                        <span class="discovery__chevron" aria-hidden="true">"›"</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            <section class="discovery__card">
                <div class="discovery__title">"◎ Daily Essentials"</div>
                <div class="discovery__grid">
                    {DAILY_ESSENTIALS
                        .iter()
                        .map(|category| view! { <div class="discovery__tile">{*category}</div> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="discovery__card">
                <div class="discovery__title">"🛒 Personal Picks"</div>
                <div class="discovery__list">
                    {PERSONAL_PICKS
                        .iter()
                        .map(|pick| {
                            let pick = *pick;
                            view! {
                                <button class="discovery__row" on:click=move |_| prefill(pick.to_owned())>
                                    <span>{pick}</span>
                                    <span class="discovery__chevron" aria-hidden="true">"›"</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
