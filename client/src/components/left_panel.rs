//! Left panel with trending items and placeholder conversations.
//!
//! ARCHITECTURE
//! ============
//! Reads and writes `DiscoveryState` only. Conversations are local
//! placeholders; selecting one highlights it without touching the chat.

use leptos::prelude::*;

use crate::state::discovery::DiscoveryState;

/// Sidebar with "Trending & Discovery" and "Conversations" sections.
#[component]
pub fn LeftPanel() -> impl IntoView {
    let discovery = expect_context::<RwSignal<DiscoveryState>>();

    let on_new = move |_| {
        discovery.update(|d| {
            d.new_conversation();
        });
    };

    view! {
        <aside class="left-panel">
            <div class="left-panel__section left-panel__section--bordered">
                <div class="left-panel__title">"Trending & Discovery"</div>
                <div class="left-panel__trending">
                    {move || {
                        discovery
                            .get()
                            .trending
                            .into_iter()
                            .map(|item| view! { <div class="left-panel__trend">"↗ " {item.title}</div> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <div class="left-panel__section">
                <div class="left-panel__header">
                    <div class="left-panel__title">"Conversations"</div>
                    <button class="btn left-panel__new" on:click=on_new>
                        "+ New"
                    </button>
                </div>
                <div class="left-panel__conversations">
                    {move || {
                        let state = discovery.get();
                        state
                            .conversations
                            .iter()
                            .map(|conversation| {
                                let id = conversation.id.clone();
                                let active = state.is_active(&id);
                                view! {
                                    <button
                                        class="conversation"
                                        class:conversation--active=active
                                        on:click=move |_| discovery.update(|d| d.select_conversation(&id))
                                    >
                                        <div class="conversation__title">{conversation.title.clone()}</div>
                                        <div class="conversation__preview">{conversation.preview.clone()}</div>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </aside>
    }
}
