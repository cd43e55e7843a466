//! Hero search bar and quick action chips.
//!
//! SYSTEM CONTEXT
//! ==============
//! The input is bound to `AssistState::input`. Enter or the Send button hand
//! off to the page's `on_send` callback, which runs the assist exchange.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::state::assist::AssistState;

/// Placeholder text for the hero input.
const PLACEHOLDER: &str =
    "Ask anything: ‘Best ANC headphones under $400’, ‘Find better alternatives’, ‘Compare M3 laptops’…";

/// Chip label and the prompt it puts in the input.
pub const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Find Better Alternatives", "Find better alternatives to my current pick"),
    ("Quick Compare", "Compare top 3 options side by side"),
    ("Daily Essentials", "Show daily essentials for home office"),
];

/// Search input with a Send button.
#[component]
pub fn SearchBar(on_send: Callback<()>) -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="search-bar">
            <span class="search-bar__icon" aria-hidden="true">"⌕"</span>
            <input
                class="search-bar__input"
                type="text"
                placeholder=PLACEHOLDER
                prop:value=move || assist.with(|a| a.input.clone())
                on:input=move |ev| assist.update(|a| a.set_input(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary search-bar__send" on:click=move |_| on_send.run(())>
                "➤ Send"
            </button>
        </div>
    }
}

/// Chips that prefill the input with canned prompts.
#[component]
pub fn QuickActions() -> impl IntoView {
    let assist = expect_context::<RwSignal<AssistState>>();

    view! {
        <div class="quick-actions">
            <span class="quick-actions__badge">"✦ Smarter Search"</span>
            {QUICK_ACTIONS
                .iter()
                .map(|&(label, prompt)| {
                    view! {
                        <button class="quick-actions__chip" on:click=move |_| assist.update(|a| a.set_input(prompt))>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
