//! Narrow reactive views of `AssistState`.
//!
//! DESIGN
//! ======
//! Components read through these memos instead of `assist.get()`, so a
//! keystroke (which only touches `input`) leaves the transcript, the product
//! grid, and the detail panel alone. Each memo notifies only when its slice
//! compares unequal to the previous value.

#[cfg(test)]
#[path = "slices_test.rs"]
mod slices_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::assist::{AssistState, Message};

pub fn messages(assist: RwSignal<AssistState>) -> Memo<Vec<Message>> {
    Memo::new(move |_| assist.with(|a| a.messages.clone()))
}

pub fn loading(assist: RwSignal<AssistState>) -> Memo<bool> {
    Memo::new(move |_| assist.with(|a| a.loading))
}

pub fn recommendations(assist: RwSignal<AssistState>) -> Memo<Vec<Product>> {
    Memo::new(move |_| assist.with(|a| a.recommendations.clone()))
}

pub fn selected(assist: RwSignal<AssistState>) -> Memo<Option<Product>> {
    Memo::new(move |_| assist.with(|a| a.selected.clone()))
}

pub fn summary(assist: RwSignal<AssistState>) -> Memo<String> {
    Memo::new(move |_| assist.with(|a| a.summary.clone()))
}

pub fn tips(assist: RwSignal<AssistState>) -> Memo<Vec<String>> {
    Memo::new(move |_| assist.with(|a| a.tips.clone()))
}

/// Whether the research summary panel has anything to show.
pub fn has_research(assist: RwSignal<AssistState>) -> Memo<bool> {
    Memo::new(move |_| assist.with(AssistState::has_research))
}
