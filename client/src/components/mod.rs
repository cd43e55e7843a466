//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shopping assistant chrome and read/write shared
//! state from Leptos context providers.

pub mod discovery_sections;
pub mod left_panel;
pub mod message_list;
pub mod product_card;
pub mod research_summary;
pub mod retailer_list;
pub mod right_panel;
pub mod search_bar;
