//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and rendering helpers kept out of components so they can
//! be tested without a browser.

pub mod format;
pub mod link;
pub mod markdown;
