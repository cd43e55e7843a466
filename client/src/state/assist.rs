//! Conversation and recommendation state for the assist exchange.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<AssistState>`. Every mutation goes through the
//! methods below so the exchange lifecycle stays explicit:
//!
//! ```text
//! Idle --begin_send--> Sending --finish_send(Ok | Err)--> Idle
//! ```
//!
//! `begin_send` and `finish_send` are pure state transitions; the network
//! call between them lives in `pages::shop`. Overlapping exchanges are not
//! serialized: each response lands when it arrives, last one wins.

#[cfg(test)]
#[path = "assist_test.rs"]
mod assist_test;

use crate::net::error::ApiError;
use crate::net::types::{AssistRequest, AssistResponse, Product};

/// Assistant greeting shown before the first exchange.
pub const GREETING: &str = "Hi! I’m your shopping copilot. What are you looking for today?";

/// Assistant reply appended when an exchange fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry—something went wrong. Try again in a moment.";

const GREETING_ID: &str = "greeting";

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message. Never edited once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() }
    }
}

/// State for the chat column, research summary, and product detail panel.
#[derive(Clone, Debug, PartialEq)]
pub struct AssistState {
    pub messages: Vec<Message>,
    pub input: String,
    pub loading: bool,
    pub summary: String,
    pub tips: Vec<String>,
    pub recommendations: Vec<Product>,
    /// Always `None` or a member of `recommendations`.
    pub selected: Option<Product>,
}

impl Default for AssistState {
    fn default() -> Self {
        Self {
            messages: vec![Message {
                id: GREETING_ID.to_owned(),
                role: Role::Assistant,
                content: GREETING.to_owned(),
            }],
            input: String::new(),
            loading: false,
            summary: String::new(),
            tips: Vec::new(),
            recommendations: Vec::new(),
            selected: None,
        }
    }
}

impl AssistState {
    /// Start an exchange from the current input.
    ///
    /// Returns `None` (and changes nothing) when the input is blank.
    /// Otherwise appends the user message, clears the input, raises
    /// `loading`, and returns the request to send.
    pub fn begin_send(&mut self) -> Option<AssistRequest> {
        if self.input.trim().is_empty() {
            return None;
        }
        let content = std::mem::take(&mut self.input);
        self.messages.push(Message::new(Role::User, content.clone()));
        self.loading = true;
        Some(AssistRequest { message: content })
    }

    /// Settle an exchange. Always lowers `loading`.
    ///
    /// Success replaces summary, tips, and recommendations wholesale and
    /// appends the summary as the assistant reply. Failure appends
    /// [`FALLBACK_REPLY`] and keeps the previous research untouched.
    pub fn finish_send(&mut self, outcome: Result<AssistResponse, ApiError>) {
        match outcome {
            Ok(response) => self.apply_response(response),
            Err(_) => self.messages.push(Message::new(Role::Assistant, FALLBACK_REPLY)),
        }
        self.loading = false;
    }

    fn apply_response(&mut self, response: AssistResponse) {
        let AssistResponse { summary, tips, recommendations } = response;
        if self.selected.as_ref().is_some_and(|p| !recommendations.contains(p)) {
            self.selected = None;
        }
        self.messages.push(Message::new(Role::Assistant, summary.clone()));
        self.summary = summary;
        self.tips = tips;
        self.recommendations = recommendations;
    }

    /// Show `product` in the detail panel.
    ///
    /// Products outside the current recommendation set are ignored; returns
    /// whether the selection changed.
    pub fn select(&mut self, product: Product) -> bool {
        if !self.recommendations.contains(&product) {
            return false;
        }
        self.selected = Some(product);
        true
    }

    /// Replace the input text (typing, quick actions, discovery shortcuts).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the research summary panel has anything to show.
    pub fn has_research(&self) -> bool {
        !self.summary.is_empty() || !self.tips.is_empty()
    }
}
