//! Sidebar state: trending items and placeholder conversations.
//!
//! DESIGN
//! ======
//! Conversations are local placeholders only. They are not persisted and
//! are not linked to the chat history in `assist`; selecting one just marks
//! it active.

#[cfg(test)]
#[path = "discovery_test.rs"]
mod discovery_test;

use crate::net::error::ApiError;
use crate::net::types::TrendingItem;

/// Title given to conversations created with the "New" action.
pub const NEW_CONVERSATION_TITLE: &str = "New conversation";
/// Preview line given to conversations created with the "New" action.
pub const NEW_CONVERSATION_PREVIEW: &str = "Start typing…";

/// A sidebar conversation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub preview: String,
}

impl Conversation {
    fn new(id: &str, title: &str, preview: &str) -> Self {
        Self { id: id.to_owned(), title: title.to_owned(), preview: preview.to_owned() }
    }
}

/// State for the left panel and the discovery sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryState {
    pub trending: Vec<TrendingItem>,
    pub conversations: Vec<Conversation>,
    pub active_conversation: Option<String>,
}

impl Default for DiscoveryState {
    fn default() -> Self {
        Self {
            trending: Vec::new(),
            conversations: vec![
                Conversation::new("c1", "Noise-canceling headphones", "Looking for commuting and office use"),
                Conversation::new("c2", "Everyday laptop", "Budget under $1200"),
            ],
            active_conversation: None,
        }
    }
}

impl DiscoveryState {
    /// Store the trending fetch result. Any failure empties the list.
    pub fn apply_trending(&mut self, outcome: Result<Vec<TrendingItem>, ApiError>) {
        self.trending = outcome.unwrap_or_default();
    }

    /// Prepend a placeholder conversation and return its id.
    pub fn new_conversation(&mut self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.conversations
            .insert(0, Conversation::new(&id, NEW_CONVERSATION_TITLE, NEW_CONVERSATION_PREVIEW));
        id
    }

    /// Mark a conversation active. Unknown ids are ignored.
    pub fn select_conversation(&mut self, id: &str) {
        if self.conversations.iter().any(|c| c.id == id) {
            self.active_conversation = Some(id.to_owned());
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_conversation.as_deref() == Some(id)
    }
}
