//! Append-only chat transcript for one UI session.
//!
//! Not persisted — it lives only as long as the session that owns it.

use uuid::Uuid;

use super::persona::GREETING;
use crate::models::ChatTurn;

/// Ordered, append-only record of one chat session.
pub struct Transcript {
    id: Uuid,
    turns: Vec<ChatTurn>,
}

impl Transcript {
    /// Start a new transcript seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: vec![ChatTurn::assistant(GREETING)],
        }
    }

    /// Start an empty transcript (no greeting). Used by tests and callers
    /// that render their own welcome state.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(text));
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
