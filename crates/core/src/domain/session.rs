use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::filters::FilterState;
use crate::domain::product::ProductId;
use crate::intent::Intent;

/// One user/assistant exchange kept in the session history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub user_text: String,
    pub intent: String,
    pub reply_text: String,
    pub at: DateTime<Utc>,
}

/// Per-conversation state, owned by the caller and threaded through every
/// [`crate::engine::ChatEngine::process_message`] call. Created when the
/// conversation starts and discarded when it ends; nothing is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub last_intent: Option<Intent>,
    /// Filters accumulated across turns; refined by later messages.
    pub filters: FilterState,
    pub last_result_ids: Vec<ProductId>,
    pub history: Vec<Turn>,
    pub started_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            last_intent: None,
            filters: FilterState::default(),
            last_result_ids: Vec::new(),
            history: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn record_turn(&mut self, user_text: &str, intent: &Intent, reply_text: &str) {
        self.history.push(Turn {
            user_text: user_text.to_string(),
            intent: intent.label().to_string(),
            reply_text: reply_text.to_string(),
            at: Utc::now(),
        });
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
