//! Per-session scratch state.
//!
//! Only the deadline compute action writes here and only the display reads
//! it back. Nothing outlives the session.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deadline::DeadlineResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKey {
    LastDeadline,
    LastMessage,
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastDeadline => f.write_str("last_deadline"),
            Self::LastMessage => f.write_str("last_message"),
        }
    }
}

/// In-memory key/value store owned by one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    values: HashMap<SessionKey, String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the last deadline and message with `result`.
    pub fn record_deadline(&mut self, result: &DeadlineResult) {
        self.values
            .insert(SessionKey::LastDeadline, result.display_time.clone());
        self.values
            .insert(SessionKey::LastMessage, result.message.clone());
        debug!(deadline = %result.display_time, "session deadline updated");
    }

    pub fn get(&self, key: SessionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn last_deadline(&self) -> Option<&str> {
        self.get(SessionKey::LastDeadline)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.get(SessionKey::LastMessage)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
