//! Conversation history exchanged with the client

use serde::{Deserialize, Serialize};

/// Who produced a history line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    Gm,
    Player,
    Npc,
    /// System messages, and any role the client sends that we don't recognise
    #[serde(other)]
    System,
}

impl HistoryRole {
    /// Label used when the line is written into a prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gm => "[GM]",
            Self::Player => "[Player]",
            Self::Npc => "[NPC]",
            Self::System => "[System]",
        }
    }
}

/// A single line of the running game transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    #[serde(default)]
    pub text: String,
}

impl HistoryEntry {
    pub fn new(role: HistoryRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}
