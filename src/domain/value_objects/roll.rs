//! Roll outcome of a single d20 check

use serde::{Deserialize, Serialize};

/// Result of rolling a d20 against a difficulty
///
/// Serialized exactly as the roll route returns it; the client echoes this back
/// when it asks for the roll to be narrated, so every field defaults on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollOutcome {
    /// Raw die face, 1 to 20
    pub roll: i64,
    pub bonus: i64,
    pub total: i64,
    pub difficulty: i64,
    pub is_success: bool,
    pub is_critical: bool,
    pub is_fumble: bool,
}

/// How a roll reads at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollVerdict {
    CriticalSuccess,
    Success,
    CriticalFailure,
    Failure,
}

impl RollVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CriticalSuccess => "Critical success!",
            Self::Success => "Success!",
            Self::CriticalFailure => "Critical failure...",
            Self::Failure => "Failure...",
        }
    }
}

impl RollOutcome {
    /// Classify the outcome
    ///
    /// A natural 20 wins over everything, and a successful total wins over a
    /// natural 1.
    pub fn verdict(&self) -> RollVerdict {
        if self.is_critical {
            RollVerdict::CriticalSuccess
        } else if self.is_success {
            RollVerdict::Success
        } else if self.is_fumble {
            RollVerdict::CriticalFailure
        } else {
            RollVerdict::Failure
        }
    }
}
