use serde::{Deserialize, Serialize};

use crate::domain::entities::{Character, Scenario};
use crate::domain::value_objects::{GameEvent, HistoryEntry, RollNarration, RollOutcome};

/// A player action to be narrated by the game master
#[derive(Debug, Clone, Deserialize)]
pub struct GameActionRequestDto {
    pub scenario: Scenario,
    pub character: Character,
    pub history: Vec<HistoryEntry>,
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameEventResponseDto {
    pub success: bool,
    pub result: GameEvent,
}

fn default_stat_value() -> i64 {
    10
}

fn default_difficulty() -> i64 {
    12
}

/// A d20 check request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RollRequestDto {
    #[serde(default = "default_stat_value")]
    pub stat_value: i64,
    #[serde(default = "default_difficulty")]
    pub difficulty: i64,
}

impl Default for RollRequestDto {
    fn default() -> Self {
        Self {
            stat_value: default_stat_value(),
            difficulty: default_difficulty(),
        }
    }
}

/// The roll, flattened next to the success flag
#[derive(Debug, Clone, Serialize)]
pub struct RollResponseDto {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: RollOutcome,
}

/// A resolved roll to be narrated
#[derive(Debug, Clone, Deserialize)]
pub struct RollResultRequestDto {
    pub scenario: Scenario,
    pub character: Character,
    pub action: String,
    pub roll_result: RollOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RollNarrationResponseDto {
    pub success: bool,
    pub result: RollNarration,
}
