//! Dice Service - Rolls stat checks

use std::sync::Arc;

use crate::application::ports::outbound::RandomPort;
use crate::domain::services::{resolve_check, D20_SIDES};
use crate::domain::value_objects::RollOutcome;

/// Service for rolling d20 checks
pub struct DiceService {
    rng: Arc<dyn RandomPort>,
}

impl DiceService {
    pub fn new(rng: Arc<dyn RandomPort>) -> Self {
        Self { rng }
    }

    /// Roll a d20 for `stat_value` against `difficulty`
    pub fn roll(&self, stat_value: i64, difficulty: i64) -> RollOutcome {
        let raw = self.rng.random_range(1, D20_SIDES);
        resolve_check(raw, stat_value, difficulty)
    }

    /// Roll a bare d20 with no stat or difficulty
    pub fn roll_d20(&self) -> i64 {
        self.rng.random_range(1, D20_SIDES)
    }
}
