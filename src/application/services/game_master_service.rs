//! Game Master Service - Narrates player actions and roll results
//!
//! Builds the game-state prompt, asks the model for a JSON game event and decodes
//! the reply into the contract the client renders.

use std::sync::Arc;

use crate::application::dto::{GameActionRequestDto, RollResultRequestDto};
use crate::application::ports::outbound::{CompletionRequest, LlmError, LlmPort};
use crate::application::services::llm::{prompt_builder, response_normalizer, NormalizeError};
use crate::domain::value_objects::{GameEvent, RollNarration};

/// Nominal range of a check difficulty requested by the model
const NOMINAL_DIFFICULTY: std::ops::RangeInclusive<i64> = 8..=18;

/// Error type for narration
#[derive(Debug, thiserror::Error)]
pub enum GameMasterError {
    #[error(transparent)]
    Upstream(#[from] LlmError),
    #[error(transparent)]
    Reply(#[from] NormalizeError),
}

/// Service for game-master narration
pub struct GameMasterService {
    llm: Arc<dyn LlmPort>,
    language: String,
}

impl GameMasterService {
    /// Create a new game master writing player-facing text in `language`
    pub fn new(llm: Arc<dyn LlmPort>, language: impl Into<String>) -> Self {
        Self {
            llm,
            language: language.into(),
        }
    }

    /// Narrate the result of a player action
    pub async fn narrate_action(
        &self,
        request: &GameActionRequestDto,
    ) -> Result<GameEvent, GameMasterError> {
        let prompt = prompt_builder::action_prompt(
            &request.scenario,
            &request.character,
            &request.history,
            &request.action,
        );
        let completion = CompletionRequest::new(prompt)
            .with_system_instruction(prompt_builder::game_master_instruction(&self.language));

        let reply = self.llm.complete(completion).await?;
        let map = response_normalizer::normalize_game_event(&reply)?;
        let event: GameEvent = response_normalizer::decode(&reply, map)?;

        if let Some(difficulty) = event.roll_difficulty {
            if !NOMINAL_DIFFICULTY.contains(&difficulty) {
                tracing::debug!(difficulty, "Model asked for a difficulty outside 8-18");
            }
        }

        Ok(event)
    }

    /// Narrate the consequences of a resolved roll
    pub async fn narrate_roll(
        &self,
        request: &RollResultRequestDto,
    ) -> Result<RollNarration, GameMasterError> {
        let prompt = prompt_builder::roll_result_prompt(
            &request.scenario,
            &request.character,
            &request.action,
            &request.roll_result,
        );
        let completion = CompletionRequest::new(prompt)
            .with_system_instruction(prompt_builder::roll_result_instruction(&self.language));

        let reply = self.llm.complete(completion).await?;
        let map = response_normalizer::normalize_game_event(&reply)?;
        let narration = response_normalizer::decode(&reply, map)?;

        Ok(narration)
    }
}
