//! Game API routes - Player actions, dice and roll narration

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{
    GameActionRequestDto, GameEventResponseDto, RollNarrationResponseDto, RollRequestDto,
    RollResponseDto, RollResultRequestDto,
};
use crate::application::services::{DiceService, GameMasterError, GameMasterService};
use crate::domain::value_objects::{GameEvent, RollNarration};
use crate::infrastructure::state::AppState;

/// Narrate a player action
///
/// Upstream and reply failures fall back to a neutral event so the session keeps going.
pub async fn game_action(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GameActionRequestDto>,
) -> Json<GameEventResponseDto> {
    Json(GameEventResponseDto {
        success: true,
        result: narrate_action_or_placeholder(&state, &req).await,
    })
}

/// Roll a d20 check
pub async fn roll_dice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RollRequestDto>,
) -> Json<RollResponseDto> {
    let outcome = DiceService::new(state.rng.clone()).roll(req.stat_value, req.difficulty);
    tracing::debug!(
        roll = outcome.roll,
        total = outcome.total,
        difficulty = outcome.difficulty,
        "Rolled check"
    );

    Json(RollResponseDto {
        success: true,
        outcome,
    })
}

/// Narrate the consequences of a roll
pub async fn roll_result(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RollResultRequestDto>,
) -> Json<RollNarrationResponseDto> {
    let service = GameMasterService::new(state.llm.clone(), state.config.game_language.clone());

    let result = match service.narrate_roll(&req).await {
        Ok(narration) => narration,
        Err(e) => fallback("roll narration", e, RollNarration::placeholder),
    };

    Json(RollNarrationResponseDto {
        success: true,
        result,
    })
}

pub(super) async fn narrate_action_or_placeholder(
    state: &AppState,
    req: &GameActionRequestDto,
) -> GameEvent {
    let service = GameMasterService::new(state.llm.clone(), state.config.game_language.clone());

    match service.narrate_action(req).await {
        Ok(event) => event,
        Err(e) => fallback("action narration", e, GameEvent::placeholder),
    }
}

/// The named fallback branch; only narration errors reach it
fn fallback<T>(what: &str, error: GameMasterError, placeholder: fn() -> T) -> T {
    match &error {
        GameMasterError::Upstream(e) => {
            tracing::warn!(error = %e, "Using placeholder {}", what)
        }
        GameMasterError::Reply(e) => {
            tracing::warn!(error = %e, raw = e.raw_response(), "Using placeholder {}", what)
        }
    }
    placeholder()
}
