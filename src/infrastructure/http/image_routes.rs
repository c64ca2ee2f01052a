//! Image prompt API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{
    EnhanceImagePromptRequestDto, EnhancedPromptResponseDto, ImagePromptResponseDto,
    SceneImagePromptRequestDto,
};
use crate::application::services::ImagePromptService;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Enhance a rough image description
///
/// Never fails: on error the original prompt is handed back with `success: false`.
pub async fn enhance_prompt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnhanceImagePromptRequestDto>,
) -> Json<EnhancedPromptResponseDto> {
    let service = ImagePromptService::new(state.llm.clone());

    match service.enhance(&req.prompt, &req.theme).await {
        Ok(enhanced_prompt) => Json(EnhancedPromptResponseDto {
            success: true,
            error: None,
            enhanced_prompt,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Image prompt enhancement failed, returning the original");
            Json(EnhancedPromptResponseDto {
                success: false,
                error: Some(e.to_string()),
                enhanced_prompt: req.prompt,
            })
        }
    }
}

/// Write an image prompt for a scene
pub async fn generate_image_prompt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SceneImagePromptRequestDto>,
) -> Result<Json<ImagePromptResponseDto>, ApiError> {
    let service = ImagePromptService::new(state.llm.clone());
    let image_prompt = service.from_scene(&req.scene, req.scenario.as_ref()).await?;

    Ok(Json(ImagePromptResponseDto {
        success: true,
        image_prompt,
    }))
}
