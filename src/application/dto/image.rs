use serde::{Deserialize, Serialize};

use crate::domain::entities::Scenario;
use crate::domain::value_objects::lenient;

fn default_theme() -> String {
    "fantasy".to_string()
}

fn theme_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient::optional_text(deserializer)?.unwrap_or_else(default_theme))
}

/// Request to enrich a rough image description
#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceImagePromptRequestDto {
    pub prompt: String,
    #[serde(default = "default_theme", deserialize_with = "theme_or_default")]
    pub theme: String,
}

/// Enhanced prompt, or the caller's own prompt echoed back when enhancement failed
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedPromptResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub enhanced_prompt: String,
}

/// Request to derive an image prompt from a scene description
#[derive(Debug, Clone, Deserialize)]
pub struct SceneImagePromptRequestDto {
    pub scene: String,
    #[serde(default)]
    pub scenario: Option<Scenario>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagePromptResponseDto {
    pub success: bool,
    pub image_prompt: String,
}
