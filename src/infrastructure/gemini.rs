//! Gemini client - Google generative-language API integration

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{CompletionRequest, LlmError, LlmPort, ResponseFormat};

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LlmError::generation_failed)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request(request: CompletionRequest) -> GenerateContentRequest {
        let response_mime_type = match request.response_format {
            ResponseFormat::Json => Some("application/json".to_string()),
            ResponseFormat::Text => None,
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Some(request.prompt),
                }],
            }],
            system_instruction: request.system_instruction.map(|text| Content {
                role: None,
                parts: vec![ContentPart { text: Some(text) }],
            }),
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type,
            },
        }
    }
}

#[async_trait]
impl LlmPort for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        tracing::debug!(
            model = %self.model,
            prompt_len = request.prompt.len(),
            format = ?request.response_format,
            "Sending request to Gemini API"
        );

        let body = Self::build_request(request);
        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(LlmError::generation_failed)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Gemini API returned an error");
            return Err(LlmError::GenerationFailed(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmError::GenerationFailed(format!("Failed to parse response: {}", e))
        })?;

        api_response.text().ok_or_else(|| {
            LlmError::GenerationFailed("Gemini returned no text in its reply".to_string())
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let texts: Vec<String> = content.parts.into_iter().filter_map(|p| p.text).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
