use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LlmConfig, entities::app_errors::CoreError},
    recipe::ports::LLMClient,
};

const GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Adapter for the Gemini `generateContent` endpoint. Every call carries a
/// response schema so the model answers with structured JSON only.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            client: Client::new(),
        }
    }

    fn request(&self, parts: Vec<Part>, response_schema: serde_json::Value) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            },
        }
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .timeout(GENERATE_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini request failed: {}", e);
                CoreError::ExternalService(format!("LLM request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini returned {}: {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "LLM returned error: {} - {}",
                status, error_text
            )));
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode Gemini response: {}", e);
            CoreError::ExternalService(format!("failed to decode LLM response: {}", e))
        })?;

        generated
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalService("empty LLM response".to_string()))
    }
}

impl LLMClient for GeminiClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = self.request(vec![Part::Text { text: prompt }], response_schema);
        self.generate(request).await
    }

    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let parts = vec![
            Part::Text { text: prompt },
            Part::InlineData {
                inline_data: InlineData {
                    mime_type: "image/jpeg".to_string(),
                    data: general_purpose::STANDARD.encode(&image_data),
                },
            },
        ];

        let request = self.request(parts, response_schema);
        self.generate(request).await
    }
}
