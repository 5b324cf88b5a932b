use crate::config::OpenAiSettings;
use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Request body for image generation.
#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: String,
    n: u32,
    size: &'a str,
    quality: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

pub fn post_image_prompt(prompt: &str) -> String {
    format!("Create a social media post image for: {}", prompt)
}

#[derive(Debug)]
pub struct ImageClient {
    http_client: Arc<reqwest::Client>,
    settings: OpenAiSettings,
}

impl ImageClient {
    pub fn new(http_client: Arc<reqwest::Client>, settings: OpenAiSettings) -> Self {
        Self { http_client, settings }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.configured_key().is_some()
    }

    /// Requests a single image and returns its URL. Every upstream problem is
    /// folded into [`GatewayError::ImageApi`].
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.settings.configured_key().ok_or(GatewayError::NotConfigured)?;

        let request = ImageGenerationRequest {
            model: &self.settings.model,
            prompt: post_image_prompt(prompt),
            n: 1,
            size: &self.settings.size,
            quality: &self.settings.quality,
        };

        let url = format!(
            "{}/v1/images/generations",
            self.settings.api_base.trim_end_matches('/')
        );
        info!("Requesting image from: {}", url);
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to send request to OpenAI: {}", e);
                GatewayError::ImageApi(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            warn!("OpenAI API error (status {}): {}", status, error_text);
            return Err(GatewayError::ImageApi(format!(
                "status {}: {}",
                status, error_text
            )));
        }

        let body: ImageGenerationResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ImageApi(format!("failed to parse response: {}", e)))?;

        body.data
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::ImageApi("no image data in response".to_string()))?
            .url
            .ok_or_else(|| GatewayError::ImageApi("no image url in response".to_string()))
    }
}
