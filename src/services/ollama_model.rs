//! Language model client for Ollama-compatible servers using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::configuration::EndpointConfig;
use crate::ports::LanguageModel;

/// HTTP client for `POST /api/generate`.
#[derive(Clone)]
pub struct HttpOllamaModel {
    api_url: Url,
    model: String,
    api_key: Option<String>,
    timeout_secs: u64,
    client: Client,
}

impl std::fmt::Debug for HttpOllamaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOllamaModel")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpOllamaModel {
    /// Create a client from endpoint configuration; the token is read from the environment.
    pub fn new(config: &EndpointConfig) -> Result<Self, AppError> {
        Self::with_api_key(config, config.api_key())
    }

    pub fn with_api_key(config: &EndpointConfig, api_key: Option<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_url: config.endpoint("api/generate")?,
            model: config.model.clone(),
            api_key,
            timeout_secs: config.timeout_secs,
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl LanguageModel for HttpOllamaModel {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateRequest { model: &self.model, prompt, stream: false };

        let mut builder = self.client.post(self.api_url.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                AppError::Inference(format!("Model request timed out after {}s", self.timeout_secs))
            } else {
                AppError::Inference(format!("Model request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Inference(format!(
                "Model API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: GenerateResponse = response
            .json()
            .map_err(|e| AppError::Inference(format!("Failed to parse model response: {}", e)))?;
        Ok(body.response)
    }
}
