//! Embedding index backed by an Ollama-compatible `POST /api/embed` endpoint.
//!
//! Vectors live in memory for the lifetime of one request's index.

use std::cmp::Ordering;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::configuration::EmbeddingConfig;
use crate::domain::{AppError, CorpusUnit};
use crate::ports::IndexProvider;

/// HTTP embedding client that also ranks units by cosine similarity.
#[derive(Clone)]
pub struct OllamaEmbeddingIndex {
    api_url: Url,
    model: String,
    api_key: Option<String>,
    batch_size: usize,
    timeout_secs: u64,
    client: Client,
}

impl std::fmt::Debug for OllamaEmbeddingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaEmbeddingIndex")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("batch_size", &self.batch_size)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// In-memory vectors for one request's corpus.
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    entries: Vec<(CorpusUnit, Vec<f32>)>,
}

impl VectorIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OllamaEmbeddingIndex {
    pub fn new(config: &EmbeddingConfig) -> Result<Self, AppError> {
        Self::with_api_key(config, config.endpoint().api_key())
    }

    pub fn with_api_key(config: &EmbeddingConfig, api_key: Option<String>) -> Result<Self, AppError> {
        let endpoint = config.endpoint();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_url: endpoint.endpoint("api/embed")?,
            model: config.model.clone(),
            api_key,
            batch_size: config.batch_size.max(1),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn embed(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        let request = EmbedRequest { model: &self.model, input: inputs };

        let mut builder = self.client.post(self.api_url.clone()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                AppError::Indexing(format!(
                    "Embedding request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                AppError::Indexing(format!("Embedding request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Indexing(format!(
                "Embedding API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let body: EmbedResponse = response
            .json()
            .map_err(|e| AppError::Indexing(format!("Failed to parse embedding response: {}", e)))?;

        if body.embeddings.len() != inputs.len() {
            return Err(AppError::Indexing(format!(
                "Expected {} embeddings, got {}",
                inputs.len(),
                body.embeddings.len()
            )));
        }
        Ok(body.embeddings)
    }
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl IndexProvider for OllamaEmbeddingIndex {
    type Index = VectorIndex;

    fn build_index(&self, units: &[CorpusUnit]) -> Result<VectorIndex, AppError> {
        let rendered: Vec<String> = units.iter().map(CorpusUnit::render).collect();

        let mut vectors = Vec::with_capacity(rendered.len());
        for batch in rendered.chunks(self.batch_size) {
            vectors.extend(self.embed(batch)?);
        }

        Ok(VectorIndex { entries: units.iter().cloned().zip(vectors).collect() })
    }

    fn retrieve(
        &self,
        index: &VectorIndex,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<CorpusUnit>, AppError> {
        if index.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self
            .embed(&[query.to_string()])?
            .pop()
            .ok_or_else(|| AppError::Indexing("Empty embedding for query".into()))?;

        let mut scored = Vec::with_capacity(index.len());
        for (position, (_, vector)) in index.entries.iter().enumerate() {
            scored.push((position, cosine_similarity(&query_vector, vector)?));
        }
        // Stable sort keeps corpus order among equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(position, _)| index.entries[position].0.clone())
            .collect())
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, AppError> {
    if a.len() != b.len() {
        return Err(AppError::Indexing(format!(
            "Embedding dimensions differ ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}
