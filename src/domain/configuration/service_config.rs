//! Service configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, TotalCheck};

/// Configuration loaded from `sgq.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Generation model endpoint.
    #[serde(default)]
    pub model: EndpointConfig,
    /// Embedding model endpoint.
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    #[serde(default)]
    pub run: ExecutionConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.model.validate("model")?;
        self.embedding.validate()?;
        self.corpus.validate()?;
        self.retrieval.validate()?;
        self.synthesis.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

/// An Ollama-compatible HTTP endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Server base URL; API paths are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model name sent with each request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding an optional bearer token.
    #[serde(default = "default_model_key_env")]
    pub api_key_env: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            api_key_env: default_model_key_env(),
        }
    }
}

impl EndpointConfig {
    pub fn validate(&self, section: &str) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error(format!(
                "{}.timeout_secs must be greater than 0",
                section
            )));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error(format!("{}.model must not be empty", section)));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "{}.base_url must be a base URL: {}",
                section, self.base_url
            )));
        }
        Ok(())
    }

    /// Bearer token from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|key| !key.trim().is_empty())
    }

    /// Resolve an API path against the base URL, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint {} on {}: {}", path, self.base_url, e))
        })
    }
}

/// Embedding endpoint plus batching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbeddingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_embedding_key_env")]
    pub api_key_env: String,
    /// Inputs per embedding request.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            api_key_env: default_embedding_key_env(),
            batch_size: default_batch_size(),
        }
    }
}

impl EmbeddingConfig {
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
            api_key_env: self.api_key_env.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.endpoint().validate("embedding")?;
        if self.batch_size == 0 {
            return Err(AppError::config_error("embedding.batch_size must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Maximum characters per corpus unit.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self { max_chunk_chars: default_max_chunk_chars() }
    }
}

impl CorpusConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_chunk_chars == 0 {
            return Err(AppError::config_error("corpus.max_chunk_chars must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetrievalConfig {
    /// Upper bound on units retrieved per query.
    #[serde(default = "default_top_k_cap")]
    pub top_k_cap: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k_cap: default_top_k_cap() }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.top_k_cap == 0 {
            return Err(AppError::config_error("retrieval.top_k_cap must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Character budget for one synthesis call (query plus packed context).
    #[serde(default = "default_context_window_chars")]
    pub context_window_chars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self { context_window_chars: default_context_window_chars() }
    }
}

impl SynthesisConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.context_window_chars == 0 {
            return Err(AppError::config_error(
                "synthesis.context_window_chars must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// Whether to dispatch the analytical queries concurrently.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self { parallel: default_true() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Language bound in the prompt preamble.
    #[serde(default = "default_language")]
    pub language: String,
    /// Run the sentiment tally query. `false` gives a qualitative-only report.
    #[serde(default = "default_true")]
    pub include_sentiment: bool,
    #[serde(default)]
    pub total_check: TotalCheck,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            include_sentiment: default_true(),
            total_check: TotalCheck::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.language.trim().is_empty() {
            return Err(AppError::config_error("report.language must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptsConfig {
    /// Directory whose `*.j2` files override the embedded templates.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_base_url() -> Url {
    Url::parse("http://127.0.0.1:11434/").expect("Default base URL must be valid")
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout() -> u64 {
    1000
}

fn default_model_key_env() -> String {
    "SGQ_MODEL_TOKEN".to_string()
}

fn default_embedding_key_env() -> String {
    "SGQ_EMBEDDING_TOKEN".to_string()
}

fn default_batch_size() -> usize {
    32
}

fn default_max_chunk_chars() -> usize {
    8192
}

fn default_top_k_cap() -> usize {
    50
}

fn default_context_window_chars() -> usize {
    12_000
}

fn default_language() -> String {
    "Português de Portugal".to_string()
}

fn default_true() -> bool {
    true
}
