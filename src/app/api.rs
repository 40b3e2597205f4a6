//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use serde_json::Value;

use crate::app::{
    AppContext,
    commands::{describe, report},
};
use crate::domain::{PromptComposer, Report, ReportRequest, ServiceConfig};
use crate::ports::{IndexProvider, LanguageModel};
use crate::services::{HttpOllamaModel, OllamaEmbeddingIndex, load_prompt_templates};

pub use crate::app::config::load_config;
pub use crate::domain::AppError;

/// Context wired to the Ollama-compatible HTTP services.
pub type OllamaContext = AppContext<OllamaEmbeddingIndex, HttpOllamaModel>;

/// Build the long-lived capabilities described by `config`.
///
/// Create this once and reuse it for every request.
pub fn create_context(config: ServiceConfig) -> Result<OllamaContext, AppError> {
    config.validate()?;
    let index_provider = OllamaEmbeddingIndex::new(&config.embedding)?;
    let model = HttpOllamaModel::new(&config.model)?;
    let templates = load_prompt_templates(config.prompts.dir.as_deref())?;
    Ok(AppContext::new(index_provider, model, PromptComposer::new(templates), config))
}

/// Generate a report for one request.
pub fn generate_report<I, M>(ctx: &AppContext<I, M>, request: &ReportRequest) -> Result<Report, AppError>
where
    I: IndexProvider,
    M: LanguageModel,
{
    report::execute(ctx, request)
}

/// Render the markdown document at `path` as a JSON outline.
pub fn describe(path: &Path) -> Result<Value, AppError> {
    describe::execute(path)
}
