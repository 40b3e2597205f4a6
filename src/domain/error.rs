use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;
use crate::domain::sentiment::TallyError;

/// Library-wide error type for report generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The report request itself is unusable.
    #[error("Invalid report request: {0}")]
    InvalidRequest(String),

    /// Prompt assembly failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(#[from] PromptAssemblyError),

    /// The embedding/index provider could not build or query the index.
    #[error("Indexing failed: {0}")]
    Indexing(String),

    /// The language model call failed or timed out.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// The sentiment tally response violated its output contract.
    #[error("Malformed sentiment tally: {0}")]
    MalformedTally(#[from] TallyError),

    /// The tally parsed but its total disagrees with the observation count.
    #[error("Sentiment tally total {reported} does not match the {expected} observations supplied")]
    TallyTotalMismatch { reported: f64, expected: usize },

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Caller-visible failure category for an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    InvalidInput,
    Configuration,
    IndexingFailure,
    InferenceFailure,
    MalformedTallyResponse,
    Io,
}

impl FailureCategory {
    /// Process exit code used by the CLI for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            FailureCategory::InvalidInput | FailureCategory::Configuration | FailureCategory::Io => {
                1
            }
            FailureCategory::IndexingFailure => 2,
            FailureCategory::InferenceFailure => 3,
            FailureCategory::MalformedTallyResponse => 4,
        }
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn category(&self) -> FailureCategory {
        match self {
            AppError::Io(_) => FailureCategory::Io,
            AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::PromptAssembly(_)
            | AppError::Internal(_) => FailureCategory::Configuration,
            AppError::Json(_) | AppError::InvalidRequest(_) => FailureCategory::InvalidInput,
            AppError::Indexing(_) => FailureCategory::IndexingFailure,
            AppError::Inference(_) => FailureCategory::InferenceFailure,
            AppError::MalformedTally(_) | AppError::TallyTotalMismatch { .. } => {
                FailureCategory::MalformedTallyResponse
            }
        }
    }
}
