//! Language model port definition.

use crate::domain::AppError;

/// Text generation capability.
///
/// Implementations are long-lived, shared across concurrent requests, and keep
/// no per-request state.
pub trait LanguageModel: Send + Sync {
    /// Generate a single text completion for `prompt`.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

impl<M: LanguageModel + ?Sized> LanguageModel for &M {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        (**self).complete(prompt)
    }
}
