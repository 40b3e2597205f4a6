//! Retrieval planning.

use crate::domain::AppError;

/// Number of units to retrieve for a corpus of `corpus_len` units.
///
/// The nominal request is "everything"; the configured cap bounds it.
pub fn plan_top_k(corpus_len: usize, cap: usize) -> Result<usize, AppError> {
    if cap == 0 {
        return Err(AppError::config_error("retrieval.top_k_cap must be greater than 0"));
    }
    if corpus_len == 0 {
        return Err(AppError::InvalidRequest("cannot retrieve from an empty corpus".into()));
    }
    Ok(corpus_len.min(cap))
}

/// A single similarity lookup against the request index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalRequest {
    pub query: String,
    /// Always within `1..=min(corpus_len, cap)`.
    pub top_k: usize,
}

impl RetrievalRequest {
    pub fn new(query: impl Into<String>, corpus_len: usize, cap: usize) -> Result<Self, AppError> {
        Ok(Self { query: query.into(), top_k: plan_top_k(corpus_len, cap)? })
    }
}
