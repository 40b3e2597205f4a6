//! Embedding/index provider port definition.

use crate::domain::{AppError, CorpusUnit};

/// Builds a similarity-searchable index over a corpus and queries it.
///
/// The provider itself is shared across requests; each [`Self::Index`] belongs
/// to exactly one request.
pub trait IndexProvider: Send + Sync {
    type Index: Send + Sync;

    /// Embed and index every unit. Must accept a single-unit corpus.
    fn build_index(&self, units: &[CorpusUnit]) -> Result<Self::Index, AppError>;

    /// Up to `top_k` units, most similar to `query` first.
    fn retrieve(
        &self,
        index: &Self::Index,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<CorpusUnit>, AppError>;
}
