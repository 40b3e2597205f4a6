//! Executes analytical queries: retrieval followed by compact synthesis.

use std::thread;

use tracing::{debug, info};

use crate::domain::{AnalyticalQuery, AppError, RawModelResponse, RetrievalRequest};
use crate::ports::{IndexProvider, LanguageModel};
use crate::services::CompactSynthesizer;

/// Runs queries against one request's index. Holds no state between calls.
pub struct QueryExecutor<'a, I: IndexProvider, M: LanguageModel> {
    index_provider: &'a I,
    index: &'a I::Index,
    corpus_len: usize,
    top_k_cap: usize,
    synthesizer: CompactSynthesizer<'a, M>,
}

impl<'a, I: IndexProvider, M: LanguageModel> QueryExecutor<'a, I, M> {
    pub fn new(
        index_provider: &'a I,
        index: &'a I::Index,
        corpus_len: usize,
        top_k_cap: usize,
        synthesizer: CompactSynthesizer<'a, M>,
    ) -> Self {
        Self { index_provider, index, corpus_len, top_k_cap, synthesizer }
    }

    /// Retrieve context for `prompt` and synthesize one answer. Not retried.
    pub fn execute(&self, query: AnalyticalQuery, prompt: &str) -> Result<RawModelResponse, AppError> {
        let retrieval = RetrievalRequest::new(prompt, self.corpus_len, self.top_k_cap)?;
        debug!(%query, "Dispatching query");
        let units = self.index_provider.retrieve(self.index, &retrieval.query, retrieval.top_k)?;
        debug!(%query, top_k = retrieval.top_k, retrieved = units.len(), "Retrieved context");

        let text = self.synthesizer.synthesize(&retrieval.query, &units)?;
        info!(%query, chars = text.chars().count(), "Query answered");
        debug!(%query, response = %text, "Raw model response");
        Ok(RawModelResponse { query, text })
    }

    /// Execute independent queries, concurrently when `parallel` is set.
    ///
    /// Responses come back in job order. The first error wins.
    pub fn execute_all(
        &self,
        jobs: &[(AnalyticalQuery, &str)],
        parallel: bool,
    ) -> Result<Vec<RawModelResponse>, AppError> {
        if !parallel || jobs.len() < 2 {
            return jobs.iter().map(|(query, prompt)| self.execute(*query, prompt)).collect();
        }

        thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .iter()
                .map(|(query, prompt)| scope.spawn(move || self.execute(*query, prompt)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| AppError::Internal("query worker panicked".into()))?
                })
                .collect()
        })
    }
}
