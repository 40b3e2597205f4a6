use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CorpusUnit};
use crate::ports::IndexProvider;

/// Index that keeps units in corpus order and records every call.
#[derive(Clone, Default)]
pub struct FakeIndexProvider {
    fail_build: bool,
    pub built: Arc<Mutex<Vec<usize>>>,
    pub retrievals: Arc<Mutex<Vec<(String, usize)>>>,
}

impl FakeIndexProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail_build: true, ..Self::default() }
    }

    /// Corpus sizes passed to `build_index`.
    pub fn built_sizes(&self) -> Vec<usize> {
        self.built.lock().unwrap().clone()
    }

    /// `(query, top_k)` pairs passed to `retrieve`.
    pub fn retrievals(&self) -> Vec<(String, usize)> {
        self.retrievals.lock().unwrap().clone()
    }
}

impl IndexProvider for FakeIndexProvider {
    type Index = Vec<CorpusUnit>;

    fn build_index(&self, units: &[CorpusUnit]) -> Result<Self::Index, AppError> {
        self.built.lock().unwrap().push(units.len());
        if self.fail_build {
            return Err(AppError::Indexing("embedding service unreachable".into()));
        }
        Ok(units.to_vec())
    }

    fn retrieve(
        &self,
        index: &Self::Index,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<CorpusUnit>, AppError> {
        self.retrievals.lock().unwrap().push((query.to_string(), top_k));
        Ok(index.iter().take(top_k).cloned().collect())
    }
}
