//! Compact response synthesis.
//!
//! Retrieved units are packed into as few context blocks as fit the budget. The
//! first block is answered directly; every later block refines that answer.

use tracing::debug;

use crate::domain::{AppError, CorpusUnit, PromptComposer};
use crate::ports::LanguageModel;

const BLOCK_SEPARATOR: &str = "\n\n";

pub struct CompactSynthesizer<'a, M: LanguageModel> {
    model: &'a M,
    composer: &'a PromptComposer,
    context_window_chars: usize,
}

impl<'a, M: LanguageModel> CompactSynthesizer<'a, M> {
    pub fn new(model: &'a M, composer: &'a PromptComposer, context_window_chars: usize) -> Self {
        Self { model, composer, context_window_chars }
    }

    /// Answer `query` from `units`, issuing one model call per context block.
    pub fn synthesize(&self, query: &str, units: &[CorpusUnit]) -> Result<String, AppError> {
        let budget = self.context_window_chars.saturating_sub(query.chars().count()).max(1);
        let blocks = pack_context(units.iter().map(CorpusUnit::render), budget);
        debug!(units = units.len(), blocks = blocks.len(), "Synthesizing answer");

        let mut answer: Option<String> = None;
        for block in blocks.iter().map(String::as_str).chain(blocks.is_empty().then_some("")) {
            let prompt = match &answer {
                None => self.composer.synthesis_prompt(query, block)?,
                Some(existing) => self.composer.refine_prompt(query, existing, block)?,
            };
            answer = Some(self.model.complete(&prompt)?.trim().to_string());
        }

        Ok(answer.unwrap_or_default())
    }
}

/// Join chunks, in order, into blocks of at most `budget` characters.
///
/// A chunk longer than the budget is placed in a block of its own.
pub fn pack_context(chunks: impl IntoIterator<Item = String>, budget: usize) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for chunk in chunks {
        let chunk_len = chunk.chars().count();
        let joined_len = if current.is_empty() {
            chunk_len
        } else {
            current_len + BLOCK_SEPARATOR.len() + chunk_len
        };

        if !current.is_empty() && joined_len > budget {
            blocks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push_str(BLOCK_SEPARATOR);
            current_len += BLOCK_SEPARATOR.len();
        }
        current.push_str(&chunk);
        current_len += chunk_len;
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
