mod compact_synthesizer;
mod markdown_outline;
mod ollama_index;
mod ollama_model;
mod prompt_assets;
mod query_executor;

pub use compact_synthesizer::{CompactSynthesizer, pack_context};
pub use markdown_outline::outline;
pub use ollama_index::{OllamaEmbeddingIndex, VectorIndex};
pub use ollama_model::HttpOllamaModel;
pub use prompt_assets::{embedded_prompt_templates, load_prompt_templates};
pub use query_executor::QueryExecutor;
