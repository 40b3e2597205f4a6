use crate::domain::{PromptComposer, ServiceConfig};
use crate::ports::{IndexProvider, LanguageModel};

/// Long-lived capabilities and settings shared by every report request.
pub struct AppContext<I: IndexProvider, M: LanguageModel> {
    index_provider: I,
    model: M,
    composer: PromptComposer,
    config: ServiceConfig,
}

impl<I: IndexProvider, M: LanguageModel> AppContext<I, M> {
    /// Create a new application context.
    pub fn new(index_provider: I, model: M, composer: PromptComposer, config: ServiceConfig) -> Self {
        Self { index_provider, model, composer, config }
    }

    /// Get a reference to the embedding/index provider.
    pub fn index_provider(&self) -> &I {
        &self.index_provider
    }

    /// Get a reference to the language model.
    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
