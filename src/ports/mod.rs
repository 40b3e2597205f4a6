mod index_provider;
mod language_model;

pub use index_provider::IndexProvider;
pub use language_model::LanguageModel;
