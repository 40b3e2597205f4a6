mod fake_index_provider;
mod fake_language_model;

pub use fake_index_provider::FakeIndexProvider;
pub use fake_language_model::FakeLanguageModel;
