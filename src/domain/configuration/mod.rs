mod parse;
mod service_config;

pub use parse::parse_config_content;
pub use service_config::{
    CorpusConfig, EmbeddingConfig, EndpointConfig, ExecutionConfig, PromptsConfig, ReportConfig,
    RetrievalConfig, ServiceConfig, SynthesisConfig,
};
