pub mod configuration;
pub mod corpus;
pub mod error;
pub mod observation;
pub mod prompt;
pub mod query;
pub mod report;
pub mod retrieval;
pub mod sentiment;

pub use configuration::{ServiceConfig, parse_config_content};
pub use corpus::{Chunker, CorpusUnit, build_corpus};
pub use error::{AppError, FailureCategory};
pub use observation::{Observation, ReportRequest};
pub use prompt::{
    ComposedPrompts, PromptAssemblyError, PromptComposer, PromptContext, PromptParameters,
    PromptTemplates,
};
pub use query::{AnalyticalQuery, RawModelResponse};
pub use report::{NO_DATA_MESSAGE, Report};
pub use retrieval::{RetrievalRequest, plan_top_k};
pub use sentiment::{
    SentimentDistribution, SentimentLabel, SentimentTally, TallyError, TotalCheck, normalize_tally,
};
