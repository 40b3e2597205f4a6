//! sgq-report: course evaluation reports from free-text student observations.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{OllamaContext, create_context, describe, generate_report, load_config};
pub use domain::{
    AppError, FailureCategory, Report, ReportRequest, SentimentDistribution, SentimentLabel,
    ServiceConfig,
};
