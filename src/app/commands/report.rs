//! Report command: the observation-to-report pipeline.
//!
//! Corpus, index and prompts are built once per request, then the analytical
//! queries run against them and their responses are merged into a [`Report`].

use tracing::info;

use crate::app::AppContext;
use crate::domain::{
    AnalyticalQuery, AppError, Chunker, PromptParameters, RawModelResponse, Report,
    ReportRequest, TotalCheck, build_corpus, normalize_tally,
};
use crate::ports::{IndexProvider, LanguageModel};
use crate::services::{CompactSynthesizer, QueryExecutor};

/// Generate the report for one request.
///
/// A request without observations short-circuits to [`Report::no_data`]
/// without touching the index provider or the model.
pub fn execute<I, M>(ctx: &AppContext<I, M>, request: &ReportRequest) -> Result<Report, AppError>
where
    I: IndexProvider,
    M: LanguageModel,
{
    let config = ctx.config();
    let observation_count = request.observation_count();
    info!(course = %request.course, year = request.year, observation_count, "Generating report");

    if request.is_empty() {
        info!("No observations supplied; returning the no-data report");
        return Ok(Report::no_data());
    }

    let chunker = Chunker::new(config.corpus.max_chunk_chars)?;
    let corpus = build_corpus(request, &chunker);
    info!(units = corpus.len(), "Corpus built");

    let index = ctx.index_provider().build_index(&corpus)?;
    info!(units = corpus.len(), "Index built");

    let prompts = ctx.composer().compose(&PromptParameters {
        course: request.course.clone(),
        year: request.year,
        observation_count,
        language: config.report.language.clone(),
    })?;

    let mut jobs = vec![
        (AnalyticalQuery::Positive, prompts.positive.as_str()),
        (AnalyticalQuery::Negative, prompts.negative.as_str()),
    ];
    if config.report.include_sentiment {
        jobs.push((AnalyticalQuery::SentimentTally, prompts.sentiment.as_str()));
    }

    let synthesizer =
        CompactSynthesizer::new(ctx.model(), ctx.composer(), config.synthesis.context_window_chars);
    let executor = QueryExecutor::new(
        ctx.index_provider(),
        &index,
        corpus.len(),
        config.retrieval.top_k_cap,
        synthesizer,
    );

    info!(queries = jobs.len(), parallel = config.run.parallel, "Running analytical queries");
    let responses = executor.execute_all(&jobs, config.run.parallel)?;

    let report = merge_responses(responses, observation_count, config.report.total_check)?;
    info!("Report assembled");
    Ok(report)
}

fn merge_responses(
    responses: Vec<RawModelResponse>,
    observation_count: usize,
    check: TotalCheck,
) -> Result<Report, AppError> {
    let mut positive = None;
    let mut negative = None;
    let mut sentiment = None;

    for response in responses {
        match response.query {
            AnalyticalQuery::Positive => positive = Some(response.text),
            AnalyticalQuery::Negative => negative = Some(response.text),
            AnalyticalQuery::SentimentTally => {
                let distribution = normalize_tally(&response.text, observation_count, check)?;
                info!(sum = distribution.sum(), "Sentiment tally normalized");
                sentiment = Some(distribution);
            }
        }
    }

    let missing = |query: AnalyticalQuery| AppError::Internal(format!("No {} response", query));
    Ok(Report::assemble(
        positive.ok_or_else(|| missing(AnalyticalQuery::Positive))?,
        negative.ok_or_else(|| missing(AnalyticalQuery::Negative))?,
        sentiment,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        FailureCategory, NO_DATA_MESSAGE, PromptComposer, SentimentLabel, ServiceConfig,
    };
    use crate::services::embedded_prompt_templates;
    use crate::testing::{FakeIndexProvider, FakeLanguageModel};

    const POSITIVE_ANSWER: &str = "- Clareza : \"O professor explica bem\"";
    const NEGATIVE_ANSWER: &str = "- Ritmo : \"Aulas muito rápidas\"";

    fn scripted_model(tally: &str) -> FakeLanguageModel {
        FakeLanguageModel::new()
            .with_rule("pontos positivos", POSITIVE_ANSWER)
            .with_rule("pontos negativos", NEGATIVE_ANSWER)
            .with_rule("Conta quantos", tally)
    }

    fn context(
        provider: FakeIndexProvider,
        model: FakeLanguageModel,
        config: ServiceConfig,
    ) -> AppContext<FakeIndexProvider, FakeLanguageModel> {
        AppContext::new(provider, model, PromptComposer::new(embedded_prompt_templates()), config)
    }

    fn calculo_request() -> ReportRequest {
        ReportRequest::new(
            "Cálculo 1",
            2025,
            vec![
                "O professor explica bem".into(),
                "Aulas muito rápidas".into(),
                "Nada a apontar".into(),
            ],
        )
    }

    #[test]
    fn empty_request_returns_no_data_without_calls() {
        let provider = FakeIndexProvider::new();
        let model = FakeLanguageModel::new();
        let ctx = context(provider.clone(), model.clone(), ServiceConfig::default());

        let report = execute(&ctx, &ReportRequest::new("Física", 2024, vec![])).unwrap();

        assert!(report.is_no_data());
        assert_eq!(report.positive, NO_DATA_MESSAGE);
        assert!(report.sentiment.is_none());
        assert!(provider.built_sizes().is_empty());
        assert!(model.prompts().is_empty());
    }

    #[test]
    fn full_report_merges_all_three_queries() {
        let provider = FakeIndexProvider::new();
        let model = scripted_model("Negativo:1\nNeutro:1\nPositivo:1");
        let ctx = context(provider.clone(), model.clone(), ServiceConfig::default());

        let report = execute(&ctx, &calculo_request()).unwrap();

        assert_eq!(report.positive, POSITIVE_ANSWER);
        assert_eq!(report.negative, NEGATIVE_ANSWER);
        let sentiment = report.sentiment.unwrap();
        for label in SentimentLabel::ALL {
            assert!((sentiment.fraction(label) - 1.0 / 3.0).abs() < 1e-9);
        }
        assert_eq!(provider.built_sizes(), vec![3]);
        assert_eq!(model.prompts().len(), 3);
    }

    #[test]
    fn prompts_name_course_and_year() {
        let provider = FakeIndexProvider::new();
        let model = scripted_model("Negativo:0\nNeutro:1\nPositivo:2");
        let ctx = context(provider.clone(), model, ServiceConfig::default());

        execute(&ctx, &calculo_request()).unwrap();

        let retrievals = provider.retrievals();
        assert_eq!(retrievals.len(), 3);
        for (query, top_k) in retrievals {
            assert!(query.contains("Cálculo 1"));
            assert!(query.contains("2025"));
            assert_eq!(top_k, 3);
        }
    }

    #[test]
    fn indexing_failure_stops_before_inference() {
        let model = scripted_model("Negativo:1\nNeutro:1\nPositivo:1");
        let ctx = context(FakeIndexProvider::failing(), model.clone(), ServiceConfig::default());

        let err = execute(&ctx, &calculo_request()).unwrap_err();

        assert_eq!(err.category(), FailureCategory::IndexingFailure);
        assert!(model.prompts().is_empty());
    }

    #[test]
    fn inference_failure_fails_the_report() {
        let ctx = context(
            FakeIndexProvider::new(),
            FakeLanguageModel::failing("connection refused"),
            ServiceConfig::default(),
        );

        let err = execute(&ctx, &calculo_request()).unwrap_err();
        assert_eq!(err.category(), FailureCategory::InferenceFailure);
    }

    #[test]
    fn malformed_tally_fails_the_report() {
        let model = scripted_model("Os alunos estão maioritariamente satisfeitos.");
        let ctx = context(FakeIndexProvider::new(), model, ServiceConfig::default());

        let err = execute(&ctx, &calculo_request()).unwrap_err();
        assert_eq!(err.category(), FailureCategory::MalformedTallyResponse);
    }

    #[test]
    fn strict_total_check_rejects_mismatch() {
        let mut config = ServiceConfig::default();
        config.report.total_check = TotalCheck::Strict;
        let model = scripted_model("Negativo:1\nNeutro:1\nPositivo:5");
        let ctx = context(FakeIndexProvider::new(), model, config);

        let err = execute(&ctx, &calculo_request()).unwrap_err();
        assert!(matches!(err, AppError::TallyTotalMismatch { expected: 3, .. }));
    }

    #[test]
    fn warn_total_check_still_normalizes() {
        let model = scripted_model("Negativo:1\nNeutro:1\nPositivo:2");
        let ctx = context(FakeIndexProvider::new(), model, ServiceConfig::default());

        let report = execute(&ctx, &calculo_request()).unwrap();
        let sentiment = report.sentiment.unwrap();
        assert_eq!(sentiment.fraction(SentimentLabel::Positive), 0.5);
    }

    #[test]
    fn qualitative_only_variant_skips_sentiment_query() {
        let mut config = ServiceConfig::default();
        config.report.include_sentiment = false;
        let model = scripted_model("irrelevante");
        let ctx = context(FakeIndexProvider::new(), model.clone(), config);

        let report = execute(&ctx, &calculo_request()).unwrap();

        assert!(report.sentiment.is_none());
        assert_eq!(model.prompts().len(), 2);
        assert!(model.prompts().iter().all(|p| !p.contains("Conta quantos")));
    }

    #[test]
    fn sequential_mode_produces_same_report() {
        let mut config = ServiceConfig::default();
        config.run.parallel = false;
        let model = scripted_model("Negativo:1\nNeutro:1\nPositivo:1");
        let ctx = context(FakeIndexProvider::new(), model, config);

        let report = execute(&ctx, &calculo_request()).unwrap();
        assert_eq!(report.positive, POSITIVE_ANSWER);
        assert!(report.sentiment.is_some());
    }
}
