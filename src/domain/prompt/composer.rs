//! Composition of the three analytical prompts and the synthesis wrappers.

use super::template::{
    NEGATIVE, POSITIVE, PREAMBLE, SENTIMENT, STRUCTURE, SYNTHESIS_QA, SYNTHESIS_REFINE,
};
use super::{PromptAssemblyError, PromptContext, PromptTemplates};
use crate::domain::AnalyticalQuery;

/// Metadata known before retrieval that parameterizes the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParameters {
    pub course: String,
    pub year: i32,
    pub observation_count: usize,
    /// Language the context, question and answer are written in.
    pub language: String,
}

/// The analytical prompts of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompts {
    pub positive: String,
    pub negative: String,
    pub sentiment: String,
}

impl ComposedPrompts {
    pub fn get(&self, query: AnalyticalQuery) -> &str {
        match query {
            AnalyticalQuery::Positive => &self.positive,
            AnalyticalQuery::Negative => &self.negative,
            AnalyticalQuery::SentimentTally => &self.sentiment,
        }
    }
}

/// Builds prompts from templates. Never looks at retrieved content.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    templates: PromptTemplates,
}

impl PromptComposer {
    pub fn new(templates: PromptTemplates) -> Self {
        Self { templates }
    }

    pub fn compose(&self, params: &PromptParameters) -> Result<ComposedPrompts, PromptAssemblyError> {
        let base = PromptContext::new()
            .with_var("language", params.language.as_str())
            .with_var("course", params.course.as_str())
            .with_var("year", params.year.to_string())
            .with_var("observation_count", params.observation_count.to_string());

        let context = base
            .clone()
            .with_var("preamble", self.templates.render(PREAMBLE, &base)?)
            .with_var("structure", self.templates.render(STRUCTURE, &base)?);

        Ok(ComposedPrompts {
            positive: self.templates.render(POSITIVE, &context)?,
            negative: self.templates.render(NEGATIVE, &context)?,
            sentiment: self.templates.render(SENTIMENT, &context)?,
        })
    }

    /// First synthesis call: answer the query from one context block.
    pub fn synthesis_prompt(&self, query: &str, context: &str) -> Result<String, PromptAssemblyError> {
        let vars = PromptContext::new().with_var("query", query).with_var("context", context);
        self.templates.render(SYNTHESIS_QA, &vars)
    }

    /// Follow-up synthesis call: refine an existing answer with another block.
    pub fn refine_prompt(
        &self,
        query: &str,
        existing_answer: &str,
        context: &str,
    ) -> Result<String, PromptAssemblyError> {
        let vars = PromptContext::new()
            .with_var("query", query)
            .with_var("existing_answer", existing_answer)
            .with_var("context", context);
        self.templates.render(SYNTHESIS_REFINE, &vars)
    }
}
