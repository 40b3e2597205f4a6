//! Template sources and strict rendering.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use super::{PromptAssemblyError, PromptContext};

pub const PREAMBLE: &str = "preamble.j2";
pub const STRUCTURE: &str = "structure.j2";
pub const POSITIVE: &str = "positive.j2";
pub const NEGATIVE: &str = "negative.j2";
pub const SENTIMENT: &str = "sentiment.j2";
pub const SYNTHESIS_QA: &str = "synthesis_qa.j2";
pub const SYNTHESIS_REFINE: &str = "synthesis_refine.j2";

/// Every template the composer and the synthesizer render.
pub const TEMPLATE_NAMES: [&str; 7] =
    [PREAMBLE, STRUCTURE, POSITIVE, NEGATIVE, SENTIMENT, SYNTHESIS_QA, SYNTHESIS_REFINE];

/// Named template sources.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates {
    sources: BTreeMap<String, String>,
}

impl PromptTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the source of a template.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }

    pub fn get(&self, name: &str) -> Result<&str, PromptAssemblyError> {
        self.sources
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| PromptAssemblyError::TemplateNotFound(name.to_string()))
    }

    /// Render the named template with the given context.
    pub fn render(&self, name: &str, context: &PromptContext) -> Result<String, PromptAssemblyError> {
        render_template(self.get(name)?, context, name)
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render a template string using strict Jinja-compatible semantics.
///
/// Only `{{ ... }}` interpolation is allowed. Control structures are rejected.
pub fn render_template(
    template: &str,
    context: &PromptContext,
    template_name: &str,
) -> Result<String, PromptAssemblyError> {
    if let Some(token) = disallowed_template_token(template) {
        return Err(PromptAssemblyError::TemplateSyntaxNotAllowed {
            template: template_name.to_string(),
            token: token.to_string(),
        });
    }

    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, &context.variables).map_err(|err| {
        PromptAssemblyError::TemplateRenderError {
            template: template_name.to_string(),
            reason: err.to_string(),
        }
    })
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
