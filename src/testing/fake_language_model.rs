use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::LanguageModel;

/// Scripted model: answers with the first rule whose needle occurs in the prompt.
#[derive(Clone, Default)]
pub struct FakeLanguageModel {
    rules: Vec<(String, String)>,
    default_response: Option<String>,
    failure: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn with_rule(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules.push((needle.into(), response.into()));
        self
    }

    pub fn with_default(mut self, response: impl Into<String>) -> Self {
        self.default_response = Some(response.into());
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LanguageModel for FakeLanguageModel {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = &self.failure {
            return Err(AppError::Inference(message.clone()));
        }

        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or_else(|| AppError::Inference("no scripted response".into()))
    }
}
