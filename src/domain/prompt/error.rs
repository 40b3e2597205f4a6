/// Error during prompt assembly.
#[derive(Debug, Clone)]
pub enum PromptAssemblyError {
    /// No template source is registered under this name.
    TemplateNotFound(String),

    /// Failed to read a template override file.
    TemplateReadError { path: String, reason: String },

    /// The template uses syntax other than `{{ ... }}` interpolation.
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Failed to render a template with the provided context.
    TemplateRenderError { template: String, reason: String },
}

impl std::fmt::Display for PromptAssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(name) => write!(f, "Prompt template not found: {}", name),
            Self::TemplateReadError { path, reason } => {
                write!(f, "Failed to read prompt template {}: {}", path, reason)
            }
            Self::TemplateSyntaxNotAllowed { template, token } => {
                write!(f, "Template {} uses disallowed syntax '{}'", template, token)
            }
            Self::TemplateRenderError { template, reason } => {
                write!(f, "Failed to render template {}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for PromptAssemblyError {}
