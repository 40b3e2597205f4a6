mod composer;
mod context;
mod error;
pub mod template;

pub use composer::{ComposedPrompts, PromptComposer, PromptParameters};
pub use context::PromptContext;
pub use error::PromptAssemblyError;
pub use template::{PromptTemplates, TEMPLATE_NAMES, render_template};
