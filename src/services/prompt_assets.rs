//! Prompt template sources: embedded defaults plus optional on-disk overrides.

use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};
use tracing::info;

use crate::domain::prompt::TEMPLATE_NAMES;
use crate::domain::{PromptAssemblyError, PromptTemplates};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// Templates compiled into the binary.
pub fn embedded_prompt_templates() -> PromptTemplates {
    let mut templates = PromptTemplates::new();
    for file in PROMPTS_DIR.files() {
        if let (Some(name), Some(source)) =
            (file.path().file_name().and_then(|n| n.to_str()), file.contents_utf8())
        {
            templates.insert(name, source);
        }
    }
    templates
}

/// Embedded templates, with any same-named file in `dir` taking precedence.
pub fn load_prompt_templates(dir: Option<&Path>) -> Result<PromptTemplates, PromptAssemblyError> {
    let mut templates = embedded_prompt_templates();
    let Some(dir) = dir else {
        return Ok(templates);
    };

    for name in TEMPLATE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        let source = fs::read_to_string(&path).map_err(|err| {
            PromptAssemblyError::TemplateReadError {
                path: path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        info!(template = name, path = %path.display(), "Using prompt template override");
        templates.insert(name, source);
    }
    Ok(templates)
}
