use std::path::Path;

use crate::domain::AppError;

pub fn run_describe(path: &Path) -> Result<(), AppError> {
    let outline = crate::app::api::describe(path)?;
    println!("{}", serde_json::to_string_pretty(&outline)?);
    Ok(())
}
