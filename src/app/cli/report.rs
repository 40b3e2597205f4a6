//! Report command implementation.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::domain::{AppError, Report, ReportRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Args)]
pub struct ReportArgs {
    /// JSON request file, or `-` for stdin
    #[arg(short = 'i', long)]
    input: PathBuf,
    /// Override the request's course name
    #[arg(short = 'c', long)]
    course: Option<String>,
    /// Override the request's academic year
    #[arg(short = 'y', long)]
    year: Option<i32>,
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

pub fn run_report(config_path: Option<&Path>, args: ReportArgs) -> Result<(), AppError> {
    let mut request = read_request(&args.input)?;
    if let Some(course) = args.course {
        request.course = course;
    }
    if let Some(year) = args.year {
        request.year = year;
    }

    let config = crate::app::api::load_config(config_path)?;
    let ctx = crate::app::api::create_context(config)?;
    let report = crate::app::api::generate_report(&ctx, &request)?;
    let rendered = render(&report, &request, args.format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            println!("✅ Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn read_request(input: &Path) -> Result<ReportRequest, AppError> {
    let content = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input).map_err(|e| {
            AppError::InvalidRequest(format!("cannot read {}: {}", input.display(), e))
        })?
    };

    serde_json::from_str(&content).map_err(|e| AppError::InvalidRequest(e.to_string()))
}

fn render(report: &Report, request: &ReportRequest, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Markdown => Ok(report.to_markdown(
            &request.course,
            request.year,
            chrono::Local::now().date_naive(),
        )),
    }
}
