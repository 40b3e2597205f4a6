//! CLI Adapter.

mod describe;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sgq")]
#[command(version)]
#[command(about = "Generate course evaluation reports from student observations", long_about = None)]
struct Cli {
    /// Service configuration file (defaults to ./sgq.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report from a JSON request
    #[clap(visible_alias = "r")]
    Report(report::ReportArgs),
    /// Print a markdown document as a JSON outline
    #[clap(visible_alias = "d")]
    Describe {
        /// Markdown file to describe
        #[arg(long, default_value = crate::app::commands::describe::DEFAULT_DESCRIBE_PATH)]
        path: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Report(args) => report::run_report(cli.config.as_deref(), args),
        Commands::Describe { path } => describe::run_describe(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.category().exit_code());
    }
}
