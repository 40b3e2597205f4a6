use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sgq_report=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    sgq_report::app::cli::run();
}
