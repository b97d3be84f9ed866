use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = maniscan_cli::run(maniscan_cli::Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
