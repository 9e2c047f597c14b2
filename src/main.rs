use clap::Parser;
use tracing_subscriber::EnvFilter;
use upgrade_guard::{cli, config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries only the JSON payload
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    config::load_dotenv();

    let result = match cli.command.unwrap_or(cli::Commands::Check) {
        cli::Commands::Check => cli::check::handle_check(cli.settings()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
