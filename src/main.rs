use clap::Parser;
use colored::Colorize;
use pipf::cli::{run, Cli};
use pipf::config::{ensure_supported_layout, EnvVars};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging; stdout belongs to the wrapped tool
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Checked before parsing so it wins over any argument error
    if let Err(e) = ensure_supported_layout(&EnvVars::from_process()) {
        exit_with(e);
    }

    // Parse CLI
    let cli = Cli::parse();

    // Run command
    if let Err(e) = run(cli).await {
        exit_with(e);
    }
}

fn exit_with(e: pipf::core::PipfError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    std::process::exit(1);
}
