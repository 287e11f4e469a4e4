use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stepview::{util, App, Config};

/// Terminal client for stepping through program execution traces.
#[derive(Debug, Parser)]
#[command(name = "stepview", version, about)]
struct Cli {
    /// Program source file to load into the editor
    source: Option<PathBuf>,

    /// Base URL of the tracer service
    #[arg(long)]
    tracer_url: Option<String>,

    /// Override the data directory (default: ~/.stepview)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::paths::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.stepview/logs/stepview.log)
    fs::create_dir_all(util::paths::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::paths::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = Config::load(cli.tracer_url, cli.source)?;

    let mut app = App::new(config);
    app.run().await
}
