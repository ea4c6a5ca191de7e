mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use gavel_client::{EvaluatorClient, HttpEvaluatorClient};
use gavel_tui::{App, AppOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle subcommands first (before loading config)
    if let Some(cmd) = &cli.command {
        match cmd {
            Commands::Completions { shell } => {
                cli::print_completions(*shell);
                return Ok(());
            }
            Commands::ShowConfig => {
                let config = gavel_config::load(cli.config.as_deref())?;
                println!("{}", serde_yaml::to_string(&config).unwrap_or_default());
                return Ok(());
            }
        }
    }

    let mut config = gavel_config::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    let config = Arc::new(config);

    run_tui(cli, config).await
}

async fn run_tui(cli: Cli, config: Arc<gavel_config::Config>) -> anyhow::Result<()> {
    use ratatui::crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
    };

    let client: Arc<dyn EvaluatorClient> = Arc::new(
        HttpEvaluatorClient::new(&config.service.base_url, config.service.timeout_secs)
            .context("building evaluator client")?,
    );

    let terminal = ratatui::init();
    let _ = execute!(std::io::stderr(), EnableMouseCapture);

    let app = App::new(
        config,
        AppOptions {
            initial_question: cli.question,
            ascii: cli.ascii,
        },
    );
    let result = app.run(terminal, client).await;

    let _ = execute!(std::io::stderr(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
