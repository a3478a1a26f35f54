mod app;
mod cli;
mod failure;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vs_config::SettingsLoader;

use crate::app::Targets;
use crate::cli::Cli;
use crate::failure::Failure;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn fetch(cli: &Cli) -> Result<serde_json::Value, Failure> {
    let mut loader = SettingsLoader::new().overrides(cli.overrides());
    if let Some(path) = &cli.config {
        loader = loader.config_path(path);
    }
    let settings = loader.load().await?;
    debug!(
        "Resolved settings: shard={:?} client_version={:?} proxy={}",
        settings.shard,
        settings.client_version,
        settings.proxy.is_some()
    );

    app::run(&settings, Targets::riot(settings.shard.as_deref())).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = vs_config::load_dotenv();
    init_tracing(cli.log_level());
    dotenv.report();

    match fetch(&cli).await {
        Ok(document) => {
            println!("{}", app::render_document(&document)?);
        }
        Err(failure) => {
            eprintln!("error: {}", failure.message());
            if cli.strict_exit {
                std::process::exit(failure.exit_code());
            }
        }
    }

    Ok(())
}
