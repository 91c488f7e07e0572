use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod catalog;
mod generate;
mod score;
#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "intent-cli")]
#[command(about = "Lead intent scoring command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a JSON signal file for one lead.
    Score {
        /// Path to a JSON array of signals.
        #[arg(long)]
        input: PathBuf,
        /// Previous score snapshot (JSON) to compare against for the trend.
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Pretty-print the resulting score.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Generate a synthetic signal set for demos and tests.
    Generate {
        /// Number of signals to produce.
        #[arg(long, default_value_t = 25)]
        count: usize,
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Timestamp signals within this many days before now.
        #[arg(long, default_value_t = 30)]
        window_days: i64,
    },
    /// Print the active signal catalog.
    Catalog,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = intent_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Score {
            input,
            previous,
            pretty,
        }) => score::run_score(&input, previous.as_deref(), pretty),
        Some(Commands::Generate {
            count,
            seed,
            window_days,
        }) => {
            let catalog = build_catalog(&config)?;
            generate::run_generate(&catalog, count, seed, window_days)
        }
        Some(Commands::Catalog) => {
            let catalog = build_catalog(&config)?;
            catalog::run_catalog(&catalog);
            Ok(())
        }
        None => {
            println!("intent-cli: no command given, try --help");
            Ok(())
        }
    }
}

/// Build the active catalog from config: the weights file when one is
/// configured, the built-in table otherwise.
fn build_catalog(config: &intent_core::AppConfig) -> anyhow::Result<intent_core::SignalCatalog> {
    let catalog = intent_core::SignalCatalog::from_weights_path(
        config.weights_path.as_deref(),
        config.unknown_category,
    )?;
    Ok(catalog)
}
