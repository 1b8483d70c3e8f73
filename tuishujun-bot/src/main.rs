//! Binary for the tuishujun book-lookup bot.

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tuishujun_bot::config::log_file_from_env;
use tuishujun_bot::{lookup_once, run_bot, BotConfig, CatalogConfig, Cli, Commands};
use tuishujun_core::{init_tracing, LogOutput};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // lookup prints its result to stdout
    let output = match cli.command {
        Commands::Run { .. } => LogOutput::FileAndStdout,
        Commands::Lookup { .. } => LogOutput::FileOnly,
    };
    init_tracing(&log_file_from_env(), output)?;

    let result = match cli.command {
        Commands::Run { token } => match BotConfig::load(token) {
            Ok(config) => run_bot(config).await,
            Err(e) => Err(e.into()),
        },
        Commands::Lookup { book_id } => match CatalogConfig::load() {
            Ok(config) => lookup_once(config, &book_id).await,
            Err(e) => Err(e.into()),
        },
    };

    if let Err(ref e) = result {
        error!("Fatal error, exiting: {:#}", e);
    }
    result
}
