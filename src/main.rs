//! letter-rag CLI entry point.

use anyhow::Result;
use clap::Parser;

use letter_rag::cli::commands::{count, embed, ingest, init, load_samples, search};
use letter_rag::cli::{handle_error, load_config, Cli, Commands};
use letter_rag::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::Init(args) => init::execute(args, config, cli.json).await,
        Commands::Ingest(args) => ingest::execute(args, config, cli.json).await,
        Commands::Search(args) => search::execute(args, config, cli.json).await,
        Commands::Count => count::execute(config, cli.json).await,
        Commands::LoadSamples => load_samples::execute(config, cli.json).await,
        Commands::Embed(args) => embed::execute(args, config, cli.json).await,
    }
}
