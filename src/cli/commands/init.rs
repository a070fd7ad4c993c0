//! Implementation of the `letter-rag init` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::{ConfigLoader, CONFIG_DIR};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub config_path: PathBuf,
    pub config_written: bool,
    pub database_url: String,
    pub documents: u64,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        if self.config_written {
            lines.push(format!("Wrote default configuration to {}", self.config_path.display()));
        } else {
            lines.push(format!(
                "Kept existing configuration at {} (use --force to overwrite)",
                self.config_path.display()
            ));
        }
        lines.push(format!(
            "Document store ready at {} ({} passages)",
            self.database_url, self.documents
        ));
        lines.join("\n")
    }
}

pub async fn run(args: InitArgs, config: Config) -> Result<InitOutput> {
    let config_path = ConfigLoader::project_config_path(&args.path);
    let config_dir = args.path.join(CONFIG_DIR);

    fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let config_written = args.force || !config_path.exists();
    if config_written {
        fs::write(&config_path, ConfigLoader::default_yaml()?)
            .await
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
    }

    let database_url = config.database.url.clone();
    let ctx = AppContext::build(config).await?;
    let documents = ctx.retrieval.try_document_count().await?;

    Ok(InitOutput {
        config_path,
        config_written,
        database_url,
        documents,
    })
}

pub async fn execute(args: InitArgs, config: Config, json_mode: bool) -> Result<()> {
    let result = run(args, config).await?;
    output(&result, json_mode);
    Ok(())
}
