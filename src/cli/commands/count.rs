//! Implementation of the `letter-rag count` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
pub struct CountOutput {
    pub documents: u64,
}

impl CommandOutput for CountOutput {
    fn to_human(&self) -> String {
        format!("{} passages stored", self.documents)
    }
}

pub async fn execute(config: Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::build(config).await?;
    let documents = ctx
        .retrieval
        .try_document_count()
        .await
        .context("Failed to count documents")?;

    output(&CountOutput { documents }, json_mode);
    Ok(())
}
