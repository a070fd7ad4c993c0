//! Implementation of the `letter-rag load-samples` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::{create_progress_bar, output, CommandOutput, ProgressBarExt};
use crate::domain::models::Config;
use crate::services::sample_letters;

#[derive(Debug, Serialize)]
pub struct LoadSamplesOutput {
    pub inserted: usize,
    pub total_documents: u64,
}

impl CommandOutput for LoadSamplesOutput {
    fn to_human(&self) -> String {
        format!(
            "Loaded {} sample passages. Total passages in store: {}",
            self.inserted, self.total_documents
        )
    }
}

pub async fn run(ctx: &AppContext, show_progress: bool) -> Result<LoadSamplesOutput> {
    let samples = sample_letters();
    let pb = create_progress_bar(samples.len() as u64, !show_progress);

    for sample in &samples {
        pb.set_message(sample.metadata.filename.clone());
        if let Err(e) = ctx.retrieval.insert_document(sample).await {
            pb.finish_error("sample load failed");
            return Err(e).context("Failed to insert sample passage");
        }
        pb.inc(1);
    }
    pb.finish_success(format!("{} samples", samples.len()));

    Ok(LoadSamplesOutput {
        inserted: samples.len(),
        total_documents: ctx.retrieval.try_document_count().await?,
    })
}

pub async fn execute(config: Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::build(config).await?;
    let result = run(&ctx, !json_mode).await?;
    output(&result, json_mode);
    Ok(())
}
