//! Implementation of the `letter-rag ingest` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

use crate::cli::context::AppContext;
use crate::cli::output::{create_progress_bar, output, CommandOutput, ProgressBarExt, TableFormatter};
use crate::domain::models::{Config, ProcessingMode};

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// UTF-8 text files, one letter each; the year is read from the file name
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Fail on unreadable files instead of substituting sample passages
    #[arg(long)]
    pub production: bool,
}

/// Outcome for one input file
#[derive(Debug, Serialize)]
pub struct IngestedFile {
    pub path: PathBuf,
    pub year: String,
    pub passages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IngestOutput {
    pub files: Vec<IngestedFile>,
    pub inserted: usize,
    pub total_documents: u64,
}

impl IngestOutput {
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.error.is_some()).count()
    }
}

impl CommandOutput for IngestOutput {
    fn to_human(&self) -> String {
        format!(
            "{}\nInserted {} passages. Total passages in store: {}",
            TableFormatter::new().format_ingested_files(&self.files),
            self.inserted,
            self.total_documents
        )
    }
}

/// Process every file, storing the passages of those that succeed.
///
/// Processing failures are recorded per file; a store write failure aborts
/// the whole run.
pub async fn run(args: IngestArgs, ctx: &AppContext, show_progress: bool) -> Result<IngestOutput> {
    let mut processor = ctx.processor()?;
    if args.production {
        processor = processor.with_mode(ProcessingMode::Production);
    }

    let pb = create_progress_bar(args.files.len() as u64, !show_progress);
    let mut files = Vec::with_capacity(args.files.len());
    let mut inserted = 0;

    for path in args.files {
        pb.set_message(path.display().to_string());
        let filename = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        let year = processor.extract_year(&filename);

        match processor.process_file(&path).await {
            Ok(documents) => {
                for document in &documents {
                    ctx.retrieval
                        .insert_embedded(document)
                        .await
                        .with_context(|| format!("Failed to store passages from {}", path.display()))?;
                }
                info!(path = %path.display(), passages = documents.len(), "ingested letter");
                inserted += documents.len();
                files.push(IngestedFile {
                    path,
                    year,
                    passages: documents.len(),
                    error: None,
                });
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to process letter");
                files.push(IngestedFile {
                    path,
                    year,
                    passages: 0,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_success(format!("{inserted} passages"));

    Ok(IngestOutput {
        files,
        inserted,
        total_documents: ctx.retrieval.try_document_count().await?,
    })
}

pub async fn execute(args: IngestArgs, config: Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::build(config).await?;
    let result = run(args, &ctx, !json_mode).await?;
    output(&result, json_mode);

    match result.failed() {
        0 => Ok(()),
        n => anyhow::bail!("{n} of {} file(s) could not be ingested", result.files.len()),
    }
}
