//! Implementation of the `letter-rag embed` command.
//!
//! Embeds the same text twice and reports whether both vectors are
//! identical, along with the provider, length, norm and leading values.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::adapters::embeddings::build_embedder;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{l2_norm, Config};
use crate::domain::ports::Embedder;

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Text to embed
    #[arg(default_value = "Warren Buffett discusses investment principles")]
    pub text: String,

    /// Number of leading values to print
    #[arg(long, default_value_t = 3)]
    pub show: usize,
}

#[derive(Debug, Serialize)]
pub struct EmbedOutput {
    pub provider: String,
    pub dimension: usize,
    pub norm: f64,
    pub consistent: bool,
    pub leading: Vec<f64>,
}

impl CommandOutput for EmbedOutput {
    fn to_human(&self) -> String {
        let leading = self
            .leading
            .iter()
            .map(|v| format!("{v:.6}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Provider: {}\nDimensions: {}\nL2 norm: {:.9}\nIdentical on repeat: {}\nLeading values: [{leading}...]",
            self.provider, self.dimension, self.norm, self.consistent
        )
    }
}

pub async fn run(args: &EmbedArgs, embedder: &dyn Embedder) -> Result<EmbedOutput> {
    let first = embedder.embed(&args.text).await.context("Failed to embed text")?;
    let second = embedder.embed(&args.text).await.context("Failed to embed text")?;

    Ok(EmbedOutput {
        provider: embedder.name().to_string(),
        dimension: first.len(),
        norm: l2_norm(&first),
        consistent: first == second,
        leading: first.iter().take(args.show).copied().collect(),
    })
}

pub async fn execute(args: EmbedArgs, config: Config, json_mode: bool) -> Result<()> {
    let embedder = build_embedder(&config.embedding).context("Failed to create embedder")?;
    let result = run(&args, embedder.as_ref()).await?;
    output(&result, json_mode);
    Ok(())
}
