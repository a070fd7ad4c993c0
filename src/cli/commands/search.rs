//! Implementation of the `letter-rag search` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Config;
use crate::services::{SearchToolInput, SearchToolOutput, VectorSearchTool};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Question about the letters
    pub query: String,

    /// Number of passages to return (defaults to retrieval.default_limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only search passages from this year
    #[arg(short, long)]
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SearchOutput(pub SearchToolOutput);

impl CommandOutput for SearchOutput {
    fn to_human(&self) -> String {
        if self.0.results.is_empty() {
            return self.0.summary.clone();
        }
        format!(
            "{}\n{}",
            TableFormatter::new().format_search_results(&self.0.results),
            self.0.summary
        )
    }
}

pub async fn run(args: SearchArgs, ctx: &AppContext) -> SearchOutput {
    let tool = VectorSearchTool::new(ctx.retrieval.clone());
    SearchOutput(
        tool.execute(SearchToolInput {
            query: args.query,
            limit: args.limit,
            year_filter: args.year,
        })
        .await,
    )
}

pub async fn execute(args: SearchArgs, config: Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::build(config).await?;
    output(&run(args, &ctx).await, json_mode);
    Ok(())
}
