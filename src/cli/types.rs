//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    embed::EmbedArgs, ingest::IngestArgs, init::InitArgs, search::SearchArgs,
};

#[derive(Parser, Debug)]
#[command(name = "letter-rag")]
#[command(about = "Semantic search over shareholder letters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .letter-rag/
    #[arg(short, long, global = true, env = "LETTER_RAG_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration and create the documents table
    Init(InitArgs),

    /// Chunk, embed and store letters from text files
    Ingest(IngestArgs),

    /// Find the passages most similar to a question
    Search(SearchArgs),

    /// Show the number of stored passages
    Count,

    /// Store the built-in sample passages
    LoadSamples,

    /// Embed a text and check that the embedding is reproducible
    Embed(EmbedArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_options() {
        let cli = Cli::try_parse_from(["letter-rag", "--json", "search", "what about moats?", "-l", "3", "--year", "2023"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "what about moats?");
                assert_eq!(args.limit, Some(3));
                assert_eq!(args.year.as_deref(), Some("2023"));
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ingest_requires_files() {
        assert!(Cli::try_parse_from(["letter-rag", "ingest"]).is_err());
        let cli = Cli::try_parse_from(["letter-rag", "ingest", "a-2021.txt", "b-2022.txt"]).unwrap();
        match cli.command {
            Commands::Ingest(args) => assert_eq!(args.files.len(), 2),
            other => panic!("expected ingest, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["letter-rag", "count", "--json", "--config", "custom.yaml"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert!(matches!(cli.command, Commands::Count));
    }
}
