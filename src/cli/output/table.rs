//! Table output formatting for CLI commands
//!
//! Search results and ingest reports rendered with comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::env;

use crate::cli::commands::ingest::IngestedFile;
use crate::domain::models::document::preview;
use crate::services::ToolResult;

/// Table formatter for CLI output
pub struct TableFormatter {
    use_colors: bool,
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self { use_colors, max_width }
    }

    /// Format ranked search results, best match first
    pub fn format_search_results(&self, results: &[ToolResult]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Score", "Year", "Document", "Page", "Passage"]));

        for (rank, result) in results.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1).set_alignment(CellAlignment::Right),
                self.score_cell(result.similarity_score),
                Cell::new(&result.metadata.year),
                Cell::new(&result.metadata.document),
                Cell::new(result.metadata.page).set_alignment(CellAlignment::Right),
                Cell::new(preview(&result.content, 160)),
            ]);
        }

        table.to_string()
    }

    /// Format per-file ingest counts
    pub fn format_ingested_files(&self, files: &[IngestedFile]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["File", "Year", "Passages", "Status"]));

        for file in files {
            let status = match &file.error {
                None => Cell::new("ok"),
                Some(e) if self.use_colors => Cell::new(e).fg(Color::Red),
                Some(e) => Cell::new(format!("error: {e}")),
            };
            table.add_row(vec![
                Cell::new(file.path.display()),
                Cell::new(&file.year),
                Cell::new(file.passages).set_alignment(CellAlignment::Right),
                status,
            ]);
        }

        table.to_string()
    }

    fn score_cell(&self, score: f64) -> Cell {
        let cell = Cell::new(format!("{score:.3}")).set_alignment(CellAlignment::Right);
        if !self.use_colors {
            return cell;
        }
        let color = if score >= 0.8 {
            Color::Green
        } else if score >= 0.5 {
            Color::Yellow
        } else {
            Color::DarkGrey
        };
        cell.fg(color)
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

/// Check if color output is supported
fn supports_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}
