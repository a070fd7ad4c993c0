//! Command-line interface: argument types, command implementations and
//! output formatting.

pub mod commands;
pub mod context;
pub mod output;
pub mod types;

pub use context::{load_config, AppContext};
pub use types::{Cli, Commands};

/// Print a command failure and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let chain: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        println!(
            "{}",
            serde_json::json!({ "success": false, "error": err.to_string(), "causes": chain })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
