//! Tokens command for emitting a single token format.

use crate::cli::common::{load_config, load_project_state, CliError, CliResult};
use crate::export::TokenFormat;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Emit the project's tokens in one format
#[derive(Debug, Clone, Args)]
pub struct TokensArgs {
    /// Path to project manifest
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// Output format (css, scss, tailwind, theme, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TokensArgs {
    /// Execute the tokens command
    pub fn execute(&self) -> CliResult<()> {
        let format = TokenFormat::from_name(&self.format).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown token format '{}'. Expected one of: css, scss, tailwind, theme, json",
                self.format
            ))
        })?;

        let config = load_config()?;
        let state = load_project_state(&self.project, &config)?;

        let content = format
            .render(&state.tokens)
            .map_err(|e| CliError::export(format!("Failed to render tokens: {e:#}")))?;

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        CliError::io(format!(
                            "Failed to create directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                fs::write(path, content)
                    .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;
                println!("✓ Wrote {}", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }
}
