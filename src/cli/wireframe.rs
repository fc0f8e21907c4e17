//! Wireframe command for writing only the HTML preview.

use crate::cli::common::{load_config, load_project_state, CliError, CliResult};
use crate::export::generate_wireframe;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Write the wireframe preview for a project
#[derive(Debug, Clone, Args)]
pub struct WireframeArgs {
    /// Path to project manifest
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// HTML file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl WireframeArgs {
    /// Execute the wireframe command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let state = load_project_state(&self.project, &config)?;

        if state.selected_pages.is_empty() {
            tracing::warn!("Project selects no pages; wireframe will be empty");
        }
        let html = generate_wireframe(&state);

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::io(format!("Failed to create directory {}: {e}", parent.display()))
            })?;
        }
        fs::write(&self.output, html)
            .map_err(|e| CliError::io(format!("Failed to write wireframe: {e}")))?;

        println!(
            "✓ Wrote wireframe for {} page(s) to: {}",
            state.selected_pages.len(),
            self.output.display()
        );
        Ok(())
    }
}
