//! Init command for writing a starter project manifest.

use crate::cli::common::{CliError, CliResult};
use crate::models::TargetFramework;
use crate::services::{ProjectManifest, ProjectService};
use clap::Args;
use std::path::PathBuf;

/// Write a starter project manifest
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Manifest path to create
    #[arg(short, long, value_name = "FILE", default_value = "tokenforge.toml")]
    pub output: PathBuf,

    /// Project name
    #[arg(long, value_name = "NAME", default_value = "My Design System")]
    pub name: String,

    /// Target framework (react, vue, angular, vanilla)
    #[arg(long, value_name = "FRAMEWORK", default_value = "react")]
    pub framework: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        let framework: TargetFramework = self
            .framework
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        if self.name.trim().is_empty() {
            return Err(CliError::validation("Project name must not be empty"));
        }

        if self.output.exists() && !self.force {
            return Err(CliError::validation(format!(
                "File already exists: {}. Use --force to overwrite",
                self.output.display()
            )));
        }

        let manifest = ProjectManifest::starter(self.name.trim(), framework);
        ProjectService::save(&manifest, &self.output)
            .map_err(|e| CliError::io(format!("Failed to write manifest: {e:#}")))?;

        println!("✓ Created project manifest: {}", self.output.display());
        Ok(())
    }
}
