//! Export command for running the full generation pipeline.

use crate::cli::common::{load_config, load_project_state, CliError, CliResult};
use crate::export::{DirectorySink, ExportProgress, Exporter};
use crate::wizard::{reduce, ExportKind, ExportSetting, WizardCommand, WizardState};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Export a design system from a project manifest
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Path to project manifest
    #[arg(short, long, value_name = "FILE")]
    pub project: PathBuf,

    /// Output directory (defaults to the configured output_dir)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Artifact format (json, css, scss, tailwind, styled-theme, bundle)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Leave documentation out of bundles
    #[arg(long)]
    pub no_docs: bool,

    /// Leave HTML examples out of bundles
    #[arg(long)]
    pub no_examples: bool,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    project: String,
    format: ExportKind,
    artifact: String,
    path: String,
    bytes: usize,
    progress: Vec<ProgressEntry>,
    finished_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ProgressEntry {
    percent: u8,
    step: &'static str,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let state = self.apply_overrides(load_project_state(&self.project, &config)?)?;

        let out_dir = self.out_dir.clone().unwrap_or_else(|| config.output_dir());
        let mut sink = DirectorySink::new(&out_dir);
        let mut exporter = Exporter::new();
        let mut progress = Vec::new();

        let print_lines = !self.json;
        let artifact = exporter
            .export(&state, &mut sink, |step: ExportProgress| {
                if print_lines {
                    println!("[{:>3}%] {}", step.percent, step.step);
                }
                progress.push(ProgressEntry {
                    percent: step.percent,
                    step: step.step,
                });
            })
            .map_err(|e| CliError::export(format!("Export failed: {e:#}")))?;

        let path = out_dir.join(&artifact.name);
        if self.json {
            let report = ExportReport {
                project: state.project.name.clone(),
                format: state.export.format,
                artifact: artifact.name.clone(),
                path: path.to_string_lossy().to_string(),
                bytes: artifact.bytes.len(),
                progress,
                finished_at: Utc::now(),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::io(format!("Failed to serialize report: {e}")))?;
            println!("{json}");
        } else {
            println!("✓ Exported {} to: {}", artifact.name, path.display());
        }

        Ok(())
    }

    /// Applies command-line export options on top of the manifest's.
    fn apply_overrides(&self, mut state: WizardState) -> CliResult<WizardState> {
        let mut settings = Vec::new();
        if let Some(format) = &self.format {
            let kind: ExportKind = format
                .parse()
                .map_err(|e| CliError::validation(format!("{e}")))?;
            settings.push(ExportSetting::Format(kind));
        }
        if self.no_docs {
            settings.push(ExportSetting::IncludeDocumentation(false));
        }
        if self.no_examples {
            settings.push(ExportSetting::IncludeExamples(false));
        }

        for setting in settings {
            state = reduce(&state, WizardCommand::UpdateExport(setting));
        }
        Ok(state)
    }
}
