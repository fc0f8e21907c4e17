//! Export orchestration.
//!
//! [`Exporter::export`] runs every generator in a fixed order, reports
//! progress checkpoints to the caller, packages the requested artifact, and
//! delivers it to an [`ArtifactSink`]. Failures anywhere in that pipeline
//! end up in [`ExportStatus::Failed`]; the wizard state is only borrowed.

use crate::export::archive::ArchiveBuilder;
use crate::export::components::generate_components;
use crate::export::config_files::generate_config_files;
use crate::export::docs::generate_documentation;
use crate::export::samples::generate_examples;
use crate::export::stylesheets::generate_stylesheets;
use crate::export::token_formats::TokenFormat;
use crate::export::wireframe::generate_wireframe;
use crate::export::GeneratedFile;
use crate::wizard::{ExportKind, WizardState};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Lifecycle of an exporter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportStatus {
    /// Nothing has run yet
    #[default]
    Idle,
    /// An export is in progress
    Exporting,
    /// The last export delivered an artifact
    Complete {
        /// Delivered artifact name
        artifact: String,
    },
    /// The last export failed
    Failed {
        /// Error chain rendered for display
        message: String,
    },
}

/// One progress checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportProgress {
    /// Completion percentage, 0 to 100
    pub percent: u8,
    /// Human-readable step description
    pub step: &'static str,
}

impl ExportProgress {
    const fn new(percent: u8, step: &'static str) -> Self {
        Self { percent, step }
    }
}

/// The single artifact an export produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name
    pub name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl Artifact {
    fn text(name: impl Into<String>, content: String) -> Self {
        Self {
            name: name.into(),
            bytes: content.into_bytes(),
        }
    }
}

/// Destination for finished artifacts.
pub trait ArtifactSink {
    /// Stores one artifact.
    fn deliver(&mut self, artifact: &Artifact) -> Result<()>;
}

/// Writes artifacts into a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, artifact: &Artifact) -> Result<()> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create output directory: {}",
            self.dir.display()
        ))?;

        let path = self.dir.join(&artifact.name);
        let temp_path = self.dir.join(format!(".{}.tmp", artifact.name));

        fs::write(&temp_path, &artifact.bytes)
            .context(format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp file to: {}",
            path.display()
        ))?;

        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "Wrote artifact");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivered artifacts, in delivery order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Consumes the sink, returning the artifacts.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

impl ArtifactSink for MemorySink {
    fn deliver(&mut self, artifact: &Artifact) -> Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Everything the generators produce for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Token files in every format, named for the `tokens/` directory
    pub tokens: Vec<GeneratedFile>,
    /// `variables.css`, `reset.css`, `utilities.css`, `components.css`
    pub styles: Vec<GeneratedFile>,
    /// One file per selected component
    pub components: Vec<GeneratedFile>,
    /// README, style guide and component reference
    pub documentation: Vec<GeneratedFile>,
    /// HTML example pages
    pub examples: Vec<GeneratedFile>,
    /// Wireframe document
    pub wireframe: String,
    /// Project scaffolding files
    pub config_files: Vec<GeneratedFile>,
}

/// Runs every generator, reporting checkpoints 10 through 80.
pub fn generate_output(
    state: &WizardState,
    on_progress: &mut dyn FnMut(ExportProgress),
) -> Result<GeneratedOutput> {
    on_progress(ExportProgress::new(10, "Preparing design tokens..."));
    let tokens = TokenFormat::ALL
        .into_iter()
        .map(|format| {
            format
                .render(&state.tokens)
                .map(|content| GeneratedFile::new(format.file_name(), content))
        })
        .collect::<Result<Vec<_>>>()
        .context("Failed to render design tokens")?;

    on_progress(ExportProgress::new(20, "Generating styles..."));
    let styles = generate_stylesheets(state);

    on_progress(ExportProgress::new(40, "Generating components..."));
    let components = generate_components(state.project.framework, &state.selected_components);

    on_progress(ExportProgress::new(60, "Creating documentation..."));
    let documentation = generate_documentation(state);

    on_progress(ExportProgress::new(70, "Generating examples..."));
    let examples = generate_examples();

    on_progress(ExportProgress::new(80, "Creating wireframe..."));
    let wireframe = generate_wireframe(state);

    let config_files = generate_config_files(state)?;

    Ok(GeneratedOutput {
        tokens,
        styles,
        components,
        documentation,
        examples,
        wireframe,
        config_files,
    })
}

/// Packages a bundle archive, reporting checkpoints 92 and 98.
pub fn build_bundle(
    state: &WizardState,
    output: &GeneratedOutput,
    on_progress: &mut dyn FnMut(ExportProgress),
) -> Result<Vec<u8>> {
    on_progress(ExportProgress::new(92, "Adding files to archive..."));
    let mut archive = ArchiveBuilder::new();
    let add_all = |archive: &mut ArchiveBuilder, dir: &str, files: &[GeneratedFile]| {
        files
            .iter()
            .try_for_each(|file| archive.add_in(dir, &file.name, &file.content))
    };

    if state.export.include_documentation {
        add_all(&mut archive, "", &output.documentation)?;
    }
    add_all(&mut archive, "", &output.config_files)?;
    add_all(&mut archive, "styles", &output.styles)?;
    add_all(&mut archive, "components", &output.components)?;
    if state.export.include_examples {
        add_all(&mut archive, "examples", &output.examples)?;
    }
    archive.add_in("", "wireframe.html", &output.wireframe)?;
    add_all(&mut archive, "tokens", &output.tokens)?;
    add_all(&mut archive, "src/styles", &output.styles)?;
    add_all(&mut archive, "src/components", &output.components)?;

    on_progress(ExportProgress::new(98, "Compressing files..."));
    tracing::debug!(entries = archive.len(), "Finalizing bundle archive");
    archive.finish()
}

/// Name of the artifact a format produces for `slug`.
pub fn artifact_name(format: ExportKind, slug: &str) -> String {
    match format {
        ExportKind::Json => format!("{slug}-tokens.json"),
        ExportKind::Css => format!("{slug}-styles.css"),
        ExportKind::Scss => format!("{slug}-variables.scss"),
        ExportKind::Tailwind => TokenFormat::Tailwind.file_name().to_string(),
        ExportKind::StyledTheme => TokenFormat::Theme.file_name().to_string(),
        ExportKind::Bundle => format!("{slug}-design-system.zip"),
    }
}

/// Sequences generation and delivery, tracking status across runs.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    status: ExportStatus,
}

impl Exporter {
    /// Creates an idle exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of the most recent run.
    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    /// Generates, packages and delivers the artifact selected by
    /// `state.export.format`.
    ///
    /// On failure the error is logged, recorded as [`ExportStatus::Failed`]
    /// and returned. The exporter can be run again afterwards.
    pub fn export(
        &mut self,
        state: &WizardState,
        sink: &mut dyn ArtifactSink,
        mut on_progress: impl FnMut(ExportProgress),
    ) -> Result<Artifact> {
        self.status = ExportStatus::Exporting;
        tracing::info!(
            project = %state.project.name,
            format = %state.export.format,
            "Starting export"
        );

        let mut report = |progress: ExportProgress| {
            tracing::debug!(percent = progress.percent, step = progress.step, "Export progress");
            on_progress(progress);
        };

        match run(state, sink, &mut report) {
            Ok(artifact) => {
                tracing::info!(artifact = %artifact.name, "Export complete");
                self.status = ExportStatus::Complete {
                    artifact: artifact.name.clone(),
                };
                Ok(artifact)
            }
            Err(error) => {
                tracing::error!("Export failed: {error:#}");
                self.status = ExportStatus::Failed {
                    message: format!("{error:#}"),
                };
                Err(error)
            }
        }
    }
}

fn run(
    state: &WizardState,
    sink: &mut dyn ArtifactSink,
    report: &mut dyn FnMut(ExportProgress),
) -> Result<Artifact> {
    report(ExportProgress::new(0, "Initializing export..."));
    let output = generate_output(state, report)?;

    report(ExportProgress::new(90, "Creating export file..."));
    let format = state.export.format;
    let name = artifact_name(format, &state.project.slug());
    let artifact = match format {
        ExportKind::Json => Artifact::text(name, TokenFormat::Json.render(&state.tokens)?),
        ExportKind::Css => {
            let css: Vec<&str> = output.styles.iter().map(|f| f.content.as_str()).collect();
            Artifact::text(name, css.join("\n\n"))
        }
        ExportKind::Scss => Artifact::text(name, TokenFormat::Scss.render(&state.tokens)?),
        ExportKind::Tailwind => Artifact::text(name, TokenFormat::Tailwind.render(&state.tokens)?),
        ExportKind::StyledTheme => Artifact::text(name, TokenFormat::Theme.render(&state.tokens)?),
        ExportKind::Bundle => Artifact {
            name,
            bytes: build_bundle(state, &output, report)?,
        },
    };

    sink.deliver(&artifact)
        .context(format!("Failed to deliver {}", artifact.name))?;

    report(ExportProgress::new(100, "Export complete!"));
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentConfig;
    use crate::wizard::{reduce, ExportSetting, WizardCommand};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    struct FailingSink;

    impl ArtifactSink for FailingSink {
        fn deliver(&mut self, _artifact: &Artifact) -> Result<()> {
            anyhow::bail!("disk full")
        }
    }

    fn state_with(format: ExportKind) -> WizardState {
        let mut state = WizardState::initial();
        state.project.name = "Acme".to_string();
        state.selected_components.push(ComponentConfig {
            id: "button".to_string(),
            name: "Button".to_string(),
            category: "forms".to_string(),
            variants: vec!["primary".to_string()],
            props: serde_json::Map::new(),
        });
        reduce(&state, WizardCommand::UpdateExport(ExportSetting::Format(format)))
    }

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_json_export_is_exact_token_json() {
        let state = state_with(ExportKind::Json);
        let mut sink = MemorySink::new();
        let artifact = Exporter::new().export(&state, &mut sink, |_| {}).unwrap();

        assert_eq!(artifact.name, "acme-tokens.json");
        assert_eq!(sink.artifacts().len(), 1);
        let expected = serde_json::to_string_pretty(&state.tokens).unwrap();
        assert_eq!(String::from_utf8(artifact.bytes).unwrap(), expected);
    }

    #[test]
    fn test_progress_checkpoints() {
        let mut seen = Vec::new();
        Exporter::new()
            .export(&state_with(ExportKind::Css), &mut MemorySink::new(), |p| {
                seen.push(p.percent);
            })
            .unwrap();
        assert_eq!(seen, [0, 10, 20, 40, 60, 70, 80, 90, 100]);

        let mut seen = Vec::new();
        Exporter::new()
            .export(&state_with(ExportKind::Bundle), &mut MemorySink::new(), |p| {
                seen.push(p.percent);
            })
            .unwrap();
        assert_eq!(seen, [0, 10, 20, 40, 60, 70, 80, 90, 92, 98, 100]);
    }

    #[test]
    fn test_artifact_names() {
        assert_eq!(artifact_name(ExportKind::Css, "acme"), "acme-styles.css");
        assert_eq!(artifact_name(ExportKind::Scss, "acme"), "acme-variables.scss");
        assert_eq!(artifact_name(ExportKind::Tailwind, "acme"), "tailwind.config.js");
        assert_eq!(artifact_name(ExportKind::StyledTheme, "acme"), "theme.js");
        assert_eq!(artifact_name(ExportKind::Bundle, "acme"), "acme-design-system.zip");
    }

    #[test]
    fn test_css_export_joins_stylesheets() {
        let state = state_with(ExportKind::Css);
        let artifact = Exporter::new()
            .export(&state, &mut MemorySink::new(), |_| {})
            .unwrap();
        let css = String::from_utf8(artifact.bytes).unwrap();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("/* CSS Reset */"));
        assert!(css.ends_with("}"));
        assert!(css.contains(".btn-primary"));
    }

    #[test]
    fn test_bundle_layout() {
        let state = state_with(ExportKind::Bundle);
        let artifact = Exporter::new()
            .export(&state, &mut MemorySink::new(), |_| {})
            .unwrap();
        assert_eq!(artifact.name, "acme-design-system.zip");

        let names = entry_names(&artifact.bytes);
        for expected in [
            "README.md",
            "STYLE_GUIDE.html",
            "COMPONENT_DOCS.md",
            "package.json",
            ".babelrc",
            ".github/workflows/ci-cd.yml",
            "styles/variables.css",
            "components/button.jsx",
            "examples/form-examples.html",
            "wireframe.html",
            "tokens/tokens.json",
            "tokens/theme.js",
            "src/styles/components.css",
            "src/components/button.jsx",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }

        let mut archive = ZipArchive::new(Cursor::new(artifact.bytes)).unwrap();
        let mut tokens = String::new();
        archive
            .by_name("tokens/tokens.json")
            .unwrap()
            .read_to_string(&mut tokens)
            .unwrap();
        assert_eq!(tokens, serde_json::to_string_pretty(&state.tokens).unwrap());
    }

    #[test]
    fn test_bundle_respects_include_flags() {
        let state = state_with(ExportKind::Bundle);
        let state = reduce(
            &state,
            WizardCommand::UpdateExport(ExportSetting::IncludeDocumentation(false)),
        );
        let state = reduce(
            &state,
            WizardCommand::UpdateExport(ExportSetting::IncludeExamples(false)),
        );
        let artifact = Exporter::new()
            .export(&state, &mut MemorySink::new(), |_| {})
            .unwrap();

        let names = entry_names(&artifact.bytes);
        assert!(!names.iter().any(|n| n == "README.md"));
        assert!(!names.iter().any(|n| n.starts_with("examples/")));
        assert!(names.iter().any(|n| n == "wireframe.html"));
    }

    #[test]
    fn test_failure_is_recorded_and_state_untouched() {
        let state = state_with(ExportKind::Scss);
        let before = state.clone();
        let mut exporter = Exporter::new();
        assert_eq!(exporter.status(), &ExportStatus::Idle);

        let error = exporter.export(&state, &mut FailingSink, |_| {}).unwrap_err();
        assert!(format!("{error:#}").contains("disk full"));
        match exporter.status() {
            ExportStatus::Failed { message } => assert!(message.contains("disk full")),
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(state, before);

        exporter.export(&state, &mut MemorySink::new(), |_| {}).unwrap();
        assert_eq!(
            exporter.status(),
            &ExportStatus::Complete {
                artifact: "acme-variables.scss".to_string()
            }
        );
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("out"));
        Exporter::new()
            .export(&state_with(ExportKind::Tailwind), &mut sink, |_| {})
            .unwrap();

        let path = dir.path().join("out").join("tailwind.config.js");
        assert_eq!(sink.written(), [path.clone()]);
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("module.exports = "));
    }
}
