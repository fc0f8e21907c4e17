//! Project manifest file I/O and replay.
//!
//! A manifest is a TOML description of a design system: project info, the
//! chosen style, pages and components by id, color scales to generate, and
//! token overrides. [`ProjectManifest::build_state`] replays it into a
//! [`WizardState`] through wizard commands.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::models::{ColorRole, DesignTokensPatch, ProjectInfo, RgbColor, TargetFramework};
use crate::wizard::{
    ExportSettings, WireframeConfig, WireframeSetting, Wizard, WizardCommand, WizardState,
};

/// On-disk project description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectManifest {
    /// Style preset id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Page template ids, in selection order
    #[serde(default)]
    pub pages: Vec<String>,
    /// Component ids, in selection order
    #[serde(default)]
    pub components: Vec<String>,
    /// Project metadata
    pub project: ProjectInfo,
    /// Color role key → base color; each becomes a generated scale
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<String, String>,
    /// Token overrides applied after the style and scales
    #[serde(default, skip_serializing_if = "is_empty_patch")]
    pub tokens: DesignTokensPatch,
    /// Wireframe preview options
    #[serde(default)]
    pub wireframe: WireframeConfig,
    /// Export options; configured defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportSettings>,
}

fn is_empty_patch(patch: &DesignTokensPatch) -> bool {
    *patch == DesignTokensPatch::default()
}

impl ProjectManifest {
    /// A starter manifest with a style, two pages and a few components.
    pub fn starter(name: &str, framework: TargetFramework) -> Self {
        Self {
            style: Some("modern-clean".to_string()),
            pages: vec!["hero-landing".to_string(), "login-page".to_string()],
            components: vec![
                "navbar".to_string(),
                "hero".to_string(),
                "input-field".to_string(),
            ],
            project: ProjectInfo {
                name: name.to_string(),
                description: format!("{name} design system"),
                framework,
                ..ProjectInfo::default()
            },
            scales: BTreeMap::new(),
            tokens: DesignTokensPatch::default(),
            wireframe: WireframeConfig::default(),
            export: None,
        }
    }

    /// Parses a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse project manifest")
    }

    /// Serializes the manifest to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize project manifest")
    }

    /// Translates the manifest into wizard commands.
    ///
    /// Order: project info, style, scales, tokens, pages, components,
    /// wireframe, export. Unknown ids and malformed scale colors are errors.
    pub fn commands(
        &self,
        catalog: &Catalog,
        default_export: &ExportSettings,
    ) -> Result<Vec<WizardCommand>> {
        let mut commands = vec![WizardCommand::SetProjectInfo(self.project.clone())];

        if let Some(id) = &self.style {
            let style = catalog.style(id).with_context(|| {
                let known: Vec<_> = catalog.styles().iter().map(|s| s.id.as_str()).collect();
                format!("Unknown style '{id}'. Available styles: {}", known.join(", "))
            })?;
            commands.push(WizardCommand::ApplyStyle(style.clone()));
        }

        for (key, base) in &self.scales {
            let Some(role) = ColorRole::from_key(key) else {
                let known: Vec<_> = ColorRole::ALL.iter().map(|r| r.key()).collect();
                bail!("Unknown color role '{key}'. Expected one of: {}", known.join(", "));
            };
            let color = RgbColor::from_hex(base)
                .with_context(|| format!("Invalid base color for scale '{key}'"))?;
            commands.push(WizardCommand::GenerateScale {
                role,
                base: color.to_hex(),
            });
        }

        if !is_empty_patch(&self.tokens) {
            commands.push(WizardCommand::PatchTokens(self.tokens.clone()));
        }

        for id in &self.pages {
            let page = catalog
                .page(id)
                .with_context(|| format!("Unknown page template '{id}'"))?;
            commands.push(WizardCommand::AddPage(page.clone()));
        }

        for id in &self.components {
            let component = catalog
                .component(id)
                .with_context(|| format!("Unknown component '{id}'"))?;
            commands.push(WizardCommand::AddComponent(component.clone()));
        }

        let wireframe = &self.wireframe;
        commands.extend(
            [
                WireframeSetting::Viewport(wireframe.viewport),
                WireframeSetting::ShowGrid(wireframe.show_grid),
                WireframeSetting::ShowLabels(wireframe.show_labels),
                WireframeSetting::Interactive(wireframe.interactive),
            ]
            .map(WizardCommand::UpdateWireframe),
        );

        let export = self.export.clone().unwrap_or_else(|| default_export.clone());
        commands.push(WizardCommand::SetExportSettings(export));

        Ok(commands)
    }

    /// Replays the manifest into a fresh wizard and returns its state.
    pub fn build_state(
        &self,
        catalog: &Catalog,
        default_export: &ExportSettings,
    ) -> Result<WizardState> {
        let commands = self.commands(catalog, default_export)?;
        tracing::debug!(commands = commands.len(), "Replaying project manifest");

        let mut wizard = Wizard::new();
        wizard.dispatch_all(commands);
        Ok(wizard.into_state())
    }
}

/// Service for project manifest file operations.
pub struct ProjectService;

impl ProjectService {
    /// Loads a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<ProjectManifest> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read project file: {}", path.display()))?;
        let manifest = ProjectManifest::parse(&content)
            .with_context(|| format!("Failed to load project from {}", path.display()))?;

        tracing::info!(path = %path.display(), project = %manifest.project.name, "Loaded project");
        Ok(manifest)
    }

    /// Saves a manifest using a temp file + rename.
    pub fn save(manifest: &ProjectManifest, path: &Path) -> Result<()> {
        let content = manifest.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create directory: {}",
                parent.display()
            ))?;
        }

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .context(format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp file to: {}", path.display()))?;

        tracing::info!(path = %path.display(), "Saved project");
        Ok(())
    }
}
