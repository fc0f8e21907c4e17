//! The wizard's aggregate state record.

use crate::models::{ComponentConfig, DesignTokens, PageTemplate, ProjectInfo, UiStyle};
use crate::wizard::settings::{ExportSettings, WireframeConfig};
use crate::wizard::step::WizardStep;
use serde::Serialize;

/// Everything the user has chosen so far.
///
/// `tokens` is always the complete, merged token record; applying a style
/// or a patch replaces it with a merged copy.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WizardState {
    /// Project metadata
    pub project: ProjectInfo,
    /// Most recently applied style preset
    pub ui_style: Option<UiStyle>,
    /// Live token set
    pub tokens: DesignTokens,
    /// Selected page templates, in selection order
    pub selected_pages: Vec<PageTemplate>,
    /// Selected components, in selection order
    pub selected_components: Vec<ComponentConfig>,
    /// Wireframe preview options
    pub wireframe: WireframeConfig,
    /// Export options
    pub export: ExportSettings,
    /// Current wizard step
    pub current_step: WizardStep,
}

impl WizardState {
    /// The initial record a new session starts from.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Whether the given step has what it needs to move on.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ProjectInfo => self.project.is_complete(),
            WizardStep::UiStyle => self.ui_style.is_some(),
            WizardStep::DesignTokens => true,
            WizardStep::Pages => !self.selected_pages.is_empty(),
            WizardStep::Components => !self.selected_components.is_empty(),
            WizardStep::PreviewExport => true,
        }
    }

    /// Name of the applied style, or `Custom`.
    pub fn style_name(&self) -> &str {
        self.ui_style
            .as_ref()
            .map_or("Custom", |style| style.name.as_str())
    }

    /// Whether a component with `id` is selected.
    pub fn has_component(&self, id: &str) -> bool {
        self.selected_components
            .iter()
            .any(|component| component.id == id)
    }
}
