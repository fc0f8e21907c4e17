//! Typed wizard commands and the reducer that applies them.

use crate::models::{
    generate_color_scale, merge_tokens, ColorRole, ComponentConfig, DesignTokensPatch,
    PageTemplate, ProjectInfo, TargetFramework, UiStyle,
};
use crate::wizard::settings::{ExportKind, ExportSettings, Viewport};
use crate::wizard::state::WizardState;
use crate::wizard::step::WizardStep;

/// A single project-info field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectField {
    /// Project name
    Name(String),
    /// Description
    Description(String),
    /// Author
    Author(String),
    /// Version string
    Version(String),
    /// Target framework
    Framework(TargetFramework),
}

/// A single wireframe option update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireframeSetting {
    /// Preview viewport
    Viewport(Viewport),
    /// Grid overlay
    ShowGrid(bool),
    /// Component labels
    ShowLabels(bool),
    /// Hover affordances
    Interactive(bool),
}

/// A single export option update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSetting {
    /// Artifact kind
    Format(ExportKind),
    /// Bundle documentation
    IncludeDocumentation(bool),
    /// Bundle HTML examples
    IncludeExamples(bool),
}

/// Every state transition the wizard supports.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardCommand {
    /// Replace all project info
    SetProjectInfo(ProjectInfo),
    /// Update one project-info field
    UpdateProject(ProjectField),
    /// Record a style preset and deep-merge its tokens into the current set
    ApplyStyle(UiStyle),
    /// Deep-merge a token patch into the current set
    PatchTokens(DesignTokensPatch),
    /// Replace one color role with a scale generated from `base`
    GenerateScale {
        /// Role to replace
        role: ColorRole,
        /// Base color, becomes shade 500 verbatim
        base: String,
    },
    /// Select a page template (ignored if its id is already selected)
    AddPage(PageTemplate),
    /// Deselect a page template by id
    RemovePage(String),
    /// Select a component (ignored if its id is already selected)
    AddComponent(ComponentConfig),
    /// Deselect a component by id
    RemoveComponent(String),
    /// Update one wireframe option
    UpdateWireframe(WireframeSetting),
    /// Replace all export settings
    SetExportSettings(ExportSettings),
    /// Update one export option
    UpdateExport(ExportSetting),
    /// Jump to a step
    GoToStep(WizardStep),
    /// Advance when the current step is complete
    NextStep,
    /// Go back one step
    PreviousStep,
    /// Return to the initial state
    Reset,
}

/// Computes the state that follows `state` under `command`.
///
/// Pure: `state` is never modified.
pub fn reduce(state: &WizardState, command: WizardCommand) -> WizardState {
    let mut next = state.clone();

    match command {
        WizardCommand::SetProjectInfo(project) => next.project = project,
        WizardCommand::UpdateProject(field) => match field {
            ProjectField::Name(value) => next.project.name = value,
            ProjectField::Description(value) => next.project.description = value,
            ProjectField::Author(value) => next.project.author = value,
            ProjectField::Version(value) => next.project.version = value,
            ProjectField::Framework(value) => next.project.framework = value,
        },
        WizardCommand::ApplyStyle(style) => {
            next.tokens = merge_tokens(&state.tokens, Some(&style.tokens));
            next.ui_style = Some(style);
        }
        WizardCommand::PatchTokens(patch) => {
            next.tokens = merge_tokens(&state.tokens, Some(&patch));
        }
        WizardCommand::GenerateScale { role, base } => {
            *next.tokens.colors.scale_mut(role) = generate_color_scale(&base);
        }
        WizardCommand::AddPage(page) => {
            if !next.selected_pages.iter().any(|p| p.id == page.id) {
                next.selected_pages.push(page);
            }
        }
        WizardCommand::RemovePage(id) => next.selected_pages.retain(|p| p.id != id),
        WizardCommand::AddComponent(component) => {
            if !next.has_component(&component.id) {
                next.selected_components.push(component);
            }
        }
        WizardCommand::RemoveComponent(id) => {
            next.selected_components.retain(|c| c.id != id);
        }
        WizardCommand::UpdateWireframe(setting) => match setting {
            WireframeSetting::Viewport(value) => next.wireframe.viewport = value,
            WireframeSetting::ShowGrid(value) => next.wireframe.show_grid = value,
            WireframeSetting::ShowLabels(value) => next.wireframe.show_labels = value,
            WireframeSetting::Interactive(value) => next.wireframe.interactive = value,
        },
        WizardCommand::SetExportSettings(settings) => next.export = settings,
        WizardCommand::UpdateExport(setting) => match setting {
            ExportSetting::Format(value) => next.export.format = value,
            ExportSetting::IncludeDocumentation(value) => {
                next.export.include_documentation = value;
            }
            ExportSetting::IncludeExamples(value) => next.export.include_examples = value,
        },
        WizardCommand::GoToStep(step) => next.current_step = step,
        WizardCommand::NextStep => {
            if state.is_step_complete(state.current_step) {
                if let Some(step) = state.current_step.next() {
                    next.current_step = step;
                }
            } else {
                tracing::debug!(step = %state.current_step, "Step incomplete, not advancing");
            }
        }
        WizardCommand::PreviousStep => {
            if let Some(step) = state.current_step.previous() {
                next.current_step = step;
            }
        }
        WizardCommand::Reset => next = WizardState::initial(),
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::DesignTokens;

    fn complete_project() -> ProjectInfo {
        ProjectInfo {
            name: "Acme".to_string(),
            description: "Acme tokens".to_string(),
            author: "Design Team".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let state = WizardState::initial();
        let next = reduce(
            &state,
            WizardCommand::UpdateProject(ProjectField::Name("Acme".to_string())),
        );
        assert_eq!(state.project.name, "");
        assert_eq!(next.project.name, "Acme");
    }

    #[test]
    fn test_apply_style_merges_into_current_tokens() {
        let catalog = Catalog::load().unwrap();
        let state = reduce(
            &WizardState::initial(),
            WizardCommand::GenerateScale {
                role: ColorRole::Success,
                base: "#00aa00".to_string(),
            },
        );
        let styled = reduce(
            &state,
            WizardCommand::ApplyStyle(catalog.style("dark-mode").unwrap().clone()),
        );

        assert_eq!(styled.ui_style.as_ref().unwrap().id, "dark-mode");
        assert_eq!(styled.tokens.colors.primary.shade_500, "#0ea5e9");
        // Roles the preset does not mention keep the user's edits.
        assert_eq!(styled.tokens.colors.success.shade_500, "#00aa00");
    }

    #[test]
    fn test_primary_only_preset_leaves_everything_else() {
        let catalog = Catalog::load().unwrap();
        let style = catalog.style("modern-clean").unwrap().clone();
        let state = reduce(&WizardState::initial(), WizardCommand::ApplyStyle(style));
        let base = DesignTokens::default();

        assert_eq!(state.tokens.colors.secondary, base.colors.secondary);
        assert_eq!(state.tokens.typography, base.typography);
        assert_eq!(state.tokens.spacing, base.spacing);
        assert_eq!(state.tokens.shadows, base.shadows);
        assert_eq!(state.tokens.transitions, base.transitions);
    }

    #[test]
    fn test_pages_and_components_dedup_by_id() {
        let catalog = Catalog::load().unwrap();
        let page = catalog.page("login-page").unwrap().clone();
        let component = catalog.component("navbar").unwrap().clone();

        let mut state = WizardState::initial();
        for _ in 0..2 {
            state = reduce(&state, WizardCommand::AddPage(page.clone()));
            state = reduce(&state, WizardCommand::AddComponent(component.clone()));
        }
        assert_eq!(state.selected_pages.len(), 1);
        assert_eq!(state.selected_components.len(), 1);

        state = reduce(&state, WizardCommand::RemovePage("login-page".to_string()));
        state = reduce(&state, WizardCommand::RemoveComponent("navbar".to_string()));
        assert!(state.selected_pages.is_empty());
        assert!(state.selected_components.is_empty());
    }

    #[test]
    fn test_selection_order_is_kept() {
        let catalog = Catalog::load().unwrap();
        let mut state = WizardState::initial();
        for id in ["tabs", "hero", "modal"] {
            let component = catalog.component(id).unwrap().clone();
            state = reduce(&state, WizardCommand::AddComponent(component));
        }
        let ids: Vec<_> = state.selected_components.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["tabs", "hero", "modal"]);
    }

    #[test]
    fn test_next_step_requires_complete_step() {
        let state = reduce(&WizardState::initial(), WizardCommand::NextStep);
        assert_eq!(state.current_step, WizardStep::ProjectInfo);

        let state = reduce(&state, WizardCommand::SetProjectInfo(complete_project()));
        let state = reduce(&state, WizardCommand::NextStep);
        assert_eq!(state.current_step, WizardStep::UiStyle);

        let state = reduce(&state, WizardCommand::PreviousStep);
        assert_eq!(state.current_step, WizardStep::ProjectInfo);
        let state = reduce(&state, WizardCommand::PreviousStep);
        assert_eq!(state.current_step, WizardStep::ProjectInfo);
    }

    #[test]
    fn test_partial_updates() {
        let state = reduce(
            &WizardState::initial(),
            WizardCommand::UpdateWireframe(WireframeSetting::ShowGrid(false)),
        );
        assert!(!state.wireframe.show_grid);
        assert!(state.wireframe.show_labels);

        let state = reduce(
            &state,
            WizardCommand::UpdateExport(ExportSetting::Format(ExportKind::Bundle)),
        );
        assert_eq!(state.export.format, ExportKind::Bundle);
        assert!(state.export.include_documentation);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let state = reduce(
            &WizardState::initial(),
            WizardCommand::SetProjectInfo(complete_project()),
        );
        let state = reduce(&state, WizardCommand::GoToStep(WizardStep::Components));
        let state = reduce(&state, WizardCommand::Reset);
        assert_eq!(state, WizardState::initial());
    }
}
