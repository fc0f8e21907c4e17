//! Design system wizard: state, commands, and the container that owns them.
//!
//! All state changes go through [`Wizard::dispatch`], which replaces the
//! current [`WizardState`] with the result of [`reduce`].

pub mod command;
pub mod settings;
pub mod state;
pub mod step;

pub use command::{reduce, ExportSetting, ProjectField, WireframeSetting, WizardCommand};
pub use settings::{ExportKind, ExportSettings, Viewport, WireframeConfig};
pub use state::WizardState;
pub use step::WizardStep;

/// Owns the current wizard state.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    /// Starts a session from the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Applies a command, replacing the current state.
    pub fn dispatch(&mut self, command: WizardCommand) -> &WizardState {
        self.state = reduce(&self.state, command);
        &self.state
    }

    /// Applies commands in order.
    pub fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = WizardCommand>,
    ) -> &WizardState {
        for command in commands {
            self.state = reduce(&self.state, command);
        }
        &self.state
    }

    /// Consumes the wizard, returning the final state.
    pub fn into_state(self) -> WizardState {
        self.state
    }
}
