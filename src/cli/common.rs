//! Shared CLI error type, process exit codes, and project loading.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::services::ProjectService;
use crate::wizard::WizardState;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input: bad hex, unknown id, malformed manifest
    ValidationError = 1,
    /// File system failure
    IoError = 2,
    /// The export pipeline failed
    ExportError = 3,
}

impl ExitCode {
    /// Numeric process status.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad user input
    Validation,
    /// Reading or writing files
    Io,
    /// Export generation or delivery
    Export,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Export pipeline failure.
    pub fn export(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Export,
            message: message.into(),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> CliErrorKind {
        self.kind
    }

    /// Message without the kind.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
            CliErrorKind::Export => ExitCode::ExportError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Loads the user configuration, treating a malformed file as bad input.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Reads a project manifest and replays it into a wizard state.
///
/// A missing file is an I/O error; a malformed manifest or an unknown
/// catalog id is a validation error.
pub fn load_project_state(path: &Path, config: &Config) -> CliResult<WizardState> {
    if !path.exists() {
        return Err(CliError::io(format!(
            "Project file not found: {}",
            path.display()
        )));
    }

    let manifest = ProjectService::load(path).map_err(|e| CliError::validation(format!("{e:#}")))?;
    let catalog =
        Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;

    manifest
        .build_state(&catalog, &config.export.settings())
        .map_err(|e| CliError::validation(format!("Invalid project {}: {e:#}", path.display())))
}
