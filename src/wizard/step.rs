//! Wizard step sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six wizard steps, numbered 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    /// Name, description, author, version, framework
    #[default]
    ProjectInfo,
    /// Pick a style preset
    UiStyle,
    /// Fine-tune tokens
    DesignTokens,
    /// Select page templates
    Pages,
    /// Select components
    Components,
    /// Wireframe preview and export
    PreviewExport,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [Self; 6] = [
        Self::ProjectInfo,
        Self::UiStyle,
        Self::DesignTokens,
        Self::Pages,
        Self::Components,
        Self::PreviewExport,
    ];

    /// Gets the next step in the wizard
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::ProjectInfo => Some(Self::UiStyle),
            Self::UiStyle => Some(Self::DesignTokens),
            Self::DesignTokens => Some(Self::Pages),
            Self::Pages => Some(Self::Components),
            Self::Components => Some(Self::PreviewExport),
            Self::PreviewExport => None,
        }
    }

    /// Gets the previous step in the wizard
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::ProjectInfo => None,
            Self::UiStyle => Some(Self::ProjectInfo),
            Self::DesignTokens => Some(Self::UiStyle),
            Self::Pages => Some(Self::DesignTokens),
            Self::Components => Some(Self::Pages),
            Self::PreviewExport => Some(Self::Components),
        }
    }

    /// Gets the step title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ProjectInfo => "Project Info",
            Self::UiStyle => "UI Style",
            Self::DesignTokens => "Design Tokens",
            Self::Pages => "Page Templates",
            Self::Components => "Components",
            Self::PreviewExport => "Preview & Export",
        }
    }

    /// 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::ProjectInfo => 1,
            Self::UiStyle => 2,
            Self::DesignTokens => 3,
            Self::Pages => 4,
            Self::Components => 5,
            Self::PreviewExport => 6,
        }
    }

    /// Step for a 1-based number, `None` outside `1..=6`.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("wizard step must be 1-6, got {value}"))
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
