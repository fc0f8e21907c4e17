//! UI style presets.

use crate::models::tokens::DesignTokensPatch;
use serde::{Deserialize, Serialize};

/// A named partial token override applied on top of the current tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiStyle {
    /// Stable identifier, e.g. `soft-pastel`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Tokens this preset overrides
    #[serde(default)]
    pub tokens: DesignTokensPatch,
}
