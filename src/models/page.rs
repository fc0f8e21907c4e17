//! Page templates and their layout identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad grouping for page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    /// Marketing and landing pages
    Landing,
    /// Data-heavy application shells
    Dashboard,
    /// Data entry pages
    Form,
    /// Collections and indexes
    List,
    /// Single-item views
    Detail,
    /// Sign in, sign up and recovery
    Auth,
}

impl PageCategory {
    /// Lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dashboard => "dashboard",
            Self::Form => "form",
            Self::List => "list",
            Self::Detail => "detail",
            Self::Auth => "auth",
        }
    }
}

impl fmt::Display for PageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural arrangement used by the wireframe renderer.
///
/// Unrecognised identifiers are preserved in `Other` and rendered with the
/// single-column rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageLayout {
    /// Stacked sections
    SingleColumn,
    /// Header above a sidebar/content split
    SidebarLayout,
    /// Main column with a side column
    TwoColumn,
    /// Narrow centered form
    CenteredForm,
    /// Sign-in style centered card
    CenteredAuth,
    /// Any other layout identifier, kept verbatim
    Other(String),
}

impl PageLayout {
    /// Layout identifier as written in catalogs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SingleColumn => "single-column",
            Self::SidebarLayout => "sidebar-layout",
            Self::TwoColumn => "two-column",
            Self::CenteredForm => "centered-form",
            Self::CenteredAuth => "centered-auth",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for PageLayout {
    fn from(value: String) -> Self {
        match value.as_str() {
            "single-column" => Self::SingleColumn,
            "sidebar-layout" => Self::SidebarLayout,
            "two-column" => Self::TwoColumn,
            "centered-form" => Self::CenteredForm,
            "centered-auth" => Self::CenteredAuth,
            _ => Self::Other(value),
        }
    }
}

impl From<PageLayout> for String {
    fn from(value: PageLayout) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page template: an ordered list of component names plus a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    /// Stable identifier, e.g. `saas-landing`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Template category
    pub category: PageCategory,
    /// Component names in render order
    pub components: Vec<String>,
    /// Layout identifier
    pub layout: PageLayout,
}
