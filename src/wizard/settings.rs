//! Wireframe preview and export settings.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preview viewport width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// 375px wide
    Mobile,
    /// 768px wide
    Tablet,
    /// Full width
    #[default]
    Desktop,
}

impl Viewport {
    /// All viewports in button order.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Lowercase identifier used as a CSS class and data attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }
}

/// Wireframe preview options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeConfig {
    /// Preview viewport
    pub viewport: Viewport,
    /// Overlay a grid on page blocks
    pub show_grid: bool,
    /// Show component labels
    pub show_labels: bool,
    /// Enable hover affordances
    pub interactive: bool,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::Desktop,
            show_grid: true,
            show_labels: true,
            interactive: true,
        }
    }
}

/// Export artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    /// Tokens as JSON
    #[default]
    Json,
    /// All stylesheets concatenated
    Css,
    /// SCSS variables
    Scss,
    /// Tailwind config module
    Tailwind,
    /// Styled-components theme object
    #[serde(alias = "styled-components", alias = "theme")]
    StyledTheme,
    /// Zip archive with everything
    #[serde(alias = "zip")]
    Bundle,
}

impl ExportKind {
    /// All kinds for listings and validation messages.
    pub const ALL: [Self; 6] = [
        Self::Json,
        Self::Css,
        Self::Scss,
        Self::Tailwind,
        Self::StyledTheme,
        Self::Bundle,
    ];

    /// Identifier accepted on the command line and in manifests.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
            Self::StyledTheme => "styled-theme",
            Self::Bundle => "bundle",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "tailwind" => Ok(Self::Tailwind),
            "styled-theme" | "styled-components" | "theme" => Ok(Self::StyledTheme),
            "bundle" | "zip" => Ok(Self::Bundle),
            other => anyhow::bail!(
                "Unknown export format '{other}'. Expected one of: json, css, scss, tailwind, styled-theme, bundle"
            ),
        }
    }
}

/// What to export and which optional parts to include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Artifact kind
    pub format: ExportKind,
    /// Include README, style guide and component docs in bundles
    pub include_documentation: bool,
    /// Include HTML example pages in bundles
    pub include_examples: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportKind::Json,
            include_documentation: true,
            include_examples: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_parsing() {
        assert_eq!("JSON".parse::<ExportKind>().unwrap(), ExportKind::Json);
        assert_eq!(
            "styled-components".parse::<ExportKind>().unwrap(),
            ExportKind::StyledTheme
        );
        assert_eq!("zip".parse::<ExportKind>().unwrap(), ExportKind::Bundle);
        assert!("pdf".parse::<ExportKind>().is_err());
    }

    #[test]
    fn test_export_kind_display_roundtrip() {
        for kind in ExportKind::ALL {
            assert_eq!(kind.to_string().parse::<ExportKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_wireframe_partial_toml() {
        let config: WireframeConfig = toml::from_str("viewport = \"mobile\"").unwrap();
        assert_eq!(config.viewport, Viewport::Mobile);
        assert!(config.show_grid);
    }
}
