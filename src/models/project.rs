//! Project metadata and target framework.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Framework the generated component boilerplate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFramework {
    /// React function components (`.jsx`)
    #[default]
    React,
    /// Vue single-file components (`.vue`)
    Vue,
    /// Angular standalone components (`.ts`)
    Angular,
    /// Plain HTML snippets (`.html`)
    Vanilla,
}

impl TargetFramework {
    /// All frameworks for listings and validation messages.
    pub const ALL: [Self; 4] = [Self::React, Self::Vue, Self::Angular, Self::Vanilla];

    /// Lowercase identifier, e.g. `react`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Vanilla => "vanilla",
        }
    }

    /// Human-readable name, e.g. `React`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Angular => "Angular",
            Self::Vanilla => "Vanilla JS",
        }
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetFramework {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "angular" => Ok(Self::Angular),
            "vanilla" | "html" => Ok(Self::Vanilla),
            other => anyhow::bail!(
                "Unknown framework '{other}'. Expected one of: react, vue, angular, vanilla"
            ),
        }
    }
}

/// Descriptive metadata for the generated design system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project name, also used to derive file names
    pub name: String,
    /// One-line description
    #[serde(default)]
    pub description: String,
    /// Author or team
    #[serde(default)]
    pub author: String,
    /// Semantic version
    #[serde(default = "default_version")]
    pub version: String,
    /// Component boilerplate framework
    #[serde(default)]
    pub framework: TargetFramework,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            author: String::new(),
            version: default_version(),
            framework: TargetFramework::default(),
        }
    }
}

impl ProjectInfo {
    /// Whether the required descriptive fields are filled in.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.description, &self.author]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// File-name friendly form of the project name.
    ///
    /// Lowercased with whitespace runs collapsed to `-`; falls back to
    /// `design-system` for an empty name.
    pub fn slug(&self) -> String {
        let slug = self
            .name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");

        let slug: String = slug
            .chars()
            .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
            .collect();

        if slug.is_empty() {
            "design-system".to_string()
        } else {
            slug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        let mut info = ProjectInfo {
            name: "Acme  Design System".to_string(),
            ..Default::default()
        };
        assert_eq!(info.slug(), "acme-design-system");

        info.name = "  ".to_string();
        assert_eq!(info.slug(), "design-system");

        info.name = "a/b".to_string();
        assert_eq!(info.slug(), "ab");
    }

    #[test]
    fn test_is_complete() {
        let mut info = ProjectInfo::default();
        assert!(!info.is_complete());

        info.name = "Acme".to_string();
        info.description = "Tokens".to_string();
        assert!(!info.is_complete());

        info.author = "Team".to_string();
        assert!(info.is_complete());
    }

    #[test]
    fn test_framework_parsing() {
        assert_eq!("React".parse::<TargetFramework>().unwrap(), TargetFramework::React);
        assert_eq!("vanilla".parse::<TargetFramework>().unwrap(), TargetFramework::Vanilla);
        assert!("svelte".parse::<TargetFramework>().is_err());
    }

    #[test]
    fn test_default_version() {
        let info: ProjectInfo = toml::from_str("name = \"Acme\"").unwrap();
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.framework, TargetFramework::React);
    }
}
