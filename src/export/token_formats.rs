//! Token format emitters: CSS variables, SCSS variables, Tailwind config,
//! styled theme object, and JSON.
//!
//! All emitters are pure functions of a [`DesignTokens`] record and produce
//! byte-identical output for equal input.

use crate::models::{
    BorderRadius, ColorRole, Colors, DesignTokens, FontFamily, FontSize, FontWeight, LineHeight,
    Shadows, Spacing, Transitions,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::{Display, Write};

/// The five single-file token formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenFormat {
    /// `:root` custom properties
    Css,
    /// `$variable` declarations
    Scss,
    /// `tailwind.config.js` module
    Tailwind,
    /// `export const theme` object
    Theme,
    /// Pretty-printed JSON
    Json,
}

impl TokenFormat {
    /// All formats in bundle order.
    pub const ALL: [Self; 5] = [Self::Json, Self::Css, Self::Scss, Self::Tailwind, Self::Theme];

    /// File name used inside the bundle's `tokens/` directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Css => "variables.css",
            Self::Scss => "variables.scss",
            Self::Tailwind => "tailwind.config.js",
            Self::Theme => "theme.js",
            Self::Json => "tokens.json",
        }
    }

    /// Parses a format name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "css" => Some(Self::Css),
            "scss" => Some(Self::Scss),
            "tailwind" => Some(Self::Tailwind),
            "theme" | "styled-theme" | "styled-components" => Some(Self::Theme),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Renders `tokens` in this format.
    pub fn render(self, tokens: &DesignTokens) -> Result<String> {
        match self {
            Self::Css => Ok(css_variables(tokens)),
            Self::Scss => Ok(scss_variables(tokens)),
            Self::Tailwind => tailwind_config(tokens),
            Self::Theme => theme_object(tokens),
            Self::Json => tokens_json(tokens),
        }
    }
}

/// Visits every token leaf in emission order as `(group, name, value)`.
///
/// `group` is one of `color`, `font`, `text`, `font-weight`, `leading`,
/// `space`, `radius`, `shadow`, `transition`. Color names are `{role}-{shade}`.
fn for_each_leaf(tokens: &DesignTokens, mut visit: impl FnMut(&str, &str, &dyn Display)) {
    for (role, scale) in tokens.colors.scales() {
        for (shade, value) in scale.entries() {
            visit("color", &format!("{role}-{shade}"), value);
        }
    }

    let typography = &tokens.typography;
    for (key, value) in typography.font_family.entries() {
        visit("font", key, value);
    }
    for (key, value) in typography.font_size.entries() {
        visit("text", key, value);
    }
    for (key, value) in typography.font_weight.entries() {
        visit("font-weight", key, value);
    }
    for (key, value) in typography.line_height.entries() {
        visit("leading", key, value);
    }

    for (key, value) in tokens.spacing.entries() {
        visit("space", key, value);
    }
    for (key, value) in tokens.border_radius.entries() {
        visit("radius", key, value);
    }
    for (key, value) in tokens.shadows.entries() {
        visit("shadow", key, value);
    }
    for (key, value) in tokens.transitions.entries() {
        visit("transition", key, value);
    }
}

/// Emits a `:root { ... }` block of CSS custom properties.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn css_variables(tokens: &DesignTokens) -> String {
    let mut lines = vec![":root {".to_string()];
    for_each_leaf(tokens, |group, name, value| {
        lines.push(format!("  --{group}-{name}: {value};"));
    });
    lines.push("}".to_string());
    lines.join("\n")
}

/// Comment header for the SCSS group a leaf belongs to.
fn scss_header(group: &str, name: &str) -> String {
    match group {
        "color" => {
            let role = name.split('-').next().unwrap_or(name);
            let label = ColorRole::from_key(role).map_or(role, |r| r.label());
            format!("{label} colors")
        }
        "font" => "Font families".to_string(),
        "text" => "Font sizes".to_string(),
        "font-weight" => "Font weights".to_string(),
        "leading" => "Line heights".to_string(),
        "space" => "Spacing".to_string(),
        "radius" => "Border radius".to_string(),
        "shadow" => "Shadows".to_string(),
        _ => "Transitions".to_string(),
    }
}

/// Emits SCSS `$variable: value;` declarations grouped under comments.
///
/// Groups are separated by one blank line; there is no trailing newline.
pub fn scss_variables(tokens: &DesignTokens) -> String {
    let mut out = String::new();
    let mut current = String::new();

    for_each_leaf(tokens, |group, name, value| {
        let header = scss_header(group, name);
        if header != current {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "// {header}");
            current = header;
        }
        let _ = writeln!(out, "${group}-{name}: {value};");
    });

    out.truncate(out.trim_end().len());
    out
}

#[derive(Serialize)]
struct TailwindConfig<'a> {
    theme: TailwindTheme<'a>,
}

#[derive(Serialize)]
struct TailwindTheme<'a> {
    extend: TailwindExtend<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TailwindExtend<'a> {
    colors: &'a Colors,
    font_family: &'a FontFamily,
    font_size: &'a FontSize,
    font_weight: &'a FontWeight,
    line_height: &'a LineHeight,
    spacing: &'a Spacing,
    border_radius: &'a BorderRadius,
    box_shadow: &'a Shadows,
    transition_duration: TransitionDuration,
}

#[derive(Serialize)]
struct TransitionDuration {
    fast: &'static str,
    base: &'static str,
    slow: &'static str,
}

/// Emits a `tailwind.config.js` module extending the default theme.
pub fn tailwind_config(tokens: &DesignTokens) -> Result<String> {
    let typography = &tokens.typography;
    let config = TailwindConfig {
        theme: TailwindTheme {
            extend: TailwindExtend {
                colors: &tokens.colors,
                font_family: &typography.font_family,
                font_size: &typography.font_size,
                font_weight: &typography.font_weight,
                line_height: &typography.line_height,
                spacing: &tokens.spacing,
                border_radius: &tokens.border_radius,
                box_shadow: &tokens.shadows,
                transition_duration: TransitionDuration {
                    fast: "150ms",
                    base: "250ms",
                    slow: "350ms",
                },
            },
        },
    };

    let json =
        serde_json::to_string_pretty(&config).context("Failed to serialize Tailwind config")?;
    Ok(format!("module.exports = {json}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeObject<'a> {
    colors: &'a Colors,
    fonts: &'a FontFamily,
    font_sizes: &'a FontSize,
    font_weights: &'a FontWeight,
    line_heights: &'a LineHeight,
    space: &'a Spacing,
    radii: &'a BorderRadius,
    shadows: &'a Shadows,
    transitions: &'a Transitions,
}

/// Emits an `export const theme = {...};` module for CSS-in-JS libraries.
pub fn theme_object(tokens: &DesignTokens) -> Result<String> {
    let typography = &tokens.typography;
    let theme = ThemeObject {
        colors: &tokens.colors,
        fonts: &typography.font_family,
        font_sizes: &typography.font_size,
        font_weights: &typography.font_weight,
        line_heights: &typography.line_height,
        space: &tokens.spacing,
        radii: &tokens.border_radius,
        shadows: &tokens.shadows,
        transitions: &tokens.transitions,
    };

    let json = serde_json::to_string_pretty(&theme).context("Failed to serialize theme object")?;
    Ok(format!("export const theme = {json};"))
}

/// Serializes tokens as JSON with two-space indentation.
pub fn tokens_json(tokens: &DesignTokens) -> Result<String> {
    serde_json::to_string_pretty(tokens).context("Failed to serialize design tokens")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{merge_tokens, DesignTokensPatch};

    #[test]
    fn test_css_structure() {
        let css = css_variables(&DesignTokens::default());
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines.first(), Some(&":root {"));
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines[1], "  --color-primary-50: #eff6ff;");
        assert!(css.contains("  --font-sans: system-ui"));
        assert!(css.contains("  --text-2xl: 1.5rem;"));
        assert!(css.contains("  --font-weight-bold: 700;"));
        assert!(css.contains("  --leading-tight: 1.25;"));
        assert!(css.contains("  --space-md: 1rem;"));
        assert!(css.contains("  --radius-full: 9999px;"));
        assert!(css.contains("  --shadow-none: none;"));
        assert_eq!(lines[lines.len() - 2], "  --transition-slow: 350ms ease;");
        assert!(!css.ends_with('\n'));
    }

    #[test]
    fn test_css_declaration_count() {
        let css = css_variables(&DesignTokens::default());
        // 70 colors + 3 + 9 + 5 + 3 typography + 8 + 6 + 6 + 3
        assert_eq!(css.lines().count(), 2 + 70 + 20 + 8 + 6 + 6 + 3);
    }

    #[test]
    fn test_css_group_order() {
        let css = css_variables(&DesignTokens::default());
        let position = |needle: &str| css.find(needle).unwrap();
        assert!(position("--color-info-900") < position("--font-sans"));
        assert!(position("--leading-relaxed") < position("--space-xs"));
        assert!(position("--space-4xl") < position("--radius-none"));
        assert!(position("--radius-full") < position("--shadow-none"));
        assert!(position("--shadow-2xl") < position("--transition-fast"));
    }

    #[test]
    fn test_scss_groups() {
        let scss = scss_variables(&DesignTokens::default());
        assert!(scss.starts_with("// Primary colors\n$color-primary-50: #eff6ff;"));
        assert!(scss.contains("\n\n// Info colors\n"));
        assert!(scss.contains("\n\n// Font weights\n$font-weight-light: 300;"));
        assert!(scss.contains("\n\n// Line heights\n$leading-tight: 1.25;"));
        assert!(scss.contains("\n\n// Border radius\n"));
        assert!(scss.ends_with("$transition-slow: 350ms ease;"));
        assert!(!scss.contains("\n\n\n"));
    }

    #[test]
    fn test_scss_header_for_owned_leaf_names() {
        let name = format!("{}-{}", "success", 500);
        assert_eq!(scss_header("color", &name), "Success colors");

        let unknown = String::from("brand-500");
        assert_eq!(scss_header("color", &unknown), "brand colors");
        assert_eq!(scss_header("space", "md"), "Spacing");
    }

    #[test]
    fn test_tailwind_config_shape() {
        let config = tailwind_config(&DesignTokens::default()).unwrap();
        let json = config.strip_prefix("module.exports = ").unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let extend = &value["theme"]["extend"];

        assert_eq!(extend["colors"]["primary"]["500"], "#3b82f6");
        assert_eq!(extend["boxShadow"]["none"], "none");
        assert_eq!(extend["transitionDuration"]["base"], "250ms");
        assert_eq!(extend["fontWeight"]["bold"], 700);
        assert!(config.contains("\n    \"extend\": {"));
    }

    #[test]
    fn test_theme_object_shape() {
        let theme = theme_object(&DesignTokens::default()).unwrap();
        assert!(theme.starts_with("export const theme = {"));
        assert!(theme.ends_with("};"));

        let json = theme
            .strip_prefix("export const theme = ")
            .and_then(|s| s.strip_suffix(';'))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        for key in [
            "colors",
            "fonts",
            "fontSizes",
            "fontWeights",
            "lineHeights",
            "space",
            "radii",
            "shadows",
            "transitions",
        ] {
            assert!(value.get(key).is_some(), "theme missing {key}");
        }
        assert_eq!(value["space"]["md"], "1rem");
    }

    #[test]
    fn test_json_roundtrip() {
        let patch: DesignTokensPatch = serde_json::from_str(
            r##"{"typography": {"lineHeight": {"tight": 1.1}}, "colors": {"error": {"500": "#ff0000"}}}"##,
        )
        .unwrap();
        let tokens = merge_tokens(&DesignTokens::default(), Some(&patch));

        let json = tokens_json(&tokens).unwrap();
        let parsed: DesignTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tokens);
        assert!(json.contains("\n  \"colors\": {"));
    }

    #[test]
    fn test_emitters_are_deterministic() {
        let tokens = DesignTokens::default();
        for format in TokenFormat::ALL {
            assert_eq!(
                format.render(&tokens).unwrap(),
                format.render(&tokens.clone()).unwrap(),
                "{format:?} output differs between equal inputs"
            );
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(TokenFormat::from_name("CSS"), Some(TokenFormat::Css));
        assert_eq!(TokenFormat::from_name("styled-theme"), Some(TokenFormat::Theme));
        assert_eq!(TokenFormat::from_name("less"), None);
        assert_eq!(TokenFormat::Json.file_name(), "tokens.json");
    }
}
