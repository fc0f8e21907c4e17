//! Data models for design tokens, catalog entries, and project metadata.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of the wizard, the generators, and the CLI.

pub mod base_tokens;
pub mod color_scale;
pub mod component;
pub mod merge;
pub mod page;
pub mod project;
pub mod rgb;
pub mod style;
pub mod tokens;

// Re-export all model types
pub use color_scale::{adjust_lightness, generate_color_scale, SCALE_SCHEDULE};
pub use component::ComponentConfig;
pub use merge::{deep_merge_json, merge_tokens, Merge};
pub use page::{PageCategory, PageLayout, PageTemplate};
pub use project::{ProjectInfo, TargetFramework};
pub use rgb::{interpolate_color, RgbColor};
pub use style::UiStyle;
pub use tokens::{
    BorderRadius, BorderRadiusPatch, ColorRole, ColorScale, ColorScalePatch, Colors, ColorsPatch,
    DesignTokens, DesignTokensPatch, FontFamily, FontFamilyPatch, FontSize, FontSizePatch,
    FontWeight, FontWeightPatch, LineHeight, LineHeightPatch, Shadows, ShadowsPatch, Spacing,
    SpacingPatch, Transitions, TransitionsPatch, Typography, TypographyPatch,
};
