//! Design token records and their partial-override counterparts.
//!
//! Every complete record (`DesignTokens` and its nested groups) has a twin
//! `*Patch` type with the same shape where every node is optional. Patches
//! are what style presets and project manifests carry; [`Merge`] folds a
//! patch into a complete record.

use crate::models::merge::Merge;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a leaf token group: a complete record of scalar tokens, its
/// patch type, the key list in emission order and a `Merge` impl.
macro_rules! token_group {
    (
        $(#[$meta:meta])*
        $name:ident / $patch:ident : $ty:ty {
            $( $(#[$fmeta:meta])* $field:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[doc = concat!("`", $key, "` token")]
                #[serde(rename = $key)]
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Partial override of [`", stringify!($name), "`]. Absent keys keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $patch {
            $(
                $(#[$fmeta])*
                #[doc = concat!("`", $key, "` override")]
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Token keys in emission order.
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Returns `(key, value)` pairs in emission order.
            pub fn entries(&self) -> Vec<(&'static str, &$ty)> {
                vec![$(($key, &self.$field)),+]
            }
        }

        impl Merge for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: &Self::Patch) {
                $(
                    if let Some(value) = &patch.$field {
                        self.$field.clone_from(value);
                    }
                )+
            }
        }
    };
}

/// Declares a branch record whose children are themselves mergeable.
macro_rules! token_branch {
    (
        $(#[$meta:meta])*
        $name:ident / $patch:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[doc = concat!("`", $key, "` token")]
                #[serde(rename = $key)]
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Partial override of [`", stringify!($name), "`] at any depth.")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $patch {
            $(
                $(#[$fmeta])*
                #[doc = concat!("`", $key, "` override")]
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<<$ty as Merge>::Patch>,
            )+
        }

        impl Merge for $name {
            type Patch = $patch;

            fn merge(&mut self, patch: &Self::Patch) {
                $(
                    if let Some(child) = &patch.$field {
                        self.$field.merge(child);
                    }
                )+
            }
        }
    };
}

token_group! {
    /// Ten-step lightness scale for one color role, keyed `50` through `900`.
    ColorScale / ColorScalePatch : String {
        shade_50 => "50",
        shade_100 => "100",
        shade_200 => "200",
        shade_300 => "300",
        shade_400 => "400",
        shade_500 => "500",
        shade_600 => "600",
        shade_700 => "700",
        shade_800 => "800",
        shade_900 => "900",
    }
}

impl ColorScale {
    /// Builds a scale from ten hex strings ordered 50 through 900.
    pub fn from_shades(shades: [&str; 10]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = shades.map(String::from);
        Self {
            shade_50: s50,
            shade_100: s100,
            shade_200: s200,
            shade_300: s300,
            shade_400: s400,
            shade_500: s500,
            shade_600: s600,
            shade_700: s700,
            shade_800: s800,
            shade_900: s900,
        }
    }

    /// Looks up a shade by its numeric key.
    pub fn get(&self, shade: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == shade)
            .map(|(_, value)| value.as_str())
    }
}

impl ColorScalePatch {
    /// A patch that replaces every shade of the scale.
    pub fn full(scale: &ColorScale) -> Self {
        Self {
            shade_50: Some(scale.shade_50.clone()),
            shade_100: Some(scale.shade_100.clone()),
            shade_200: Some(scale.shade_200.clone()),
            shade_300: Some(scale.shade_300.clone()),
            shade_400: Some(scale.shade_400.clone()),
            shade_500: Some(scale.shade_500.clone()),
            shade_600: Some(scale.shade_600.clone()),
            shade_700: Some(scale.shade_700.clone()),
            shade_800: Some(scale.shade_800.clone()),
            shade_900: Some(scale.shade_900.clone()),
        }
    }
}

token_branch! {
    /// The seven color roles.
    Colors / ColorsPatch {
        primary: ColorScale => "primary",
        secondary: ColorScale => "secondary",
        neutral: ColorScale => "neutral",
        success: ColorScale => "success",
        warning: ColorScale => "warning",
        error: ColorScale => "error",
        info: ColorScale => "info",
    }
}

/// A named color role within [`Colors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    /// Brand color
    Primary,
    /// Supporting color
    Secondary,
    /// Text, borders and backgrounds
    Neutral,
    /// Positive feedback
    Success,
    /// Cautionary feedback
    Warning,
    /// Errors and destructive actions
    Error,
    /// Informational messages
    Info,
}

impl ColorRole {
    /// All roles in emission order.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Neutral,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    /// Token key, e.g. `primary`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Neutral => "neutral",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Capitalized label, e.g. `Primary`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Neutral => "Neutral",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }

    /// Short usage note for generated documentation.
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Primary => "Main brand color, used for primary actions and key UI elements",
            Self::Secondary => "Supporting color for secondary actions and accents",
            Self::Neutral => "Grays for text, borders, and backgrounds",
            Self::Success => "Positive feedback and success states",
            Self::Warning => "Warnings and cautionary messages",
            Self::Error => "Errors and destructive actions",
            Self::Info => "Informational messages and highlights",
        }
    }

    /// Parses a role from its token key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Colors {
    /// Returns the scale for a role.
    pub fn scale(&self, role: ColorRole) -> &ColorScale {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Neutral => &self.neutral,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
            ColorRole::Error => &self.error,
            ColorRole::Info => &self.info,
        }
    }

    /// Returns a mutable reference to the scale for a role.
    pub fn scale_mut(&mut self, role: ColorRole) -> &mut ColorScale {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Neutral => &mut self.neutral,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
            ColorRole::Info => &mut self.info,
        }
    }

    /// Iterates `(role, scale)` pairs in emission order.
    pub fn scales(&self) -> impl Iterator<Item = (ColorRole, &ColorScale)> {
        ColorRole::ALL.into_iter().map(|role| (role, self.scale(role)))
    }
}

impl ColorsPatch {
    /// Returns a mutable slot for a role's patch.
    pub fn scale_mut(&mut self, role: ColorRole) -> &mut Option<ColorScalePatch> {
        match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Neutral => &mut self.neutral,
            ColorRole::Success => &mut self.success,
            ColorRole::Warning => &mut self.warning,
            ColorRole::Error => &mut self.error,
            ColorRole::Info => &mut self.info,
        }
    }
}

token_group! {
    /// Font stacks.
    FontFamily / FontFamilyPatch : String {
        sans => "sans",
        serif => "serif",
        mono => "mono",
    }
}

token_group! {
    /// Type scale.
    FontSize / FontSizePatch : String {
        xs => "xs",
        sm => "sm",
        base => "base",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
        xl3 => "3xl",
        xl4 => "4xl",
        xl5 => "5xl",
    }
}

token_group! {
    /// Numeric font weights.
    FontWeight / FontWeightPatch : u16 {
        light => "light",
        normal => "normal",
        medium => "medium",
        semibold => "semibold",
        bold => "bold",
    }
}

token_group! {
    /// Unitless line heights.
    LineHeight / LineHeightPatch : f64 {
        tight => "tight",
        normal => "normal",
        relaxed => "relaxed",
    }
}

token_branch! {
    /// Typography tokens.
    Typography / TypographyPatch {
        font_family: FontFamily => "fontFamily",
        font_size: FontSize => "fontSize",
        font_weight: FontWeight => "fontWeight",
        line_height: LineHeight => "lineHeight",
    }
}

token_group! {
    /// Spacing scale.
    Spacing / SpacingPatch : String {
        xs => "xs",
        sm => "sm",
        md => "md",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
        xl3 => "3xl",
        xl4 => "4xl",
    }
}

token_group! {
    /// Corner radii.
    BorderRadius / BorderRadiusPatch : String {
        none => "none",
        sm => "sm",
        md => "md",
        lg => "lg",
        xl => "xl",
        full => "full",
    }
}

token_group! {
    /// Box shadows.
    Shadows / ShadowsPatch : String {
        none => "none",
        sm => "sm",
        md => "md",
        lg => "lg",
        xl => "xl",
        xl2 => "2xl",
    }
}

token_group! {
    /// Transition shorthands.
    Transitions / TransitionsPatch : String {
        fast => "fast",
        base => "base",
        slow => "slow",
    }
}

token_branch! {
    /// The complete design token record.
    ///
    /// The shape is fixed: every group and every leaf is always present.
    /// `Default` yields the base token set.
    DesignTokens / DesignTokensPatch {
        colors: Colors => "colors",
        typography: Typography => "typography",
        spacing: Spacing => "spacing",
        border_radius: BorderRadius => "borderRadius",
        shadows: Shadows => "shadows",
        transitions: Transitions => "transitions",
    }
}

impl DesignTokensPatch {
    /// A patch replacing one color role with a complete scale.
    pub fn with_scale(mut self, role: ColorRole, scale: &ColorScale) -> Self {
        let colors = self.colors.get_or_insert_with(ColorsPatch::default);
        *colors.scale_mut(role) = Some(ColorScalePatch::full(scale));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_emission_order() {
        assert_eq!(
            ColorScale::KEYS,
            &["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
        );
        assert_eq!(FontSize::KEYS.last(), Some(&"5xl"));
        assert_eq!(Shadows::KEYS, &["none", "sm", "md", "lg", "xl", "2xl"]);
    }

    #[test]
    fn test_color_scale_lookup() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.colors.primary.get("500"), Some("#3b82f6"));
        assert_eq!(tokens.colors.primary.get("950"), None);
    }

    #[test]
    fn test_json_keys_use_token_names() {
        let json = serde_json::to_value(DesignTokens::default()).unwrap();
        assert!(json["typography"]["fontFamily"]["sans"].is_string());
        assert!(json["typography"]["fontWeight"]["bold"].is_u64());
        assert!(json["borderRadius"]["full"].is_string());
        assert!(json["spacing"]["2xl"].is_string());
        assert!(json["colors"]["info"]["50"].is_string());
    }

    #[test]
    fn test_patch_rejects_unknown_keys() {
        let result: Result<DesignTokensPatch, _> =
            serde_json::from_str(r##"{"colors": {"brand": {"500": "#000000"}}}"##);
        assert!(result.is_err());

        let result: Result<DesignTokensPatch, _> =
            serde_json::from_str(r#"{"spacing": {"huge": "10rem"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_parses_partial_tree() {
        let patch: DesignTokensPatch =
            serde_json::from_str(r##"{"colors": {"primary": {"500": "#ff0000"}}}"##).unwrap();
        let primary = patch.colors.unwrap().primary.unwrap();
        assert_eq!(primary.shade_500.as_deref(), Some("#ff0000"));
        assert!(primary.shade_50.is_none());
        assert!(patch.typography.is_none());
    }

    #[test]
    fn test_color_role_keys() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_key(role.key()), Some(role));
        }
        assert_eq!(ColorRole::from_key("brand"), None);
    }
}
