//! RGB color handling with hex parsing, HSL conversion and interpolation.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Token values are stored as hex strings; this type is the arithmetic
/// view used by the scale generator and interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenforge::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a hex string without validation.
    ///
    /// Channels that cannot be read are treated as 0, so `"zz00ff"` becomes
    /// `#0000ff` and an empty string becomes black. Never fails.
    #[must_use]
    pub fn from_hex_lenient(hex: &str) -> Self {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let channel = |index: usize| {
            hex.get(index * 2..index * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(0)
        };

        Self::new(channel(0), channel(1), channel(2))
    }

    /// Converts the color to a lowercase hex string in the format "#rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenforge::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL.
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-100.0 percent
    /// - `l` (Lightness): 0.0-100.0 percent
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s * 100.0, l * 100.0)
    }

    /// Creates an `RgbColor` from HSL.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees (0.0-360.0)
    /// * `s` - Saturation percent (0.0-100.0, will be clamped)
    /// * `l` - Lightness percent (0.0-100.0, will be clamped)
    ///
    /// Channels are rounded from `x * 255`.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 100.0) / 100.0;
        let l = l.clamp(0.0, 100.0) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 {
                l * (1.0 + s)
            } else {
                l + s - l * s
            };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Linearly interpolates each channel toward `other`.
    ///
    /// `factor` 0.0 returns `self`, 1.0 returns `other`. Channels are rounded.
    #[must_use]
    pub fn lerp(&self, other: &Self, factor: f64) -> Self {
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * factor).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Interpolates between two hex colors.
///
/// Inputs are read leniently (see [`RgbColor::from_hex_lenient`]); the result
/// is a lowercase `#rrggbb` string.
///
/// # Examples
///
/// ```
/// use tokenforge::models::interpolate_color;
///
/// assert_eq!(interpolate_color("#000000", "#ffffff", 0.5), "#808080");
/// ```
#[must_use]
pub fn interpolate_color(from: &str, to: &str, factor: f64) -> String {
    let from = RgbColor::from_hex_lenient(from);
    let to = RgbColor::from_hex_lenient(to);
    from.lerp(&to, factor).to_hex()
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_from_hex_lenient_never_fails() {
        assert_eq!(RgbColor::from_hex_lenient("#3b82f6"), RgbColor::new(59, 130, 246));
        assert_eq!(RgbColor::from_hex_lenient("zz00ff"), RgbColor::new(0, 0, 255));
        assert_eq!(RgbColor::from_hex_lenient(""), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::from_hex_lenient("#12"), RgbColor::new(0x12, 0, 0));
        assert_eq!(RgbColor::from_hex_lenient("#ééé"), RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        let (h, s, l) = RgbColor::new(255, 0, 0).to_hsl();
        assert!(h.abs() < 0.01);
        assert!((s - 100.0).abs() < 0.01);
        assert!((l - 50.0).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 255, 0).to_hsl();
        assert!((h - 120.0).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 0, 255).to_hsl();
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        let (h, s, l) = RgbColor::new(255, 255, 255).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 100.0).abs() < 0.01);

        let (_, _, l) = RgbColor::new(0, 0, 0).to_hsl();
        assert_eq!(l, 0.0);
    }

    #[test]
    fn test_hsl_roundtrip() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(59, 130, 246),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
        ];

        for color in colors {
            let (h, s, l) = color.to_hsl();
            let converted = RgbColor::from_hsl(h, s, l);
            assert!(
                (i16::from(color.r) - i16::from(converted.r)).abs() <= 1
                    && (i16::from(color.g) - i16::from(converted.g)).abs() <= 1
                    && (i16::from(color.b) - i16::from(converted.b)).abs() <= 1,
                "{color} round-tripped to {converted}"
            );
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        assert_eq!(black.lerp(&white, 0.0), black);
        assert_eq!(black.lerp(&white, 1.0), white);
        assert_eq!(black.lerp(&white, 0.5), RgbColor::new(128, 128, 128));
    }

    #[test]
    fn test_interpolate_color() {
        assert_eq!(interpolate_color("#ff0000", "#0000ff", 0.0), "#ff0000");
        assert_eq!(interpolate_color("#ff0000", "#0000ff", 1.0), "#0000ff");
        assert_eq!(interpolate_color("#FF0000", "#0000FF", 0.5), "#800080");
    }
}
