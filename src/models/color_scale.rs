//! Ten-step color scale generation from a single base color.

use crate::models::rgb::RgbColor;
use crate::models::tokens::ColorScale;

/// Lightness factor per shade. Positive factors lighten toward white,
/// negative factors darken toward black. Shade 500 is the base itself.
pub const SCALE_SCHEDULE: [(&str, Option<f64>); 10] = [
    ("50", Some(0.95)),
    ("100", Some(0.9)),
    ("200", Some(0.8)),
    ("300", Some(0.7)),
    ("400", Some(0.6)),
    ("500", None),
    ("600", Some(-0.1)),
    ("700", Some(-0.2)),
    ("800", Some(-0.3)),
    ("900", Some(-0.4)),
];

/// Shifts the HSL lightness of `base` by `factor`.
///
/// The input is parsed leniently; the result is lowercase `#rrggbb`.
pub fn adjust_lightness(base: &str, factor: f64) -> String {
    let (h, s, l) = RgbColor::from_hex_lenient(base).to_hsl();
    let lightness = if factor > 0.0 {
        l + (100.0 - l) * factor
    } else {
        l + l * factor
    };
    RgbColor::from_hsl(h, s, lightness.clamp(0.0, 100.0)).to_hex()
}

/// Generates a full scale from a base color.
///
/// Shade `500` is the input string verbatim. Malformed input does not fail:
/// unreadable channels count as 0 (see [`RgbColor::from_hex_lenient`]).
/// Callers taking user input should validate with [`RgbColor::from_hex`]
/// first.
///
/// # Examples
///
/// ```
/// use tokenforge::models::generate_color_scale;
///
/// let scale = generate_color_scale("#3b82f6");
/// assert_eq!(scale.shade_500, "#3b82f6");
/// assert_ne!(scale.shade_50, scale.shade_900);
/// ```
pub fn generate_color_scale(base: &str) -> ColorScale {
    let shades = SCALE_SCHEDULE.map(|(_, factor)| match factor {
        Some(factor) => adjust_lightness(base, factor),
        None => base.to_string(),
    });
    let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900] = shades;

    ColorScale {
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
