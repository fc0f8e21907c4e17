//! The base token set every project starts from.

use crate::models::tokens::{
    BorderRadius, ColorScale, Colors, DesignTokens, FontFamily, FontSize, FontWeight, LineHeight,
    Shadows, Spacing, Transitions, Typography,
};

/// Blue scale shared by the primary and info roles.
const BLUE: [&str; 10] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a",
];

const SLATE: [&str; 10] = [
    "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
    "#1e293b", "#0f172a",
];

const GRAY: [&str; 10] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827",
];

const GREEN: [&str; 10] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d",
];

const AMBER: [&str; 10] = [
    "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
    "#92400e", "#78350f",
];

const RED: [&str; 10] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d",
];

fn s(value: &str) -> String {
    value.to_string()
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: ColorScale::from_shades(BLUE),
            secondary: ColorScale::from_shades(SLATE),
            neutral: ColorScale::from_shades(GRAY),
            success: ColorScale::from_shades(GREEN),
            warning: ColorScale::from_shades(AMBER),
            error: ColorScale::from_shades(RED),
            info: ColorScale::from_shades(BLUE),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: FontFamily {
                sans: s(r#"system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif"#),
                serif: s(r#"Georgia, Cambria, "Times New Roman", Times, serif"#),
                mono: s(r#"Menlo, Monaco, Consolas, "Liberation Mono", monospace"#),
            },
            font_size: FontSize {
                xs: s("0.75rem"),
                sm: s("0.875rem"),
                base: s("1rem"),
                lg: s("1.125rem"),
                xl: s("1.25rem"),
                xl2: s("1.5rem"),
                xl3: s("1.875rem"),
                xl4: s("2.25rem"),
                xl5: s("3rem"),
            },
            font_weight: FontWeight {
                light: 300,
                normal: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height: LineHeight {
                tight: 1.25,
                normal: 1.5,
                relaxed: 1.75,
            },
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: s("0.25rem"),
            sm: s("0.5rem"),
            md: s("1rem"),
            lg: s("1.5rem"),
            xl: s("2rem"),
            xl2: s("3rem"),
            xl3: s("4rem"),
            xl4: s("5rem"),
        }
    }
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            none: s("0"),
            sm: s("0.125rem"),
            md: s("0.375rem"),
            lg: s("0.5rem"),
            xl: s("0.75rem"),
            full: s("9999px"),
        }
    }
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            none: s("none"),
            sm: s("0 1px 2px 0 rgb(0 0 0 / 0.05)"),
            md: s("0 4px 6px -1px rgb(0 0 0 / 0.1)"),
            lg: s("0 10px 15px -3px rgb(0 0 0 / 0.1)"),
            xl: s("0 20px 25px -5px rgb(0 0 0 / 0.1)"),
            xl2: s("0 25px 50px -12px rgb(0 0 0 / 0.25)"),
        }
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self {
            fast: s("150ms ease"),
            base: s("250ms ease"),
            slow: s("350ms ease"),
        }
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            colors: Colors::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
            border_radius: BorderRadius::default(),
            shadows: Shadows::default(),
            transitions: Transitions::default(),
        }
    }
}
