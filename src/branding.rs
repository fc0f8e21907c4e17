//! Application identity strings.
//!
//! Names used in generated files, help text and platform paths live here
//! so they stay consistent across the CLI and the artifacts.

/// The human-readable display name of the application.
///
/// Used in:
/// - Generated documentation footers
/// - Help text
pub const APP_DISPLAY_NAME: &str = "tokenforge";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in command examples and generated code comments.
pub const APP_BINARY_NAME: &str = "tokenforge";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "tokenforge";

/// Environment variable that replaces the platform config directory.
pub const CONFIG_DIR_ENV: &str = "TOKENFORGE_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str =
    "Design system generator for tokens, stylesheets, wireframes and component scaffolds";

/// Footer line appended to generated documentation.
pub fn generated_by() -> String {
    format!("Generated with {APP_DISPLAY_NAME} - the design system generator")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
        assert!(CONFIG_DIR_ENV.starts_with(&APP_BINARY_NAME.to_uppercase()));
    }

    #[test]
    fn test_generated_by() {
        assert!(generated_by().contains(APP_DISPLAY_NAME));
    }
}
