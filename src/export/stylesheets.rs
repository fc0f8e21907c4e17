//! Stylesheets shipped with every export: variables, reset, utilities and
//! component rules.

use crate::export::token_formats::css_variables;
use crate::export::GeneratedFile;
use crate::wizard::WizardState;

/// Generates the four stylesheets in bundle order.
pub fn generate_stylesheets(state: &WizardState) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("variables.css", css_variables(&state.tokens)),
        GeneratedFile::new("reset.css", RESET_CSS),
        GeneratedFile::new("utilities.css", utility_classes(state)),
        GeneratedFile::new("components.css", component_styles(state)),
    ]
}

const RESET_CSS: &str = r"/* CSS Reset */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  color: var(--color-neutral-900);
  background-color: var(--color-neutral-50);
  line-height: var(--leading-normal);
}

img, picture, video, canvas, svg {
  display: block;
  max-width: 100%;
}

input, button, textarea, select {
  font: inherit;
}

p, h1, h2, h3, h4, h5, h6 {
  overflow-wrap: break-word;
}";

/// One-rule utility classes derived from the tokens.
pub fn utility_classes(state: &WizardState) -> String {
    let tokens = &state.tokens;
    let mut rules = Vec::new();

    for (size, value) in tokens.typography.font_size.entries() {
        rules.push(format!(".text-{size} {{ font-size: {value}; }}"));
    }

    for (role, scale) in tokens.colors.scales() {
        for (shade, value) in scale.entries() {
            rules.push(format!(".text-{role}-{shade} {{ color: {value}; }}"));
            rules.push(format!(".bg-{role}-{shade} {{ background-color: {value}; }}"));
            rules.push(format!(".border-{role}-{shade} {{ border-color: {value}; }}"));
        }
    }

    for (size, value) in tokens.spacing.entries() {
        rules.push(format!(".p-{size} {{ padding: {value}; }}"));
        rules.push(format!(".m-{size} {{ margin: {value}; }}"));
        rules.push(format!(
            ".px-{size} {{ padding-left: {value}; padding-right: {value}; }}"
        ));
        rules.push(format!(
            ".py-{size} {{ padding-top: {value}; padding-bottom: {value}; }}"
        ));
        rules.push(format!(
            ".mx-{size} {{ margin-left: {value}; margin-right: {value}; }}"
        ));
        rules.push(format!(
            ".my-{size} {{ margin-top: {value}; margin-bottom: {value}; }}"
        ));
    }

    for (size, value) in tokens.border_radius.entries() {
        rules.push(format!(".rounded-{size} {{ border-radius: {value}; }}"));
    }

    for (size, value) in tokens.shadows.entries() {
        rules.push(format!(".shadow-{size} {{ box-shadow: {value}; }}"));
    }

    rules.join("\n")
}

/// Rules for the selected components that have hand-written styles.
///
/// Empty when none of `button`, `card` or `input-field` is selected.
pub fn component_styles(state: &WizardState) -> String {
    let mut blocks = Vec::new();

    if state.has_component("button") {
        blocks.push(BUTTON_CSS);
    }
    if state.has_component("card") {
        blocks.push(CARD_CSS);
    }
    if state.has_component("input-field") {
        blocks.push(INPUT_CSS);
    }

    blocks.join("\n\n")
}

const BUTTON_CSS: &str = r".btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-sm) var(--space-md);
  font-weight: var(--font-weight-medium);
  border-radius: var(--radius-md);
  transition: all var(--transition-fast);
  cursor: pointer;
  border: none;
  font-family: inherit;
}

.btn-primary {
  background-color: var(--color-primary-600);
  color: white;
}

.btn-primary:hover {
  background-color: var(--color-primary-700);
}

.btn-secondary {
  background-color: var(--color-secondary-600);
  color: white;
}

.btn-secondary:hover {
  background-color: var(--color-secondary-700);
}";

const CARD_CSS: &str = r".card {
  background-color: white;
  border-radius: var(--radius-lg);
  padding: var(--space-md);
  box-shadow: var(--shadow-md);
  transition: box-shadow var(--transition-fast);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

.card-header {
  margin-bottom: var(--space-sm);
}

.card-title {
  font-size: var(--text-lg);
  font-weight: var(--font-weight-semibold);
  color: var(--color-neutral-900);
}

.card-content {
  color: var(--color-neutral-700);
}";

const INPUT_CSS: &str = r".input {
  width: 100%;
  padding: var(--space-sm) var(--space-md);
  border: 1px solid var(--color-neutral-300);
  border-radius: var(--radius-md);
  font-size: var(--text-base);
  transition: all var(--transition-fast);
}

.input:hover {
  border-color: var(--color-neutral-400);
}

.input:focus {
  outline: none;
  border-color: var(--color-primary-500);
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.1);
}

.input-error {
  border-color: var(--color-error-500);
}

.input-error:focus {
  box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
}";
