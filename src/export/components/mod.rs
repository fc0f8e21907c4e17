//! Framework-specific component stubs.
//!
//! Each [`TargetFramework`] has one [`ComponentGenerator`]. Generators carry
//! hand-written templates for a few well-known component ids and fall back
//! to a generic wrapper for everything else.

mod angular;
mod react;
mod vanilla;
mod vue;

use crate::export::GeneratedFile;
use crate::models::{ComponentConfig, TargetFramework};
use regex::Regex;
use std::sync::LazyLock;

pub use angular::AngularGenerator;
pub use react::ReactGenerator;
pub use vanilla::VanillaGenerator;
pub use vue::VueGenerator;

/// Renders component source for one framework.
pub trait ComponentGenerator {
    /// Extension of generated files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the source for one component.
    fn render(&self, component: &ComponentConfig) -> String;
}

/// Returns the generator for a framework.
pub fn generator_for(framework: TargetFramework) -> &'static dyn ComponentGenerator {
    match framework {
        TargetFramework::React => &ReactGenerator,
        TargetFramework::Vue => &VueGenerator,
        TargetFramework::Angular => &AngularGenerator,
        TargetFramework::Vanilla => &VanillaGenerator,
    }
}

/// Generates `{id}.{ext}` for every component, in selection order.
pub fn generate_components(
    framework: TargetFramework,
    components: &[ComponentConfig],
) -> Vec<GeneratedFile> {
    let generator = generator_for(framework);
    components
        .iter()
        .map(|component| {
            GeneratedFile::new(
                format!("{}.{}", component.id, generator.file_extension()),
                generator.render(component),
            )
        })
        .collect()
}

/// `"input field"` → `"InputField"`.
///
/// Words are split on `-`, `_` and whitespace; each word is capitalized and
/// the rest lowercased.
pub fn to_pascal_case(text: &str) -> String {
    text.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect()
}

static CAMEL_BOUNDARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").ok());
static SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\s_]+").ok());

/// `"DataTable"` → `"data-table"`, `"Input Field"` → `"input-field"`.
pub fn to_kebab_case(text: &str) -> String {
    let mut result = text.to_string();
    if let Some(regex) = CAMEL_BOUNDARY.as_ref() {
        result = regex.replace_all(&result, "$1-$2").into_owned();
    }
    if let Some(regex) = SEPARATORS.as_ref() {
        result = regex.replace_all(&result, "-").into_owned();
    }
    result.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn component(id: &str, name: &str) -> ComponentConfig {
        ComponentConfig {
            id: id.to_string(),
            name: name.to_string(),
            category: "layout".to_string(),
            variants: vec![],
            props: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_pascal_case("Input Field"), "InputField");
        assert_eq!(to_pascal_case("data-TABLE"), "DataTable");
        assert_eq!(to_pascal_case("nav_bar menu"), "NavBarMenu");
        assert_eq!(to_pascal_case(""), "");

        assert_eq!(to_kebab_case("DataTable"), "data-table");
        assert_eq!(to_kebab_case("Input Field"), "input-field");
        assert_eq!(to_kebab_case("Progress_Bar"), "progress-bar");
    }

    #[test]
    fn test_file_extensions() {
        let extensions: Vec<_> = TargetFramework::ALL
            .iter()
            .map(|f| generator_for(*f).file_extension())
            .collect();
        assert_eq!(extensions, ["jsx", "vue", "ts", "html"]);
    }

    #[test]
    fn test_generate_components_names_files_by_id() {
        let components = [component("button", "Button"), component("data-table", "Data Table")];
        let files = generate_components(TargetFramework::Vue, &components);
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["button.vue", "data-table.vue"]);
        assert!(files[1].content.contains("name: 'DataTable'"));
    }

    #[test]
    fn test_every_catalog_component_renders_for_every_framework() {
        let catalog = Catalog::load().unwrap();
        for framework in TargetFramework::ALL {
            let generator = generator_for(framework);
            for component in catalog.components() {
                let source = generator.render(component);
                assert!(!source.is_empty(), "{framework} {}", component.id);
            }
        }
    }
}
