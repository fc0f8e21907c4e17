//! Component catalog entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A selectable UI component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Stable identifier, also the generated file stem (e.g. `input-field`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category (navigation, content, forms, ...)
    pub category: String,
    /// Variant names
    #[serde(default)]
    pub variants: Vec<String>,
    /// Illustrative default props, free-form
    #[serde(default)]
    pub props: Map<String, Value>,
}
