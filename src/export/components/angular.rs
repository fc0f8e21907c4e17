//! Angular component classes (`.ts`).

use super::{to_kebab_case, to_pascal_case, ComponentGenerator};
use crate::models::ComponentConfig;

/// Generates Angular components. Every id uses the same wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularGenerator;

impl ComponentGenerator for AngularGenerator {
    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, component: &ComponentConfig) -> String {
        let name = to_pascal_case(&component.name);
        let selector = to_kebab_case(&component.name);
        let id = &component.id;

        format!(
            r#"import {{ Component, Input, Output, EventEmitter }} from '@angular/core';

@Component({{
  selector: '{selector}',
  template: `
    <div class="{id}">
      <ng-content></ng-content>
    </div>
  `,
  styleUrls: ['./{selector}.component.css']
}})
export class {name}Component {{
  // Component implementation
}}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_and_class_name() {
        let component = ComponentConfig {
            id: "data-table".to_string(),
            name: "DataTable".to_string(),
            category: "data".to_string(),
            variants: vec![],
            props: serde_json::Map::new(),
        };
        let source = AngularGenerator.render(&component);

        assert!(source.contains("selector: 'data-table',"));
        assert!(source.contains("styleUrls: ['./data-table.component.css']"));
        assert!(source.contains("<div class=\"data-table\">"));
        assert!(source.contains("export class DatatableComponent {"));
    }
}
