//! Plain HTML snippets (`.html`).

use super::ComponentGenerator;
use crate::export::escape_html;
use crate::models::ComponentConfig;

/// Generates HTML markup examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaGenerator;

impl ComponentGenerator for VanillaGenerator {
    fn file_extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, component: &ComponentConfig) -> String {
        match component.id.as_str() {
            "button" => BUTTON.to_string(),
            "card" => CARD.to_string(),
            id => {
                let name = escape_html(&component.name);
                format!(
                    "<!-- {name} Component -->\n<div class=\"{}\">\n  <!-- {name} content -->\n</div>",
                    escape_html(id)
                )
            }
        }
    }
}

const BUTTON: &str = r#"<!-- Button Component -->
<button class="btn btn-primary">
  Button Text
</button>

<!-- Button Variants -->
<button class="btn btn-primary">Primary</button>
<button class="btn btn-secondary">Secondary</button>
<button class="btn btn-outline">Outline</button>

<!-- Button Sizes -->
<button class="btn btn-primary btn-sm">Small</button>
<button class="btn btn-primary btn-md">Medium</button>
<button class="btn btn-primary btn-lg">Large</button>

<!-- Disabled State -->
<button class="btn btn-primary" disabled>Disabled</button>"#;

const CARD: &str = r#"<!-- Card Component -->
<div class="card">
  <div class="card-header">
    <h3 class="card-title">Card Title</h3>
  </div>
  <div class="card-content">
    <p>Card content goes here. You can add any HTML content inside the card.</p>
  </div>
  <div class="card-footer">
    <button class="btn btn-primary">Action</button>
  </div>
</div>

<!-- Card without header/footer -->
<div class="card">
  <div class="card-content">
    <p>Simple card with just content.</p>
  </div>
</div>"#;
