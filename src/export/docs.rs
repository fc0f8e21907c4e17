//! Generated documentation: README, HTML style guide, component reference.

use crate::branding;
use crate::export::components::to_pascal_case;
use crate::export::{escape_html, GeneratedFile};
use crate::models::{ComponentConfig, TargetFramework};
use crate::wizard::WizardState;
use std::fmt::Write;

/// Generates `README.md`, `STYLE_GUIDE.html` and `COMPONENT_DOCS.md`.
pub fn generate_documentation(state: &WizardState) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new("README.md", readme(state)),
        GeneratedFile::new("STYLE_GUIDE.html", style_guide(state)),
        GeneratedFile::new("COMPONENT_DOCS.md", component_docs(state)),
    ]
}

/// Project overview with quick start, token summary and file layout.
pub fn readme(state: &WizardState) -> String {
    let project = &state.project;
    let mut md = String::new();

    let _ = write!(
        md,
        r#"# {name}

{description}

## Overview

This design system includes:

- **UI Style**: {style}
- **Target Framework**: {framework}
- **Version**: {version}
- **Author**: {author}

## Quick Start

### Installation

```bash
npm install
```

### Usage

#### CSS Variables

Include the stylesheets in your project:

```html
<link rel="stylesheet" href="styles/variables.css">
<link rel="stylesheet" href="styles/utilities.css">
<link rel="stylesheet" href="styles/components.css">
```
"#,
        name = project.name,
        description = project.description,
        style = state.style_name(),
        framework = project.framework.display_name(),
        version = project.version,
        author = project.author,
    );

    if project.framework == TargetFramework::React {
        md.push_str(
            r#"
#### React Components

Import components as needed:

```jsx
import { Button } from './components/button';
import { Card } from './components/card';

function App() {
  return (
    <Card>
      <h1>Welcome</h1>
      <Button variant="primary">Get Started</Button>
    </Card>
  );
}
```
"#,
        );
    }

    md.push_str("\n## Design Tokens\n\n### Colors\n\n");
    for (role, _) in state.tokens.colors.scales() {
        let _ = writeln!(md, "#### {}\n- Uses: {}\n", role.label(), role.usage());
    }

    md.push_str(
        "### Typography\n\n\
         Font families and sizes are defined for consistent text rendering.\n\n\
         ### Spacing\n\n\
         A consistent spacing scale keeps alignment and rhythm predictable.\n\n",
    );

    let _ = writeln!(
        md,
        "## Components\n\nThis design system includes {} components:\n",
        state.selected_components.len()
    );
    for component in &state.selected_components {
        let _ = writeln!(md, "- **{}** ({})", component.name, component.category);
    }

    md.push_str("\n## Page Templates\n\n");
    for page in &state.selected_pages {
        let _ = writeln!(md, "- **{}** - {}", page.name, page.description);
    }

    let _ = write!(
        md,
        r##"
## File Structure

```
{slug}/
├── README.md             # This file
├── tokens/               # Design tokens in every format
│   ├── tokens.json
│   ├── variables.css
│   ├── variables.scss
│   ├── tailwind.config.js
│   └── theme.js
├── styles/               # Stylesheets
│   ├── variables.css
│   ├── reset.css
│   ├── utilities.css
│   └── components.css
├── components/           # Component implementations
├── examples/             # Usage examples
└── wireframe.html        # Interactive wireframe preview
```

## Customization

### Modifying Design Tokens

Edit `tokens/tokens.json` and regenerate the stylesheets:

```json
{{
  "colors": {{
    "primary": {{
      "500": "#your-color"
    }}
  }}
}}
```

### Adding New Components

1. Create a new component file in the `components/` directory
2. Follow the existing component patterns
3. Add its rules to `styles/components.css`

## License

MIT, {author}.

---

{footer}
"##,
        slug = project.slug(),
        author = project.author,
        footer = branding::generated_by(),
    );

    md
}

/// HTML page showing every token visually plus sample components.
pub fn style_guide(state: &WizardState) -> String {
    let tokens = &state.tokens;
    let name = escape_html(&state.project.name);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - Style Guide</title>
  <link rel="stylesheet" href="./styles/variables.css">
  <link rel="stylesheet" href="./styles/reset.css">
  <link rel="stylesheet" href="./styles/utilities.css">
  <link rel="stylesheet" href="./styles/components.css">
  <style>
{STYLE_GUIDE_CSS}
  </style>
</head>
<body>
  <h1>{name} Style Guide</h1>
  <p>{description}</p>

  <section class="section">
    <h2 class="section-title">Colors</h2>
    <div class="color-grid">
"#,
        description = escape_html(&state.project.description),
    );

    for (role, scale) in tokens.colors.scales() {
        let _ = writeln!(
            html,
            "      <div class=\"color-group\">\n        <div class=\"color-name\">{role}</div>\n        <div class=\"color-swatches\">"
        );
        for (shade, value) in scale.entries() {
            let _ = writeln!(
                html,
                r#"          <div class="color-swatch"><div class="swatch" style="background-color: {}"></div><span class="swatch-label">{shade}</span></div>"#,
                escape_html(value)
            );
        }
        html.push_str("        </div>\n      </div>\n");
    }

    html.push_str(
        r#"    </div>
  </section>

  <section class="section">
    <h2 class="section-title">Typography</h2>

    <div class="subsection">
      <h3 class="subsection-title">Font Sizes</h3>
      <div class="typography-samples">
"#,
    );
    for (size, value) in tokens.typography.font_size.entries() {
        let value = escape_html(value);
        let _ = writeln!(
            html,
            r#"        <div class="type-sample"><div class="type-label">{size} ({value})</div><div style="font-size: {value}">{PANGRAM}</div></div>"#
        );
    }

    html.push_str(
        r#"      </div>
    </div>

    <div class="subsection">
      <h3 class="subsection-title">Font Weights</h3>
      <div class="typography-samples">
"#,
    );
    for (weight, value) in tokens.typography.font_weight.entries() {
        let _ = writeln!(
            html,
            r#"        <div class="type-sample"><div class="type-label">{weight} ({value})</div><div style="font-weight: {value}">{PANGRAM}</div></div>"#
        );
    }

    html.push_str(
        r#"      </div>
    </div>
  </section>

  <section class="section">
    <h2 class="section-title">Spacing</h2>
    <div class="spacing-demo">
"#,
    );
    for (size, value) in tokens.spacing.entries() {
        let value = escape_html(value);
        let _ = writeln!(
            html,
            r#"      <div class="space-item"><div class="space-box" style="width: {value}; height: {value}"></div><div>{size}</div><div class="type-label">{value}</div></div>"#
        );
    }

    html.push_str(STYLE_GUIDE_TAIL);
    html
}

/// Markdown reference for each selected component.
pub fn component_docs(state: &WizardState) -> String {
    let framework = state.project.framework;
    let mut md = format!(
        "# Component Documentation\n\n## Overview\n\n\
         This document describes each component in the {} design system.\n",
        state.project.name
    );

    for component in &state.selected_components {
        let fence = match framework {
            TargetFramework::React => "jsx",
            TargetFramework::Vue => "vue",
            TargetFramework::Angular | TargetFramework::Vanilla => "html",
        };

        let _ = write!(
            md,
            "\n## {name}\n\n**Category**: {category}  \n**Variants**: {variants}\n\n\
             ### Usage\n\n```{fence}\n{example}\n```\n\n\
             ### Props/Attributes\n\n{COMMON_PROPS}\n\n### Variants\n\n",
            name = component.name,
            category = component.category,
            variants = component.variants.join(", "),
            example = usage_example(component, framework),
        );
        for variant in &component.variants {
            let _ = writeln!(
                md,
                "- **{variant}**: {}",
                variant_description(&component.id, variant)
            );
        }
        md.push_str("\n---\n");
    }

    md.push_str(COMPONENT_DOCS_TAIL);
    md
}

fn usage_example(component: &ComponentConfig, framework: TargetFramework) -> String {
    match framework {
        TargetFramework::React | TargetFramework::Vue => {
            let tag = to_pascal_case(&component.name);
            format!("<{tag} variant=\"primary\" size=\"medium\">\n  Content\n</{tag}>")
        }
        TargetFramework::Angular | TargetFramework::Vanilla => {
            let id = &component.id;
            format!("<div class=\"{id} {id}-primary {id}-medium\">\n  Content\n</div>")
        }
    }
}

fn variant_description(component_id: &str, variant: &str) -> String {
    let known = match (component_id, variant) {
        ("button", "default") => "Standard button appearance",
        ("button", "primary") => "Primary action button",
        ("button", "secondary") => "Secondary action button",
        ("button", "outline") => "Outlined button style",
        ("button", "ghost") => "Minimal button style",
        ("card", "default") => "Standard card with subtle border",
        ("card", "bordered") => "Card with prominent border",
        ("card", "elevated") => "Card with shadow elevation",
        ("card", "minimal") => "Card with minimal styling",
        _ => return format!("{variant} style variant"),
    };
    known.to_string()
}

const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

const COMMON_PROPS: &str = "- `variant`: Visual style variant
- `size`: Component size
- `className/class`: Additional CSS classes
- `disabled`: Disabled state (if applicable)
- `onClick/click`: Click handler (if applicable)";

const COMPONENT_DOCS_TAIL: &str = "
## Best Practices

1. **Consistency**: Use the design system components instead of custom alternatives
2. **Accessibility**: Keep labels, focus states and contrast intact when customizing
3. **Responsive**: Components are designed to work across screen sizes

## Customization

Components can be customized using:
- CSS custom properties (design tokens)
- Variant props
- Additional CSS classes
- Component composition
";

const STYLE_GUIDE_CSS: &str = r"    body { padding: 2rem; max-width: 1200px; margin: 0 auto; }
    .section { margin-bottom: 4rem; }
    .section-title { font-size: 2rem; font-weight: 700; margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 2px solid var(--color-neutral-200); }
    .subsection { margin-bottom: 2rem; }
    .subsection-title { font-size: 1.5rem; font-weight: 600; margin-bottom: 1rem; }
    .color-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
    .color-group { background: white; border: 1px solid var(--color-neutral-200); border-radius: 0.5rem; padding: 1rem; }
    .color-name { font-weight: 600; margin-bottom: 0.5rem; text-transform: capitalize; }
    .color-swatches { display: flex; flex-direction: column; gap: 0.25rem; }
    .color-swatch { display: flex; align-items: center; gap: 0.5rem; }
    .swatch { width: 40px; height: 40px; border-radius: 0.25rem; border: 1px solid rgba(0,0,0,0.1); }
    .swatch-label, .type-label { font-size: 0.875rem; color: var(--color-neutral-600); }
    .typography-samples { display: flex; flex-direction: column; gap: 1rem; }
    .type-sample { padding: 1rem; background: var(--color-neutral-50); border-radius: 0.5rem; }
    .spacing-demo { display: flex; flex-wrap: wrap; gap: 2rem; }
    .space-item { text-align: center; }
    .space-box { background: var(--color-primary-500); margin-bottom: 0.5rem; }
    .component-examples { display: flex; flex-direction: column; gap: 2rem; }
    .example-group { padding: 2rem; background: var(--color-neutral-50); border-radius: 0.5rem; }
    .example-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
    .example-items { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-start; }";

const STYLE_GUIDE_TAIL: &str = r#"    </div>
  </section>

  <section class="section">
    <h2 class="section-title">Components</h2>
    <div class="component-examples">
      <div class="example-group">
        <h3 class="example-title">Buttons</h3>
        <div class="example-items">
          <button class="btn btn-primary">Primary Button</button>
          <button class="btn btn-secondary">Secondary Button</button>
          <button class="btn btn-outline">Outline Button</button>
          <button class="btn btn-primary" disabled>Disabled</button>
        </div>
      </div>

      <div class="example-group">
        <h3 class="example-title">Cards</h3>
        <div class="example-items">
          <div class="card" style="width: 300px">
            <div class="card-header">
              <h4 class="card-title">Card Title</h4>
            </div>
            <div class="card-content">
              This is a card component with header and content areas.
            </div>
          </div>
        </div>
      </div>

      <div class="example-group">
        <h3 class="example-title">Form Elements</h3>
        <div class="example-items" style="flex-direction: column; align-items: stretch; max-width: 400px">
          <div class="input-group">
            <label class="input-label">Input Label</label>
            <input type="text" class="input" placeholder="Enter text...">
          </div>
        </div>
      </div>
    </div>
  </section>

  <section class="section">
    <h2 class="section-title">Utility Classes</h2>
    <p>This design system includes utility classes for:</p>
    <ul>
      <li>Text colors: <code>.text-primary-500</code>, <code>.text-neutral-700</code>, etc.</li>
      <li>Background colors: <code>.bg-primary-100</code>, <code>.bg-neutral-50</code>, etc.</li>
      <li>Spacing: <code>.p-md</code>, <code>.m-lg</code>, <code>.px-sm</code>, etc.</li>
      <li>Border radius: <code>.rounded-sm</code>, <code>.rounded-lg</code>, etc.</li>
      <li>Shadows: <code>.shadow-sm</code>, <code>.shadow-lg</code>, etc.</li>
    </ul>
  </section>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::wizard::{reduce, WizardCommand};

    fn sample_state(framework: TargetFramework) -> WizardState {
        let catalog = Catalog::load().unwrap();
        let mut state = WizardState::initial();
        state.project.name = "Acme UI".to_string();
        state.project.description = "Tokens for Acme".to_string();
        state.project.author = "Acme Design".to_string();
        state.project.framework = framework;
        for (id, name) in [("button", "Button"), ("card", "Card")] {
            let component = ComponentConfig {
                id: id.to_string(),
                name: name.to_string(),
                category: "core".to_string(),
                variants: vec!["default".to_string(), "primary".to_string()],
                props: serde_json::Map::new(),
            };
            state = reduce(&state, WizardCommand::AddComponent(component));
        }
        let page = catalog.page("login-page").unwrap().clone();
        reduce(&state, WizardCommand::AddPage(page))
    }

    #[test]
    fn test_readme_sections() {
        let md = readme(&sample_state(TargetFramework::React));
        assert!(md.starts_with("# Acme UI\n\nTokens for Acme\n"));
        assert!(md.contains("- **UI Style**: Custom"));
        assert!(md.contains("#### React Components"));
        assert!(md.contains("#### Neutral\n- Uses: "));
        assert!(md.contains("This design system includes 2 components:"));
        assert!(md.contains("- **Button** (core)"));
        assert!(md.contains("acme-ui/\n"));
        assert!(md.contains("\"500\": \"#your-color\""));
    }

    #[test]
    fn test_readme_without_react_section() {
        let md = readme(&sample_state(TargetFramework::Vue));
        assert!(!md.contains("#### React Components"));
        assert!(md.contains("- **Target Framework**: Vue"));
    }

    #[test]
    fn test_style_guide_lists_every_shade() {
        let html = style_guide(&sample_state(TargetFramework::React));
        assert_eq!(html.matches("class=\"color-swatch\"").count(), 70);
        assert_eq!(html.matches("class=\"space-item\"").count(), 8);
        assert!(html.contains("<title>Acme UI - Style Guide</title>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_component_docs_usage_per_framework() {
        let md = component_docs(&sample_state(TargetFramework::React));
        assert!(md.contains("```jsx\n<Button variant=\"primary\" size=\"medium\">"));
        assert!(md.contains("## Card\n"));

        let md = component_docs(&sample_state(TargetFramework::Vanilla));
        assert!(md.contains("```html\n<div class=\"button button-primary button-medium\">"));
    }

    #[test]
    fn test_variant_descriptions() {
        assert_eq!(variant_description("button", "ghost"), "Minimal button style");
        assert_eq!(variant_description("modal", "fullscreen"), "fullscreen style variant");
    }
}
