//! Vue single-file components (`.vue`).

use super::{to_pascal_case, ComponentGenerator};
use crate::models::ComponentConfig;

/// Generates Vue components.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueGenerator;

impl ComponentGenerator for VueGenerator {
    fn file_extension(&self) -> &'static str {
        "vue"
    }

    fn render(&self, component: &ComponentConfig) -> String {
        let name = to_pascal_case(&component.name);
        match component.id.as_str() {
            "button" => BUTTON.replace("__NAME__", &name),
            "card" => CARD.replace("__NAME__", &name),
            id => format!(
                r#"<template>
  <div class="{id}">
    <slot></slot>
  </div>
</template>

<script>
export default {{
  name: '{name}'
}}
</script>

<style scoped>
.{id} {{
  /* Component styles from design tokens */
}}
</style>"#
            ),
        }
    }
}

const BUTTON: &str = r#"<template>
  <button
    :class="['btn', `btn-${variant}`, `btn-${size}`]"
    :disabled="disabled"
    @click="$emit('click', $event)"
  >
    <slot></slot>
  </button>
</template>

<script>
export default {
  name: '__NAME__',
  props: {
    variant: {
      type: String,
      default: 'primary',
      validator: (value) => ['primary', 'secondary', 'outline'].includes(value)
    },
    size: {
      type: String,
      default: 'medium',
      validator: (value) => ['small', 'medium', 'large'].includes(value)
    },
    disabled: {
      type: Boolean,
      default: false
    }
  }
}
</script>

<style scoped>
.btn {
  /* Button styles from design tokens */
}
</style>"#;

const CARD: &str = r#"<template>
  <div :class="['card', `card-${variant}`]">
    <div v-if="title" class="card-header">
      <h3 class="card-title">{{ title }}</h3>
    </div>
    <div class="card-content">
      <slot></slot>
    </div>
    <div v-if="$slots.footer" class="card-footer">
      <slot name="footer"></slot>
    </div>
  </div>
</template>

<script>
export default {
  name: '__NAME__',
  props: {
    title: {
      type: String,
      default: ''
    },
    variant: {
      type: String,
      default: 'default'
    }
  }
}
</script>

<style scoped>
.card {
  /* Card styles from design tokens */
}
</style>"#;

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_card_template() {
        let source = VueGenerator.render(&component("card", "Card"));
        assert!(source.contains("<h3 class=\"card-title\">{{ title }}</h3>"));
        assert!(source.contains("name: 'Card',"));
    }

    #[test]
    fn test_generic_template() {
        let source = VueGenerator.render(&component("modal", "Modal Dialog"));
        assert!(source.starts_with("<template>\n  <div class=\"modal\">"));
        assert!(source.contains("name: 'ModalDialog'"));
        assert!(source.contains(".modal {"));
    }
}
