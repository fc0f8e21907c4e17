//! Built-in catalogs of style presets, page templates, and components.
//!
//! Catalog data ships as JSON files embedded in the binary and is parsed
//! once on load.

use crate::models::{ComponentConfig, PageCategory, PageTemplate, UiStyle};
use anyhow::{Context, Result};

/// The three static catalogs the wizard selects from.
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<UiStyle>,
    pages: Vec<PageTemplate>,
    components: Vec<ComponentConfig>,
}

impl Catalog {
    /// Loads the embedded catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded data file fails to parse.
    pub fn load() -> Result<Self> {
        let styles: Vec<UiStyle> = serde_json::from_str(include_str!("../data/styles.json"))
            .context("Failed to parse embedded style presets")?;
        let pages: Vec<PageTemplate> = serde_json::from_str(include_str!("../data/pages.json"))
            .context("Failed to parse embedded page templates")?;
        let components: Vec<ComponentConfig> =
            serde_json::from_str(include_str!("../data/components.json"))
                .context("Failed to parse embedded component library")?;

        tracing::debug!(
            styles = styles.len(),
            pages = pages.len(),
            components = components.len(),
            "Loaded catalogs"
        );

        Ok(Self {
            styles,
            pages,
            components,
        })
    }

    /// All style presets in catalog order.
    pub fn styles(&self) -> &[UiStyle] {
        &self.styles
    }

    /// All page templates in catalog order.
    pub fn pages(&self) -> &[PageTemplate] {
        &self.pages
    }

    /// All components in catalog order.
    pub fn components(&self) -> &[ComponentConfig] {
        &self.components
    }

    /// Finds a style preset by id.
    pub fn style(&self, id: &str) -> Option<&UiStyle> {
        self.styles.iter().find(|style| style.id == id)
    }

    /// Finds a page template by id.
    pub fn page(&self, id: &str) -> Option<&PageTemplate> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Finds a component by id.
    pub fn component(&self, id: &str) -> Option<&ComponentConfig> {
        self.components.iter().find(|component| component.id == id)
    }

    /// Page templates in a category.
    pub fn pages_in(&self, category: PageCategory) -> impl Iterator<Item = &PageTemplate> {
        self.pages
            .iter()
            .filter(move |page| page.category == category)
    }

    /// Components in a category (e.g. `forms`).
    pub fn components_in<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ComponentConfig> + 'a {
        self.components
            .iter()
            .filter(move |component| component.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{merge_tokens, DesignTokens, PageLayout};
    use std::collections::HashSet;

    #[test]
    fn test_load_catalogs() {
        let catalog = Catalog::load().expect("Failed to load catalogs");
        assert_eq!(catalog.styles().len(), 6);
        assert_eq!(catalog.pages().len(), 18);
        assert_eq!(catalog.components().len(), 18);
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::load().unwrap();
        let styles: HashSet<_> = catalog.styles().iter().map(|s| &s.id).collect();
        let pages: HashSet<_> = catalog.pages().iter().map(|p| &p.id).collect();
        let components: HashSet<_> = catalog.components().iter().map(|c| &c.id).collect();
        assert_eq!(styles.len(), catalog.styles().len());
        assert_eq!(pages.len(), catalog.pages().len());
        assert_eq!(components.len(), catalog.components().len());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.style("soft-pastel").unwrap().name, "Soft Pastel");
        assert_eq!(
            catalog.page("analytics-dashboard").unwrap().layout,
            PageLayout::SidebarLayout
        );
        assert_eq!(
            catalog.page("blog-list").unwrap().layout,
            PageLayout::Other("blog-layout".to_string())
        );
        assert!(catalog.component("navbar").is_some());
        assert!(catalog.component("missing").is_none());
        assert_eq!(catalog.pages_in(PageCategory::Auth).count(), 3);
        assert_eq!(catalog.components_in("forms").count(), 3);
    }

    #[test]
    fn test_page_names_and_descriptions() {
        let catalog = Catalog::load().unwrap();
        let signup = catalog.page("signup-page").unwrap();
        assert_eq!(signup.name, "Signup Page");
        assert_eq!(signup.description, "Registration form with validation");
        assert_eq!(catalog.page("blog-list").unwrap().description, "Blog posts with sidebar");
        assert_eq!(
            catalog.page("saas-landing").unwrap().description,
            "Product-focused landing page for SaaS applications"
        );
    }

    #[test]
    fn test_dark_mode_only_touches_primary_and_neutral() {
        let catalog = Catalog::load().unwrap();
        let base = DesignTokens::default();
        let merged = merge_tokens(&base, Some(&catalog.style("dark-mode").unwrap().tokens));

        assert_eq!(merged.colors.primary.shade_500, "#0ea5e9");
        assert_eq!(merged.colors.neutral.shade_50, "#18181b");
        assert_eq!(merged.colors.secondary, base.colors.secondary);
        assert_eq!(merged.typography, base.typography);
        assert_eq!(merged.border_radius, base.border_radius);
    }

    #[test]
    fn test_vibrant_bold_weights() {
        let catalog = Catalog::load().unwrap();
        let merged = merge_tokens(
            &DesignTokens::default(),
            Some(&catalog.style("vibrant-bold").unwrap().tokens),
        );
        assert_eq!(merged.typography.font_weight.bold, 900);
        assert_eq!(merged.typography.font_weight.light, 300);
    }
}
