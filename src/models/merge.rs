//! Deep merge of complete records with partial overrides.
//!
//! Two flavours live here: the typed [`Merge`] trait implemented by every
//! token record, and [`deep_merge_json`] for untyped JSON documents such as
//! generated `package.json` files.

use crate::models::tokens::{DesignTokens, DesignTokensPatch};
use serde_json::Value;

/// A complete record that can absorb a partial override of itself.
///
/// Leaves present in the patch replace the corresponding leaves; absent
/// leaves are retained. Nested records merge recursively.
pub trait Merge: Clone {
    /// The partial counterpart of `Self`.
    type Patch: Default;

    /// Applies `patch` in place.
    fn merge(&mut self, patch: &Self::Patch);

    /// Returns a merged copy, leaving `self` untouched.
    fn merged(&self, patch: &Self::Patch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// Merges an optional token override into a base token set.
///
/// An absent override returns a copy of `base`. The result is always a
/// complete record.
///
/// # Examples
///
/// ```
/// use tokenforge::models::{merge_tokens, DesignTokens, DesignTokensPatch};
///
/// let base = DesignTokens::default();
/// let patch: DesignTokensPatch =
///     serde_json::from_str(r##"{"colors": {"primary": {"500": "#ff0000"}}}"##).unwrap();
///
/// let merged = merge_tokens(&base, Some(&patch));
/// assert_eq!(merged.colors.primary.shade_500, "#ff0000");
/// assert_eq!(merged.colors.primary.shade_600, base.colors.primary.shade_600);
/// ```
pub fn merge_tokens(base: &DesignTokens, patch: Option<&DesignTokensPatch>) -> DesignTokens {
    match patch {
        Some(patch) => base.merged(patch),
        None => base.clone(),
    }
}

/// Recursively merges `patch` into `base`.
///
/// Objects merge key-by-key; arrays and scalars in the patch replace the base
/// value wholesale; `null` in the patch is ignored.
pub fn deep_merge_json(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_json(base_value, patch_value),
                    None => {
                        if !patch_value.is_null() {
                            base_map.insert(key.clone(), patch_value.clone());
                        }
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tokens::{ColorScalePatch, ColorsPatch, SpacingPatch};
    use serde_json::json;

    fn primary_500_patch(value: &str) -> DesignTokensPatch {
        DesignTokensPatch {
            colors: Some(ColorsPatch {
                primary: Some(ColorScalePatch {
                    shade_500: Some(value.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_without_patch_is_identity() {
        let base = DesignTokens::default();
        assert_eq!(merge_tokens(&base, None), base);
        assert_eq!(merge_tokens(&base, Some(&DesignTokensPatch::default())), base);
    }

    #[test]
    fn test_merge_override_wins_and_rest_is_kept() {
        let base = DesignTokens::default();
        let merged = merge_tokens(&base, Some(&primary_500_patch("#ff0000")));

        assert_eq!(merged.colors.primary.shade_500, "#ff0000");
        assert_eq!(merged.colors.primary.shade_600, "#2563eb");
        assert_eq!(merged.colors.secondary, base.colors.secondary);
        assert_eq!(merged.typography, base.typography);
        assert_eq!(merged.spacing, base.spacing);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = DesignTokens::default();
        let patch = primary_500_patch("#123456");
        let once = merge_tokens(&base, Some(&patch));
        let twice = merge_tokens(&once, Some(&patch));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_later_patch_wins() {
        let base = DesignTokens::default();
        let first = merge_tokens(&base, Some(&primary_500_patch("#111111")));
        let second = merge_tokens(&first, Some(&primary_500_patch("#222222")));
        assert_eq!(second.colors.primary.shade_500, "#222222");
    }

    #[test]
    fn test_merge_leaf_group() {
        let base = DesignTokens::default();
        let patch = DesignTokensPatch {
            spacing: Some(SpacingPatch {
                md: Some("1.25rem".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let merged = merge_tokens(&base, Some(&patch));
        assert_eq!(merged.spacing.md, "1.25rem");
        assert_eq!(merged.spacing.lg, base.spacing.lg);
    }

    #[test]
    fn test_deep_merge_json_objects_recursively() {
        let mut base = json!({"a": {"b": 1, "c": 2}, "d": 3});
        deep_merge_json(&mut base, &json!({"a": {"c": 20, "e": 5}}));
        assert_eq!(base, json!({"a": {"b": 1, "c": 20, "e": 5}, "d": 3}));
    }

    #[test]
    fn test_deep_merge_json_arrays_are_atomic() {
        let mut base = json!({"list": [1, 2, 3]});
        deep_merge_json(&mut base, &json!({"list": [9]}));
        assert_eq!(base, json!({"list": [9]}));
    }

    #[test]
    fn test_deep_merge_json_ignores_null() {
        let mut base = json!({"keep": "me"});
        deep_merge_json(&mut base, &json!({"keep": null, "absent": null}));
        assert_eq!(base, json!({"keep": "me"}));
    }
}
