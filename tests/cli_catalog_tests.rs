//! End-to-end tests for `tokenforge catalog`.

mod fixtures;
use fixtures::*;

#[test]
fn test_catalog_styles_text() {
    let output = run(&["catalog", "styles"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let stdout = stdout(&output);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.lines().next().unwrap().starts_with("modern-clean"));
    assert!(stdout.contains("dark-mode"));
}

#[test]
fn test_catalog_styles_json_omits_tokens() {
    let output = run(&["catalog", "styles", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let styles: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let first = &styles.as_array().unwrap()[0];
    assert_eq!(first["id"], "modern-clean");
    assert!(first["name"].is_string());
    assert!(first.get("tokens").is_none());
}

#[test]
fn test_catalog_pages_json() {
    let output = run(&["catalog", "pages", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let pages: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let pages = pages.as_array().unwrap();
    assert_eq!(pages.len(), 18);
    assert!(pages.iter().all(|p| p["components"].is_array()));

    let login = pages.iter().find(|p| p["id"] == "login-page").unwrap();
    assert_eq!(login["category"], "auth");
}

#[test]
fn test_catalog_components_text() {
    let output = run(&["catalog", "components"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout(&output);
    assert_eq!(stdout.lines().count(), 18);
    assert!(stdout.contains("data-table"));
}

#[test]
fn test_catalog_requires_subcommand() {
    let output = run(&["catalog"]);
    assert_ne!(output.status.code(), Some(0));
}
