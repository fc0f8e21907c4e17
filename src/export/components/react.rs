//! React function components (`.jsx`).

use super::{to_pascal_case, ComponentGenerator};
use crate::models::ComponentConfig;

/// Generates React components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactGenerator;

impl ComponentGenerator for ReactGenerator {
    fn file_extension(&self) -> &'static str {
        "jsx"
    }

    fn render(&self, component: &ComponentConfig) -> String {
        let name = to_pascal_case(&component.name);
        let body = match component.id.as_str() {
            "button" => BUTTON.to_string(),
            "card" => CARD.to_string(),
            "input-field" => INPUT.to_string(),
            "navbar" => NAVBAR.to_string(),
            _ => generic(&name, &component.id),
        };

        format!(
            "{}\n\n{name}.displayName = '{name}';",
            body.replace("__NAME__", &name)
        )
    }
}

fn generic(name: &str, id: &str) -> String {
    format!(
        r#"import React from 'react';
import './{name}.css';

export const {name} = ({{ children, ...props }}) => {{
  return (
    <div className="{id}" {{...props}}>
      {{children}}
    </div>
  );
}};"#
    )
}

const BUTTON: &str = r"import React from 'react';
import './Button.css';

export const __NAME__ = ({
  children,
  variant = 'primary',
  size = 'medium',
  onClick,
  disabled = false,
  ...props
}) => {
  return (
    <button
      className={`btn btn-${variant} btn-${size}`}
      onClick={onClick}
      disabled={disabled}
      {...props}
    >
      {children}
    </button>
  );
};";

const CARD: &str = r#"import React from 'react';
import './Card.css';

export const __NAME__ = ({
  title,
  children,
  footer,
  variant = 'default',
  ...props
}) => {
  return (
    <div className={`card card-${variant}`} {...props}>
      {title && (
        <div className="card-header">
          <h3 className="card-title">{title}</h3>
        </div>
      )}
      <div className="card-content">
        {children}
      </div>
      {footer && (
        <div className="card-footer">
          {footer}
        </div>
      )}
    </div>
  );
};"#;

const INPUT: &str = r#"import React, { useId } from 'react';
import './Input.css';

export const __NAME__ = ({
  label,
  type = 'text',
  placeholder,
  value,
  onChange,
  error,
  helperText,
  required = false,
  ...props
}) => {
  const inputId = useId();

  return (
    <div className="input-group">
      {label && (
        <label htmlFor={inputId} className="input-label">
          {label}
          {required && <span className="required">*</span>}
        </label>
      )}
      <input
        id={inputId}
        type={type}
        className={`input ${error ? 'input-error' : ''}`}
        placeholder={placeholder}
        value={value}
        onChange={onChange}
        required={required}
        aria-invalid={!!error}
        aria-describedby={error ? `${inputId}-error` : helperText ? `${inputId}-helper` : undefined}
        {...props}
      />
      {error && (
        <span id={`${inputId}-error`} className="input-error-message">
          {error}
        </span>
      )}
      {helperText && !error && (
        <span id={`${inputId}-helper`} className="input-helper-text">
          {helperText}
        </span>
      )}
    </div>
  );
};"#;

const NAVBAR: &str = r#"import React, { useState } from 'react';
import './Navbar.css';

export const __NAME__ = ({
  logo,
  menuItems = [],
  ctaButton,
  variant = 'default'
}) => {
  const [isMenuOpen, setIsMenuOpen] = useState(false);

  return (
    <nav className={`navbar navbar-${variant}`}>
      <div className="navbar-container">
        <div className="navbar-brand">
          {logo}
        </div>

        <button
          className="navbar-toggle"
          onClick={() => setIsMenuOpen(!isMenuOpen)}
          aria-label="Toggle navigation menu"
        >
          <span className="navbar-toggle-icon"></span>
          <span className="navbar-toggle-icon"></span>
          <span className="navbar-toggle-icon"></span>
        </button>

        <div className={`navbar-menu ${isMenuOpen ? 'is-active' : ''}`}>
          <ul className="navbar-nav">
            {menuItems.map((item, index) => (
              <li key={index} className="navbar-item">
                <a href={item.href} className="navbar-link">
                  {item.label}
                </a>
              </li>
            ))}
          </ul>

          {ctaButton && (
            <div className="navbar-cta">
              {ctaButton}
            </div>
          )}
        </div>
      </div>
    </nav>
  );
};"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn component(id: &str, name: &str) -> ComponentConfig {
        ComponentConfig {
            id: id.to_string(),
            name: name.to_string(),
            category: "forms".to_string(),
            variants: vec![],
            props: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_button_template() {
        let source = ReactGenerator.render(&component("button", "Button"));
        assert!(source.starts_with("import React from 'react';"));
        assert!(source.contains("export const Button = ({"));
        assert!(source.contains("className={`btn btn-${variant} btn-${size}`}"));
        assert!(source.ends_with("Button.displayName = 'Button';"));
    }

    #[test]
    fn test_input_template_uses_pascal_name() {
        let source = ReactGenerator.render(&component("input-field", "Input Field"));
        assert!(source.contains("export const InputField = ({"));
        assert!(source.contains("aria-invalid={!!error}"));
    }

    #[test]
    fn test_generic_template() {
        let source = ReactGenerator.render(&component("progress-bar", "Progress Bar"));
        assert!(source.contains("import './ProgressBar.css';"));
        assert!(source.contains(r#"<div className="progress-bar" {...props}>"#));
        assert!(source.ends_with("ProgressBar.displayName = 'ProgressBar';"));
    }
}
