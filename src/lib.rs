//! tokenforge library
//!
//! Design-token merging, color scale generation, and code generation for
//! design systems: token formats, stylesheets, component boilerplate,
//! wireframes, documentation, and zip bundles.

// Module declarations
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod wizard;
