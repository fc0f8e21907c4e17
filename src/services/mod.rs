//! Service layer for file-backed operations.
//!
//! Services wrap disk I/O around the pure models and generators.

pub mod project;

// Re-export commonly used types
pub use project::{ProjectManifest, ProjectService};
