//! Artifact generation and export.
//!
//! Generators are pure functions from a [`WizardState`](crate::wizard::WizardState)
//! to text. The [`orchestrator`] sequences them, reports progress, and hands
//! the result to an [`ArtifactSink`].

pub mod archive;
pub mod components;
pub mod config_files;
pub mod docs;
pub mod orchestrator;
pub mod samples;
pub mod stylesheets;
pub mod token_formats;
pub mod wireframe;

pub use archive::ArchiveBuilder;
pub use components::{generate_components, generator_for, ComponentGenerator};
pub use orchestrator::{
    generate_output, Artifact, ArtifactSink, DirectorySink, ExportProgress, ExportStatus,
    Exporter, GeneratedOutput, MemorySink,
};
pub use token_formats::TokenFormat;
pub use wireframe::{generate_wireframe, plan_layout, LayoutPlan};

/// A named text file produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name, relative to the directory it is placed in
    pub name: String,
    /// File contents
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Escapes text for insertion into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
