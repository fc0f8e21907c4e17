//! CLI command handlers for tokenforge.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps failures to [`ExitCode`]s.

pub mod catalog;
pub mod common;
pub mod config;
pub mod export;
pub mod init;
pub mod scale;
pub mod tokens;
pub mod wireframe;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use init::InitArgs;
pub use scale::ScaleArgs;
pub use tokens::TokensArgs;
pub use wireframe::WireframeArgs;
