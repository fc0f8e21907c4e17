//! tokenforge - design system generator
//!
//! Reads a project manifest and generates design tokens, stylesheets,
//! component boilerplate, documentation, and wireframes.

use clap::{Parser, Subcommand};
use tokenforge::cli::{
    CatalogArgs, CliResult, ConfigArgs, ExitCode, ExportArgs, InitArgs, ScaleArgs, TokensArgs,
    WireframeArgs,
};
use tokenforge::config::Config;
use tokenforge::logging;

/// tokenforge - design system generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter project manifest
    Init(InitArgs),
    /// Export a design system from a project manifest
    Export(ExportArgs),
    /// Emit the project's tokens in one format
    Tokens(TokensArgs),
    /// Print the color scale generated from a base color
    Scale(ScaleArgs),
    /// Write the wireframe preview for a project
    Wireframe(WireframeArgs),
    /// List built-in styles, page templates and components
    Catalog(CatalogArgs),
    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Init(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Tokens(args) => args.execute(),
            Self::Scale(args) => args.execute(),
            Self::Wireframe(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // A broken config file is reported by the command itself
    let level = Config::load()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "warn".to_string());
    logging::init_logging(&level, cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(error) => {
            eprintln!("Error: {error}");
            error.exit_code().into()
        }
    }
}
