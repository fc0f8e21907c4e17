//! Catalog listing commands.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;

/// List built-in styles, page templates and components
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List style presets
    Styles(ListArgs),
    /// List page templates
    Pages(ListArgs),
    /// List components
    Components(ListArgs),
}

/// Listing options
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct StyleEntry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

impl CatalogArgs {
    /// Execute catalog subcommand
    pub fn execute(&self) -> CliResult<()> {
        let catalog =
            Catalog::load().map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;

        match &self.command {
            CatalogCommand::Styles(args) => {
                if args.json {
                    // Token payloads are omitted from the listing
                    let entries: Vec<_> = catalog
                        .styles()
                        .iter()
                        .map(|style| StyleEntry {
                            id: &style.id,
                            name: &style.name,
                            description: &style.description,
                        })
                        .collect();
                    print_json(&entries)?;
                } else {
                    for style in catalog.styles() {
                        println!("{:<20} {}", style.id, style.name);
                    }
                }
            }
            CatalogCommand::Pages(args) => {
                if args.json {
                    print_json(catalog.pages())?;
                } else {
                    for page in catalog.pages() {
                        println!("{:<24} {:<10} {}", page.id, page.category, page.name);
                    }
                }
            }
            CatalogCommand::Components(args) => {
                if args.json {
                    print_json(catalog.components())?;
                } else {
                    for component in catalog.components() {
                        println!(
                            "{:<18} {:<12} {}",
                            component.id, component.category, component.name
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize catalog: {e}")))?;
    println!("{json}");
    Ok(())
}
