//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::wizard::ExportKind;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default artifact output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default export format (json, css, scss, tailwind, styled-theme, bundle)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Default log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.output_dir.is_none() && self.format.is_none() && self.log_level.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --output-dir, --format, or --log-level",
            ));
        }

        let mut config = load_config()?;

        if let Some(format) = &self.format {
            config.export.format = format
                .parse::<ExportKind>()
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        if let Some(level) = &self.log_level {
            config
                .set_log_level(level)
                .map_err(|e| CliError::validation(format!("{e}")))?;
        }

        if let Some(path) = &self.output_dir {
            if path.is_file() {
                return Err(CliError::validation(format!(
                    "Output directory is a file: {}",
                    path.display()
                )));
            }
            std::fs::create_dir_all(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to create output directory {}: {e}",
                    path.display()
                ))
            })?;
            config.paths.output_dir = Some(path.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    if let Ok(path) = Config::config_file_path() {
        println!("Config file: {}", path.display());
        println!();
    }

    println!("[paths]");
    match &config.paths.output_dir {
        Some(dir) => println!("  output_dir = {}", dir.display()),
        None => println!("  output_dir = (current directory)"),
    }
    println!();
    println!("[export]");
    println!("  format = {}", config.export.format);
    println!(
        "  include_documentation = {}",
        config.export.include_documentation
    );
    println!("  include_examples = {}", config.export.include_examples);
    println!();
    println!("[logging]");
    println!("  level = {}", config.logging.level);
}
