//! Scale command for previewing a generated color scale.

use crate::cli::common::{CliError, CliResult};
use crate::models::{generate_color_scale, RgbColor};
use clap::Args;

/// Print the ten-step color scale for a base color
#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Base color as #RRGGBB
    #[arg(value_name = "BASE_HEX", allow_hyphen_values = true)]
    pub base: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScaleArgs {
    /// Execute the scale command
    pub fn execute(&self) -> CliResult<()> {
        let base = RgbColor::from_hex(&self.base)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let scale = generate_color_scale(&base.to_hex());

        if self.json {
            let json = serde_json::to_string_pretty(&scale)
                .map_err(|e| CliError::io(format!("Failed to serialize scale: {e}")))?;
            println!("{json}");
        } else {
            for (shade, hex) in scale.entries() {
                println!("{shade:>4}  {hex}");
            }
        }

        Ok(())
    }
}
