use crate::domain::model::{RiderOptions, RiderType};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Parser)]
#[command(name = "riderforge")]
#[command(about = "Generate technical or hospitality riders from a roster file")]
pub struct CliConfig {
    /// Roster file, JSON or TOML by extension
    pub roster: String,

    #[arg(long, value_enum, default_value = "technical")]
    pub rider_type: RiderType,

    #[arg(long, help = "Include the backline section (technical riders only)")]
    pub include_backline: bool,

    #[arg(long, help = "Include the lighting section (technical riders only)")]
    pub include_lighting: bool,

    #[arg(long, help = "Stage geometry table (TOML) overriding the built-in layout")]
    pub geometry: Option<String>,

    #[arg(long, help = "Write the rider JSON here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn options(&self) -> RiderOptions {
        RiderOptions {
            include_backline: self.include_backline,
            include_lighting: self.include_lighting,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("roster", &self.roster)?;
        if let Some(geometry) = &self.geometry {
            validate_path("geometry", geometry)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}
