pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "signal-sort")]
#[command(about = "Parses packet literals, checks pair ordering and ranks dividers")]
pub struct CliConfig {
    #[arg(long, default_value = "input.txt")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Divider packet literals; empty means the built-in [[2]] and [[6]]
    #[arg(long, value_delimiter = ',')]
    pub dividers: Vec<String>,

    #[arg(long, value_delimiter = ',', default_value = "json,text")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Log per-stage timing")]
    pub timing: bool,

    #[arg(long, help = "Emit logs as JSON instead of the compact format")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn dividers(&self) -> &[String] {
        &self.dividers
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;

        for divider in &self.dividers {
            validation::validate_packet_literal("dividers", divider)?;
        }

        validation::validate_output_formats("output_formats", &self.output_formats)?;

        Ok(())
    }
}
