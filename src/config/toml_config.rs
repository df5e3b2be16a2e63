use crate::core::ConfigProvider;
use crate::utils::error::{Result, SignalError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub analysis: Option<AnalysisConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub dividers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
    pub stage_timing: Option<bool>,
}

impl TomlConfig {
    /// Loads and deserializes a configuration file.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(SignalError::ConfigError {
                message: format!("Config file not found: {}", path),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn stage_timing(&self) -> bool {
        self.monitoring
            .as_ref()
            .map(|m| m.enabled && m.stage_timing.unwrap_or(false))
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn dividers(&self) -> &[String] {
        self.analysis
            .as_ref()
            .and_then(|a| a.dividers.as_deref())
            .unwrap_or(&[])
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.source.r#type != "file" {
            return Err(SignalError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: self.source.r#type.clone(),
                reason: "Only 'file' sources are supported".to_string(),
            });
        }

        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_output_formats("load.output_formats", &self.load.output_formats)?;

        if let Some(analysis) = &self.analysis {
            if let Some(dividers) = &analysis.dividers {
                for divider in dividers {
                    validation::validate_packet_literal("analysis.dividers", divider)?;
                }
            }
        }

        if let Some(monitoring) = &self.monitoring {
            if let Some(level) = &monitoring.log_level {
                let allowed = ["trace", "debug", "info", "warn", "error"];
                if !allowed.contains(&level.as_str()) {
                    return Err(SignalError::InvalidConfigValueError {
                        field: "monitoring.log_level".to_string(),
                        value: level.clone(),
                        reason: "Expected one of: trace, debug, info, warn, error".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_toml() -> &'static str {
        r#"
[pipeline]
name = "packet-analysis"
description = "Pair ordering and divider ranks"
version = "1.0"

[source]
type = "file"
path = "input.txt"

[load]
output_path = "./output"
output_formats = ["json"]
"#
    }

    #[test]
    fn parses_a_minimal_config() {
        let config: TomlConfig = toml::from_str(minimal_toml()).unwrap();
        assert_eq!(config.pipeline.name, "packet-analysis");
        assert_eq!(config.input_path(), "input.txt");
        assert_eq!(config.output_path(), "./output");
        assert!(config.dividers().is_empty());
        assert!(!config.stage_timing());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_analysis_and_monitoring_sections() {
        let toml_text = format!(
            "{}\n[analysis]\ndividers = [\"[[2]]\", \"[[6]]\"]\n\n[monitoring]\nenabled = true\nstage_timing = true\nlog_level = \"debug\"\n",
            minimal_toml()
        );
        let config: TomlConfig = toml::from_str(&toml_text).unwrap();
        assert_eq!(config.dividers(), ["[[2]]".to_string(), "[[6]]".to_string()]);
        assert!(config.stage_timing());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_a_non_file_source() {
        let toml_text = minimal_toml().replace("type = \"file\"", "type = \"api\"");
        let config: TomlConfig = toml::from_str(&toml_text).unwrap();
        assert!(matches!(
            config.validate(),
            Err(SignalError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn rejects_a_malformed_divider_literal() {
        let toml_text = format!("{}\n[analysis]\ndividers = [\"[[2]\"]\n", minimal_toml());
        let config: TomlConfig = toml::from_str(&toml_text).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_an_unknown_output_format() {
        let toml_text = minimal_toml().replace("[\"json\"]", "[\"xml\"]");
        let config: TomlConfig = toml::from_str(&toml_text).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_an_unknown_log_level() {
        let toml_text = format!(
            "{}\n[monitoring]\nenabled = true\nlog_level = \"loud\"\n",
            minimal_toml()
        );
        let config: TomlConfig = toml::from_str(&toml_text).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_config_file_is_a_config_error() {
        let err = TomlConfig::from_file("/nonexistent/signal.toml").unwrap_err();
        assert!(matches!(err, SignalError::ConfigError { .. }));
    }
}
