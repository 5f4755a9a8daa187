//! File-based configuration.
//!
//! A TOML file can fix the significance level, the Kolmogorov-Smirnov
//! method, externally supplied critical values, the output format and
//! the demonstration generator. Every section is optional.
//!
//! ```toml
//! [significance]
//! alpha = 0.05
//! ks_method = "asymptotic"
//!
//! [critical_values]   # replaces computed values when present
//! z = 1.96
//! d = 0.1
//! chi_low = 0.0
//! chi_high = 20.0
//!
//! [output]
//! format = "table"
//! decimals = 4
//! metrics = false
//!
//! [generate]
//! count = 100
//! seed = 42
//! ```

use crate::critical::{CriticalValues, KsMethod, SignificanceLevel, Thresholds};
use crate::error::ValidationError;
use crate::report::EngineConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Significance level and KS method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignificanceConfig {
    pub alpha: f64,
    pub ks_method: KsMethod,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            alpha: SignificanceLevel::DEFAULT.value(),
            ks_method: KsMethod::default(),
        }
    }
}

/// Critical values transcribed from tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuppliedCriticalValues {
    pub z: f64,
    pub d: f64,
    pub chi_low: f64,
    pub chi_high: f64,
}

impl SuppliedCriticalValues {
    pub fn to_critical_values(self) -> Result<CriticalValues, ValidationError> {
        CriticalValues::supplied(self.z, self.d, self.chi_low, self.chi_high)
    }
}

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown table with a statistics section.
    #[default]
    Table,
    /// Machine-readable TOML document.
    Toml,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places in the table format.
    pub decimals: usize,
    /// Print Prometheus metrics after the report.
    pub metrics: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            decimals: 4,
            metrics: false,
        }
    }
}

/// Demonstration generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of values to generate.
    pub count: usize,
    /// Fixed seed; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: None,
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub significance: SignificanceConfig,
    #[serde(default)]
    pub critical_values: Option<SuppliedCriticalValues>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        SignificanceLevel::new(self.significance.alpha)?;
        if let Some(values) = self.critical_values {
            values.to_critical_values()?;
        }
        Ok(())
    }

    /// Engine settings implied by this configuration.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            ks_method: self.significance.ks_method,
        }
    }

    /// Supplied critical values win over the significance level.
    pub fn thresholds(&self) -> Result<Thresholds, ValidationError> {
        match self.critical_values {
            Some(values) => Ok(Thresholds::Supplied(values.to_critical_values()?)),
            None => Ok(Thresholds::Significance(SignificanceLevel::new(
                self.significance.alpha,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.thresholds().unwrap(),
            Thresholds::Significance(SignificanceLevel::DEFAULT)
        );
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.significance.alpha, 0.05);
        assert_eq!(config.significance.ks_method, KsMethod::Asymptotic);
        assert!(config.critical_values.is_none());
    }

    #[test]
    fn test_full_file() {
        let config = FileConfig::from_toml(
            r#"
            [significance]
            alpha = 0.01
            ks_method = "table"

            [critical_values]
            z = 1.96
            d = 0.1
            chi_low = 0.0
            chi_high = 20.0

            [output]
            format = "toml"
            decimals = 6
            metrics = true

            [generate]
            count = 250
            seed = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.engine().ks_method, KsMethod::Table);
        assert!(matches!(config.thresholds().unwrap(), Thresholds::Supplied(_)));
        assert_eq!(config.output.format, OutputFormat::Toml);
        assert_eq!(config.generate.seed, Some(9));
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let result = FileConfig::from_toml("[significance]\nalpha = 1.5\n");
        assert!(matches!(
            result,
            Err(ConfigError::Invalid(ValidationError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_malformed_critical_values_rejected() {
        let result = FileConfig::from_toml(
            "[critical_values]\nz = 1.96\nd = 0.1\nchi_low = 30.0\nchi_high = 20.0\n",
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_partial_section() {
        let config = FileConfig::from_toml("[output]\nmetrics = true\n").unwrap();
        assert!(config.output.metrics);
        assert_eq!(config.output.decimals, 4);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            FileConfig::from_toml("[significance\nalpha = "),
            Err(ConfigError::ParseError(_))
        ));
    }
}
