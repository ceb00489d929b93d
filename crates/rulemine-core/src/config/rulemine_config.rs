//! Top-level rulemine configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AmbiguousIncludePolicy, AnalysisConfig, EnrichmentConfig, ScanConfig};
use crate::constants::{DEFAULT_MIN_DOMAIN_ATTRIBUTES, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RULEMINE_*`)
/// 3. Project config (`rulemine.toml` in project root)
/// 4. User config (`~/.rulemine/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleMineConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
    pub enrichment: EnrichmentConfig,
}

/// Override arguments supplied by an embedding front-end.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub min_domain_attributes: Option<usize>,
    pub high_confidence_threshold: Option<f64>,
}

impl RuleMineConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RuleMineConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.enrichment.high_confidence_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "enrichment.high_confidence_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(min) = config.analysis.min_domain_attributes {
            if min < DEFAULT_MIN_DOMAIN_ATTRIBUTES {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.min_domain_attributes".to_string(),
                    message: format!("must be at least {DEFAULT_MIN_DOMAIN_ATTRIBUTES}"),
                });
            }
        }
        let vocabularies = [
            ("analysis.rule_prefixes", &config.analysis.rule_prefixes),
            ("analysis.rule_suffixes", &config.analysis.rule_suffixes),
            (
                "analysis.validation_indicators",
                &config.analysis.validation_indicators,
            ),
            (
                "analysis.calculation_indicators",
                &config.analysis.calculation_indicators,
            ),
            ("scan.extensions", &config.scan.extensions),
        ];
        for (field, values) in vocabularies {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "entries must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.rulemine/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".rulemine").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut RuleMineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: RuleMineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; set values in `other` win.
    fn merge(base: &mut RuleMineConfig, other: &RuleMineConfig) {
        // Scan
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }
        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if !other.scan.extra_ignores.is_empty() {
            base.scan.extra_ignores = other.scan.extra_ignores.clone();
        }

        // Analysis
        let a = &other.analysis;
        if !a.rule_prefixes.is_empty() {
            base.analysis.rule_prefixes = a.rule_prefixes.clone();
        }
        if !a.rule_suffixes.is_empty() {
            base.analysis.rule_suffixes = a.rule_suffixes.clone();
        }
        if !a.validation_indicators.is_empty() {
            base.analysis.validation_indicators = a.validation_indicators.clone();
        }
        if !a.calculation_indicators.is_empty() {
            base.analysis.calculation_indicators = a.calculation_indicators.clone();
        }
        if !a.generic_type_names.is_empty() {
            base.analysis.generic_type_names = a.generic_type_names.clone();
        }
        if a.min_domain_attributes.is_some() {
            base.analysis.min_domain_attributes = a.min_domain_attributes;
        }
        if a.discover_parameter_types.is_some() {
            base.analysis.discover_parameter_types = a.discover_parameter_types;
        }
        if a.ambiguous_includes.is_some() {
            base.analysis.ambiguous_includes = a.ambiguous_includes;
        }

        // Enrichment
        if other.enrichment.high_confidence_threshold.is_some() {
            base.enrichment.high_confidence_threshold = other.enrichment.high_confidence_threshold;
        }
        if other.enrichment.batch_size.is_some() {
            base.enrichment.batch_size = other.enrichment.batch_size;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RULEMINE_SCAN_MAX_FILE_SIZE`, `RULEMINE_ANALYSIS_MIN_DOMAIN_ATTRIBUTES`, etc.
    fn apply_env_overrides(config: &mut RuleMineConfig) {
        if let Ok(val) = std::env::var("RULEMINE_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RULEMINE_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RULEMINE_ANALYSIS_MIN_DOMAIN_ATTRIBUTES") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.min_domain_attributes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RULEMINE_ANALYSIS_AMBIGUOUS_INCLUDES") {
            match val.as_str() {
                "first_match" => {
                    config.analysis.ambiguous_includes = Some(AmbiguousIncludePolicy::FirstMatch)
                }
                "skip" => config.analysis.ambiguous_includes = Some(AmbiguousIncludePolicy::Skip),
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("RULEMINE_ENRICHMENT_HIGH_CONFIDENCE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.enrichment.high_confidence_threshold = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RuleMineConfig, cli: &CliOverrides) {
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
        if let Some(v) = cli.min_domain_attributes {
            config.analysis.min_domain_attributes = Some(v);
        }
        if let Some(v) = cli.high_confidence_threshold {
            config.enrichment.high_confidence_threshold = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
