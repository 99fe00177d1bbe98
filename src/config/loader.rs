// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MIN_DISTANCE, DEFAULT_OUTPUT_PATH, DEFAULT_THRESHOLD};
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoaded, ConfigValidationFailed};
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for an insertion detection run.
///
/// Every field is optional; anything left out falls back to the built-in defaults in
/// [`consts`](crate::config::consts). Command-line flags take precedence over values
/// loaded from a file.
///
/// # Fields
/// * `detection` - Detector selection and tuning
/// * `output` - Where results are written
///
/// # Example
/// ```yaml
/// detection:
///   method: parallel_frame_difference
///   threshold: 4.5
///   min_distance: 3
///   threads: 8
/// output:
///   path: results/events.csv
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionOptions,
    #[serde(default)]
    pub output: OutputOptions,
}

/// Detection method used to scan the stack.
///
/// Both methods report identical events; they differ only in scheduling.
///
/// # Variants
/// * `FrameDifference` - Frame pairs processed one after another
/// * `ParallelFrameDifference` - Frame pairs processed concurrently on a rayon pool
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Clone, Copy, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DetectionMethod {
    #[default]
    FrameDifference,
    ParallelFrameDifference,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::FrameDifference => "frame_difference",
            DetectionMethod::ParallelFrameDifference => "parallel_frame_difference",
        }
    }
}

/// Detector tuning options.
///
/// # Fields
/// * `method` - Detection method (defaults to `frame_difference`)
/// * `threshold` - Threshold in background standard deviations (defaults to 5.0)
/// * `min_distance` - Minimum pixel distance between events in a frame (defaults to 3)
/// * `threads` - Worker threads for the parallel method (defaults to rayon's global pool)
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DetectionOptions {
    pub method: Option<DetectionMethod>,
    pub threshold: Option<f64>,
    pub min_distance: Option<usize>,
    pub threads: Option<usize>,
}

impl DetectionOptions {
    pub fn get_method(&self) -> DetectionMethod {
        self.method.unwrap_or_default()
    }

    pub fn get_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    pub fn get_min_distance(&self) -> usize {
        self.min_distance.unwrap_or(DEFAULT_MIN_DISTANCE)
    }
}

/// Output options.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputOptions {
    pub path: Option<PathBuf>,
}

impl OutputOptions {
    pub fn get_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }
}

/// Values supplied on the command line; `None` leaves the config value untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub method: Option<DetectionMethod>,
    pub threshold: Option<f64>,
    pub min_distance: Option<usize>,
    pub threads: Option<usize>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Apply command-line overrides on top of file values.
    ///
    /// # Example
    /// ```
    /// use synapse_analysis::config::{Config, Overrides};
    ///
    /// let mut config = Config::default();
    /// config.detection.threshold = Some(4.0);
    /// config.apply_overrides(Overrides { threshold: Some(6.0), ..Default::default() });
    /// assert_eq!(config.detection.get_threshold(), 6.0);
    /// ```
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if overrides.method.is_some() {
            self.detection.method = overrides.method;
        }
        if overrides.threshold.is_some() {
            self.detection.threshold = overrides.threshold;
        }
        if overrides.min_distance.is_some() {
            self.detection.min_distance = overrides.min_distance;
        }
        if overrides.threads.is_some() {
            self.detection.threads = overrides.threads;
        }
        if overrides.output.is_some() {
            self.output.path = overrides.output;
        }
    }
}

/// Config file syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` selects TOML; every other extension is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Parse config text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => {
            // An empty YAML document means "all defaults"
            if content.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(content)?
            }
        }
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content, format)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
    }
    .log();

    Ok(cfg)
}

/// Load and validate a config from a YAML or TOML file
///
/// This function loads the configuration and checks that every value it sets is
/// usable by the detectors.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    check_config(&cfg)?;
    Ok(cfg)
}

/// Validate a config, logging and wrapping any failures as a [`ConfigError`].
pub fn check_config(cfg: &Config) -> Result<(), ConfigError> {
    if let Err(validation_errors) = crate::config::validate_config(cfg) {
        let error_messages: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        ConfigValidationFailed {
            error_count: validation_errors.len(),
            errors: &error_messages.join("; "),
        }
        .log();
        return Err(ConfigError::Validation(validation_errors));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
detection:
  method: parallel_frame_difference
  threshold: 4.5
  min_distance: 2
output:
  path: out/events.csv
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.detection.get_method(), DetectionMethod::ParallelFrameDifference);
        assert_eq!(cfg.detection.get_threshold(), 4.5);
        assert_eq!(cfg.detection.get_min_distance(), 2);
        assert_eq!(cfg.output.get_path(), PathBuf::from("out/events.csv"));
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg = parse_config("detection: {}\n", ConfigFormat::Yaml).unwrap();

        assert_eq!(cfg.detection.get_method(), DetectionMethod::FrameDifference);
        assert_eq!(cfg.detection.get_threshold(), 5.0);
        assert_eq!(cfg.detection.get_min_distance(), 3);
        assert_eq!(cfg.detection.threads, None);
        assert_eq!(cfg.output.get_path(), PathBuf::from("events.csv"));
    }

    #[test]
    fn test_empty_yaml_is_default_config() {
        let cfg = parse_config("   \n", ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[detection]
threshold = 3.0
threads = 4

[output]
path = "events.csv"
"#;

        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.detection.get_threshold(), 3.0);
        assert_eq!(cfg.detection.threads, Some(4));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let yaml = r#"
detection:
  treshold: 4.0
"#;

        let err = parse_config(yaml, ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = parse_config("detection:\n  method: wavelet\n", ConfigFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("wavelet"));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let mut cfg = parse_config(
            "detection:\n  threshold: 4.0\n  min_distance: 7\n",
            ConfigFormat::Yaml,
        )
        .unwrap();

        cfg.apply_overrides(Overrides {
            min_distance: Some(0),
            output: Some(PathBuf::from("custom.csv")),
            ..Default::default()
        });

        assert_eq!(cfg.detection.get_threshold(), 4.0);
        assert_eq!(cfg.detection.get_min_distance(), 0);
        assert_eq!(cfg.output.get_path(), PathBuf::from("custom.csv"));
    }
}
