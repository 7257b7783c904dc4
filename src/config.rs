//! Run configuration.
//!
//! Configuration is layered, each layer overriding the one before:
//!
//! 1. Stock defaults ([`MockupConfig::default`])
//! 2. A TOML file: `--config <path>`, else `./mockup.toml` when present
//! 3. Command-line flags ([`CliOverrides`])
//!
//! Layers are merged as raw TOML values with [`merge_toml`], then
//! deserialized once and validated once. The result is frozen into a
//! [`RunConfig`] for the lifetime of a run.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [output]
//! dir = "./output"          # Where mockups are written
//! template = "default"      # default | mobile | desktop | tablet
//! format = "png"            # png | jpg | jpeg | webp | gif | avif
//! quality = 90              # 1-100, used by jpg/jpeg and avif
//!
//! [validation]
//! max_file_size_mb = 50
//! min_width = 100
//! min_height = 100
//! enforce = true            # false: log failed checks and transform anyway
//!
//! [logging]
//! level = "info"            # error | warn | info | debug
//! file = "logs/mockup-generator.log"
//! console = false           # Also log to stderr
//! slow_threshold_ms = 1000
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{OUTPUT_FORMAT_NAMES, OutputFormat, Quality, TransformPolicy, ValidationPolicy};
use crate::process::BatchOptions;
use crate::templates::{self, Template};
use crate::validate::{ImageValidator, ValidatorConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mockup.toml";

pub const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Input directory is required (use -i/--input)")]
    MissingInput,
}

/// Configuration as read from `mockup.toml`.
///
/// All fields have defaults. Files need only specify the values they
/// want to override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockupConfig {
    pub output: OutputConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: String,
    /// Template name; unknown names fall back to `default`.
    pub template: String,
    /// Output format name, also the output file extension.
    pub format: String,
    pub quality: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "./output".to_string(),
            template: templates::DEFAULT_TEMPLATE.to_string(),
            format: "png".to_string(),
            quality: 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub max_file_size_mb: u64,
    pub min_width: u32,
    pub min_height: u32,
    /// Skip files that fail validation. When false the verdict is only logged.
    pub enforce: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 50,
            min_width: 100,
            min_height: 100,
            enforce: true,
        }
    }
}

impl ValidationConfig {
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            max_file_size: self.max_file_size_mb.saturating_mul(1024 * 1024),
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        if self.enforce {
            ValidationPolicy::Enforce
        } else {
            ValidationPolicy::Advisory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
    pub console: bool,
    pub slow_threshold_ms: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "logs/mockup-generator.log".to_string(),
            console: false,
            slow_threshold_ms: crate::report::SLOW_OPERATION_MS,
        }
    }
}

impl MockupConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.output.quality) {
            return Err(ConfigError::Validation(
                "output.quality must be 1-100".into(),
            ));
        }
        if self.output.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.dir must not be empty".into(),
            ));
        }
        if self.validation.max_file_size_mb == 0 {
            return Err(ConfigError::Validation(
                "validation.max_file_size_mb must be non-zero".into(),
            ));
        }
        if self.validation.min_width == 0 || self.validation.min_height == 0 {
            return Err(ConfigError::Validation(
                "validation.min_width and validation.min_height must be non-zero".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if self.logging.file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Settings that are accepted but will not behave as the user probably
    /// expects. Reported once at startup.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !templates::is_known(&self.output.template) {
            warnings.push(format!(
                "unknown template '{}', using '{}'",
                self.output.template,
                templates::DEFAULT_TEMPLATE
            ));
        }
        if OutputFormat::from_name(&self.output.format).is_none() {
            warnings.push(format!(
                "output format '{}' is not supported (expected one of: {}); every file will fail",
                self.output.format,
                OUTPUT_FORMAT_NAMES.join(", ")
            ));
        }
        warnings
    }

    /// Freeze this configuration into the settings for one run.
    pub fn run_config(&self, input_dir: Option<&Path>) -> Result<RunConfig, ConfigError> {
        let input_dir = input_dir.ok_or(ConfigError::MissingInput)?;
        Ok(RunConfig {
            input_dir: input_dir.to_path_buf(),
            output_dir: PathBuf::from(&self.output.dir),
            template_name: self.output.template.clone(),
            output_format: self.output.format.clone(),
            quality: Quality::new(self.output.quality),
            validator: self.validation.validator_config(),
            validation: self.validation.policy(),
            slow_threshold_ms: self.logging.slow_threshold_ms,
        })
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template_name: String,
    pub output_format: String,
    pub quality: Quality,
    pub validator: ValidatorConfig,
    pub validation: ValidationPolicy,
    pub slow_threshold_ms: u64,
}

impl RunConfig {
    pub fn template(&self) -> Template {
        templates::resolve(&self.template_name)
    }

    pub fn transform_policy(&self) -> TransformPolicy {
        TransformPolicy {
            template: self.template(),
            format: self.output_format.clone(),
            quality: self.quality,
            validator: ImageValidator::new(self.validator),
            validation: self.validation,
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            policy: self.transform_policy(),
            slow_threshold_ms: self.slow_threshold_ms,
        }
    }
}

/// Values given on the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<PathBuf>,
    pub template: Option<String>,
    pub format: Option<String>,
    pub quality: Option<u32>,
    pub log_level: Option<String>,
    /// `--verbose`: force the console log layer on.
    pub verbose: bool,
}

impl CliOverrides {
    /// The overrides as a sparse TOML table, ready for [`merge_toml`].
    pub fn to_toml(&self) -> toml::Value {
        let mut output = toml::Table::new();
        if let Some(dir) = &self.output_dir {
            output.insert("dir".into(), dir.to_string_lossy().into_owned().into());
        }
        if let Some(template) = &self.template {
            output.insert("template".into(), template.clone().into());
        }
        if let Some(format) = &self.format {
            output.insert("format".into(), format.clone().into());
        }
        if let Some(quality) = self.quality {
            output.insert("quality".into(), i64::from(quality).into());
        }

        let mut logging = toml::Table::new();
        if let Some(level) = &self.log_level {
            logging.insert("level".into(), level.to_ascii_lowercase().into());
        }
        if self.verbose {
            logging.insert("console".into(), true.into());
        }

        let mut root = toml::Table::new();
        if !output.is_empty() {
            root.insert("output".into(), toml::Value::Table(output));
        }
        if !logging.is_empty() {
            root.insert("logging".into(), toml::Value::Table(logging));
        }
        toml::Value::Table(root)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(MockupConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Pick the config file for this invocation.
///
/// An explicit path must exist. Otherwise `mockup.toml` in `cwd` is used
/// when present, and no file at all is fine.
pub fn find_config_file(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// Merge the overlays onto stock defaults in order, then deserialize and validate.
pub fn resolve_config(overlays: Vec<toml::Value>) -> Result<MockupConfig, ConfigError> {
    let merged = overlays
        .into_iter()
        .fold(stock_defaults_value()?, merge_toml);
    let config: MockupConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the full configuration: defaults, then the config file, then flags.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: &CliOverrides,
) -> Result<MockupConfig, ConfigError> {
    let mut overlays = Vec::new();
    if let Some(path) = find_config_file(explicit, cwd) {
        overlays.push(load_raw_config(&path)?);
    }
    overlays.push(overrides.to_toml());
    resolve_config(overlays)
}

/// Returns a fully-commented stock `mockup.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Mockup Batch Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Looked up as ./mockup.toml unless --config is given.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Directory mockups are written to. Created if missing.
dir = "./output"

# Canvas template: default (1200x800, padding 50), mobile (375x812, 20),
# desktop (1920x1080, 100), tablet (768x1024, 40).
# Unknown names fall back to "default".
template = "default"

# Output format, also used as the file extension: png, jpg, jpeg, webp, gif, avif.
format = "png"

# Encoding quality (1 = worst, 100 = best). Used by jpg/jpeg and avif only.
quality = 90

# ---------------------------------------------------------------------------
# Validation
# ---------------------------------------------------------------------------
[validation]
# Largest accepted source file, in MiB.
max_file_size_mb = 50

# Smallest accepted source dimensions, in pixels.
min_width = 100
min_height = 100

# true: files failing validation are skipped and counted as errors.
# false: failures are logged and the file is transformed anyway.
enforce = true

# ---------------------------------------------------------------------------
# Logging
# ---------------------------------------------------------------------------
[logging]
# One of: error, warn, info, debug.
level = "info"

# Log file, appended to. The parent directory is created at startup.
file = "logs/mockup-generator.log"

# Also write log events to stderr.
console = false

# Files taking longer than this are logged as slow operations.
slow_threshold_ms = 1000
"##
}
