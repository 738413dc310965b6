//! Configuration file loading for buildstamp.
//!
//! Discovers and loads `buildstamp.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use buildstamp_types::Field;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "buildstamp.toml";

/// Top-level configuration from buildstamp.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuildstampConfig {
    pub output: OutputConfig,
    pub redact: RedactConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Fields to hide before printing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedactConfig {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Discover the buildstamp.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a buildstamp.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<BuildstampConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<BuildstampConfig> {
    let config: BuildstampConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config if given, else the one discovered in `dir`,
/// else defaults. An explicit path that does not exist is an error.
pub fn load_or_default(
    dir: &Utf8Path,
    explicit: Option<&Utf8Path>,
) -> anyhow::Result<BuildstampConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(BuildstampConfig::default()),
    }
}

/// Config file and CLI arguments combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfig {
    pub format: OutputFormat,

    /// Redacted fields, config file first, deduplicated.
    pub redact: Vec<Field>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: BuildstampConfig,
}

impl ConfigMerger {
    pub fn new(config: BuildstampConfig) -> Self {
        Self { config }
    }

    /// `--format` replaces the configured format; `--redact` extends the
    /// configured list.
    pub fn merge_show_args(
        self,
        cli_format: Option<OutputFormat>,
        cli_redact: &[Field],
    ) -> MergedConfig {
        let mut redact = Vec::new();
        for field in self.config.redact.fields.iter().chain(cli_redact) {
            if !redact.contains(field) {
                redact.push(*field);
            }
        }

        MergedConfig {
            format: cli_format.unwrap_or(self.config.output.format),
            redact,
        }
    }
}
