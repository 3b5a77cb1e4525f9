//! Layered loading of [`ManConfig`].
//!
//! Values are resolved from, in increasing precedence: a TOML
//! configuration file, `CMDMAN_`-prefixed environment variables and
//! explicit command-line overrides. Unset text settings fall back to the
//! defaults applied by [`ManConfig`]; the output directory has none.

use camino::Utf8Path;
use chrono::NaiveDate;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Serialize;

use super::ManConfig;
use crate::error::ManError;
use crate::fs_helpers::{read_optional_text_file, read_text_file};

/// Configuration file read from the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "cmdman.toml";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "CMDMAN_";

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    /// Manual section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Center footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_footer: Option<String>,
    /// Fixed page date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Left footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_footer: Option<String>,
    /// Center header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_header: Option<String>,
    /// FILES section text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// BUGS section text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bugs: Option<String>,
    /// ENVIRONMENT section text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// AUTHOR section text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Filename separator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_separator: Option<String>,
    /// Template source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Resolves the effective configuration.
///
/// An explicit `config_path` must exist; without one, [`DEFAULT_CONFIG_FILE`]
/// is read from the working directory when present.
///
/// # Errors
///
/// Returns [`ManError::Io`] when an explicit configuration file cannot be
/// read and [`ManError::Config`] when the merged layers do not form a valid
/// configuration, including when no layer sets `out_dir`.
pub fn load_config(
    config_path: Option<&Utf8Path>,
    overrides: &ConfigOverrides,
) -> Result<ManConfig, ManError> {
    let mut figment = Figment::new();

    let file_contents = match config_path {
        Some(path) => Some(read_text_file(path)?),
        None => read_optional_text_file(Utf8Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(contents) = file_contents {
        figment = figment.merge(Toml::string(&contents));
    }

    let config = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()?;
    Ok(config)
}
