//! Config Module
//!
//! The optional `.loclrc` / `.locl.json` file. Its values are defaults for
//! the command line flags that were not given.

use crate::convert::ConvertOptions;
use crate::extract::ExtractOptions;
use anyhow::Context;
use localize::i18n::TranslationFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names looked up from the working directory upward, in this order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".loclrc", ".locl.json"];

pub const DEFAULT_FORMAT: &str = "json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoclConfig {
    #[serde(alias = "s")]
    pub source: Option<String>,
    #[serde(alias = "f")]
    pub format: Option<String>,
    #[serde(alias = "o")]
    pub output_path: Option<String>,
    #[serde(alias = "l")]
    pub locale: Option<OneOrMany>,
}

impl LoclConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file \"{}\"", path.display()))?;
        let config: LoclConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file \"{}\"", path.display()))?;
        Ok(config)
    }

    /// Find the nearest config file from `start` upward and load it.
    /// No file found gives the empty config.
    pub fn discover(start: &Path) -> anyhow::Result<Self> {
        match find_config(start) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Flags of the `extract` and `convert` commands as given on the command
/// line, before config defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub source: Option<String>,
    pub format: Option<String>,
    pub output_path: Option<String>,
    pub locales: Vec<String>,
}

impl CommandArgs {
    /// Fill the flags that were not given from `config`.
    pub fn with_defaults(mut self, config: &LoclConfig) -> Self {
        self.source = self.source.or_else(|| config.source.clone());
        self.format = self.format.or_else(|| config.format.clone());
        self.output_path = self.output_path.or_else(|| config.output_path.clone());
        if self.locales.is_empty() {
            self.locales = config.locale.clone().map(OneOrMany::into_vec).unwrap_or_default();
        }
        self
    }

    pub fn into_extract_options(self) -> Result<ExtractOptions, ConfigError> {
        let (source, format, output_path) = self.required()?;
        Ok(ExtractOptions::new(source, format, output_path).with_locales(self.locales))
    }

    pub fn into_convert_options(self) -> Result<ConvertOptions, ConfigError> {
        let (source, format, output_path) = self.required()?;
        Ok(ConvertOptions::new(source, format, output_path))
    }

    fn required(&self) -> Result<(String, TranslationFormat, String), ConfigError> {
        let source = self.source.clone().ok_or(ConfigError::MissingArgument("source"))?;
        let output_path = self.output_path.clone().ok_or(ConfigError::MissingArgument("outputPath"))?;
        let format = self
            .format
            .as_deref()
            .unwrap_or(DEFAULT_FORMAT)
            .parse::<TranslationFormat>()
            .map_err(ConfigError::InvalidFormat)?;
        Ok((source, format, output_path))
    }
}
