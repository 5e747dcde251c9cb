//! # GospelRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for GospelRS: loading the
//! optional TOML file, applying command-line overrides, expanding paths and
//! validating the result.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--plain`, `--no-openers`, `--seed`)
//! 2. The file named by `--config` / `GOSPELRS_CONFIG` (must exist when given)
//! 3. The user file `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! An explicit file replaces the user file rather than merging with it.
//!
//! ## Examples
//!
//! ```toml
//! [responder]
//! style = "plain"
//! openers = false
//! seed = 7
//! topics_file = "~/.config/gospelrs/topics.toml"
//! ```
//!
//! ```rust,ignore
//! let mut cfg = config::load_config(cli.config.as_deref())?;
//! config::apply_overrides(&mut cfg, &overrides);
//! let options = cfg.responder.options();
//! ```
//!
use crate::core::error::{GospelError, Result};
use crate::responder::{ResponderOptions, ResponseStyle};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub responder: ResponderConfig,
}

/// Settings for the topic responder and the chat loop.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResponderConfig {
    /// Response layout: `rich` (default) or `plain`.
    #[serde(default)]
    pub style: ResponseStyle,
    /// Prefix rich responses with a random empathetic opener.
    #[serde(default = "default_openers")]
    pub openers: bool,
    /// Fixed seed for opener/verse selection. Unseeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Optional replacement for the embedded topic tables (can use ~). Will be expanded.
    #[serde(default)]
    pub topics_file: Option<String>,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            style: ResponseStyle::default(),
            openers: default_openers(),
            seed: None,
            topics_file: None,
        }
    }
}

impl ResponderConfig {
    /// The assembly options handed to `TopicResponder`.
    pub fn options(&self) -> ResponderOptions {
        ResponderOptions {
            style: self.style,
            openers: self.openers,
        }
    }
}

/// Values taken from the command line that win over any file setting.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub plain: bool,
    pub no_openers: bool,
    pub seed: Option<u64>,
}

fn default_openers() -> bool {
    true
}

const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads configuration from `explicit` if given, else from the user config dir,
/// else defaults. Paths are expanded and the result validated.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            if !expanded.is_file() {
                return Err(anyhow!(GospelError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    expanded.display()
                ))));
            }
            info!("Loading configuration from: {}", expanded.display());
            load_config_from_path(&expanded)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "GospelRS", "gospelrs") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies command-line flags on top of the loaded file values.
pub fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if overrides.plain {
        config.responder.style = ResponseStyle::Plain;
    }
    if overrides.no_openers {
        config.responder.openers = false;
    }
    if overrides.seed.is_some() {
        config.responder.seed = overrides.seed;
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(topics_file) = config.responder.topics_file.as_mut() {
        *topics_file = shellexpand::tilde(topics_file.as_str()).into_owned();
        debug!("Expanded topics file path: {}", topics_file);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(topics_file) = &config.responder.topics_file {
        let path = PathBuf::from(topics_file);
        if !path.exists() {
            return Err(anyhow!(GospelError::Config(format!(
                "Configured topics file '{}' does not exist.",
                path.display()
            ))));
        }
        if !path.is_file() {
            return Err(anyhow!(GospelError::Config(format!(
                "Configured topics path '{}' exists but is not a file.",
                path.display()
            ))));
        }
    }
    Ok(())
}
