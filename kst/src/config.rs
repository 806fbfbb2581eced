//! Configuration module for the kst CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the kst application.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{KstError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kst.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the kst CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,

    /// Calc-specific configuration.
    #[serde(default)]
    pub calc: CalcConfig,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Print the trivia in front of each token.
    #[serde(default)]
    pub show_trivia: bool,

    /// Output format for token dumps.
    #[serde(default)]
    pub format: OutputFormat,

    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Fail when any malformed token is produced.
    #[serde(default)]
    pub deny_invalid: bool,
}

/// Calc-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalcConfig {
    /// Print hexadecimal digits in upper case.
    #[serde(default)]
    pub uppercase: bool,
}

/// Number of available CPUs, always at least one.
fn default_parallel_jobs() -> usize {
    get_num_cpus().max(1)
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            show_trivia: false,
            format: OutputFormat::default(),
            jobs: default_parallel_jobs(),
            deny_invalid: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KstError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| KstError::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.lex.jobs == 0 {
            return Err(KstError::Config(
                "lex.jobs must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("kst").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("kst").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
