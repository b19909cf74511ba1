//! Configuration file loading with precedence handling.

use crate::replay::ReplayMode;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HISTR_CONFIG";

/// Environment variable overriding the history file path.
pub const HISTORY_ENV_VAR: &str = "HISTR_HISTORY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/histr/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// History file to browse.
    #[serde(default)]
    pub history_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// How the selected command is handed back to the shell.
    #[serde(default)]
    pub replay: Option<ReplayMode>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// History file to browse.
    pub history_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colors disabled.
    pub no_color: bool,
    /// Replay strategy.
    pub replay: ReplayMode,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            log_file_path: default_log_path(),
            no_color: false,
            replay: ReplayMode::default(),
        }
    }
}

/// Resolve default history file path.
///
/// Returns `~/.python_history`, or `.python_history` in the current
/// directory if the home directory cannot be determined.
pub fn default_history_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".python_history"),
        None => PathBuf::from(".python_history"),
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/histr/histr.log` on Linux, or the appropriate
/// platform path on other systems. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("histr").join("histr.log")
    } else {
        PathBuf::from("histr.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/histr/config.toml` on Linux, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("histr").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HISTR_CONFIG` environment variable
/// 3. Default path `~/.config/histr/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        history_path: config.history_path.unwrap_or(defaults.history_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        replay: config.replay.unwrap_or(defaults.replay),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HISTR_HISTORY`: Override history file path
/// - `NO_COLOR`: Any value disables colors
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(HISTORY_ENV_VAR) {
        config.history_path = PathBuf::from(path);
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.no_color = true;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    history_override: Option<PathBuf>,
    no_color_override: Option<bool>,
    replay_override: Option<ReplayMode>,
) -> ResolvedConfig {
    if let Some(path) = history_override {
        config.history_path = path;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    if let Some(replay) = replay_override {
        config.replay = replay;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
