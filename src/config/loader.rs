//! Configuration file loading with precedence handling.

use super::style::{FontSize, HexColor, InvalidColor, Speed, StyleConfig};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 30;

/// Bounds for the tick interval in milliseconds.
pub const TICK_MS_RANGE: (u64, u64) = (5, 1000);

/// Default pixel size of one terminal cell.
pub const DEFAULT_CELL_SIZE_PX: (u16, u16) = (10, 20);

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A color value is not a hex color.
    #[error("Invalid {field} in config: {source}")]
    InvalidColor {
        /// Field holding the bad value.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: InvalidColor,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tprompt/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Text color as `#RRGGBB`.
    #[serde(default)]
    pub text_color: Option<String>,

    /// Background color as `#RRGGBB`.
    #[serde(default)]
    pub bg_color: Option<String>,

    /// Drop shadow behind text.
    #[serde(default)]
    pub shadow: Option<bool>,

    /// Font size in pixels (clamped to 8..=200).
    #[serde(default)]
    pub font_size: Option<i64>,

    /// Speed in pixels per tick (clamped to 1..=40).
    #[serde(default)]
    pub speed: Option<i64>,

    /// Tick interval in milliseconds.
    #[serde(default)]
    pub tick_ms: Option<u64>,

    /// Pixel width of one terminal cell.
    #[serde(default)]
    pub cell_width_px: Option<u16>,

    /// Pixel height of one terminal cell.
    #[serde(default)]
    pub cell_height_px: Option<u16>,

    /// Start scrolling as soon as the script is loaded.
    #[serde(default)]
    pub autostart: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial style.
    pub style: StyleConfig,
    /// Interval between scroll ticks.
    pub tick_interval: Duration,
    /// Pixel width of one terminal cell.
    pub cell_width_px: u16,
    /// Pixel height of one terminal cell.
    pub cell_height_px: u16,
    /// Start scrolling immediately.
    pub autostart: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            cell_width_px: DEFAULT_CELL_SIZE_PX.0,
            cell_height_px: DEFAULT_CELL_SIZE_PX.1,
            autostart: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides supplied on the command line. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--speed`
    pub speed: Option<i64>,
    /// `--font-size`
    pub font_size: Option<i64>,
    /// `--text-color`
    pub text_color: Option<HexColor>,
    /// `--bg-color`
    pub bg_color: Option<HexColor>,
    /// `--no-shadow`
    pub no_shadow: bool,
    /// `--autostart`
    pub autostart: bool,
    /// `--tick-ms`
    pub tick_ms: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tprompt/tprompt.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tprompt").join("tprompt.log")
    } else {
        PathBuf::from("tprompt.log")
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
/// Returns `~/.config/tprompt/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tprompt").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TPROMPT_CONFIG` environment variable
/// 3. Default path `~/.config/tprompt/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var("TPROMPT_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn parse_color(field: &'static str, value: &str) -> Result<HexColor, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidColor { field, source })
}

fn clamp_tick(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(TICK_MS_RANGE.0, TICK_MS_RANGE.1))
}

/// Merge config file into defaults to create resolved config.
///
/// Numbers are clamped into range; colors must parse.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] for a malformed color.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let text_color = match config.text_color.as_deref() {
        Some(value) => parse_color("text_color", value)?,
        None => defaults.style.text_color,
    };
    let bg_color = match config.bg_color.as_deref() {
        Some(value) => parse_color("bg_color", value)?,
        None => defaults.style.bg_color,
    };

    Ok(ResolvedConfig {
        style: StyleConfig {
            text_color,
            bg_color,
            shadow_enabled: config.shadow.unwrap_or(defaults.style.shadow_enabled),
            font_size: config
                .font_size
                .map(FontSize::new_clamped)
                .unwrap_or(defaults.style.font_size),
            speed: config
                .speed
                .map(Speed::new_clamped)
                .unwrap_or(defaults.style.speed),
        },
        tick_interval: config
            .tick_ms
            .map(clamp_tick)
            .unwrap_or(defaults.tick_interval),
        cell_width_px: config
            .cell_width_px
            .filter(|&w| w > 0)
            .unwrap_or(defaults.cell_width_px),
        cell_height_px: config
            .cell_height_px
            .filter(|&h| h > 0)
            .unwrap_or(defaults.cell_height_px),
        autostart: config.autostart.unwrap_or(defaults.autostart),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TPROMPT_SPEED`: Override speed
/// - `TPROMPT_FONT_SIZE`: Override font size
///
/// Values that are not integers are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(speed) = env_int("TPROMPT_SPEED") {
        config.style.speed = Speed::new_clamped(speed);
    }

    if let Some(size) = env_int("TPROMPT_FONT_SIZE") {
        config.style.font_size = FontSize::new_clamped(size);
    }

    config
}

fn env_int(name: &str) -> Option<i64> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(speed) = cli.speed {
        config.style.speed = Speed::new_clamped(speed);
    }

    if let Some(size) = cli.font_size {
        config.style.font_size = FontSize::new_clamped(size);
    }

    if let Some(color) = cli.text_color {
        config.style.text_color = color;
    }

    if let Some(color) = cli.bg_color {
        config.style.bg_color = color;
    }

    if cli.no_shadow {
        config.style.shadow_enabled = false;
    }

    if cli.autostart {
        config.autostart = true;
    }

    if let Some(ms) = cli.tick_ms {
        config.tick_interval = clamp_tick(ms);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
