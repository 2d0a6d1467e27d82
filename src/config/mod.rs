// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: the optional
//! `settings.toml` file and the immutable [`LauncherConfig`] derived from it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Viewer program and fixed connection parameters
//! - `[endpoints]` - Record stream URI per protocol
//! - `[[presets]]` - Named stream-code patterns, in selector order
//! - `[form]` - Buffer length choices
//! - `[colors]` - Record colors passed to the viewer
//!
//! Every field has a built-in default, so a missing file, a missing section,
//! or a missing key all reproduce the stock launcher. The file is never
//! written by the application; `--print-config` dumps the effective values.
//!
//! # Examples
//!
//! ```no_run
//! use seiswave_scanner::config::{self, LauncherConfig};
//!
//! let (config, _warning) = config::load();
//! let launcher = LauncherConfig::from(&config);
//! assert_eq!(launcher.program, "scrttv");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::protocol::Protocol;
use crate::domain::stream::{StreamPreset, StreamPresets};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Viewer executable and the connection parameters it always receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub program: String,
    pub remote_host: String,
    pub database: String,
    pub debug: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_VIEWER_PROGRAM.to_string(),
            remote_host: DEFAULT_REMOTE_HOST.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            debug: DEFAULT_VIEWER_DEBUG,
        }
    }
}

/// Record stream URI for every protocol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct EndpointsConfig {
    pub fdsnws: String,
    pub slink: String,
    pub router: String,
    pub iris_fdsnws: String,
    pub caps_server: String,
}

impl EndpointsConfig {
    /// Returns the endpoint URI for `protocol`.
    #[must_use]
    pub fn endpoint(&self, protocol: Protocol) -> &str {
        match protocol {
            Protocol::Fdsnws => &self.fdsnws,
            Protocol::SeedLink => &self.slink,
            Protocol::Router => &self.router,
            Protocol::IrisFdsnws => &self.iris_fdsnws,
            Protocol::CapsServer => &self.caps_server,
        }
    }
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            fdsnws: DEFAULT_ENDPOINT_FDSNWS.to_string(),
            slink: DEFAULT_ENDPOINT_SLINK.to_string(),
            router: DEFAULT_ENDPOINT_ROUTER.to_string(),
            iris_fdsnws: DEFAULT_ENDPOINT_IRIS_FDSNWS.to_string(),
            caps_server: DEFAULT_ENDPOINT_CAPS_SERVER.to_string(),
        }
    }
}

/// Form choices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Buffer length choices in hours; the first one is preselected.
    pub buffer_choices: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            buffer_choices: DEFAULT_BUFFER_CHOICES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Record color scheme, as six-digit hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ColorsConfig {
    pub foreground: String,
    pub background: String,
    pub alternate_background: String,
    pub gaps: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_RECORDS_FOREGROUND.to_string(),
            background: DEFAULT_RECORDS_BACKGROUND.to_string(),
            alternate_background: DEFAULT_RECORDS_ALTERNATE_BACKGROUND.to_string(),
            gaps: DEFAULT_RECORDS_GAPS.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub colors: ColorsConfig,

    /// Kept last so the serialized array of tables follows the plain tables.
    #[serde(default = "default_presets")]
    pub presets: Vec<StreamPreset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            viewer: ViewerConfig::default(),
            endpoints: EndpointsConfig::default(),
            form: FormConfig::default(),
            colors: ColorsConfig::default(),
            presets: default_presets(),
        }
    }
}

fn default_presets() -> Vec<StreamPreset> {
    DEFAULT_STREAM_PRESETS
        .iter()
        .map(|(name, codes)| StreamPreset::new(*name, *codes))
        .collect()
}

// =============================================================================
// Launcher Config
// =============================================================================

/// Immutable view of the configuration handed to the form controller.
///
/// Built once at startup; tests construct it directly to substitute hosts,
/// endpoints, or the viewer program.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub program: String,
    pub debug: bool,
    pub remote_host: String,
    pub database: String,
    pub endpoints: EndpointsConfig,
    pub presets: StreamPresets,
    pub buffer_choices: Vec<String>,
    pub colors: ColorsConfig,
}

impl From<&Config> for LauncherConfig {
    fn from(config: &Config) -> Self {
        let buffer_choices = if config.form.buffer_choices.is_empty() {
            FormConfig::default().buffer_choices
        } else {
            config.form.buffer_choices.clone()
        };

        Self {
            program: config.viewer.program.clone(),
            debug: config.viewer.debug,
            remote_host: config.viewer.remote_host.clone(),
            database: config.viewer.database.clone(),
            endpoints: config.endpoints.clone(),
            presets: StreamPresets::new(config.presets.clone()),
            buffer_choices,
            colors: config.colors.clone(),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
        log::debug!("No configuration at {}; using defaults", path.display());
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Renders the configuration as TOML.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(Error::from)
}

// =============================================================================
// Tests
// =============================================================================
