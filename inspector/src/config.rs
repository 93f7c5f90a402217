//! Inspector configuration (inspector.toml)
//!
//! Handles loading, saving, and providing defaults for inspector settings.
//! Settings are stored in TOML format; missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading or saving the inspector configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`InspectorConfig`]
    #[error("invalid inspector config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be encoded as TOML
    #[error("failed to encode inspector config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Inspector configuration.
///
/// Contains all user-configurable settings organized into sections.
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InspectorConfig {
    /// Control styling
    #[serde(default)]
    pub style: InspectorStyle,
    /// Inspector window settings
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Styling shared by every control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorStyle {
    /// Opacity multiplier for read-only controls (default: 0.5)
    #[serde(default = "default_read_only_opacity")]
    pub read_only_opacity: f32,
    /// Drag speed for float controls (default: 0.1)
    #[serde(default = "default_drag_speed")]
    pub drag_speed: f64,
    /// Maximum decimals shown by float controls (default: 3)
    #[serde(default = "default_float_decimals")]
    pub float_decimals: usize,
    /// Indent members of nested structs (default: true)
    #[serde(default = "default_true")]
    pub indent_nested: bool,
}

/// Inspector window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Window title (default: "Inspector")
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial window width (default: 320)
    #[serde(default = "default_width")]
    pub default_width: f32,
    /// Initial window height (default: 400)
    #[serde(default = "default_height")]
    pub default_height: f32,
    /// Show the window on startup (default: false)
    #[serde(default)]
    pub open_on_start: bool,
}

fn default_read_only_opacity() -> f32 {
    0.5
}
fn default_drag_speed() -> f64 {
    0.1
}
fn default_float_decimals() -> usize {
    3
}
fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Inspector".to_string()
}
fn default_width() -> f32 {
    320.0
}
fn default_height() -> f32 {
    400.0
}

impl Default for InspectorStyle {
    fn default() -> Self {
        Self {
            read_only_opacity: default_read_only_opacity(),
            drag_speed: default_drag_speed(),
            float_decimals: default_float_decimals(),
            indent_nested: default_true(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_width: default_width(),
            default_height: default_height(),
            open_on_start: false,
        }
    }
}

impl InspectorConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.style.read_only_opacity = config.style.read_only_opacity.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Load the config from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the config from `path`, falling back to defaults
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("inspector: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Save the config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be encoded, the directory cannot
    /// be created or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)
    }
}
