//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scene construction settings.
    pub scene: SceneConfig,
    /// Frame sampling and export settings.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scene construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for hatching jitter. `None` draws a fresh seed on every run.
    pub seed: Option<u64>,
    /// Full surface turns per animation loop.
    pub surface_frequency: u32,
    /// Full viewpoint orbits per animation loop.
    pub absolute_frequency: u32,
}

/// Frame sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Frames per animation loop.
    pub frame_count: u32,
    /// Directory evaluated frames are written to, if any.
    pub export_dir: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            surface_frequency: 5,
            absolute_frequency: 6,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_count: 60,
            export_dir: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Terminus, e.g. `~/.config/terminus`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terminus"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values that parse but cannot drive an animation loop.
    ///
    /// Rotation frequencies must be positive whole numbers of turns so the
    /// loop closes exactly; a loop needs at least one frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.surface_frequency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scene.surface_frequency",
                reason: "must be at least one turn per loop",
            });
        }
        if self.scene.absolute_frequency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scene.absolute_frequency",
                reason: "must be at least one orbit per loop",
            });
        }
        if self.render.frame_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "render.frame_count",
                reason: "must be at least one frame",
            });
        }
        Ok(())
    }
}
