//! Tunable constants
//!
//! Loaded from a RON file when one is present, otherwise the hard-coded
//! defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::GenerationMode;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config.ron";

/// Errors raised while loading or exporting configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Dungeon generator constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    pub min_rooms: usize,
    pub max_rooms: usize,
    pub min_room_size: i32,
    pub max_room_size: i32,
    /// Placement attempts before giving up on the target room count
    pub max_attempts: u32,
    /// Minimum clearance kept between rooms
    pub room_margin: i32,
    pub mode: GenerationMode,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 30,
            min_rooms: 5,
            max_rooms: 7,
            min_room_size: 6,
            max_room_size: 12,
            max_attempts: 1000,
            room_margin: 2,
            mode: GenerationMode::default(),
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rooms == 0 || self.min_rooms > self.max_rooms {
            return Err(ConfigError::Invalid(format!(
                "room count range {}..={} is empty or starts at zero",
                self.min_rooms, self.max_rooms
            )));
        }
        if self.min_room_size < 1 || self.min_room_size > self.max_room_size {
            return Err(ConfigError::Invalid(format!(
                "room size range {}..={} is empty",
                self.min_room_size, self.max_room_size
            )));
        }
        // The largest room plus the border and one placement column must fit
        if self.width < self.max_room_size + 3 || self.height < self.max_room_size + 3 {
            return Err(ConfigError::Invalid(format!(
                "{}x{} map cannot hold a {} cell room",
                self.width, self.height, self.max_room_size
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid("max_attempts must be positive".into()));
        }
        if self.room_margin < 0 {
            return Err(ConfigError::Invalid("room_margin cannot be negative".into()));
        }
        Ok(())
    }
}

/// Field-of-view walker constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Full width of the view cone in degrees
    pub fov_degrees: f64,
    pub move_step: f64,
    pub turn_step: f64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 120.0,
            move_step: 1.0,
            turn_step: 15.0,
        }
    }
}

impl WalkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees <= 360.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_degrees {} outside (0, 360]",
                self.fov_degrees
            )));
        }
        if self.move_step <= 0.0 || self.turn_step <= 0.0 {
            return Err(ConfigError::Invalid("walker steps must be positive".into()));
        }
        Ok(())
    }
}

/// Platformer physics constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub gravity: f32,
    pub initial_jump_impulse: f32,
    /// Extra lift applied per frame while jump is held
    pub maintained_jump_impulse: f32,
    pub max_jump_frames: u32,
    pub frame_millis: u64,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            gravity: 0.9,
            initial_jump_impulse: -3.5,
            maintained_jump_impulse: -0.5,
            max_jump_frames: 8,
            frame_millis: 50,
        }
    }
}

impl PlatformerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity <= 0.0 {
            return Err(ConfigError::Invalid("gravity must be positive".into()));
        }
        if self.initial_jump_impulse >= 0.0 || self.maintained_jump_impulse > 0.0 {
            return Err(ConfigError::Invalid(
                "jump impulses point upwards and must be negative".into(),
            ));
        }
        if self.frame_millis == 0 {
            return Err(ConfigError::Invalid("frame_millis must be positive".into()));
        }
        Ok(())
    }
}

/// All tunables in one file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dungeon: DungeonConfig,
    pub walker: WalkerConfig,
    pub platformer: PlatformerConfig,
}

impl GameConfig {
    /// Load from a RON file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load, falling back to the defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dungeon.validate()?;
        self.walker.validate()?;
        self.platformer.validate()
    }
}

/// Write the default config to `path` for easy editing
pub fn export_default_config(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let content = GameConfig::default().to_ron()?;
    fs::write(path, content).map_err(io_err)
}
