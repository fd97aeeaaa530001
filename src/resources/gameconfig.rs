//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup; missing files or keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [level]
//! manifest = assets/level.json
//! seed = 12345
//!
//! [controls]
//! enabled = true
//!
//! [sim]
//! tick_rate = 120
//!
//! [camera]
//! half_width = 8.0
//! half_height = 4.5
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_MANIFEST_PATH: &str = "./assets/level.json";
const DEFAULT_CONTROLS_ENABLED: bool = true;
const DEFAULT_TICK_RATE: u32 = 120;
const DEFAULT_CAMERA_HALF_WIDTH: f32 = 8.0;
const DEFAULT_CAMERA_HALF_HEIGHT: f32 = 4.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// The steering switch lives here on purpose: the source design kept a
/// process-wide mutable "controls enabled" flag, which is re-architected
/// as an explicit per-session field.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Path to the level manifest JSON.
    pub manifest_path: PathBuf,
    /// Seed for the level RNG; `None` seeds from ambient entropy.
    pub seed: Option<u64>,
    /// Whether host steering intent moves the player.
    pub controls_enabled: bool,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Camera half extent along X, in world units.
    pub camera_half_width: f32,
    /// Camera half extent along Y, in world units.
    pub camera_half_height: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            seed: None,
            controls_enabled: DEFAULT_CONTROLS_ENABLED,
            tick_rate: DEFAULT_TICK_RATE,
            camera_half_width: DEFAULT_CAMERA_HALF_WIDTH,
            camera_half_height: DEFAULT_CAMERA_HALF_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [level] section
        if let Some(manifest) = config.get("level", "manifest") {
            self.manifest_path = PathBuf::from(manifest);
        }
        if let Some(seed) = config.getuint("level", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [controls] section
        if let Some(enabled) = config.getbool("controls", "enabled").ok().flatten() {
            self.controls_enabled = enabled;
        }

        // [sim] section
        if let Some(tick_rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            self.tick_rate = tick_rate as u32;
        }

        // [camera] section
        if let Some(half_width) = config.getfloat("camera", "half_width").ok().flatten() {
            self.camera_half_width = half_width as f32;
        }
        if let Some(half_height) = config.getfloat("camera", "half_height").ok().flatten() {
            self.camera_half_height = half_height as f32;
        }

        info!(
            "Loaded config: manifest={:?}, seed={:?}, controls_enabled={}, tick_rate={}, camera={}x{}",
            self.manifest_path,
            self.seed,
            self.controls_enabled,
            self.tick_rate,
            self.camera_half_width,
            self.camera_half_height
        );

        Ok(())
    }
}
