//! Sketch configuration resource.
//!
//! Settings loaded from an INI file. Defaults are safe to start with, and
//! keys missing from the file keep their current value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [canvas]
//! width = 1280
//! height = 720
//!
//! [time]
//! ; "realtime" or "fixed"; framerate is the step used by fixed mode
//! mode = realtime
//! framerate = 60
//! paused = false
//!
//! [framerate]
//! ; "monitor", "unlimited" or "capped"
//! mode = monitor
//! cap = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use super::clock::TimeMode;
use super::framepacing::FramerateMode;

const DEFAULT_CANVAS_WIDTH: u32 = 1280;
const DEFAULT_CANVAS_HEIGHT: u32 = 720;
const DEFAULT_FIXED_FRAMERATE: f64 = 60.0;
const DEFAULT_FRAMERATE_CAP: f32 = 60.0;
const DEFAULT_CONFIG_PATH: &str = "./sketch.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Clock strategy to start with.
    pub time_mode: TimeMode,
    /// Start with the clock paused.
    pub paused: bool,
    pub framerate_mode: FramerateMode,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchConfig {
    pub fn new() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            time_mode: TimeMode::Realtime,
            paused: false,
            framerate_mode: FramerateMode::SyncedWithMonitor,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [canvas] section
        if let Some(width) = canvas_dimension(config, "width") {
            self.canvas_width = width;
        }
        if let Some(height) = canvas_dimension(config, "height") {
            self.canvas_height = height;
        }

        // [time] section
        let fixed_framerate = config
            .getfloat("time", "framerate")
            .ok()
            .flatten()
            .filter(|fps| *fps > 0.0);
        match config.get("time", "mode").map(|m| m.to_lowercase()).as_deref() {
            Some("realtime") => self.time_mode = TimeMode::Realtime,
            Some("fixed") => {
                let framerate = fixed_framerate.unwrap_or(match self.time_mode {
                    TimeMode::FixedTimestep { framerate } => framerate,
                    TimeMode::Realtime => DEFAULT_FIXED_FRAMERATE,
                });
                self.time_mode = TimeMode::FixedTimestep { framerate };
            }
            Some(other) => warn!("Unknown time mode '{}', keeping {:?}", other, self.time_mode),
            None => {
                if let (Some(framerate), TimeMode::FixedTimestep { .. }) =
                    (fixed_framerate, self.time_mode)
                {
                    self.time_mode = TimeMode::FixedTimestep { framerate };
                }
            }
        }
        if let Some(paused) = config.getbool("time", "paused").ok().flatten() {
            self.paused = paused;
        }

        // [framerate] section
        let cap = config
            .getfloat("framerate", "cap")
            .ok()
            .flatten()
            .map(|c| c as f32)
            .filter(|c| {
                let valid = c.is_finite() && *c > 0.0;
                if !valid {
                    warn!("Invalid framerate cap {}, using {}", c, DEFAULT_FRAMERATE_CAP);
                }
                valid
            });
        match config
            .get("framerate", "mode")
            .map(|m| m.to_lowercase())
            .as_deref()
        {
            Some("monitor") => self.framerate_mode = FramerateMode::SyncedWithMonitor,
            Some("unlimited") => self.framerate_mode = FramerateMode::AsHighAsPossible,
            Some("capped") => {
                self.framerate_mode =
                    FramerateMode::CappedAt(cap.unwrap_or(DEFAULT_FRAMERATE_CAP))
            }
            Some(other) => warn!(
                "Unknown framerate mode '{}', keeping {:?}",
                other, self.framerate_mode
            ),
            None => {}
        }

        info!(
            "Loaded config: {}x{} canvas, time={:?}{}, framerate={:?}",
            self.canvas_width,
            self.canvas_height,
            self.time_mode,
            if self.paused { " (paused)" } else { "" },
            self.framerate_mode
        );
    }

    /// Save configuration to the INI file. Creates the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;
        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [canvas] section
        config.set("canvas", "width", Some(self.canvas_width.to_string()));
        config.set("canvas", "height", Some(self.canvas_height.to_string()));

        // [time] section
        match self.time_mode {
            TimeMode::Realtime => {
                config.set("time", "mode", Some("realtime".to_string()));
            }
            TimeMode::FixedTimestep { framerate } => {
                config.set("time", "mode", Some("fixed".to_string()));
                config.set("time", "framerate", Some(framerate.to_string()));
            }
        }
        config.set("time", "paused", Some(self.paused.to_string()));

        // [framerate] section
        let mode = match self.framerate_mode {
            FramerateMode::SyncedWithMonitor => "monitor",
            FramerateMode::AsHighAsPossible => "unlimited",
            FramerateMode::CappedAt(cap) => {
                config.set("framerate", "cap", Some(cap.to_string()));
                "capped"
            }
        };
        config.set("framerate", "mode", Some(mode.to_string()));
        config
    }

    /// Serialized INI text of this configuration.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

/// Reads a canvas dimension, rejecting zero and values that do not fit in `u32`.
fn canvas_dimension(config: &Ini, key: &str) -> Option<u32> {
    let value = config.getuint("canvas", key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(pixels) if pixels > 0 => Some(pixels),
        _ => {
            warn!("Invalid canvas {} {}, keeping the current value", key, value);
            None
        }
    }
}
