//! Game settings
//!
//! Read once at startup from a JSON file. Every field is optional in the file;
//! anything missing falls back to the built-in default.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window width in logical pixels
    pub window_width: u32,
    /// Window height in logical pixels
    pub window_height: u32,
    /// Wait for vertical blank when presenting
    pub vsync: bool,

    // === Gameplay ===
    /// Paddle movement per frame
    pub paddle_speed: f32,
    /// Ball movement per frame (magnitudes)
    pub ball_speed: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            vsync: true,

            paddle_speed: PLAYER_SPEED,
            ball_speed: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const DEFAULT_PATH: &'static str = "breakout.json";

    /// Environment variable overriding the settings file location
    pub const PATH_ENV: &'static str = "BREAKOUT_SETTINGS";

    /// Settings file location: `$BREAKOUT_SETTINGS`, else `breakout.json`
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from a file, falling back to defaults
    ///
    /// A missing file is not an error. A file that can't be read or parsed is
    /// logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Force speeds to magnitudes and the window to a usable size
    pub fn sanitized(mut self) -> Self {
        self.paddle_speed = self.paddle_speed.abs();
        self.ball_speed = self.ball_speed.abs();
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
        self
    }

    /// Present mode matching the vsync preference
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
