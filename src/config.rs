// Centralized configuration for the replay viewer

use serde::Deserialize;
use std::path::Path;

// ====================
// Playback Parameters
// ====================
pub const DEFAULT_STEP_INTERVAL_MS: f64 = 300.0; // Wall-clock time between automatic iteration steps

// ====================
// Camera Parameters
// ====================
pub const INITIAL_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1; // Applied per scroll notch
pub const ZOOM_MAX: f32 = 10.0;
pub const ZOOM_MIN: f32 = -10.0; // Negative zoom mirrors the scene
pub const KEY_PAN_STEP: f32 = 1.0; // Pixels per frame while an arrow key is held

// ====================
// Render Parameters
// ====================
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const AREA_FILL_COLOR: [u8; 4] = [240, 255, 255, 255];
pub const AREA_BORDER_COLOR: [u8; 4] = [255, 255, 0, 255];
pub const OBSTACLE_COLOR: [u8; 4] = [0, 0, 255, 255];
pub const AGENT_GROUP_A_COLOR: [u8; 4] = [255, 255, 255, 255];
pub const AGENT_GROUP_B_COLOR: [u8; 4] = [255, 0, 0, 255];
pub const TRAIL_COLOR: [u8; 4] = [0, 128, 0, 255];
pub const HUD_COLOR: [u8; 4] = [255, 0, 0, 255];

pub const AGENT_SIZE_PX: f32 = 4.0; // Screen-space square drawn per agent, zoom independent
pub const OBSTACLE_THICKNESS: f32 = 2.0;
pub const AREA_BORDER_THICKNESS: f32 = 1.0;
pub const TRAIL_THICKNESS: f32 = 1.0;

pub const HUD_FONT_SIZE: f32 = 20.0;
pub const HUD_ZOOM_POS: (f32, f32) = (50.0, 50.0);
pub const HUD_ITERATION_POS: (f32, f32) = (50.0, 100.0);

// ====================
// Window Parameters
// ====================
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

pub const CONFIG_PATH: &str = "agents_vis.toml";

/// Runtime-tunable settings loaded from `agents_vis.toml`.
///
/// Every field has a default, so a partial (or absent) file works; a file
/// that fails to parse is reported and ignored in favor of the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub sim_data_path: String,
    pub obstacles_path: String,
    pub areas_path: String,
    /// Milliseconds between automatic playback steps.
    pub step_interval_ms: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sim_data_path: "testsimData.txt".to_string(),
            obstacles_path: "test_obstacles.txt".to_string(),
            areas_path: "test_areas.txt".to_string(),
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl ViewerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ViewerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config next to the executable, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                if Path::new(CONFIG_PATH).exists() {
                    log::warn!("failed to load {}: {}; using defaults", CONFIG_PATH, e);
                }
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: ViewerConfig = toml::from_str("sim_data_path = \"run42.txt\"").unwrap();
        assert_eq!(config.sim_data_path, "run42.txt");
        assert_eq!(config.areas_path, ViewerConfig::default().areas_path);
        assert_eq!(config.step_interval_ms, DEFAULT_STEP_INTERVAL_MS);
    }
}
