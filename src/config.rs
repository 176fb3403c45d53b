use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Cli;
use crate::core::OrbitConfig;
use crate::math::Vec3;

/// Camera section of the config file. Mirrors [`OrbitConfig`]; pitch
/// bounds are optional because JSON has no infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub mouse_speed: f32,
    pub wheel_speed: f32,
    pub pan_speed: f32,
    pub pinch_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: Option<f32>,
    pub max_pitch: Option<f32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        let d = OrbitConfig::default();
        Self {
            distance: d.distance,
            pitch: d.pitch,
            yaw: d.yaw,
            mouse_speed: d.mouse_speed,
            wheel_speed: d.wheel_speed,
            pan_speed: d.pan_speed,
            pinch_speed: d.pinch_speed,
            min_distance: d.min_distance,
            max_distance: d.max_distance,
            min_pitch: None,
            max_pitch: None,
        }
    }
}

impl From<&CameraSettings> for OrbitConfig {
    fn from(s: &CameraSettings) -> Self {
        OrbitConfig {
            distance: s.distance,
            pitch: s.pitch,
            yaw: s.yaw,
            mouse_speed: s.mouse_speed,
            wheel_speed: s.wheel_speed,
            pan_speed: s.pan_speed,
            pinch_speed: s.pinch_speed,
            min_distance: s.min_distance,
            max_distance: s.max_distance,
            min_pitch: s.min_pitch.unwrap_or(f32::NEG_INFINITY),
            max_pitch: s.max_pitch.unwrap_or(f32::INFINITY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Point the camera orbits at startup
    pub target: Vec3,
    pub camera: CameraSettings,
}

impl ViewerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: ViewerConfig = serde_json::from_str(&text)
            .context(format!("Failed to parse config file: {:?}", path))?;
        log::info!("Loaded viewer config from {:?}", path);
        Ok(config)
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(distance) = cli.distance {
            config.camera.distance = distance;
        }
        if let Some(yaw) = cli.yaw {
            config.camera.yaw = yaw;
        }
        if let Some(pitch) = cli.pitch {
            config.camera.pitch = pitch;
        }
        Ok(config)
    }

    pub fn orbit_config(&self) -> OrbitConfig {
        OrbitConfig::from(&self.camera)
    }
}
