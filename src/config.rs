//! Runtime configuration.
//!
//! Every section uses `#[serde(default)]`, so a TOML file only needs the keys
//! it overrides:
//!
//! ```toml
//! [camera]
//! speed = 0.2
//! time_scaled = true
//!
//! [mesh]
//! lat_bands = 48
//! ```

use crate::error::{ConfigError, OrreryError};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// First-person camera and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting eye position in world units.
    pub position: Vec3,
    /// Starting yaw in degrees. -90 looks down -Z.
    pub yaw: f32,
    /// Starting pitch in degrees.
    pub pitch: f32,
    /// Distance moved per step while a movement key is held.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse motion.
    pub sensitivity: f32,
    /// Scale the movement step by elapsed frame time instead of moving a
    /// fixed amount per frame.
    pub time_scaled: bool,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 8.0),
            yaw: -90.0,
            pitch: 0.0,
            speed: 0.1,
            sensitivity: 0.02,
            time_scaled: false,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Tessellation of the shared sphere mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    pub lat_bands: u32,
    pub long_bands: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            lat_bands: crate::geometry::DEFAULT_BANDS,
            long_bands: crate::geometry::DEFAULT_BANDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Orbit angle added every frame, in degrees.
    pub degrees_per_frame: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            degrees_per_frame: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub camera: CameraConfig,
    pub mesh: MeshConfig,
    pub scene: SceneConfig,
}

impl OrreryConfig {
    /// Load and validate a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), OrreryError> {
        let camera = &self.camera;
        if !(camera.speed.is_finite() && camera.speed > 0.0) {
            return Err(invalid(format!("camera.speed must be positive, got {}", camera.speed)));
        }
        if !(camera.sensitivity.is_finite() && camera.sensitivity > 0.0) {
            return Err(invalid(format!(
                "camera.sensitivity must be positive, got {}",
                camera.sensitivity
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }
        if !camera.position.is_finite() {
            return Err(invalid("camera.position must be finite".to_string()));
        }
        if !(camera.yaw.is_finite() && camera.pitch.is_finite()) {
            return Err(invalid(format!(
                "camera orientation must be finite, got yaw={} pitch={}",
                camera.yaw, camera.pitch
            )));
        }
        if self.mesh.lat_bands == 0 || self.mesh.long_bands == 0 {
            return Err(invalid(format!(
                "mesh band counts must be positive, got {}x{}",
                self.mesh.lat_bands, self.mesh.long_bands
            )));
        }
        if !self.scene.degrees_per_frame.is_finite() {
            return Err(invalid("scene.degrees_per_frame must be finite".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> OrreryError {
    OrreryError::InvalidArgument(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = OrreryConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = OrreryConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = OrreryConfig::from_toml_str(
            r"
[camera]
speed = 0.25
position = [1.0, 2.0, 3.0]
",
        )
        .unwrap();
        assert_eq!(config.camera.speed, 0.25);
        assert_eq!(config.camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.camera.sensitivity, 0.02);
        assert_eq!(config.mesh.lat_bands, 30);
        assert_eq!(config.scene.degrees_per_frame, 0.5);
    }

    #[test]
    fn rejects_zero_bands() {
        let err = OrreryConfig::from_toml_str("[mesh]\nlat_bands = 0\n").unwrap_err();
        assert!(matches!(err, OrreryError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let err = OrreryConfig::from_toml_str("[camera]\nnear = 10.0\nfar = 1.0\n").unwrap_err();
        assert!(matches!(err, OrreryError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_non_finite_orientation() {
        for toml_str in ["[camera]\npitch = nan\n", "[camera]\nyaw = inf\n"] {
            let err = OrreryConfig::from_toml_str(toml_str).unwrap_err();
            assert!(matches!(err, OrreryError::InvalidArgument(_)), "{toml_str:?}");
        }
    }

    #[test]
    fn parse_error_is_reported() {
        let err = OrreryConfig::from_toml_str("[camera]\nspeed = \"fast\"\n").unwrap_err();
        assert!(matches!(err, OrreryError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = OrreryConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, OrreryError::Config(ConfigError::FileNotFound(_))));
    }
}
