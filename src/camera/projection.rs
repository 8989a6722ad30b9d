use crate::config::CameraConfig;
use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 45.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Updates the aspect ratio from a surface size. Zero-sized surfaces
    /// (minimized windows) keep the previous ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
