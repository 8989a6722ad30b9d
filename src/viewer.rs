//! Per-frame glue between window events, the camera and the orbiting bodies.
//!
//! Both the native and the browser event loops own one [`Viewer`], forward
//! keyboard and pointer events to it, and call [`Viewer::frame`] on redraw.

use crate::camera::{CameraController, Projection};
use crate::config::OrreryConfig;
use crate::input::{InputState, MoveKey};
use crate::scene::{BodyInstance, SolarSystem};
use glam::Mat4;
use winit::keyboard::KeyCode;

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    pub instances: Vec<BodyInstance>,
}

pub struct Viewer {
    pub camera: CameraController,
    pub input: InputState,
    pub system: SolarSystem,
    pub projection: Projection,
    pointer_locked: bool,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&OrreryConfig::default())
    }
}

impl Viewer {
    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            camera: CameraController::from_config(&config.camera),
            input: InputState::new(),
            system: SolarSystem::from_config(&config.scene),
            projection: Projection::from_config(&config.camera),
            pointer_locked: false,
        }
    }

    /// Returns `true` when the key drives the camera.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match MoveKey::from_key_code(code) {
            Some(key) => {
                self.input.set_key(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Raw pointer motion. Only counted while the pointer is locked, so
    /// moving the cursor over the window does not spin the view.
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.pointer_locked {
            self.input.add_mouse_delta(dx, dy);
        }
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        if self.pointer_locked != locked {
            log::debug!("Pointer lock {}", if locked { "acquired" } else { "released" });
        }
        self.pointer_locked = locked;
        if !locked {
            self.input.take_mouse_delta();
        }
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Window lost focus: key releases may never arrive.
    pub fn focus_lost(&mut self) {
        self.input.clear();
        self.set_pointer_locked(false);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Applies this frame's input, advances the orbits and snapshots the
    /// matrices. `dt` is in seconds.
    pub fn frame(&mut self, dt: f32) -> Frame {
        self.camera.update(&mut self.input, dt);
        self.system.advance();

        Frame {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(),
            instances: self.system.instances(),
        }
    }
}
