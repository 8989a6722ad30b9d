//! # orrery-webgpu
//!
//! A sun, an orbiting earth and an orbiting moon drawn as procedural UV
//! spheres, explored with a free-flying first-person camera. Runs natively
//! through winit and in the browser through WASM + WebGPU.
//!
//! ## Features
//! - First-person camera: WASD / arrow keys to move, pointer-locked mouse look
//! - UV-sphere tessellation with configurable latitude/longitude bands
//! - Hierarchical circular orbits driven by one shared angle
//! - TOML configuration with per-field defaults
//!
//! ## Example
//! ```rust
//! use orrery_webgpu::camera::CameraController;
//! use orrery_webgpu::geometry::generate_sphere;
//! use orrery_webgpu::input::{InputState, MoveKey};
//!
//! let sphere = generate_sphere(1.0, 30, 30).unwrap();
//! assert_eq!(sphere.vertex_count(), 31 * 31);
//!
//! let mut camera = CameraController::default();
//! let mut input = InputState::new();
//! input.press(MoveKey::W);
//! input.add_mouse_delta(25.0, 0.0);
//! camera.update(&mut input, 1.0 / 60.0);
//! let view = camera.view_matrix();
//! assert!(view.is_finite());
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use camera::{CameraController, Projection};
pub use config::OrreryConfig;
pub use error::{OrreryError, Result};
pub use geometry::{generate_sphere, MeshData};
pub use input::{Direction, InputState, MoveKey};
pub use math::Transform;
pub use scene::{BodyInstance, OrbitBody, SolarSystem};
pub use viewer::{Frame, Viewer};
