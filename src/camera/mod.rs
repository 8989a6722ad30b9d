//! First-person camera
//!
//! [`CameraController`] turns held keys and mouse motion into an eye position
//! and look direction; [`Projection`] holds the perspective parameters.

mod controller;
mod projection;

pub use controller::{CameraController, PITCH_LIMIT};
pub use projection::Projection;
