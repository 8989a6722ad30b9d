//! Math utilities module
//!
//! Re-exports the glam types used across the crate plus the body transform.

mod transform;

pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{Mat4, Vec2, Vec3, Vec4};
