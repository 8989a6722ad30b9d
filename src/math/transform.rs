use glam::{Mat4, Vec3};

/// Translation followed by a uniform scale. Bodies are spheres, so rotation
/// never shows and is not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        scale: 1.0,
    };

    pub fn new(position: Vec3, scale: f32) -> Self {
        Self { position, scale }
    }

    pub fn from_scale(scale: f32) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    /// `translate * scale`, i.e. the mesh is scaled about its own origin
    /// before being moved into place.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.scale))
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        point * self.scale + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_matches_point_transform() {
        let transform = Transform::new(Vec3::new(2.0, 0.0, -1.0), 0.25);
        let point = Vec3::new(1.0, 1.0, 1.0);
        let expected = transform.transform_point(point);
        assert!(transform.to_matrix().transform_point3(point).abs_diff_eq(expected, 1e-6));
    }
}
