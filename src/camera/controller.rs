use crate::config::CameraConfig;
use crate::input::{Direction, InputState};
use glam::{Mat4, Vec3};

/// Pitch is kept strictly inside (-90, 90) degrees so `front` never lines up
/// with `up` and the strafe axis stays defined.
pub const PITCH_LIMIT: f32 = 89.0;

/// Frame rate at which a time-scaled step equals the fixed per-frame step.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    up: Vec3,
    pub speed: f32,
    pub sensitivity: f32,
    pub time_scaled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraController {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            ..Self::default()
        }
        .with_orientation(yaw, pitch)
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let pitch = config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Self {
            position: config.position,
            yaw: config.yaw,
            pitch,
            front: front_from_angles(config.yaw, pitch),
            up: Vec3::Y,
            speed: config.speed,
            sensitivity: config.sensitivity,
            time_scaled: config.time_scaled,
        }
    }

    fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotates the look direction. Screen-space `dy` grows downwards, so it
    /// lowers the pitch. Yaw is left unbounded.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.front = front_from_angles(self.yaw, self.pitch);
    }

    /// Moves `speed` units along `front` or the strafe axis for every held
    /// direction. Opposite directions cancel.
    pub fn apply_movement(&mut self, input: &InputState, speed: f32) {
        let right = self.right();
        let displacement = input
            .held_directions()
            .map(|direction| match direction {
                Direction::Forward => self.front * speed,
                Direction::Back => -self.front * speed,
                Direction::Right => right * speed,
                Direction::Left => -right * speed,
            })
            .fold(Vec3::ZERO, |acc, step| acc + step);
        self.position += displacement;
    }

    /// Per-frame entry point: consumes the pending mouse delta, then moves.
    ///
    /// With `time_scaled` off the step is `speed` regardless of `dt`, which
    /// ties movement to the frame rate.
    pub fn update(&mut self, input: &mut InputState, dt: f32) {
        let delta = input.take_mouse_delta();
        if delta != glam::Vec2::ZERO {
            self.apply_mouse_delta(delta.x, delta.y);
        }

        let step = if self.time_scaled {
            self.speed * dt * REFERENCE_FPS
        } else {
            self.speed
        };
        self.apply_movement(input, step);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }
}

fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_faces_negative_z() {
        let camera = CameraController::default();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(camera.right().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn new_clamps_initial_pitch() {
        let camera = CameraController::new(Vec3::ZERO, 0.0, 120.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
    }
}
