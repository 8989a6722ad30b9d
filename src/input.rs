//! Held movement keys and the per-frame mouse delta accumulator.

use glam::Vec2;
use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];
}

/// A physical key that drives movement. WASD and the arrow keys are tracked
/// separately so releasing `W` while `ArrowUp` is still down keeps moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    W,
    S,
    A,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl MoveKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Self::W),
            KeyCode::KeyS => Some(Self::S),
            KeyCode::KeyA => Some(Self::A),
            KeyCode::KeyD => Some(Self::D),
            KeyCode::ArrowUp => Some(Self::ArrowUp),
            KeyCode::ArrowDown => Some(Self::ArrowDown),
            KeyCode::ArrowLeft => Some(Self::ArrowLeft),
            KeyCode::ArrowRight => Some(Self::ArrowRight),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::W | Self::ArrowUp => Direction::Forward,
            Self::S | Self::ArrowDown => Direction::Back,
            Self::A | Self::ArrowLeft => Direction::Left,
            Self::D | Self::ArrowRight => Direction::Right,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Written by the event handlers between frames, read and cleared once per
/// frame by [`crate::camera::CameraController::update`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_pressed: [bool; 8],
    mouse_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: MoveKey) {
        self.keys_pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: MoveKey) {
        self.keys_pressed[key.index()] = false;
    }

    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        self.keys_pressed[key.index()] = pressed;
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held_keys().any(|key| key.direction() == direction)
    }

    pub fn held_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.is_held(*d))
    }

    fn held_keys(&self) -> impl Iterator<Item = MoveKey> + '_ {
        const KEYS: [MoveKey; 8] = [
            MoveKey::W,
            MoveKey::S,
            MoveKey::A,
            MoveKey::D,
            MoveKey::ArrowUp,
            MoveKey::ArrowDown,
            MoveKey::ArrowLeft,
            MoveKey::ArrowRight,
        ];
        KEYS.into_iter().filter(move |key| self.keys_pressed[key.index()])
    }

    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Returns the delta accumulated since the last call and resets it.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Drops held keys and pending motion, e.g. when the window loses focus
    /// and key-up events would otherwise be missed.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_index_matches_held_keys_table() {
        let mut input = InputState::new();
        input.press(MoveKey::ArrowRight);
        assert_eq!(input.held_keys().collect::<Vec<_>>(), vec![MoveKey::ArrowRight]);
    }

    #[test]
    fn aliases_hold_direction_independently() {
        let mut input = InputState::new();
        input.press(MoveKey::W);
        input.press(MoveKey::ArrowUp);
        input.release(MoveKey::W);
        assert!(input.is_held(Direction::Forward));
        input.release(MoveKey::ArrowUp);
        assert!(!input.is_held(Direction::Forward));
    }

    #[test]
    fn mouse_delta_accumulates_until_taken() {
        let mut input = InputState::new();
        input.add_mouse_delta(3.0, -1.0);
        input.add_mouse_delta(2.0, 4.0);
        assert_eq!(input.take_mouse_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn key_codes_map_to_directions() {
        let forward = MoveKey::from_key_code(KeyCode::ArrowUp).map(MoveKey::direction);
        assert_eq!(forward, Some(Direction::Forward));
        let strafe = MoveKey::from_key_code(KeyCode::KeyA).map(MoveKey::direction);
        assert_eq!(strafe, Some(Direction::Left));
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyQ), None);
    }

    #[test]
    fn clear_releases_everything() {
        let mut input = InputState::new();
        input.press(MoveKey::D);
        input.add_mouse_delta(1.0, 1.0);
        input.clear();
        assert_eq!(input.held_directions().count(), 0);
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
    }
}
