use crate::config::SceneConfig;
use crate::error::{OrreryError, Result};
use crate::math::Transform;
use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Index of the body this one circles. Must be lower than the body's own
    /// index.
    pub parent: usize,
    pub radius: f32,
    /// Multiplier applied to the shared orbit angle.
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitBody {
    pub name: String,
    /// Rest transform. The position is used for bodies without an orbit.
    pub transform: Transform,
    pub color: [f32; 4],
    pub orbit: Option<Orbit>,
}

impl OrbitBody {
    pub fn new(name: impl Into<String>, scale: f32, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_scale(scale),
            color,
            orbit: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform = self.transform.with_position(position);
        self
    }

    pub fn orbiting(mut self, parent: usize, radius: f32, speed: f32) -> Self {
        self.orbit = Some(Orbit {
            parent,
            radius,
            speed,
        });
        self
    }
}

/// What the renderer needs to draw one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInstance {
    pub model: Mat4,
    pub color: [f32; 4],
}

#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<OrbitBody>,
    angle: f32,
    degrees_per_frame: f32,
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl SolarSystem {
    pub fn builder() -> SolarSystemBuilder {
        SolarSystemBuilder::new()
    }

    /// Sun at the origin, earth circling it, moon circling the earth four
    /// times as fast.
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            bodies: vec![
                OrbitBody::new("sun", 0.5, [1.0, 0.6, 0.0, 1.0]),
                OrbitBody::new("earth", 0.25, [0.1, 0.2, 0.8, 1.0]).orbiting(0, 2.0, 1.0),
                OrbitBody::new("moon", 0.15, [1.0, 1.0, 0.6, 1.0]).orbiting(1, 0.75, 4.0),
            ],
            angle: 0.0,
            degrees_per_frame: config.degrees_per_frame,
        }
    }

    pub fn bodies(&self) -> &[OrbitBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    /// Shared orbit angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    /// Steps the shared angle by one frame.
    pub fn advance(&mut self) {
        self.angle += self.degrees_per_frame;
    }

    pub fn positions(&self) -> Vec<Vec3> {
        let mut positions: Vec<Vec3> = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let position = match body.orbit {
                Some(orbit) => {
                    let theta = (self.angle * orbit.speed).to_radians();
                    positions[orbit.parent]
                        + orbit.radius * Vec3::new(theta.cos(), 0.0, theta.sin())
                }
                None => body.transform.position,
            };
            positions.push(position);
        }
        positions
    }

    pub fn instances(&self) -> Vec<BodyInstance> {
        self.bodies
            .iter()
            .zip(self.positions())
            .map(|(body, position)| BodyInstance {
                model: body.transform.with_position(position).to_matrix(),
                color: body.color,
            })
            .collect()
    }
}

pub struct SolarSystemBuilder {
    bodies: Vec<OrbitBody>,
    degrees_per_frame: f32,
}

impl SolarSystemBuilder {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            degrees_per_frame: SceneConfig::default().degrees_per_frame,
        }
    }

    pub fn add_body(mut self, body: OrbitBody) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn degrees_per_frame(mut self, degrees: f32) -> Self {
        self.degrees_per_frame = degrees;
        self
    }

    pub fn build(self) -> Result<SolarSystem> {
        for (index, body) in self.bodies.iter().enumerate() {
            if let Some(orbit) = body.orbit {
                if orbit.parent >= index {
                    return Err(OrreryError::InvalidArgument(format!(
                        "body '{}' orbits index {} which is not declared before it",
                        body.name, orbit.parent
                    )));
                }
            }
        }
        Ok(SolarSystem {
            bodies: self.bodies,
            angle: 0.0,
            degrees_per_frame: self.degrees_per_frame,
        })
    }
}

impl Default for SolarSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}
