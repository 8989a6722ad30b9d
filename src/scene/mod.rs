//! Orbiting bodies
//!
//! A [`SolarSystem`] is a flat list of bodies where each body either stays
//! put or circles a body declared before it. One shared orbit angle drives
//! all of them, scaled per body.

mod orbit;

pub use orbit::{BodyInstance, Orbit, OrbitBody, SolarSystem, SolarSystemBuilder};
