//! Procedural mesh generation
//!
//! Produces plain vertex/index data on the CPU. Uploading it to the GPU is
//! the job of [`crate::render::GpuMesh`].

mod sphere;

pub use sphere::{generate_sphere, MeshData, DEFAULT_BANDS};
