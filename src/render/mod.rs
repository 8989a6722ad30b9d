//! WebGPU Rendering module
//!
//! GPU context, the body pipeline, static mesh upload and the per-frame draw.

pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use context::GpuContext;
pub use mesh::{GpuMesh, Vertex};
pub use pipeline::RenderPipelines;
pub use renderer::SceneRenderer;
