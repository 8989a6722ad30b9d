use super::context::GpuContext;
use super::mesh::GpuMesh;
use super::pipeline::{RenderPipelines, Uniforms};
use crate::geometry::MeshData;
use crate::viewer::Frame;

const MAX_INSTANCES: usize = 16;

/// Draws every body of a [`Frame`] with one shared sphere mesh.
pub struct SceneRenderer {
    pipelines: RenderPipelines,
    sphere_mesh: GpuMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_alignment: u32,
}

impl SceneRenderer {
    pub fn new(context: &GpuContext, sphere: &MeshData) -> Self {
        let pipelines = RenderPipelines::new(context);
        let sphere_mesh = GpuMesh::from_mesh_data(&context.device, sphere);
        log::info!(
            "Uploaded sphere mesh: {} vertices, {} triangles",
            sphere.vertex_count(),
            sphere.triangle_count()
        );

        let uniform_alignment = context.device.limits().min_uniform_buffer_offset_alignment;
        let aligned_size = Self::align_to(std::mem::size_of::<Uniforms>() as u32, uniform_alignment);
        let buffer_size = (aligned_size as usize * MAX_INSTANCES) as u64;

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dynamic Uniform Buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipelines.create_dynamic_bind_group(&context.device, &uniform_buffer);

        Self {
            pipelines,
            sphere_mesh,
            uniform_buffer,
            bind_group,
            uniform_alignment,
        }
    }

    fn align_to(size: u32, alignment: u32) -> u32 {
        (size + alignment - 1) & !(alignment - 1)
    }

    fn aligned_uniform_size(&self) -> u32 {
        Self::align_to(std::mem::size_of::<Uniforms>() as u32, self.uniform_alignment)
    }

    pub fn render(&self, context: &GpuContext, target: &wgpu::TextureView, frame: &Frame) {
        let aligned_size = self.aligned_uniform_size() as usize;
        if frame.instances.len() > MAX_INSTANCES {
            log::warn!(
                "Frame has {} bodies, drawing the first {}",
                frame.instances.len(),
                MAX_INSTANCES
            );
        }

        let view = frame.view.to_cols_array_2d();
        let projection = frame.projection.to_cols_array_2d();
        let mut uniform_data = vec![0u8; aligned_size * MAX_INSTANCES];
        let mut offsets = Vec::with_capacity(MAX_INSTANCES);

        for (index, instance) in frame.instances.iter().take(MAX_INSTANCES).enumerate() {
            let uniforms = Uniforms {
                model: instance.model.to_cols_array_2d(),
                view,
                projection,
                color: instance.color,
            };

            let offset = index * aligned_size;
            let bytes = bytemuck::bytes_of(&uniforms);
            uniform_data[offset..offset + bytes.len()].copy_from_slice(bytes);
            offsets.push(offset as u32);
        }

        context.queue.write_buffer(&self.uniform_buffer, 0, &uniform_data);

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipelines.pipeline);
            render_pass.set_vertex_buffer(0, self.sphere_mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.sphere_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            for offset in &offsets {
                render_pass.set_bind_group(0, &self.bind_group, &[*offset]);
                render_pass.draw_indexed(0..self.sphere_mesh.index_count, 0, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
