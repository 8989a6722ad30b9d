use crate::error::{OrreryError, Result};
use glam::Vec3;
use std::f32::consts::PI;

/// Latitude and longitude band count used when nothing else is configured.
pub const DEFAULT_BANDS: u32 = 30;

/// Static triangle mesh: 3 floats per vertex, 3 indices per triangle,
/// counter-clockwise when seen from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl MeshData {
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.chunks_exact(3).map(Vec3::from_slice)
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Tessellates a UV sphere centred on the origin.
///
/// Rows run from the north pole (`+Y`) to the south pole, columns sweep the
/// azimuth from `+X` towards `+Z`. The seam column is duplicated, giving
/// `(lat_bands + 1) * (long_bands + 1)` vertices and
/// `lat_bands * long_bands * 6` indices. Triangles touching a pole are
/// degenerate (two corners coincide) and are kept so the index layout stays
/// regular.
pub fn generate_sphere(radius: f32, lat_bands: u32, long_bands: u32) -> Result<MeshData> {
    if lat_bands == 0 || long_bands == 0 {
        return Err(OrreryError::InvalidArgument(format!(
            "sphere band counts must be positive, got {lat_bands}x{long_bands}"
        )));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(OrreryError::InvalidArgument(format!(
            "sphere radius must be positive and finite, got {radius}"
        )));
    }

    let row = u64::from(long_bands) + 1;
    let vertex_count = (u64::from(lat_bands) + 1) * row;
    if vertex_count > u64::from(u32::MAX) {
        return Err(OrreryError::InvalidArgument(format!(
            "{vertex_count} vertices do not fit 32-bit indices"
        )));
    }
    // Indexed draws take a u32 index range, which also bounds the buffer on
    // 32-bit targets.
    let index_count = u64::from(lat_bands) * u64::from(long_bands) * 6;
    if index_count > u64::from(u32::MAX) {
        return Err(OrreryError::InvalidArgument(format!(
            "{index_count} indices exceed a 32-bit draw range"
        )));
    }

    let mut vertices = Vec::with_capacity(vertex_count as usize * 3);
    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=long_bands {
            let phi = lon as f32 * 2.0 * PI / long_bands as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            vertices.push(radius * cos_phi * sin_theta);
            vertices.push(radius * cos_theta);
            vertices.push(radius * sin_phi * sin_theta);
        }
    }

    let row = long_bands + 1;
    let mut indices = Vec::with_capacity(index_count as usize);
    for lat in 0..lat_bands {
        for lon in 0..long_bands {
            let first = lat * row + lon;
            let second = first + row;

            indices.extend_from_slice(&[first, first + 1, second]);
            indices.extend_from_slice(&[second, first + 1, second + 1]);
        }
    }

    Ok(MeshData { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_band_sphere_is_a_degenerate_strip() {
        let mesh = generate_sphere(1.0, 1, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn north_pole_comes_first() {
        let mesh = generate_sphere(2.0, 4, 4).unwrap();
        let first = mesh.positions().next().unwrap();
        assert!(first.abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-6));
    }
}
