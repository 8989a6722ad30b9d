use glam::Vec3;
use orrery_webgpu::geometry::{generate_sphere, DEFAULT_BANDS};
use orrery_webgpu::OrreryError;

#[test]
fn test_small_sphere_counts() {
    let mesh = generate_sphere(1.0, 2, 2).unwrap();

    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.vertices().len(), 27);
    assert_eq!(mesh.indices().len(), 24);
    assert_eq!(mesh.triangle_count(), 8);
}

#[test]
fn test_counts_follow_band_formula() {
    for (lat, long) in [(1, 1), (3, 7), (DEFAULT_BANDS, DEFAULT_BANDS), (64, 5)] {
        let mesh = generate_sphere(1.0, lat, long).unwrap();
        assert_eq!(mesh.vertex_count(), ((lat + 1) * (long + 1)) as usize);
        assert_eq!(mesh.indices().len(), (lat * long * 6) as usize);
    }
}

#[test]
fn test_vertices_lie_on_radius() {
    for radius in [0.15, 1.0, 2.5, 100.0] {
        let mesh = generate_sphere(radius, 30, 30).unwrap();
        let tolerance = 1e-5 * radius.max(1.0);

        for position in mesh.positions() {
            let distance = position.length();
            assert!(
                (distance - radius).abs() < tolerance,
                "vertex {position:?} is {distance} from the centre, expected {radius}"
            );
        }
    }
}

#[test]
fn test_poles_and_seam() {
    let (lat, long) = (4, 6);
    let mesh = generate_sphere(3.0, lat, long).unwrap();
    let positions: Vec<Vec3> = mesh.positions().collect();
    let row = (long + 1) as usize;

    for lon in 0..row {
        assert!(positions[lon].abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), 1e-5));
        assert!(positions[lat as usize * row + lon].abs_diff_eq(Vec3::new(0.0, -3.0, 0.0), 1e-5));
    }

    // First and last column of each row coincide.
    for r in 0..=lat as usize {
        assert!(positions[r * row].abs_diff_eq(positions[r * row + long as usize], 1e-5));
    }

    // Equator starts on +X and a quarter turn later reaches +Z.
    let equator = 2 * row;
    assert!(positions[equator].abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
    assert!(positions[equator + 1]
        .abs_diff_eq(Vec3::new(3.0 * 60f32.to_radians().cos(), 0.0, 3.0 * 60f32.to_radians().sin()), 1e-5));
}

#[test]
fn test_indices_in_range() {
    let mesh = generate_sphere(1.0, 12, 9).unwrap();
    let vertex_count = mesh.vertex_count() as u32;

    assert!(mesh.indices().iter().all(|&i| i < vertex_count));
}

#[test]
fn test_triangles_wind_counter_clockwise_from_outside() {
    let mesh = generate_sphere(1.0, 16, 16).unwrap();
    let positions: Vec<Vec3> = mesh.positions().collect();
    let mut checked = 0;

    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (positions[a as usize], positions[b as usize], positions[c as usize]);
        let normal = (b - a).cross(c - a);
        if normal.length() < 1e-6 {
            // Pole triangles collapse to a line.
            continue;
        }
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "triangle {a:?} {b:?} {c:?} faces inwards");
        checked += 1;
    }

    // Every quad away from the poles contributes two triangles, the pole rows one each.
    assert_eq!(checked, 16 * 16 * 2 - 2 * 16);
}

#[test]
fn test_quad_triangles_share_diagonal() {
    let mesh = generate_sphere(1.0, 2, 3).unwrap();
    let row = 4;
    let (first, second) = (0, row);

    assert_eq!(&mesh.indices()[..6], &[first, first + 1, second, second, first + 1, second + 1]);
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate_sphere(1.7, 30, 30).unwrap();
    let b = generate_sphere(1.7, 30, 30).unwrap();

    assert_eq!(a, b);
    let bits = |m: &orrery_webgpu::MeshData| m.vertices().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn test_rejects_zero_bands() {
    assert!(matches!(generate_sphere(1.0, 0, 30), Err(OrreryError::InvalidArgument(_))));
    assert!(matches!(generate_sphere(1.0, 30, 0), Err(OrreryError::InvalidArgument(_))));
}

#[test]
fn test_rejects_bad_radius() {
    for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        assert!(
            matches!(generate_sphere(radius, 8, 8), Err(OrreryError::InvalidArgument(_))),
            "radius {radius} should be rejected"
        );
    }
}

#[test]
fn test_rejects_index_overflow() {
    let err = generate_sphere(1.0, u32::MAX, 2).unwrap_err();
    assert!(matches!(err, OrreryError::InvalidArgument(_)));
}

#[test]
fn test_rejects_index_count_overflow_with_valid_vertex_count() {
    // 30001 * 30001 vertices fit u32, 30000 * 30000 * 6 indices do not.
    let err = generate_sphere(1.0, 30_000, 30_000).unwrap_err();
    assert!(
        matches!(err, OrreryError::InvalidArgument(ref msg) if msg.contains("indices")),
        "unexpected error: {err:?}"
    );
}
