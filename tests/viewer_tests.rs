use glam::Vec3;
use orrery_webgpu::config::OrreryConfig;
use orrery_webgpu::Viewer;
use winit::keyboard::KeyCode;

#[test]
fn test_mouse_motion_needs_pointer_lock() {
    let mut viewer = Viewer::default();
    let yaw = viewer.camera.yaw();

    viewer.handle_mouse_motion(100.0, 0.0);
    viewer.frame(1.0 / 60.0);
    assert_eq!(viewer.camera.yaw(), yaw);

    viewer.set_pointer_locked(true);
    viewer.handle_mouse_motion(100.0, 0.0);
    viewer.frame(1.0 / 60.0);
    assert!(viewer.camera.yaw() > yaw);
}

#[test]
fn test_unlock_discards_pending_motion() {
    let mut viewer = Viewer::default();
    viewer.set_pointer_locked(true);
    viewer.handle_mouse_motion(40.0, 40.0);
    viewer.set_pointer_locked(false);

    let yaw = viewer.camera.yaw();
    viewer.frame(1.0 / 60.0);

    assert_eq!(viewer.camera.yaw(), yaw);
}

#[test]
fn test_keys_drive_camera() {
    let mut viewer = Viewer::default();
    let start = viewer.camera.position();

    assert!(viewer.handle_key(KeyCode::KeyW, true));
    assert!(!viewer.handle_key(KeyCode::KeyQ, true));
    viewer.frame(1.0 / 60.0);
    let moved = viewer.camera.position();
    assert!(moved.z < start.z);

    viewer.handle_key(KeyCode::KeyW, false);
    viewer.frame(1.0 / 60.0);
    assert_eq!(viewer.camera.position(), moved);
}

#[test]
fn test_focus_loss_releases_keys() {
    let mut viewer = Viewer::default();
    viewer.handle_key(KeyCode::ArrowRight, true);
    viewer.set_pointer_locked(true);

    viewer.focus_lost();
    let position = viewer.camera.position();
    viewer.frame(1.0 / 60.0);

    assert_eq!(viewer.camera.position(), position);
    assert!(!viewer.pointer_locked());
}

#[test]
fn test_frame_contents() {
    let mut viewer = Viewer::new(&OrreryConfig::default());
    viewer.resize(800, 600);

    let frame = viewer.frame(1.0 / 60.0);

    assert_eq!(frame.instances.len(), 3);
    assert_eq!(frame.view, viewer.camera.view_matrix());
    assert_eq!(frame.projection, viewer.projection.matrix());
    assert!((viewer.projection.aspect - 4.0 / 3.0).abs() < 1e-6);
    // The orbit advanced once before the snapshot.
    assert!((viewer.system.angle() - 0.5).abs() < 1e-6);

    // The sun sits at the origin, 8 units in front of the default camera.
    let sun_in_view = frame.view.transform_point3(frame.instances[0].model.transform_point3(Vec3::ZERO));
    assert!(sun_in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -8.0), 1e-4));
}
