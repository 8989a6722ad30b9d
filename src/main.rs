#[cfg(not(target_arch = "wasm32"))]
mod native {
    use orrery_webgpu::config::OrreryConfig;
    use orrery_webgpu::geometry::{generate_sphere, MeshData};
    use orrery_webgpu::render::{GpuContext, SceneRenderer};
    use orrery_webgpu::Viewer;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Instant;
    use winit::application::ApplicationHandler;
    use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
    use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
    use winit::keyboard::{KeyCode, PhysicalKey};
    use winit::window::{CursorGrabMode, Window, WindowId};

    struct App {
        window: Option<Arc<Window>>,
        context: Option<GpuContext>,
        renderer: Option<SceneRenderer>,
        sphere: MeshData,
        viewer: Viewer,
        last_frame: Instant,
    }

    impl App {
        fn new(config: &OrreryConfig, sphere: MeshData) -> Self {
            Self {
                window: None,
                context: None,
                renderer: None,
                sphere,
                viewer: Viewer::new(config),
                last_frame: Instant::now(),
            }
        }

        fn lock_pointer(&mut self) {
            let Some(window) = &self.window else { return };
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
            match grabbed {
                Ok(()) => {
                    window.set_cursor_visible(false);
                    self.viewer.set_pointer_locked(true);
                }
                Err(e) => log::warn!("Pointer lock unavailable: {e}"),
            }
        }

        fn unlock_pointer(&mut self) {
            if let Some(window) = &self.window {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                    log::warn!("Failed to release pointer: {e}");
                }
                window.set_cursor_visible(true);
            }
            self.viewer.set_pointer_locked(false);
        }

        fn render(&mut self) {
            let now = Instant::now();
            let dt = now.duration_since(self.last_frame).as_secs_f32().min(0.1);
            self.last_frame = now;

            let frame = self.viewer.frame(dt);

            let (Some(context), Some(renderer)) = (self.context.as_mut(), self.renderer.as_ref()) else {
                return;
            };

            let output = match context.surface.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    context.reconfigure();
                    return;
                }
                Err(e) => {
                    log::error!("Surface error: {:?}", e);
                    return;
                }
            };

            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            renderer.render(context, &view, &frame);

            output.present();
        }
    }

    impl ApplicationHandler for App {
        fn resumed(&mut self, event_loop: &ActiveEventLoop) {
            if self.window.is_some() {
                return;
            }

            let window_attrs = Window::default_attributes()
                .with_title("Orrery")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let context = match pollster::block_on(GpuContext::new(window)) {
                Ok(context) => context,
                Err(e) => {
                    log::error!("GPU initialisation failed: {e}");
                    event_loop.exit();
                    return;
                }
            };
            let (width, height) = context.size();
            self.viewer.resize(width, height);

            self.renderer = Some(SceneRenderer::new(&context, &self.sphere));
            self.context = Some(context);
            self.last_frame = Instant::now();
        }

        fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
            match event {
                WindowEvent::CloseRequested => {
                    event_loop.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    let pressed = event.state == ElementState::Pressed;
                    if let PhysicalKey::Code(code) = event.physical_key {
                        if code == KeyCode::Escape && pressed {
                            if self.viewer.pointer_locked() {
                                self.unlock_pointer();
                            } else {
                                event_loop.exit();
                            }
                        } else {
                            self.viewer.handle_key(code, pressed);
                        }
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    if !self.viewer.pointer_locked() {
                        self.lock_pointer();
                    }
                }
                WindowEvent::Focused(false) => {
                    self.unlock_pointer();
                    self.viewer.focus_lost();
                }
                WindowEvent::Resized(size) => {
                    if let Some(context) = &mut self.context {
                        context.resize(size);
                    }
                    self.viewer.resize(size.width, size.height);
                }
                WindowEvent::RedrawRequested => {
                    self.render();
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        }

        fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
            if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
                self.viewer.handle_mouse_motion(dx as f32, dy as f32);
            }
        }
    }

    fn load_config() -> Result<OrreryConfig, orrery_webgpu::OrreryError> {
        match std::env::args().nth(1) {
            Some(path) => OrreryConfig::load(Path::new(&path)),
            None => Ok(OrreryConfig::default()),
        }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let config = load_config()?;
        let sphere = generate_sphere(1.0, config.mesh.lat_bands, config.mesh.long_bands)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(&config, sphere);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
