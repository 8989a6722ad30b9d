//! WASM entry point - fly-through orrery rendered into `<canvas id="canvas">`

use crate::config::OrreryConfig;
use crate::geometry::{generate_sphere, MeshData};
use crate::render::{GpuContext, SceneRenderer};
use crate::viewer::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::web::EventLoopExtWebSys;
use winit::platform::web::WindowAttributesExtWebSys;
use winit::window::{CursorGrabMode, Window, WindowId};

struct GpuState {
    context: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
}

struct App {
    window: Option<Arc<Window>>,
    state: Rc<RefCell<GpuState>>,
    sphere: Rc<MeshData>,
    viewer: Viewer,
    last_time: f64,
    init_pending: bool,
}

impl App {
    fn new(config: &OrreryConfig, sphere: MeshData) -> Self {
        Self {
            window: None,
            state: Rc::new(RefCell::new(GpuState {
                context: None,
                renderer: None,
            })),
            sphere: Rc::new(sphere),
            viewer: Viewer::new(config),
            last_time: 0.0,
            init_pending: false,
        }
    }

    fn set_pointer_lock(&mut self, locked: bool) {
        let Some(window) = &self.window else { return };
        let mode = if locked {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
        // Acquiring the lock completes asynchronously; `device_event` picks
        // it up from the document once granted.
        match window.set_cursor_grab(mode) {
            Ok(()) if !locked => self.viewer.set_pointer_locked(false),
            Ok(()) => {}
            Err(e) => log::warn!("Pointer lock change failed: {e}"),
        }
    }

    fn render(&mut self, dt: f32) {
        let frame = self.viewer.frame(dt);

        let mut state = self.state.borrow_mut();
        let GpuState { context, renderer } = &mut *state;
        let (Some(context), Some(renderer)) = (context.as_mut(), renderer.as_ref()) else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(o) => o,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(context, &view, &frame);
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_pending {
            return;
        }
        self.init_pending = true;

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Could not find canvas element with id 'canvas'");
            return;
        };

        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let window_attrs = Window::default_attributes()
            .with_canvas(Some(canvas))
            .with_inner_size(PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                return;
            }
        };
        self.window = Some(window.clone());
        self.viewer.resize(width, height);

        let state = self.state.clone();
        let sphere = self.sphere.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let context = match GpuContext::new(window.clone()).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("GPU initialisation failed: {e}");
                    return;
                }
            };
            let renderer = SceneRenderer::new(&context, &sphere);

            let mut state = state.borrow_mut();
            state.context = Some(context);
            state.renderer = Some(renderer);

            window.request_redraw();
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.state.borrow_mut().context {
                    context.resize(size);
                }
                self.viewer.resize(size.width, size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        if pressed {
                            self.set_pointer_lock(false);
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
                if !pointer_lock_active() {
                    self.set_pointer_lock(true);
                }
            }

            WindowEvent::Focused(false) => self.viewer.focus_lost(),

            WindowEvent::RedrawRequested => {
                let now = web_sys::window()
                    .and_then(|w| w.performance())
                    .map(|p| p.now())
                    .unwrap_or(0.0);

                let dt = if self.last_time > 0.0 {
                    ((now - self.last_time) / 1000.0) as f32
                } else {
                    1.0 / 60.0
                };
                self.last_time = now;

                self.render(dt.min(0.1));

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            // The browser grants and releases the lock on its own (Escape,
            // tab switch) without a matching window event.
            self.viewer.set_pointer_locked(pointer_lock_active());
            self.viewer.handle_mouse_motion(dx as f32, dy as f32);
        }
    }
}

fn pointer_lock_active() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.pointer_lock_element())
        .is_some()
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let config = OrreryConfig::default();
    let sphere = generate_sphere(1.0, config.mesh.lat_bands, config.mesh.long_bands)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let event_loop = EventLoop::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let app = App::new(&config, sphere);

    event_loop.spawn_app(app);
    Ok(())
}
