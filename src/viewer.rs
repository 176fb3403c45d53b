use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::ViewerConfig;
use crate::core::{
    attach, CameraTransform, InputHub, OrbitCameraController, Placement, Subscription,
    WinitInputAdapter,
};

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;
const WINDOW_TITLE: &str = "Splat Viewer";

type SharedController = Rc<RefCell<OrbitCameraController<CameraTransform>>>;

/// Viewer application state.
///
/// The splat scene itself is drawn by the external engine, which reads the
/// camera transform; this shell only owns input and camera placement.
pub struct ViewerApp {
    window: Option<Arc<Window>>,
    hub: InputHub,
    adapter: WinitInputAdapter,
    controller: SharedController,
    subscription: Option<Subscription>,
    last_placement: Placement,
}

impl ViewerApp {
    pub fn new(config: &ViewerConfig) -> Self {
        let hub = InputHub::new();
        let controller = Rc::new(RefCell::new(OrbitCameraController::new(
            CameraTransform::new(),
            config.target,
            config.orbit_config(),
        )));
        let subscription = attach(&controller, &hub);
        let last_placement = controller.borrow().placement();

        Self {
            window: None,
            hub,
            adapter: WinitInputAdapter::new(),
            controller,
            subscription: Some(subscription),
            last_placement,
        }
    }

    pub fn camera(&self) -> CameraTransform {
        *self.controller.borrow().render_target()
    }

    fn reset_camera(&mut self) {
        self.controller.borrow_mut().reset();
        log::info!("Camera reset");
        self.sync_placement();
    }

    /// Push a changed placement to the window title and request a redraw
    fn sync_placement(&mut self) {
        let placement = self.controller.borrow().placement();
        if placement == self.last_placement {
            return;
        }
        self.last_placement = placement;
        log::debug!(
            "camera eye {:?}, target {:?}",
            placement.position,
            placement.target
        );

        if let Some(window) = &self.window {
            let p = placement.position;
            window.set_title(&format!(
                "{WINDOW_TITLE} - eye ({:.2}, {:.2}, {:.2})",
                p.x, p.y, p.z
            ));
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                event_loop.exit();
                return;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::KeyR),
                        ..
                    },
                ..
            } => {
                self.reset_camera();
                return;
            }
            _ => {}
        }

        if let Some(input) = self.adapter.process_event(&event) {
            self.hub.dispatch(&input);
            self.sync_placement();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Detach before the window and camera go away
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        log::info!("Viewer shutting down");
    }
}

/// Open the viewer window and run until it is closed
pub fn run(config: &ViewerConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(config);

    log::info!("Controls: drag to orbit, shift+drag to pan, wheel to zoom, R to reset, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
