use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::subscription::Subscription;
use crate::math::{orbit_position, orbit_up, pan_basis, Vec3};
use crate::traits::{InputEvent, InputSource, Point2, PointerButton, RenderTarget, TouchPoint};

/// Distance restored by [`OrbitCameraController::reset`], regardless of configuration
pub const RESET_DISTANCE: f32 = 5.0;

/// Orbit camera tuning. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Initial distance from the target
    pub distance: f32,
    /// Initial pitch
    pub pitch: f32,
    /// Initial yaw
    pub yaw: f32,
    /// Degrees of rotation per pixel of drag
    pub mouse_speed: f32,
    /// Distance change per unit of wheel delta
    pub wheel_speed: f32,
    /// Pan distance per pixel, scaled by the current distance
    pub pan_speed: f32,
    /// Distance change per pixel of pinch separation change
    pub pinch_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Lower pitch bound. Only applied when both bounds are finite.
    pub min_pitch: f32,
    /// Upper pitch bound. Only applied when both bounds are finite.
    pub max_pitch: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            pitch: 0.0,
            yaw: 0.0,
            mouse_speed: 0.3,
            wheel_speed: 0.1,
            pan_speed: 0.01,
            pinch_speed: 0.01,
            min_distance: 1.0,
            max_distance: 100.0,
            min_pitch: f32::NEG_INFINITY,
            max_pitch: f32::INFINITY,
        }
    }
}

impl OrbitConfig {
    /// Clamp without panicking on inverted or NaN bounds
    pub fn clamp_distance(&self, distance: f32) -> f32 {
        distance.max(self.min_distance).min(self.max_distance)
    }

    /// A single finite bound means no clamp at all
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        if self.min_pitch.is_finite() && self.max_pitch.is_finite() {
            pitch.max(self.min_pitch).min(self.max_pitch)
        } else {
            pitch
        }
    }
}

/// Orbit parameters the camera placement is derived from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

/// Interaction mode. Per-mode tracking data lives in the variant that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Rotating { last: Point2 },
    Panning { last: Point2 },
    Pinching { last_distance: f32 },
}

impl DragMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragMode::Idle)
    }
}

/// Camera placement computed from an orbit state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Placement {
    pub fn from_state(state: &OrbitState) -> Self {
        let position = orbit_position(state.target, state.distance, state.yaw, state.pitch);
        let up = orbit_up(position, state.target, state.yaw, state.pitch);

        Self {
            position,
            target: state.target,
            up,
        }
    }
}

/// Orbit camera controller.
///
/// Turns pointer, wheel and touch input into yaw/pitch/distance/target
/// changes and re-places the render target after every change.
pub struct OrbitCameraController<T: RenderTarget> {
    render_target: T,
    config: OrbitConfig,
    state: OrbitState,
    mode: DragMode,
}

impl<T: RenderTarget> OrbitCameraController<T> {
    /// Create a controller and apply the initial placement immediately
    pub fn new(render_target: T, target: Vec3, config: OrbitConfig) -> Self {
        let state = OrbitState {
            target,
            distance: config.clamp_distance(config.distance),
            yaw: config.yaw,
            pitch: config.clamp_pitch(config.pitch),
        };

        let mut controller = Self {
            render_target,
            config,
            state,
            mode: DragMode::Idle,
        };
        controller.apply();
        controller
    }

    /// Create a controller orbiting the origin
    pub fn with_config(render_target: T, config: OrbitConfig) -> Self {
        Self::new(render_target, Vec3::ZERO, config)
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn render_target(&self) -> &T {
        &self.render_target
    }

    pub fn render_target_mut(&mut self) -> &mut T {
        &mut self.render_target
    }

    pub fn into_render_target(self) -> T {
        self.render_target
    }

    /// Placement for the current state. Pure, the render target is not touched.
    pub fn placement(&self) -> Placement {
        Placement::from_state(&self.state)
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.state.target = target;
        self.apply();
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.state.distance = self.config.clamp_distance(distance);
        self.apply();
    }

    /// Back to pitch 0, yaw 0, distance [`RESET_DISTANCE`]. Target is kept.
    pub fn reset(&mut self) {
        self.state.pitch = 0.0;
        self.state.yaw = 0.0;
        self.state.distance = RESET_DISTANCE;
        self.mode = DragMode::Idle;
        self.apply();
    }

    /// Route one input event through the interaction state machine
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                button,
                modifiers,
                position,
            } => {
                if *button != PointerButton::Primary {
                    return;
                }
                self.mode = if modifiers.pans() {
                    DragMode::Panning { last: *position }
                } else {
                    DragMode::Rotating { last: *position }
                };
            }
            InputEvent::PointerMove { position } => self.drag_to(*position),
            InputEvent::PointerUp | InputEvent::PointerLeave => self.mode = DragMode::Idle,
            InputEvent::Wheel { delta_y } => {
                self.set_distance(self.state.distance + delta_y * self.config.wheel_speed);
            }
            InputEvent::TouchStart { touches } => self.touch_start(touches),
            InputEvent::TouchMove { touches } => self.touch_move(touches),
            InputEvent::TouchEnd { .. } => self.mode = DragMode::Idle,
        }
    }

    fn drag_to(&mut self, position: Point2) {
        match self.mode {
            DragMode::Rotating { last } => {
                self.rotate(position.x - last.x, position.y - last.y);
                self.mode = DragMode::Rotating { last: position };
            }
            DragMode::Panning { last } => {
                self.pan(position.x - last.x, position.y - last.y);
                self.mode = DragMode::Panning { last: position };
            }
            DragMode::Idle | DragMode::Pinching { .. } => {}
        }
    }

    fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.mode = match touches {
            [single] => DragMode::Rotating {
                last: single.position,
            },
            [a, b] => DragMode::Pinching {
                last_distance: a.position.distance(b.position),
            },
            _ => DragMode::Idle,
        };
    }

    fn touch_move(&mut self, touches: &[TouchPoint]) {
        match (self.mode, touches) {
            (DragMode::Rotating { .. }, [single]) => self.drag_to(single.position),
            (DragMode::Pinching { last_distance }, [a, b]) => {
                let current = a.position.distance(b.position);
                self.set_distance(
                    self.state.distance - (current - last_distance) * self.config.pinch_speed,
                );
                self.mode = DragMode::Pinching {
                    last_distance: current,
                };
            }
            _ => {}
        }
    }

    fn rotate(&mut self, dx: f32, dy: f32) {
        self.state.yaw -= dx * self.config.mouse_speed;
        self.state.pitch = self
            .config
            .clamp_pitch(self.state.pitch - dy * self.config.mouse_speed);
        self.apply();
    }

    fn pan(&mut self, dx: f32, dy: f32) {
        let (right, up) = pan_basis(self.state.yaw, self.state.pitch);
        let scale = self.config.pan_speed * self.state.distance;
        self.state.target += right * (dx * scale) - up * (dy * scale);
        self.apply();
    }

    fn apply(&mut self) {
        let placement = self.placement();
        log::trace!(
            "camera at {:?} looking at {:?}",
            placement.position,
            placement.target
        );
        self.render_target.set_position(placement.position);
        self.render_target.look_at(placement.target, placement.up);
    }
}

/// Register a shared controller with an input source.
///
/// The handler holds only a weak reference, so a controller dropped before
/// its subscription turns further events into no-ops.
pub fn attach<T, S>(controller: &Rc<RefCell<OrbitCameraController<T>>>, source: &S) -> Subscription
where
    T: RenderTarget + 'static,
    S: InputSource + ?Sized,
{
    let weak = Rc::downgrade(controller);
    source.subscribe(Box::new(move |event| {
        if let Some(controller) = weak.upgrade() {
            controller.borrow_mut().handle_event(event);
        }
    }))
}
