use winit::event::{ElementState, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::ModifiersState;

use crate::traits::{InputEvent, Modifiers, Point2, PointerButton, TouchPoint};

/// Pixels reported per wheel line, matching what browsers report for one notch
pub const WHEEL_LINE_HEIGHT: f32 = 100.0;

/// Adapter that bridges winit window events to logical [`InputEvent`]s
#[derive(Debug, Clone, Default)]
pub struct WinitInputAdapter {
    /// Last known cursor position (relative to window)
    cursor: Option<Point2>,
    /// Modifier keys currently held
    modifiers: Modifiers,
    /// Active touch contacts in the order they started
    touches: Vec<TouchPoint>,
}

impl WinitInputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events that only
    /// update adapter state or have no logical counterpart.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.on_modifiers(modifiers.state());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.on_cursor_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::CursorLeft { .. } => Some(self.on_cursor_left()),
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => Some(self.on_wheel(*delta)),
            WindowEvent::Touch(touch) => self.on_touch(
                touch.id,
                touch.phase,
                touch.location.x as f32,
                touch.location.y as f32,
            ),
            _ => None,
        }
    }

    pub fn on_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        };
    }

    pub fn on_cursor_moved(&mut self, x: f32, y: f32) -> InputEvent {
        let position = Point2::new(x, y);
        self.cursor = Some(position);
        InputEvent::PointerMove { position }
    }

    pub fn on_cursor_left(&mut self) -> InputEvent {
        self.cursor = None;
        InputEvent::PointerLeave
    }

    pub fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => Some(InputEvent::PointerDown {
                button: Self::map_button(button),
                modifiers: self.modifiers,
                position: self.cursor.unwrap_or_default(),
            }),
            ElementState::Released => Some(InputEvent::PointerUp),
        }
    }

    /// Wheel deltas use the browser sign convention: positive zooms out
    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> InputEvent {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_HEIGHT,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
        };
        InputEvent::Wheel { delta_y }
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> Option<InputEvent> {
        let contact = TouchPoint::new(id, x, y);
        match phase {
            TouchPhase::Started => {
                match self.touches.iter_mut().find(|t| t.id == id) {
                    Some(existing) => *existing = contact,
                    None => self.touches.push(contact),
                }
                Some(InputEvent::TouchStart {
                    touches: self.touches.clone(),
                })
            }
            TouchPhase::Moved => {
                let existing = self.touches.iter_mut().find(|t| t.id == id)?;
                *existing = contact;
                Some(InputEvent::TouchMove {
                    touches: self.touches.clone(),
                })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|t| t.id != id);
                Some(InputEvent::TouchEnd {
                    touches: self.touches.clone(),
                })
            }
        }
    }

    pub fn cursor(&self) -> Option<Point2> {
        self.cursor
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn active_touches(&self) -> &[TouchPoint] {
        &self.touches
    }

    fn map_button(button: MouseButton) -> PointerButton {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(code) => PointerButton::Other(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    // Note: winit WindowEvent construction needs a DeviceId, which is not
    // publicly constructible. These tests drive the per-event entry points.

    #[test]
    fn test_new_adapter_empty() {
        let adapter = WinitInputAdapter::new();
        assert_eq!(adapter.cursor(), None);
        assert_eq!(adapter.modifiers(), Modifiers::NONE);
        assert!(adapter.active_touches().is_empty());
    }

    #[test]
    fn test_press_uses_last_cursor_and_modifiers() {
        let mut adapter = WinitInputAdapter::new();
        adapter.on_modifiers(ModifiersState::SHIFT);
        adapter.on_cursor_moved(40.0, 30.0);

        let event = adapter.on_mouse_input(ElementState::Pressed, MouseButton::Left);
        assert_eq!(
            event,
            Some(InputEvent::PointerDown {
                button: PointerButton::Primary,
                modifiers: Modifiers::SHIFT,
                position: Point2::new(40.0, 30.0),
            })
        );

        let event = adapter.on_mouse_input(ElementState::Released, MouseButton::Left);
        assert_eq!(event, Some(InputEvent::PointerUp));
    }

    #[test]
    fn test_button_mapping() {
        let mut adapter = WinitInputAdapter::new();
        let cases = [
            (MouseButton::Right, PointerButton::Secondary),
            (MouseButton::Middle, PointerButton::Middle),
            (MouseButton::Other(7), PointerButton::Other(7)),
        ];
        for (button, expected) in cases {
            match adapter.on_mouse_input(ElementState::Pressed, button) {
                Some(InputEvent::PointerDown { button, .. }) => assert_eq!(button, expected),
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn test_cursor_left_clears_position() {
        let mut adapter = WinitInputAdapter::new();
        adapter.on_cursor_moved(1.0, 1.0);
        assert_eq!(adapter.on_cursor_left(), InputEvent::PointerLeave);
        assert_eq!(adapter.cursor(), None);
    }

    #[test]
    fn test_wheel_sign_convention() {
        let mut adapter = WinitInputAdapter::new();
        // scrolling down one notch zooms out
        assert_eq!(
            adapter.on_wheel(MouseScrollDelta::LineDelta(0.0, -1.0)),
            InputEvent::Wheel { delta_y: 100.0 }
        );
        assert_eq!(
            adapter.on_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.0))),
            InputEvent::Wheel { delta_y: -12.0 }
        );
    }

    #[test]
    fn test_touch_lifecycle() {
        let mut adapter = WinitInputAdapter::new();

        let started = adapter.on_touch(1, TouchPhase::Started, 10.0, 10.0);
        assert_eq!(
            started,
            Some(InputEvent::TouchStart {
                touches: vec![TouchPoint::new(1, 10.0, 10.0)],
            })
        );

        adapter.on_touch(2, TouchPhase::Started, 110.0, 10.0);
        let moved = adapter.on_touch(2, TouchPhase::Moved, 160.0, 10.0);
        assert_eq!(
            moved,
            Some(InputEvent::TouchMove {
                touches: vec![TouchPoint::new(1, 10.0, 10.0), TouchPoint::new(2, 160.0, 10.0)],
            })
        );

        let ended = adapter.on_touch(1, TouchPhase::Ended, 10.0, 10.0);
        assert_eq!(
            ended,
            Some(InputEvent::TouchEnd {
                touches: vec![TouchPoint::new(2, 160.0, 10.0)],
            })
        );
        assert_eq!(adapter.active_touches().len(), 1);
    }

    #[test]
    fn test_move_of_unknown_touch_ignored() {
        let mut adapter = WinitInputAdapter::new();
        assert_eq!(adapter.on_touch(9, TouchPhase::Moved, 0.0, 0.0), None);
    }
}
