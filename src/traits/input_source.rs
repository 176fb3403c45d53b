use serde::{Deserialize, Serialize};

use crate::core::Subscription;

/// Screen-space position in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

/// Modifier keys held while an event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Whether a primary press with these modifiers starts a pan instead of a rotate
    pub fn pans(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// One active touch contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub position: Point2,
}

impl TouchPoint {
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Point2::new(x, y),
        }
    }
}

/// Logical input event delivered by a host environment.
///
/// Touch events carry every contact still active after the change, in the
/// order the host reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
        position: Point2,
    },
    PointerMove {
        position: Point2,
    },
    PointerUp,
    PointerLeave,
    Wheel {
        delta_y: f32,
    },
    TouchStart {
        touches: Vec<TouchPoint>,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
    },
    TouchEnd {
        touches: Vec<TouchPoint>,
    },
}

/// Handler invoked for every event an input source delivers
pub type InputHandler = Box<dyn FnMut(&InputEvent)>;

/// Input source - anything that can deliver logical input events
pub trait InputSource {
    /// Register a handler. The handler stays registered until the
    /// returned subscription is dropped or unsubscribed.
    fn subscribe(&self, handler: InputHandler) -> Subscription;
}
