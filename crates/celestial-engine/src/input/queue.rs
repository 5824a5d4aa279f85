/// Key codes as delivered by the host (DOM `keyCode` values).
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
}

/// Which pointer button produced a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl PointerButton {
    /// Map a host button index (0 = primary, 1 = middle, 2 = secondary).
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            n => Self::Other(n.min(u8::MAX as u32) as u8),
        }
    }
}

/// Input event types the engine understands.
/// Generic, with no game-specific meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window or page asked the game to end.
    Quit,
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A pointer button went down at canvas coordinates (x, y).
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// A pointer button was released at canvas coordinates (x, y).
    PointerUp { x: f32, y: f32, button: PointerButton },
    /// The pointer moved to canvas coordinates (x, y).
    PointerMove { x: f32, y: f32 },
}

/// A queue of input events in arrival order.
/// The host pushes events as they happen; the frame loop hands them to the
/// game once and then drains the queue.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether a quit request is among the pending events.
    pub fn has_quit(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
