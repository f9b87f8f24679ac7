/// Navigation keys recognised by the runtime.
///
/// Keys outside this set are not forwarded.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    PageUp,
    PageDown,
    Home,
    End,
    ArrowUp,
    ArrowDown,
}

/// Mouse wheel / touchpad scroll amount.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScrollDelta {
    /// Discrete wheel notches (positive y scrolls content up, i.e. toward the top).
    Line { x: f32, y: f32 },
    /// Precise touchpad delta in logical pixels.
    Pixel { x: f32, y: f32 },
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Scroll gesture over the window.
    Scroll(ScrollDelta),

    /// Key pressed (initial press and OS auto-repeat).
    KeyPressed { key: Key, repeat: bool },
}
