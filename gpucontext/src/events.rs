pub mod gesture;
pub mod key;
pub mod pointer;
pub mod scroll;
pub mod touch;

pub use gesture::{GestureEvent, GestureEventSource, NullGestureEventSource, PinchType, Point};
pub use key::{Key, Modifiers, MouseButton};
pub use pointer::{
    Button, Buttons, NullPointerEventSource, PointerEvent, PointerEventSource, PointerEventType,
    PointerType,
};
pub use scroll::{NullScrollEventSource, ScrollDeltaMode, ScrollEvent, ScrollEventSource};
pub use touch::{NullTouchEventSource, TouchEvent, TouchEventSource, TouchId, TouchPhase, TouchPoint};

/// Input events delivered by the host window system to a UI layer.
///
/// Callbacks are invoked on the main thread during the event loop and should return quickly.
/// Richer event streams are optional; hosts expose them through the `as_*_source` accessors.
pub trait EventSource {
    // --- keyboard ---

    fn on_key_press(&self, callback: Box<dyn Fn(Key, Modifiers) + Send + Sync>);

    fn on_key_release(&self, callback: Box<dyn Fn(Key, Modifiers) + Send + Sync>);

    /// Text after keyboard layout and input method processing.
    /// Prefer this over key presses for text entry.
    fn on_text_input(&self, callback: Box<dyn Fn(&str) + Send + Sync>);

    // --- mouse ---

    fn on_mouse_move(&self, callback: Box<dyn Fn(f64, f64) + Send + Sync>);

    fn on_mouse_press(&self, callback: Box<dyn Fn(MouseButton, f64, f64) + Send + Sync>);

    fn on_mouse_release(&self, callback: Box<dyn Fn(MouseButton, f64, f64) + Send + Sync>);

    /// `dx` / `dy` are scroll deltas, positive right / down.
    fn on_scroll(&self, callback: Box<dyn Fn(f64, f64) + Send + Sync>);

    // --- window ---

    fn on_resize(&self, callback: Box<dyn Fn(u32, u32) + Send + Sync>);

    fn on_focus(&self, callback: Box<dyn Fn(bool) + Send + Sync>);

    // --- IME ---

    fn on_ime_composition_start(&self, callback: Box<dyn Fn() + Send + Sync>);

    fn on_ime_composition_update(&self, callback: Box<dyn Fn(&ImeState) + Send + Sync>);

    /// `committed` is the final text to insert.
    fn on_ime_composition_end(&self, callback: Box<dyn Fn(&str) + Send + Sync>);

    // --- optional capabilities ---

    fn as_pointer_source(&self) -> Option<&dyn PointerEventSource> {
        None
    }

    fn as_scroll_source(&self) -> Option<&dyn ScrollEventSource> {
        None
    }

    fn as_touch_source(&self) -> Option<&dyn TouchEventSource> {
        None
    }

    fn as_gesture_source(&self) -> Option<&dyn GestureEventSource> {
        None
    }
}

/// Input method editor state during composition (CJK and similar input).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImeState {
    pub composing: bool,
    /// Preview text shown inline at the cursor.
    pub composition_text: String,
    /// Cursor position within `composition_text`.
    pub cursor_pos: usize,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl ImeState {
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection_start..self.selection_end
    }
}

/// Lets widgets steer the platform IME.
pub trait ImeController {
    /// Where to show the candidate window, in window pixels.
    fn set_ime_position(&self, x: i32, y: i32);

    /// Disable for password fields and other non-text inputs.
    fn set_ime_enabled(&self, enabled: bool);
}

/// Ignores every registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventSource;

impl EventSource for NullEventSource {
    fn on_key_press(&self, _callback: Box<dyn Fn(Key, Modifiers) + Send + Sync>) {}

    fn on_key_release(&self, _callback: Box<dyn Fn(Key, Modifiers) + Send + Sync>) {}

    fn on_text_input(&self, _callback: Box<dyn Fn(&str) + Send + Sync>) {}

    fn on_mouse_move(&self, _callback: Box<dyn Fn(f64, f64) + Send + Sync>) {}

    fn on_mouse_press(&self, _callback: Box<dyn Fn(MouseButton, f64, f64) + Send + Sync>) {}

    fn on_mouse_release(&self, _callback: Box<dyn Fn(MouseButton, f64, f64) + Send + Sync>) {}

    fn on_scroll(&self, _callback: Box<dyn Fn(f64, f64) + Send + Sync>) {}

    fn on_resize(&self, _callback: Box<dyn Fn(u32, u32) + Send + Sync>) {}

    fn on_focus(&self, _callback: Box<dyn Fn(bool) + Send + Sync>) {}

    fn on_ime_composition_start(&self, _callback: Box<dyn Fn() + Send + Sync>) {}

    fn on_ime_composition_update(&self, _callback: Box<dyn Fn(&ImeState) + Send + Sync>) {}

    fn on_ime_composition_end(&self, _callback: Box<dyn Fn(&str) + Send + Sync>) {}
}
