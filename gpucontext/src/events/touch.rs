use std::time::Duration;

use super::Modifiers;

/// Identifies a touch point from `Began` until `Ended` / `Canceled`.
/// Ids may be reused once a touch ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchId(pub i64);

/// Lifecycle stage of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TouchPhase {
    Began = 0,
    Moved,
    Ended,
    /// Interrupted by the system (focus loss, system gesture, hardware error).
    Canceled,
}

impl TouchPhase {
    /// Whether touches in this phase are no longer active.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TouchPhase::Ended | TouchPhase::Canceled)
    }
}

impl std::fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TouchPhase::Began => write!(f, "Began"),
            TouchPhase::Moved => write!(f, "Moved"),
            TouchPhase::Ended => write!(f, "Ended"),
            TouchPhase::Canceled => write!(f, "Canceled"),
        }
    }
}

/// A single contact, in logical pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
    /// 0.0 ..= 1.0, when the hardware reports it.
    pub pressure: Option<f32>,
    /// Approximate contact radius in logical pixels, when the hardware reports it.
    pub radius: Option<f32>,
}

impl TouchPoint {
    pub fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            pressure: None,
            radius: None,
        }
    }
}

/// Touch event carrying the changed points and every active point.
///
/// For `Ended` / `Canceled`, `all` excludes the points in `changed`.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub changed: Vec<TouchPoint>,
    pub all: Vec<TouchPoint>,
    pub modifiers: Modifiers,
    pub timestamp: Duration,
}

impl TouchEvent {
    pub fn find(&self, id: TouchId) -> Option<&TouchPoint> {
        self.all
            .iter()
            .chain(self.changed.iter())
            .find(|point| point.id == id)
    }
}

/// Source of touch events. Desktop-only hosts typically do not provide one.
///
/// Events arrive in order `Began -> Moved* -> Ended | Canceled`; simultaneous
/// contacts are coalesced into a single event.
pub trait TouchEventSource {
    fn on_touch(&self, callback: Box<dyn Fn(TouchEvent) + Send + Sync>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullTouchEventSource;

impl TouchEventSource for NullTouchEventSource {
    fn on_touch(&self, _callback: Box<dyn Fn(TouchEvent) + Send + Sync>) {}
}
