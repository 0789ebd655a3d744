use std::ops::{Add, Mul, Sub};
use std::time::Duration;

/// A 2D coordinate in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Gesture deltas computed once per frame from the active pointers.
///
/// With fewer than two pointers the event is empty (see [`GestureEvent::default`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub num_pointers: u32,
    /// Proportional zoom for this frame. 1.0 means no change.
    pub zoom_delta: f64,
    /// Per-axis zoom, for non-uniform stretching.
    pub zoom_delta_2d: Point,
    /// Radians, counter-clockwise positive.
    pub rotation_delta: f64,
    /// Centroid movement in logical pixels.
    pub translation_delta: Point,
    pub pinch_type: PinchType,
    /// Centroid of the active pointers; the zoom and rotation pivot.
    pub center: Point,
    pub timestamp: Duration,
}

impl Default for GestureEvent {
    fn default() -> Self {
        Self {
            num_pointers: 0,
            zoom_delta: 1.0,
            zoom_delta_2d: Point::new(1.0, 1.0),
            rotation_delta: 0.0,
            translation_delta: Point::default(),
            pinch_type: PinchType::None,
            center: Point::default(),
            timestamp: Duration::ZERO,
        }
    }
}

impl GestureEvent {
    /// Whether enough pointers are active for a gesture.
    pub fn is_active(&self) -> bool {
        self.num_pointers >= 2
    }
}

/// Classification of a two-finger pinch by finger geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PinchType {
    /// Fewer than two pointers.
    #[default]
    None = 0,
    Horizontal,
    Vertical,
    Proportional,
}

impl PinchType {
    const AXIS_DOMINANCE: f64 = 3.0;

    /// Classify a pinch from the separation between two fingers.
    ///
    /// An axis dominates when its separation exceeds the other's by 3x.
    pub fn classify(dx: f64, dy: f64) -> Self {
        let (dx, dy) = (dx.abs(), dy.abs());
        if dx > dy * Self::AXIS_DOMINANCE {
            PinchType::Horizontal
        } else if dy > dx * Self::AXIS_DOMINANCE {
            PinchType::Vertical
        } else {
            PinchType::Proportional
        }
    }
}

impl std::fmt::Display for PinchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PinchType::None => write!(f, "None"),
            PinchType::Horizontal => write!(f, "Horizontal"),
            PinchType::Vertical => write!(f, "Vertical"),
            PinchType::Proportional => write!(f, "Proportional"),
        }
    }
}

/// Source of per-frame gesture events, delivered at end of frame while 2+ pointers are active.
pub trait GestureEventSource {
    fn on_gesture(&self, callback: Box<dyn Fn(GestureEvent) + Send + Sync>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullGestureEventSource;

impl GestureEventSource for NullGestureEventSource {
    fn on_gesture(&self, _callback: Box<dyn Fn(GestureEvent) + Send + Sync>) {}
}
