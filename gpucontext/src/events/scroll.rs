use std::time::Duration;

use super::Modifiers;

/// Wheel or touchpad scroll with position, delta unit and timing.
///
/// Kept apart from [`super::PointerEvent`]: scrolls carry deltas, not a persistent pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    /// Pointer position in logical pixels at the time of scrolling.
    pub x: f64,
    pub y: f64,
    /// Positive scrolls content right.
    pub delta_x: f64,
    /// Positive scrolls content down.
    pub delta_y: f64,
    pub delta_mode: ScrollDeltaMode,
    pub modifiers: Modifiers,
    pub timestamp: Duration,
}

impl ScrollEvent {
    /// Deltas converted to logical pixels.
    ///
    /// `line_height` and `page_height` are the consumer's own metrics.
    pub fn pixel_delta(&self, line_height: f64, page_height: f64) -> (f64, f64) {
        let factor = match self.delta_mode {
            ScrollDeltaMode::Pixel => 1.0,
            ScrollDeltaMode::Line => line_height,
            ScrollDeltaMode::Page => page_height,
        };
        (self.delta_x * factor, self.delta_y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ScrollDeltaMode {
    /// Typical for touchpads.
    #[default]
    Pixel = 0,
    /// Typical for mouse wheels.
    Line,
    Page,
}

impl std::fmt::Display for ScrollDeltaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrollDeltaMode::Pixel => write!(f, "Pixel"),
            ScrollDeltaMode::Line => write!(f, "Line"),
            ScrollDeltaMode::Page => write!(f, "Page"),
        }
    }
}

/// Source of detailed scroll events.
///
/// [`super::EventSource::on_scroll`] is enough for plain deltas.
pub trait ScrollEventSource {
    fn on_scroll_event(&self, callback: Box<dyn Fn(ScrollEvent) + Send + Sync>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullScrollEventSource;

impl ScrollEventSource for NullScrollEventSource {
    fn on_scroll_event(&self, _callback: Box<dyn Fn(ScrollEvent) + Send + Sync>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_mode_display() {
        assert_eq!(ScrollDeltaMode::Pixel.to_string(), "Pixel");
        assert_eq!(ScrollDeltaMode::Line.to_string(), "Line");
        assert_eq!(ScrollDeltaMode::Page.to_string(), "Page");
        assert_eq!(ScrollDeltaMode::default(), ScrollDeltaMode::Pixel);
    }

    #[test]
    fn test_pixel_delta() {
        let mut ev = ScrollEvent {
            delta_x: 1.0,
            delta_y: -2.0,
            ..Default::default()
        };
        assert_eq!(ev.pixel_delta(16.0, 600.0), (1.0, -2.0));

        ev.delta_mode = ScrollDeltaMode::Line;
        assert_eq!(ev.pixel_delta(16.0, 600.0), (16.0, -32.0));

        ev.delta_mode = ScrollDeltaMode::Page;
        assert_eq!(ev.pixel_delta(16.0, 600.0), (600.0, -1200.0));
    }

    #[test]
    fn test_ctrl_scroll_modifiers() {
        let ev = ScrollEvent {
            delta_y: 3.0,
            modifiers: Modifiers::CONTROL,
            ..Default::default()
        };
        assert!(ev.modifiers.has_control());
        NullScrollEventSource.on_scroll_event(Box::new(|_| {}));
    }
}
