use crate::platform::PlatformProvider;

/// Window geometry and DPI, for layout in density-independent pixels.
pub trait WindowProvider {
    /// Client area in physical pixels.
    fn size(&self) -> (u32, u32);

    /// 1.0 is standard DPI, 2.0 is HiDPI / Retina.
    fn scale_factor(&self) -> f64;

    /// Render one frame in on-demand mode. No-op in continuous mode.
    fn request_redraw(&self);

    /// OS integration, for hosts that provide it.
    fn as_platform(&self) -> Option<&dyn PlatformProvider> {
        None
    }

    /// Client area in density-independent pixels.
    fn logical_size(&self) -> (f64, f64) {
        let (width, height) = self.size();
        let scale = self.scale_factor();
        (width as f64 / scale, height as f64 / scale)
    }
}

/// Headless window with fixed geometry.
///
/// A zero `scale_factor` is reported as 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NullWindowProvider {
    pub width: u32,
    pub height: u32,
    pub scale_factor: f64,
}

impl NullWindowProvider {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale_factor: 1.0,
        }
    }
}

impl WindowProvider for NullWindowProvider {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn scale_factor(&self) -> f64 {
        if self.scale_factor == 0.0 {
            1.0
        } else {
            self.scale_factor
        }
    }

    fn request_redraw(&self) {}
}
