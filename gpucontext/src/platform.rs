use crate::error::PlatformError;

/// OS integration: clipboard, cursor and accessibility preferences.
///
/// Optional; obtain it through [`crate::window::WindowProvider::as_platform`].
pub trait PlatformProvider {
    /// Text on the clipboard. Empty when the clipboard is empty or holds no text.
    fn clipboard_read(&self) -> Result<String, PlatformError>;

    fn clipboard_write(&self, text: &str) -> Result<(), PlatformError>;

    /// Usually reset to [`CursorShape::Default`] at the start of each frame.
    fn set_cursor(&self, cursor: CursorShape);

    fn dark_mode(&self) -> bool;

    fn reduce_motion(&self) -> bool;

    fn high_contrast(&self) -> bool;

    /// Font size preference multiplier; 1.0 is the system default.
    fn font_scale(&self) -> f32;
}

/// Mouse cursor shapes common to Windows, macOS and Linux.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CursorShape {
    #[default]
    Default = 0,
    /// Hand, for clickable elements.
    Pointer,
    /// I-beam.
    Text,
    Crosshair,
    Move,
    ResizeNS,
    ResizeEW,
    ResizeNWSE,
    ResizeNESW,
    NotAllowed,
    Wait,
    /// Hidden cursor.
    None,
}

impl CursorShape {
    pub const ALL: [CursorShape; 12] = [
        CursorShape::Default,
        CursorShape::Pointer,
        CursorShape::Text,
        CursorShape::Crosshair,
        CursorShape::Move,
        CursorShape::ResizeNS,
        CursorShape::ResizeEW,
        CursorShape::ResizeNWSE,
        CursorShape::ResizeNESW,
        CursorShape::NotAllowed,
        CursorShape::Wait,
        CursorShape::None,
    ];
}

impl std::fmt::Display for CursorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CursorShape::Default => "Default",
            CursorShape::Pointer => "Pointer",
            CursorShape::Text => "Text",
            CursorShape::Crosshair => "Crosshair",
            CursorShape::Move => "Move",
            CursorShape::ResizeNS => "ResizeNS",
            CursorShape::ResizeEW => "ResizeEW",
            CursorShape::ResizeNWSE => "ResizeNWSE",
            CursorShape::ResizeNESW => "ResizeNESW",
            CursorShape::NotAllowed => "NotAllowed",
            CursorShape::Wait => "Wait",
            CursorShape::None => "None",
        };
        write!(f, "{name}")
    }
}

/// No-op platform: empty clipboard, default cursor, no accessibility preferences.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatformProvider;

impl PlatformProvider for NullPlatformProvider {
    fn clipboard_read(&self) -> Result<String, PlatformError> {
        Ok(String::new())
    }

    fn clipboard_write(&self, _text: &str) -> Result<(), PlatformError> {
        Ok(())
    }

    fn set_cursor(&self, _cursor: CursorShape) {}

    fn dark_mode(&self) -> bool {
        false
    }

    fn reduce_motion(&self) -> bool {
        false
    }

    fn high_contrast(&self) -> bool {
        false
    }

    fn font_scale(&self) -> f32 {
        1.0
    }
}
