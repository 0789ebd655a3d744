use std::time::Duration;

use bitflags::bitflags;

use super::Modifiers;

/// Unified mouse, touch and pen event following W3C Pointer Events Level 3.
///
/// Positions are in logical pixels relative to the window content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventType,
    /// Stays constant from `Down` through `Up` / `Cancel`. Usually 1 for the mouse.
    pub pointer_id: i64,
    pub x: f64,
    pub y: f64,
    /// 0.0 ..= 1.0. Devices without pressure report 0.5 while a button is held.
    pub pressure: f32,
    /// Degrees, -90 ..= 90.
    pub tilt_x: f32,
    /// Degrees, -90 ..= 90.
    pub tilt_y: f32,
    /// Degrees, 0 ..= 359.
    pub twist: f32,
    /// Contact geometry; 1.0 when the device does not report it.
    pub width: f32,
    pub height: f32,
    pub pointer_type: PointerType,
    pub is_primary: bool,
    /// Button that triggered a `Down` / `Up` event. `Button::None` for moves.
    pub button: Button,
    pub buttons: Buttons,
    pub modifiers: Modifiers,
    /// Time since an arbitrary reference; zero when unavailable.
    pub timestamp: Duration,
}

impl Default for PointerEvent {
    fn default() -> Self {
        Self {
            kind: PointerEventType::Move,
            pointer_id: 1,
            x: 0.0,
            y: 0.0,
            pressure: 0.0,
            tilt_x: 0.0,
            tilt_y: 0.0,
            twist: 0.0,
            width: 1.0,
            height: 1.0,
            pointer_type: PointerType::Mouse,
            is_primary: true,
            button: Button::None,
            buttons: Buttons::empty(),
            modifiers: Modifiers::empty(),
            timestamp: Duration::ZERO,
        }
    }
}

/// Delivery order: `Enter -> Down -> Move* -> Up | Cancel -> Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerEventType {
    Down = 0,
    Up,
    Move,
    Enter,
    Leave,
    /// The system took the pointer away; reset any in-progress interaction.
    Cancel,
}

impl std::fmt::Display for PointerEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerEventType::Down => write!(f, "PointerDown"),
            PointerEventType::Up => write!(f, "PointerUp"),
            PointerEventType::Move => write!(f, "PointerMove"),
            PointerEventType::Enter => write!(f, "PointerEnter"),
            PointerEventType::Leave => write!(f, "PointerLeave"),
            PointerEventType::Cancel => write!(f, "PointerCancel"),
        }
    }
}

impl TryFrom<u8> for PointerEventType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PointerEventType::Down),
            1 => Ok(PointerEventType::Up),
            2 => Ok(PointerEventType::Move),
            3 => Ok(PointerEventType::Enter),
            4 => Ok(PointerEventType::Leave),
            5 => Ok(PointerEventType::Cancel),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum PointerType {
    /// Includes trackpads emulating a mouse.
    #[default]
    Mouse = 0,
    Touch,
    Pen,
}

impl std::fmt::Display for PointerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointerType::Mouse => write!(f, "Mouse"),
            PointerType::Touch => write!(f, "Touch"),
            PointerType::Pen => write!(f, "Pen"),
        }
    }
}

impl TryFrom<u8> for PointerType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PointerType::Mouse),
            1 => Ok(PointerType::Touch),
            2 => Ok(PointerType::Pen),
            other => Err(other),
        }
    }
}

/// Button that triggered a pointer event. Values follow the W3C `button` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Button {
    #[default]
    None = -1,
    Left = 0,
    Middle = 1,
    Right = 2,
    /// Usually "back".
    X1 = 3,
    /// Usually "forward".
    X2 = 4,
    Eraser = 5,
}

impl Button {
    /// The bit this button occupies in [`Buttons`].
    pub fn mask(&self) -> Buttons {
        match self {
            Button::None => Buttons::empty(),
            Button::Left => Buttons::LEFT,
            Button::Middle => Buttons::MIDDLE,
            Button::Right => Buttons::RIGHT,
            Button::X1 => Buttons::X1,
            Button::X2 => Buttons::X2,
            Button::Eraser => Buttons::ERASER,
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Button::None => write!(f, "None"),
            Button::Left => write!(f, "Left"),
            Button::Middle => write!(f, "Middle"),
            Button::Right => write!(f, "Right"),
            Button::X1 => write!(f, "X1"),
            Button::X2 => write!(f, "X2"),
            Button::Eraser => write!(f, "Eraser"),
        }
    }
}

impl TryFrom<i8> for Button {
    type Error = i8;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Button::None),
            0 => Ok(Button::Left),
            1 => Ok(Button::Middle),
            2 => Ok(Button::Right),
            3 => Ok(Button::X1),
            4 => Ok(Button::X2),
            5 => Ok(Button::Eraser),
            other => Err(other),
        }
    }
}

bitflags! {
    /// Every button currently held, following the W3C `buttons` bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const MIDDLE = 1 << 2;
        const X1     = 1 << 3;
        const X2     = 1 << 4;
        const ERASER = 1 << 5;
    }
}

impl Buttons {
    pub fn has_left(&self) -> bool {
        self.contains(Buttons::LEFT)
    }

    pub fn has_right(&self) -> bool {
        self.contains(Buttons::RIGHT)
    }

    pub fn has_middle(&self) -> bool {
        self.contains(Buttons::MIDDLE)
    }

    pub fn has_x1(&self) -> bool {
        self.contains(Buttons::X1)
    }

    pub fn has_x2(&self) -> bool {
        self.contains(Buttons::X2)
    }

    pub fn has_eraser(&self) -> bool {
        self.contains(Buttons::ERASER)
    }

    /// Number of buttons held.
    pub fn count(&self) -> u32 {
        self.bits().count_ones()
    }
}

/// Source of unified pointer events.
///
/// Callbacks run on the UI thread and should return quickly.
pub trait PointerEventSource {
    fn on_pointer(&self, callback: Box<dyn Fn(PointerEvent) + Send + Sync>);
}

/// Ignores every registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPointerEventSource;

impl PointerEventSource for NullPointerEventSource {
    fn on_pointer(&self, _callback: Box<dyn Fn(PointerEvent) + Send + Sync>) {}
}
