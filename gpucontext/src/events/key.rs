use bitflags::bitflags;

/// Platform-independent virtual key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum Key {
    #[default]
    Unknown = 0,

    // letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // digits
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // navigation
    Escape,
    Tab,
    Backspace,
    Enter,
    Space,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Up,
    Down,

    // modifiers as keys
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    LeftSuper,
    RightSuper,

    // punctuation
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Apostrophe,
    Grave,
    Comma,
    Period,
    Slash,

    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadDecimal,
    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadEnter,

    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
}

impl Key {
    pub fn is_letter(&self) -> bool {
        (Key::A as u16..=Key::Z as u16).contains(&(*self as u16))
    }

    pub fn is_digit(&self) -> bool {
        (Key::Digit0 as u16..=Key::Digit9 as u16).contains(&(*self as u16))
    }

    pub fn is_modifier(&self) -> bool {
        (Key::LeftShift as u16..=Key::RightSuper as u16).contains(&(*self as u16))
    }

    pub fn is_numpad(&self) -> bool {
        (Key::Numpad0 as u16..=Key::NumpadEnter as u16).contains(&(*self as u16))
    }

    /// Modifier flag this key toggles while held, if any.
    pub fn modifier(&self) -> Option<Modifiers> {
        match self {
            Key::LeftShift | Key::RightShift => Some(Modifiers::SHIFT),
            Key::LeftControl | Key::RightControl => Some(Modifiers::CONTROL),
            Key::LeftAlt | Key::RightAlt => Some(Modifiers::ALT),
            Key::LeftSuper | Key::RightSuper => Some(Modifiers::SUPER),
            _ => None,
        }
    }
}

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT     = 0b0000_0001;
        const CONTROL   = 0b0000_0010;
        /// Option on macOS.
        const ALT       = 0b0000_0100;
        /// Windows / Command.
        const SUPER     = 0b0000_1000;
        const CAPS_LOCK = 0b0001_0000;
        const NUM_LOCK  = 0b0010_0000;
    }
}

impl Modifiers {
    pub fn has_shift(&self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn has_control(&self) -> bool {
        self.contains(Modifiers::CONTROL)
    }

    pub fn has_alt(&self) -> bool {
        self.contains(Modifiers::ALT)
    }

    pub fn has_super(&self) -> bool {
        self.contains(Modifiers::SUPER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    /// Scroll wheel click.
    Middle,
    Button4,
    Button5,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_are_stable() {
        assert_eq!(Key::Unknown as u16, 0);
        assert_eq!(Key::A as u16, 1);
        assert_eq!(Key::Z as u16, 26);
        assert_eq!(Key::Digit0 as u16, 27);
        assert_eq!(Key::F1 as u16, 37);
        assert_eq!(Key::Escape as u16, 49);
        assert_eq!(Key::Pause as u16, Key::PrintScreen as u16 + 1);
        assert_eq!(Key::default(), Key::Unknown);
    }

    #[test]
    fn test_key_categories() {
        assert!(Key::Q.is_letter());
        assert!(!Key::Digit1.is_letter());
        assert!(Key::Digit9.is_digit());
        assert!(Key::RightSuper.is_modifier());
        assert!(!Key::CapsLock.is_modifier());
        assert!(Key::NumpadEnter.is_numpad());
        assert!(!Key::Enter.is_numpad());

        assert_eq!(Key::RightControl.modifier(), Some(Modifiers::CONTROL));
        assert_eq!(Key::Space.modifier(), None);
    }

    #[test]
    fn test_modifier_helpers() {
        let mods = Modifiers::SHIFT | Modifiers::SUPER;
        assert!(mods.has_shift());
        assert!(!mods.has_control());
        assert!(!mods.has_alt());
        assert!(mods.has_super());

        assert!(!Modifiers::default().has_shift());
        assert_eq!(Modifiers::NUM_LOCK.bits(), 1 << 5);
    }
}
