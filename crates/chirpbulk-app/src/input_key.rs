//! Abstract input key event, independent of terminal library.
//!
//! The wizard logic only sees `InputKey`; the TUI crate converts crossterm
//! key events at its boundary.

/// Keyboard input the wizard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Backspace,
}
