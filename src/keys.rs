//! WebDriver control-key codes.
//!
//! These are the reserved code points (U+E000 private-use area) the WebDriver
//! protocol uses to represent non-printable keys. `send_keys` consults
//! [`is_control_key`] to decide whether the outgoing text is a key press
//! (never preceded by a clear) or literal content.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const NULL: &str = "\u{e000}";
pub const CANCEL: &str = "\u{e001}";
pub const HELP: &str = "\u{e002}";
pub const BACKSPACE: &str = "\u{e003}";
pub const BACK_SPACE: &str = BACKSPACE;
pub const TAB: &str = "\u{e004}";
pub const CLEAR: &str = "\u{e005}";
pub const RETURN: &str = "\u{e006}";
pub const ENTER: &str = "\u{e007}";
pub const SHIFT: &str = "\u{e008}";
pub const LEFT_SHIFT: &str = SHIFT;
pub const CONTROL: &str = "\u{e009}";
pub const LEFT_CONTROL: &str = CONTROL;
pub const ALT: &str = "\u{e00a}";
pub const LEFT_ALT: &str = ALT;
pub const PAUSE: &str = "\u{e00b}";
pub const ESCAPE: &str = "\u{e00c}";
pub const SPACE: &str = "\u{e00d}";
pub const PAGE_UP: &str = "\u{e00e}";
pub const PAGE_DOWN: &str = "\u{e00f}";
pub const END: &str = "\u{e010}";
pub const HOME: &str = "\u{e011}";
pub const LEFT: &str = "\u{e012}";
pub const ARROW_LEFT: &str = LEFT;
pub const UP: &str = "\u{e013}";
pub const ARROW_UP: &str = UP;
pub const RIGHT: &str = "\u{e014}";
pub const ARROW_RIGHT: &str = RIGHT;
pub const DOWN: &str = "\u{e015}";
pub const ARROW_DOWN: &str = DOWN;
pub const INSERT: &str = "\u{e016}";
pub const DELETE: &str = "\u{e017}";
pub const SEMICOLON: &str = "\u{e018}";
pub const EQUALS: &str = "\u{e019}";
pub const NUMPAD0: &str = "\u{e01a}";
pub const NUMPAD1: &str = "\u{e01b}";
pub const NUMPAD2: &str = "\u{e01c}";
pub const NUMPAD3: &str = "\u{e01d}";
pub const NUMPAD4: &str = "\u{e01e}";
pub const NUMPAD5: &str = "\u{e01f}";
pub const NUMPAD6: &str = "\u{e020}";
pub const NUMPAD7: &str = "\u{e021}";
pub const NUMPAD8: &str = "\u{e022}";
pub const NUMPAD9: &str = "\u{e023}";
pub const MULTIPLY: &str = "\u{e024}";
pub const ADD: &str = "\u{e025}";
pub const SEPARATOR: &str = "\u{e026}";
pub const SUBTRACT: &str = "\u{e027}";
pub const DECIMAL: &str = "\u{e028}";
pub const DIVIDE: &str = "\u{e029}";
pub const F1: &str = "\u{e031}";
pub const F2: &str = "\u{e032}";
pub const F3: &str = "\u{e033}";
pub const F4: &str = "\u{e034}";
pub const F5: &str = "\u{e035}";
pub const F6: &str = "\u{e036}";
pub const F7: &str = "\u{e037}";
pub const F8: &str = "\u{e038}";
pub const F9: &str = "\u{e039}";
pub const F10: &str = "\u{e03a}";
pub const F11: &str = "\u{e03b}";
pub const F12: &str = "\u{e03c}";
pub const META: &str = "\u{e03d}";
pub const COMMAND: &str = META;
pub const ZENKAKU_HANKAKU: &str = "\u{e040}";

/// Closed set of every reserved key code above (aliases collapse to one entry).
static CONTROL_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        NULL,
        CANCEL,
        HELP,
        BACKSPACE,
        TAB,
        CLEAR,
        RETURN,
        ENTER,
        SHIFT,
        CONTROL,
        ALT,
        PAUSE,
        ESCAPE,
        SPACE,
        PAGE_UP,
        PAGE_DOWN,
        END,
        HOME,
        LEFT,
        UP,
        RIGHT,
        DOWN,
        INSERT,
        DELETE,
        SEMICOLON,
        EQUALS,
        NUMPAD0,
        NUMPAD1,
        NUMPAD2,
        NUMPAD3,
        NUMPAD4,
        NUMPAD5,
        NUMPAD6,
        NUMPAD7,
        NUMPAD8,
        NUMPAD9,
        MULTIPLY,
        ADD,
        SEPARATOR,
        SUBTRACT,
        DECIMAL,
        DIVIDE,
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
        META,
        ZENKAKU_HANKAKU,
    ])
});

/// True when `text` is exactly one reserved control-key code.
pub fn is_control_key(text: &str) -> bool {
    CONTROL_KEYS.contains(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keys_are_members() {
        assert!(is_control_key(ENTER));
        assert!(is_control_key(DELETE));
        assert!(is_control_key(F12));
        assert!(is_control_key(ARROW_DOWN));
    }

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(BACK_SPACE, BACKSPACE);
        assert_eq!(COMMAND, META);
        assert!(is_control_key(LEFT_SHIFT));
    }

    #[test]
    fn test_plain_text_is_not_a_control_key() {
        assert!(!is_control_key("hello"));
        assert!(!is_control_key(""));
        assert!(!is_control_key("a"));
    }

    #[test]
    fn test_text_containing_a_code_is_not_a_control_key() {
        let mixed = format!("abc{ENTER}");
        assert!(!is_control_key(&mixed));
    }
}
