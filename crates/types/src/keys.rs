//! Engine key codes.
//!
//! The engine consumes its own historical key-code space: printable keys are
//! their lowercase ASCII value, everything else lives above 0x7f. These values
//! must not change.

pub const KEY_RIGHTARROW: u8 = 0xae;
pub const KEY_LEFTARROW: u8 = 0xac;
pub const KEY_UPARROW: u8 = 0xad;
pub const KEY_DOWNARROW: u8 = 0xaf;
pub const KEY_STRAFE_L: u8 = 0xa0;
pub const KEY_STRAFE_R: u8 = 0xa1;
pub const KEY_USE: u8 = 0xa2;
pub const KEY_FIRE: u8 = 0xa3;
pub const KEY_ESCAPE: u8 = 27;
pub const KEY_ENTER: u8 = 13;
pub const KEY_TAB: u8 = 9;

pub const KEY_F1: u8 = 0x80 + 0x3b;
pub const KEY_F2: u8 = 0x80 + 0x3c;
pub const KEY_F3: u8 = 0x80 + 0x3d;
pub const KEY_F4: u8 = 0x80 + 0x3e;
pub const KEY_F5: u8 = 0x80 + 0x3f;
pub const KEY_F6: u8 = 0x80 + 0x40;
pub const KEY_F7: u8 = 0x80 + 0x41;
pub const KEY_F8: u8 = 0x80 + 0x42;
pub const KEY_F9: u8 = 0x80 + 0x43;
pub const KEY_F10: u8 = 0x80 + 0x44;
pub const KEY_F11: u8 = 0x80 + 0x57;
pub const KEY_F12: u8 = 0x80 + 0x58;

pub const KEY_BACKSPACE: u8 = 0x7f;
pub const KEY_PAUSE: u8 = 0xff;

pub const KEY_EQUALS: u8 = 0x3d;
pub const KEY_MINUS: u8 = 0x2d;

pub const KEY_RSHIFT: u8 = 0x80 + 0x36;
pub const KEY_RCTRL: u8 = 0x80 + 0x1d;
pub const KEY_RALT: u8 = 0x80 + 0x38;
pub const KEY_LALT: u8 = KEY_RALT;

/// Function keys in order, `FUNCTION_KEYS[0]` is F1.
pub const FUNCTION_KEYS: [u8; 12] = [
    KEY_F1, KEY_F2, KEY_F3, KEY_F4, KEY_F5, KEY_F6, KEY_F7, KEY_F8, KEY_F9, KEY_F10, KEY_F11,
    KEY_F12,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_match_engine_table() {
        assert_eq!(KEY_RIGHTARROW, 174);
        assert_eq!(KEY_LEFTARROW, 172);
        assert_eq!(KEY_UPARROW, 173);
        assert_eq!(KEY_DOWNARROW, 175);
        assert_eq!(KEY_STRAFE_L, 160);
        assert_eq!(KEY_STRAFE_R, 161);
        assert_eq!(KEY_USE, 162);
        assert_eq!(KEY_FIRE, 163);
        assert_eq!(KEY_F1, 187);
        assert_eq!(KEY_F10, 196);
        assert_eq!(KEY_F11, 215);
        assert_eq!(KEY_F12, 216);
        assert_eq!(KEY_RSHIFT, 182);
        assert_eq!(KEY_RCTRL, 157);
        assert_eq!(KEY_RALT, 184);
    }
}
