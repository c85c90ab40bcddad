//! Raw terminal tokens to engine key codes.
//!
//! A token is whatever one key produces on the wire: a printable character,
//! a control byte, or a CSI/SS3 escape sequence. The table is ordered; the
//! first matching rule wins.

use arrayvec::ArrayVec;

use crate::types::keys::*;

/// Key codes produced by one token: every key maps to at most one engine key.
pub const MAX_CODES_PER_TOKEN: usize = 1;

/// Key codes produced by one token.
pub type KeyCodes = ArrayVec<u8, MAX_CODES_PER_TOKEN>;

/// Interrupt byte (Ctrl+C). Reserved for quitting, never a game key.
pub const INTERRUPT: &str = "\x03";

/// Map one raw token to engine key codes. Unknown tokens map to nothing.
pub fn translate(token: &str) -> KeyCodes {
    let mut codes = KeyCodes::new();
    if let Some(code) = translate_one(token) {
        codes.push(code);
    }
    codes
}

fn translate_one(token: &str) -> Option<u8> {
    // Directions: escape sequences (normal and application cursor mode) and WASD.
    match token {
        "\x1b[A" | "\x1bOA" | "w" | "W" => return Some(KEY_UPARROW),
        "\x1b[B" | "\x1bOB" | "s" | "S" => return Some(KEY_DOWNARROW),
        "\x1b[C" | "\x1bOC" => return Some(KEY_RIGHTARROW),
        "\x1b[D" | "\x1bOD" => return Some(KEY_LEFTARROW),
        "a" | "A" => return Some(KEY_STRAFE_L),
        "d" | "D" => return Some(KEY_STRAFE_R),
        " " => return Some(KEY_USE),
        "\r" | "\n" => return Some(KEY_ENTER),
        "\x1b" => return Some(KEY_ESCAPE),
        "\t" => return Some(KEY_TAB),
        "\x7f" => return Some(KEY_BACKSPACE),
        _ => {}
    }

    if let Some(code) = function_key(token) {
        return Some(code);
    }

    let mut chars = token.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    match ch {
        '\x03' => None,
        c if (c as u32) < 32 => Some(KEY_FIRE),
        '0'..='9' => Some(ch as u8),
        '+' | '=' => Some(KEY_EQUALS),
        '-' => Some(KEY_MINUS),
        'y' | 'Y' => Some(b'y'),
        'n' | 'N' => Some(b'n'),
        c if c.is_ascii_graphic() => Some(c.to_ascii_lowercase() as u8),
        _ => None,
    }
}

/// xterm encodings for F1-F12.
fn function_key(token: &str) -> Option<u8> {
    let index = match token {
        "\x1bOP" | "\x1b[11~" => 0,
        "\x1bOQ" | "\x1b[12~" => 1,
        "\x1bOR" | "\x1b[13~" => 2,
        "\x1bOS" | "\x1b[14~" => 3,
        "\x1b[15~" => 4,
        "\x1b[17~" => 5,
        "\x1b[18~" => 6,
        "\x1b[19~" => 7,
        "\x1b[20~" => 8,
        "\x1b[21~" => 9,
        "\x1b[23~" => 10,
        "\x1b[24~" => 11,
        _ => return None,
    };
    Some(FUNCTION_KEYS[index])
}

/// Check if a token should quit the game.
pub fn should_quit(token: &str) -> bool {
    matches!(token, "q" | "Q" | INTERRUPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(token: &str) -> Option<u8> {
        let codes = translate(token);
        assert!(codes.len() <= 1, "{token:?} produced {codes:?}");
        codes.first().copied()
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(one("\x1b[A"), Some(KEY_UPARROW));
        assert_eq!(one("\x1b[B"), Some(KEY_DOWNARROW));
        assert_eq!(one("\x1b[C"), Some(KEY_RIGHTARROW));
        assert_eq!(one("\x1b[D"), Some(KEY_LEFTARROW));
        assert_eq!(one("\x1bOA"), Some(KEY_UPARROW));

        assert_eq!(one("w"), Some(KEY_UPARROW));
        assert_eq!(one("S"), Some(KEY_DOWNARROW));
        assert_eq!(one("a"), Some(KEY_STRAFE_L));
        assert_eq!(one("A"), Some(KEY_STRAFE_L));
        assert_eq!(one("d"), Some(KEY_STRAFE_R));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(one(" "), Some(KEY_USE));
        assert_eq!(one("\r"), Some(KEY_ENTER));
        assert_eq!(one("\n"), Some(KEY_ENTER));
        assert_eq!(one("\x1b"), Some(KEY_ESCAPE));
        assert_eq!(one("\t"), Some(KEY_TAB));
        assert_eq!(one("\x7f"), Some(KEY_BACKSPACE));
    }

    #[test]
    fn test_control_bytes_fire_except_interrupt() {
        assert_eq!(one("\x06"), Some(KEY_FIRE));
        assert_eq!(one("\x00"), Some(KEY_FIRE));
        assert_eq!(one("\x1f"), Some(KEY_FIRE));
        assert_eq!(one(INTERRUPT), None);
    }

    #[test]
    fn test_weapon_and_menu_keys() {
        assert_eq!(one("5"), Some(b'5'));
        assert_eq!(one("0"), Some(b'0'));
        assert_eq!(one("+"), Some(KEY_EQUALS));
        assert_eq!(one("="), Some(KEY_EQUALS));
        assert_eq!(one("-"), Some(KEY_MINUS));
        assert_eq!(one("Y"), Some(b'y'));
        assert_eq!(one("n"), Some(b'n'));
    }

    #[test]
    fn test_cheat_letters_are_lowercased() {
        assert_eq!(one("I"), Some(b'i'));
        assert_eq!(one("k"), Some(b'k'));
        assert_eq!(one("!"), Some(b'!'));
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(one("\x1bOP"), Some(KEY_F1));
        assert_eq!(one("\x1b[15~"), Some(KEY_F5));
        assert_eq!(one("\x1b[24~"), Some(KEY_F12));
    }

    #[test]
    fn test_every_token_fits_one_code() {
        let bytes = (0u8..128).map(|b| (b as char).to_string());
        let sequences = ["\x1b[A", "\x1bOD", "\x1b[24~", "\x1bOS", "\x1b[Z"].map(String::from);
        for token in bytes.chain(sequences) {
            assert!(translate(&token).len() <= MAX_CODES_PER_TOKEN, "{token:?}");
        }
    }

    #[test]
    fn test_unmapped_tokens_are_empty() {
        assert!(translate("").is_empty());
        assert!(translate("\x1b[3~").is_empty());
        assert!(translate("ab").is_empty());
        assert!(translate("é").is_empty());
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit("q"));
        assert!(should_quit("Q"));
        assert!(should_quit(INTERRUPT));
        assert!(!should_quit("x"));
        assert!(!should_quit("\x1b"));
    }
}
