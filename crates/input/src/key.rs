//! crossterm key events back to raw terminal tokens.
//!
//! crossterm decodes input before we see it; the translator works on the wire
//! encoding, so this re-creates it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Raw token a legacy terminal would have sent for `key`, if any.
pub fn token_from_key(key: KeyEvent) -> Option<String> {
    let token = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            control_char(c).to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "\r".to_string(),
        KeyCode::Tab => "\t".to_string(),
        KeyCode::BackTab => "\x1b[Z".to_string(),
        KeyCode::Backspace => "\x7f".to_string(),
        KeyCode::Esc => "\x1b".to_string(),
        KeyCode::Up => "\x1b[A".to_string(),
        KeyCode::Down => "\x1b[B".to_string(),
        KeyCode::Right => "\x1b[C".to_string(),
        KeyCode::Left => "\x1b[D".to_string(),
        KeyCode::Delete => "\x1b[3~".to_string(),
        KeyCode::F(n) => function_key_token(n)?.to_string(),
        _ => return None,
    };
    Some(token)
}

/// Byte a legacy terminal sends for Ctrl+`c`.
///
/// Covers the xterm digit aliases crossterm decodes 0x00 and 0x1c..0x1f into.
fn control_char(c: char) -> char {
    match c {
        ' ' | '2' | '@' => '\x00',
        '3'..='7' => (c as u8 - b'3' + 0x1b) as char,
        '8' | '?' => '\x7f',
        '[' | '\\' | ']' | '^' | '_' => (c as u8 & 0x1f) as char,
        c if c.is_ascii_alphabetic() => (c.to_ascii_uppercase() as u8 & 0x1f) as char,
        c => c,
    }
}

fn function_key_token(n: u8) -> Option<&'static str> {
    let token = match n {
        1 => "\x1bOP",
        2 => "\x1bOQ",
        3 => "\x1bOR",
        4 => "\x1bOS",
        5 => "\x1b[15~",
        6 => "\x1b[17~",
        7 => "\x1b[18~",
        8 => "\x1b[19~",
        9 => "\x1b[20~",
        10 => "\x1b[21~",
        11 => "\x1b[23~",
        12 => "\x1b[24~",
        _ => return None,
    };
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::translate;
    use crate::types::keys::*;

    fn tok(code: KeyCode) -> Option<String> {
        token_from_key(KeyEvent::from(code))
    }

    #[test]
    fn test_arrows_become_csi() {
        assert_eq!(tok(KeyCode::Up).as_deref(), Some("\x1b[A"));
        assert_eq!(tok(KeyCode::Left).as_deref(), Some("\x1b[D"));
    }

    #[test]
    fn test_control_letters_become_control_bytes() {
        let ctrl_c = token_from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_c.as_deref(), Some("\x03"));
        let ctrl_f = token_from_key(KeyEvent::new(KeyCode::Char('F'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_f.as_deref(), Some("\x06"));
    }

    #[test]
    fn test_control_digits_and_space_become_control_bytes() {
        let ctrl = |c| token_from_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert_eq!(ctrl(' ').as_deref(), Some("\x00"));
        assert_eq!(ctrl('2').as_deref(), Some("\x00"));
        assert_eq!(ctrl('3').as_deref(), Some("\x1b"));
        assert_eq!(ctrl('4').as_deref(), Some("\x1c"));
        assert_eq!(ctrl('7').as_deref(), Some("\x1f"));
        assert_eq!(ctrl('8').as_deref(), Some("\x7f"));
        assert_eq!(ctrl('\\').as_deref(), Some("\x1c"));
    }

    #[test]
    fn test_round_trip_through_translator() {
        let cases = [
            (KeyCode::Enter, KEY_ENTER),
            (KeyCode::Esc, KEY_ESCAPE),
            (KeyCode::Backspace, KEY_BACKSPACE),
            (KeyCode::Tab, KEY_TAB),
            (KeyCode::Right, KEY_RIGHTARROW),
            (KeyCode::F(1), KEY_F1),
            (KeyCode::F(11), KEY_F11),
            (KeyCode::Char(' '), KEY_USE),
        ];
        for (code, expected) in cases {
            let token = tok(code).expect("token");
            assert_eq!(translate(&token).as_slice(), &[expected], "{code:?}");
        }
    }

    #[test]
    fn test_unsupported_keys_have_no_token() {
        assert_eq!(tok(KeyCode::Home), None);
        assert_eq!(tok(KeyCode::F(13)), None);
    }
}
