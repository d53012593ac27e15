//! Key mapping from terminal events to typed characters.

use crate::types::KeyInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to game input.
///
/// Keys arrive as the character a raw terminal would send: printable keys as
/// themselves, Enter and Tab as `'\n'` and `'\t'`, Backspace as DEL, Esc as
/// ESC and Ctrl+letter as its control code. None of those can match a word,
/// so they are scored as mismatches. Ctrl-C is the interrupt. Keys without a
/// single-byte form (arrows, function keys) are ignored.
pub fn map_key_event(key: KeyEvent) -> Option<KeyInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(KeyInput::Interrupt);
    }
    // Ctrl+Alt is AltGr on some platforms and still produces a character.
    let ctrl =
        key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT);

    let ch = match key.code {
        KeyCode::Char(c) if ctrl => control_char(c),
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\n',
        KeyCode::Tab => '\t',
        KeyCode::Backspace => '\x7f',
        KeyCode::Esc => '\x1b',
        _ => return None,
    };
    Some(KeyInput::Char(ch))
}

/// Control code for Ctrl+`c` (Ctrl-A is 0x01, Ctrl-[ is ESC, Ctrl-Space is NUL).
fn control_char(c: char) -> char {
    let upper = c.to_ascii_uppercase();
    match upper {
        ' ' => '\0',
        '@'..='_' => ((upper as u8) & 0x1f) as char,
        _ => c,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
