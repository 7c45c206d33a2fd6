/// Translation from raw key input to engine actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Action;

const CTRL_C: u8 = 3;

impl Action {
    /// Decode a single byte of raw terminal input. Unknown bytes map to `None`.
    pub fn from_byte(b: u8) -> Option<Action> {
        match b.to_ascii_lowercase() {
            b'a' => Some(Action::MoveLeft),
            b'd' => Some(Action::MoveRight),
            b'w' => Some(Action::Fire),
            b's' => Some(Action::Start),
            b'q' | CTRL_C => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Decode a terminal event. Releases and non-key events are ignored.
pub fn decode(event: &Event) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return None;
    };
    if *kind == KeyEventKind::Release {
        return None;
    }
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Fire),
        KeyCode::Char(c) if c.is_ascii() => Action::from_byte(*c as u8),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Up => Some(Action::Fire),
        KeyCode::Enter => Some(Action::Start),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
