use crate::store::CounterAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Action(CounterAction),
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyCommand {
    if key.kind != KeyEventKind::Press {
        return KeyCommand::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyCommand::Quit,
            _ => KeyCommand::Ignore,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
            KeyCommand::Action(CounterAction::Increment)
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down | KeyCode::Left => {
            KeyCommand::Action(CounterAction::Decrement)
        }
        KeyCode::Char('r') | KeyCode::Char('0') => KeyCommand::Action(CounterAction::Reset),
        _ => KeyCommand::Ignore,
    }
}
