//! Keyboard mapping from crossterm events to game commands.

use crate::core::{Direction, GameCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Command(GameCommand),
    Quit,
    Continue,
}

pub fn map_key(key: KeyEvent) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => InputResult::Quit,
            _ => InputResult::Continue,
        };
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            GameCommand::Turn(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            GameCommand::Turn(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            GameCommand::Turn(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            GameCommand::Turn(Direction::Right)
        }
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => GameCommand::TogglePause,
        KeyCode::Enter => GameCommand::Start,
        KeyCode::Char('r') | KeyCode::Char('R') => GameCommand::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return InputResult::Quit,
        _ => return InputResult::Continue,
    };
    InputResult::Command(command)
}
