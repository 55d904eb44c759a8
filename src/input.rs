use std::time::Duration;

use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    Stop,
    TogglePause,
    OpenMenu,
    Quit,
}

/// Non-blocking command poll for the main loop. Returns the first resolved
/// command, or None once no more input is pending; at most one command is
/// consumed per call, anything further stays buffered for the next tick.
pub fn poll_command(timeout: Duration) -> Result<Option<Command>> {
    while poll(timeout)? {
        if let Event::Key(ev) = read()? {
            if let Some(cmd) = map_key(&ev) {
                return Ok(Some(cmd));
            }
        }
    }

    Ok(None)
}

pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    use Direction::*;

    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') => Some(Command::Move(Up)),
        KeyCode::Char('a') => Some(Command::Move(Left)),
        KeyCode::Char('s') => Some(Command::Move(Down)),
        KeyCode::Char('d') => Some(Command::Move(Right)),
        KeyCode::Char('x') => Some(Command::Stop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => Some(Command::OpenMenu),
        // Arrow keys arrive as complete escape sequences and are swallowed
        // whole, so they can never register as movement or as a bare Esc.
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => None,
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
