use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

impl Key {
    /// Arrow keys and WASD request the same four directions
    pub fn direction(&self) -> Direction {
        match self {
            Key::Up | Key::W => Direction::Up,
            Key::Down | Key::S => Direction::Down,
            Key::Left | Key::A => Direction::Left,
            Key::Right | Key::D => Direction::Right,
        }
    }
}

/// A discrete input event, as seen by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Only process key press events, not release or repeat
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let key = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
            KeyCode::Char('a') | KeyCode::Char('A') => Key::A,
            KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
            KeyCode::Char('d') | KeyCode::Char('D') => Key::D,

            // Closing the game
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Some(InputEvent::Quit);
            }

            _ => return None,
        };

        Some(InputEvent::KeyDown(key))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
