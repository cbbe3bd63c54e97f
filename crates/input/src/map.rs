//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to the command for this tick.
///
/// Unmapped keys, and key releases on terminals that report them, give
/// [`Command::None`].
pub fn map_key(key: KeyEvent) -> Command {
    if key.kind == KeyEventKind::Release {
        return Command::None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Command::MoveRight,

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Command::RotateCw,
        KeyCode::Char('z') | KeyCode::Char('Z') => Command::RotateCcw,

        // Actions
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Command::HardDrop,
        KeyCode::Char(' ') => Command::Hold,

        _ => Command::None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key toggles pause.
pub fn is_pause(key: KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('p') | KeyCode::Char('P'))
}
