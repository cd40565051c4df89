//! Keyboard and button input mapping

use game_core::Command;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Up(bool),   // Move-up key pressed/released
    Down(bool), // Move-down key pressed/released
    Command(Command),
}

/// Handle key down event. Auto-repeat only affects movement keys.
pub fn handle_key_down(key: &str, repeat: bool) -> Option<KeyAction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(KeyAction::Up(true)),
        "ArrowDown" | "s" | "S" => Some(KeyAction::Down(true)),
        " " if !repeat => Some(KeyAction::Command(Command::PauseToggle)),
        "Escape" if !repeat => Some(KeyAction::Command(Command::Exit)),
        _ => None,
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(KeyAction::Up(false)),
        "ArrowDown" | "s" | "S" => Some(KeyAction::Down(false)),
        _ => None,
    }
}

/// Map a UI button name to a command
pub fn parse_command(name: &str) -> Option<Command> {
    match name {
        "start" => Some(Command::Start),
        "pause" => Some(Command::PauseToggle),
        "resume" => Some(Command::Resume),
        "restart" => Some(Command::Restart),
        "exit" => Some(Command::Exit),
        "confirm-exit" => Some(Command::ConfirmExit),
        "cancel-exit" => Some(Command::CancelExit),
        _ => None,
    }
}
