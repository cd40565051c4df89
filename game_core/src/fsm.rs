//! Game State Machine
//!
//! Owns the match lifecycle. Commands that make no sense in the current state
//! are rejected without side effects.

use crate::Difficulty;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    Paused,
    GameOver,
    ExitConfirm,
    /// Exit was confirmed; the session never ticks again
    Exited,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Start => "start",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
            GameState::GameOver => "gameOver",
            GameState::ExitConfirm => "exitConfirm",
            GameState::Exited => "exited",
        }
    }
}

/// Commands that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    PauseToggle,
    Resume,
    Restart,
    Exit,
    ConfirmExit,
    CancelExit,
    SelectDifficulty(Difficulty),
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub accepted: bool,
    pub from: GameState,
    pub to: GameState,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
    previous: Option<GameState>, // State ExitConfirm returns to on cancel
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Start,
            previous: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// State the exit dialog was opened from
    pub fn previous(&self) -> Option<GameState> {
        self.previous
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, command: Command) -> bool {
        self.next_state(command).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, command: Command) -> Transition {
        match self.next_state(command) {
            Some(next) => self.enter(next),
            None => Transition {
                accepted: false,
                from: self.state,
                to: self.state,
            },
        }
    }

    /// End a running match. Only valid while playing.
    pub fn finish_match(&mut self) -> Transition {
        if self.state == GameState::Playing {
            self.enter(GameState::GameOver)
        } else {
            Transition {
                accepted: false,
                from: self.state,
                to: self.state,
            }
        }
    }

    fn enter(&mut self, next: GameState) -> Transition {
        let from = self.state;
        if next == GameState::ExitConfirm {
            self.previous = Some(from);
        } else if from == GameState::ExitConfirm {
            self.previous = None;
        }
        self.state = next;
        Transition {
            accepted: true,
            from,
            to: next,
        }
    }

    /// Get next state for a given command (if valid)
    fn next_state(&self, command: Command) -> Option<GameState> {
        use Command as C;
        use GameState as S;

        match (self.state, command) {
            // From Start
            (S::Start, C::Start) => Some(S::Playing),
            (S::Start, C::SelectDifficulty(_)) => Some(S::Start),

            // Pause toggling
            (S::Playing, C::PauseToggle) => Some(S::Paused),
            (S::Paused, C::PauseToggle | C::Resume) => Some(S::Playing),

            // From GameOver
            (S::GameOver, C::Restart) => Some(S::Start),

            // Exit dialog
            (S::Start | S::Playing | S::Paused, C::Exit) => Some(S::ExitConfirm),
            (S::ExitConfirm, C::CancelExit) => Some(self.previous.unwrap_or(S::Start)),
            (S::ExitConfirm, C::ConfirmExit) => Some(S::Exited),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should advance
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_exited(&self) -> bool {
        self.state == GameState::Exited
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
