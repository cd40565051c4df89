//! Boundary between the simulation and whatever draws it.

use glam::Vec2;

use crate::{Aabb, Ball, Difficulty, GameState, Particle, Score, Side};

/// Sounds the core asks the host to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    PaddleHit,
    WallHit,
    Score,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub arena: Vec2,
    pub ball: Ball,
    pub ball_radius: f32,
    pub player: Aabb,
    pub opponent: Aabb,
    pub particles: Vec<Particle>,
    pub score: Score,
    pub state: GameState,
    pub difficulty: Difficulty,
    /// Set once the match is decided
    pub winner: Option<Side>,
}

/// Draws frames and plays sounds for the session.
///
/// Both calls are fire-and-forget: implementations handle their own failures.
pub trait Presenter {
    fn render(&mut self, frame: &Frame);
    fn play_sound(&mut self, kind: SoundKind);
}
