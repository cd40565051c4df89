use glam::Vec2;

use crate::components::{ParticleTint, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub opponent: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn has_winner(&self, max_score: u8) -> Option<Side> {
        if self.player >= max_score {
            Some(Side::Player)
        } else if self.opponent >= max_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
///
/// Every random decision in the simulation draws from this, so seeding it
/// makes a session reproducible.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A point where the ball struck something this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub pos: Vec2,
    pub tint: ParticleTint,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub scored: Option<Side>,
    pub winner: Option<Side>,
    pub impacts: Vec<Impact>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.scored = None;
        self.winner = None;
        self.impacts.clear();
    }
}

/// Rally bookkeeping between points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rally {
    pub last_hit: Option<Side>,
    pub hits: u32,
}

impl Rally {
    pub fn record_hit(&mut self, side: Side) {
        self.last_hit = Some(side);
        self.hits += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
