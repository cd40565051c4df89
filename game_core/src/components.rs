use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// Which end of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Left edge, human controlled
    Opponent, // Right edge, AI controlled
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Sign of a horizontal velocity heading toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => -1.0,
            Side::Opponent => 1.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to arena)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back at `center` heading toward `toward` with a random
    /// vertical direction
    pub fn serve(
        &mut self,
        center: Vec2,
        speed: f32,
        vertical_factor: f32,
        toward: Side,
        rng: &mut GameRng,
    ) {
        self.pos = center;
        let vy_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            speed * toward.direction(),
            speed * vertical_factor * vy_sign,
        );
    }
}

/// Collision type a particle was spawned by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleTint {
    Wall,
    PlayerPaddle,
    OpponentPaddle,
}

/// Short-lived visual spark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: u32,
    pub max_life: u32,
    pub tint: ParticleTint,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: u32, tint: ParticleTint) -> Self {
        Self {
            pos,
            vel,
            life,
            max_life: life,
            tint,
        }
    }

    /// Remaining life as a fraction, for fading
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }

    pub fn is_expired(&self) -> bool {
        self.life == 0
    }
}
