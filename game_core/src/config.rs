use glam::Vec2;
use serde::Deserialize;

use crate::difficulty::Difficulty;
use crate::error::ConfigError;
use crate::geometry::Aabb;
use crate::params::Params;
use crate::Side;

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so a host only needs to
/// supply the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub keyboard_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_increase: f32,
    pub deflection_scale: f32,
    pub serve_vertical_factor: f32,
    pub ai_deadband: f32,
    pub particle_count: usize,
    pub particle_life: u32,
    pub particle_spread: f32,
    pub particle_damping: f32,
    pub max_score: u8,
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            keyboard_speed: Params::KEYBOARD_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            deflection_scale: Params::DEFLECTION_SCALE,
            serve_vertical_factor: Params::SERVE_VERTICAL_FACTOR,
            ai_deadband: Params::AI_DEADBAND,
            particle_count: Params::PARTICLE_COUNT,
            particle_life: Params::PARTICLE_LIFE,
            particle_spread: Params::PARTICLE_SPREAD,
            particle_damping: Params::PARTICLE_DAMPING,
            max_score: Params::MAX_SCORE,
            difficulty: Difficulty::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(invalid(
                "paddle_height",
                format!("{} exceeds arena height {}", self.paddle_height, self.arena_height),
            ));
        }
        if self.ball_radius * 2.0 >= self.arena_height {
            return Err(invalid("ball_radius", "ball does not fit between the walls"));
        }
        if self.paddle_inset < 0.0 || 2.0 * (self.paddle_inset + self.paddle_width) >= self.arena_width
        {
            return Err(invalid("paddle_inset", "paddles overlap or leave the arena"));
        }
        if self.ball_speed_increase < 1.0 {
            return Err(invalid("ball_speed_increase", "must be at least 1.0"));
        }
        if !(self.particle_spread >= 0.0) {
            return Err(invalid(
                "particle_spread",
                format!("must be non-negative, got {}", self.particle_spread),
            ));
        }
        if !(0.0..1.0).contains(&self.particle_damping) {
            return Err(invalid("particle_damping", "must be in [0, 1)"));
        }
        if self.max_score == 0 {
            return Err(invalid("max_score", "must be at least 1"));
        }
        Ok(())
    }

    /// Get X position of the paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.arena_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Top edge that centers a paddle vertically
    pub fn centered_paddle_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        let min = Vec2::new(self.paddle_x(side), y);
        Aabb::new(min, min + Vec2::new(self.paddle_width, self.paddle_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Opponent), 765.0, "Opponent paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-40.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(250.0), 250.0);
    }

    #[test]
    fn test_centered_paddle_spans_middle() {
        let config = Config::new();
        assert_eq!(config.centered_paddle_y(), 250.0);
        assert_eq!(config.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "max_score": 3, "difficulty": "hard" }"#)
            .expect("partial config should parse");
        assert_eq!(config.max_score, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH, "Unset keys keep defaults");
    }

    #[test]
    fn test_from_json_rejects_bad_syntax() {
        let err = Config::from_json("{ max_score: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_difficulty() {
        let err = Config::from_json(r#"{ "difficulty": "brutal" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 700.0,
            ..Config::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "paddle_height"),
            other => panic!("expected invalid paddle_height, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_max_score() {
        let config = Config {
            max_score: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_spread() {
        match Config::from_json(r#"{"particle_spread": -1.0}"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "particle_spread"),
            other => panic!("expected invalid particle_spread, got {other:?}"),
        }
        let still = Config {
            particle_spread: 0.0,
            ..Config::default()
        };
        assert!(still.validate().is_ok(), "Zero spread is a still burst");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
