use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DifficultyError;

/// Named difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Insane,
}

/// Constants bundled by a difficulty preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub opponent_speed: f32, // Max AI paddle travel per tick
    pub ball_speed: f32,     // Horizontal serve speed
    pub accuracy: f32,       // In (0, 1]; 1 means no aiming error
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    pub fn profile(self) -> DifficultyProfile {
        let (opponent_speed, ball_speed, accuracy) = match self {
            Difficulty::Easy => (3.0, 4.0, 0.70),
            Difficulty::Medium => (4.5, 6.0, 0.80),
            Difficulty::Hard => (6.0, 8.0, 0.90),
            Difficulty::Insane => (8.0, 10.0, 0.95),
        };
        DifficultyProfile {
            opponent_speed,
            ball_speed,
            accuracy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_presets_match_table() {
        let insane = Difficulty::Insane.profile();
        assert_eq!(insane.opponent_speed, 8.0);
        assert_eq!(insane.ball_speed, 10.0);
        assert_eq!(insane.accuracy, 0.95);

        let easy = Difficulty::Easy.profile();
        assert_eq!(easy.opponent_speed, 3.0);
        assert_eq!(easy.ball_speed, 4.0);
        assert_eq!(easy.accuracy, 0.70);
    }

    #[test]
    fn test_presets_get_harder() {
        let profiles: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();
        for pair in profiles.windows(2) {
            assert!(pair[1].opponent_speed > pair[0].opponent_speed);
            assert!(pair[1].ball_speed > pair[0].ball_speed);
            assert!(pair[1].accuracy > pair[0].accuracy);
            assert!(pair[1].accuracy <= 1.0);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" Insane ".parse::<Difficulty>(), Ok(Difficulty::Insane));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(DifficultyError::Unknown("nightmare".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }
}
