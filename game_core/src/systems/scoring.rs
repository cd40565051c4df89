use hecs::World;
use tracing::info;

use crate::{Ball, Config, DifficultyProfile, Events, GameRng, Rally, Score, Side};

/// Check if ball left the arena (scoring)
///
/// The ball is served from the center toward the side that conceded the
/// point. Once a side has reached `max_score` the score is frozen.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    score: &mut Score,
    rally: &mut Rally,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if score.has_winner(config.max_score).is_some() {
        return;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Opponent
        } else if ball.pos.x > config.arena_width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        events.scored = Some(scorer);
        info!(
            scorer = ?scorer,
            player = score.player,
            opponent = score.opponent,
            rally_hits = rally.hits,
            "point scored"
        );

        ball.serve(
            config.center(),
            profile.ball_speed,
            config.serve_vertical_factor,
            scorer.other(),
            rng,
        );
        rally.reset();

        if let Some(winner) = score.has_winner(config.max_score) {
            info!(winner = ?winner, player = score.player, opponent = score.opponent, "match won");
            events.winner = Some(winner);
        }

        // One ball, one point per tick
        break;
    }
}
