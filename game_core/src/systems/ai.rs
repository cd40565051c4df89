use hecs::World;
use rand::Rng;

use crate::{find_ball, Ball, Config, DifficultyProfile, GameRng, Paddle, Side};

/// Drive the opponent paddle toward where the ball is expected to arrive
///
/// Strategy:
/// 1. If the ball is heading our way, extrapolate its y at our paddle face.
///    Otherwise track the ball's current y.
/// 2. Blur the target by an error that shrinks with accuracy.
/// 3. Step at full speed toward the target unless already within the deadband.
pub fn update_ai(world: &mut World, config: &Config, profile: &DifficultyProfile, rng: &mut GameRng) {
    let Some(ball) = find_ball(world) else {
        return;
    };
    let face_x = config.paddle_x(Side::Opponent);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let target_y = predict_arrival_y(&ball, face_x)
            + aim_error(profile.accuracy, config.paddle_height, rng);
        let diff = target_y - (paddle.y + config.paddle_height / 2.0);

        if diff.abs() > config.ai_deadband {
            paddle.y += diff.signum() * profile.opponent_speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Linear extrapolation of the ball's y when it reaches `face_x`
///
/// Wall bounces are ignored, so the prediction can land outside the arena.
pub fn predict_arrival_y(ball: &Ball, face_x: f32) -> f32 {
    if ball.vel.x > 0.0 {
        let ticks_to_reach = (face_x - ball.pos.x) / ball.vel.x;
        ball.pos.y + ball.vel.y * ticks_to_reach
    } else {
        ball.pos.y
    }
}

fn aim_error(accuracy: f32, paddle_height: f32, rng: &mut GameRng) -> f32 {
    (1.0 - accuracy) * rng.0.gen_range(-0.5f32..0.5) * paddle_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, find_paddle, Difficulty};
    use glam::Vec2;

    fn setup_world(paddle_y: f32, ball: Ball) -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, config.centered_paddle_y());
        create_paddle(&mut world, Side::Opponent, paddle_y);
        create_ball(&mut world, ball.pos, ball.vel);
        (world, config)
    }

    fn opponent_y(world: &World) -> f32 {
        find_paddle(world, Side::Opponent).unwrap().y
    }

    fn perfect(profile: DifficultyProfile) -> DifficultyProfile {
        DifficultyProfile {
            accuracy: 1.0,
            ..profile
        }
    }

    #[test]
    fn test_predicts_arrival_when_approaching() {
        let ball = Ball::new(Vec2::new(465.0, 300.0), Vec2::new(6.0, 2.0));
        // 300 px to go at 6 px/tick = 50 ticks, drifting 100 px down
        assert_eq!(predict_arrival_y(&ball, 765.0), 400.0);
    }

    #[test]
    fn test_tracks_current_y_when_receding() {
        let ball = Ball::new(Vec2::new(465.0, 300.0), Vec2::new(-6.0, 2.0));
        assert_eq!(predict_arrival_y(&ball, 765.0), 300.0);
    }

    #[test]
    fn test_moves_toward_prediction() {
        let ball = Ball::new(Vec2::new(465.0, 300.0), Vec2::new(6.0, 2.0));
        let (mut world, config) = setup_world(250.0, ball);
        let profile = perfect(Difficulty::Medium.profile());
        let mut rng = GameRng::new(1);

        update_ai(&mut world, &config, &profile, &mut rng);

        assert_eq!(opponent_y(&world), 250.0 + profile.opponent_speed, "Should move down");
    }

    #[test]
    fn test_holds_still_inside_deadband() {
        let ball = Ball::new(Vec2::new(400.0, 305.0), Vec2::new(-6.0, 0.0));
        let (mut world, config) = setup_world(250.0, ball);
        let profile = perfect(Difficulty::Hard.profile());
        let mut rng = GameRng::new(1);

        update_ai(&mut world, &config, &profile, &mut rng);

        assert_eq!(opponent_y(&world), 250.0, "5 px off center is inside the deadband");
    }

    #[test]
    fn test_never_moves_more_than_ai_speed() {
        let mut rng = GameRng::new(2024);
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            let ball = Ball::new(Vec2::new(100.0, 20.0), Vec2::new(9.0, -7.0));
            let (mut world, config) = setup_world(480.0, ball);
            for _ in 0..200 {
                let before = opponent_y(&world);
                update_ai(&mut world, &config, &profile, &mut rng);
                let after = opponent_y(&world);
                assert!(
                    (after - before).abs() <= profile.opponent_speed + 1e-4,
                    "{difficulty} moved {} in one tick",
                    (after - before).abs()
                );
                assert!(after >= 0.0 && after <= config.arena_height - config.paddle_height);
            }
        }
    }

    #[test]
    fn test_clamped_to_arena() {
        // Prediction far above the arena drives the paddle into the top edge
        let ball = Ball::new(Vec2::new(100.0, 50.0), Vec2::new(2.0, -10.0));
        let (mut world, config) = setup_world(3.0, ball);
        let profile = perfect(Difficulty::Insane.profile());
        let mut rng = GameRng::new(3);

        update_ai(&mut world, &config, &profile, &mut rng);

        assert_eq!(opponent_y(&world), 0.0);
    }

    #[test]
    fn test_aim_error_bounded_by_accuracy() {
        let mut rng = GameRng::new(11);
        let max = (1.0 - 0.8) * 0.5 * 100.0;
        for _ in 0..500 {
            let err = aim_error(0.8, 100.0, &mut rng);
            assert!(err.abs() <= max, "error {err} exceeds {max}");
        }
        assert_eq!(aim_error(1.0, 100.0, &mut rng), 0.0);
    }
}
