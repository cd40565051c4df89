use glam::Vec2;
use hecs::World;
use tracing::trace;

use crate::{Ball, Config, Events, Impact, Paddle, ParticleTint, Rally, Side};

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, rally: &mut Rally, events: &mut Events) {
    // Collect paddle data without holding a borrow on the world
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);
        bounce_off_paddle(ball, &paddles, config, rally, events);
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let radius = config.ball_radius;
    let bottom = config.arena_height - radius;

    if ball.pos.y <= radius {
        ball.pos.y = radius;
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y >= bottom {
        ball.pos.y = bottom;
        ball.vel.y = -ball.vel.y.abs();
    } else {
        return;
    }

    trace!(x = ball.pos.x, y = ball.pos.y, "ball hit wall");
    events.ball_hit_wall = true;
    events.impacts.push(Impact {
        pos: ball.pos,
        tint: ParticleTint::Wall,
    });
}

fn bounce_off_paddle(
    ball: &mut Ball,
    paddles: &[Paddle],
    config: &Config,
    rally: &mut Rally,
    events: &mut Events,
) {
    // Only the paddle the ball is heading for can be hit; a receding ball
    // that still overlaps a paddle must not bounce twice
    let toward = if ball.vel.x < 0.0 {
        Side::Player
    } else if ball.vel.x > 0.0 {
        Side::Opponent
    } else {
        return;
    };

    let Some(paddle) = paddles.iter().find(|p| p.side == toward) else {
        return;
    };

    let radius = config.ball_radius;
    let rect = config.paddle_rect(paddle.side, paddle.y);
    if !rect.intersects_circle(ball.pos, radius) {
        return;
    }

    // Relative position from -1 (top) to 1 (bottom)
    let hit_offset = ((ball.pos.y - rect.center().y) / rect.half_size().y).clamp(-1.0, 1.0);

    let speed = ball.vel.x.abs() * config.ball_speed_increase;
    let away = toward.other().direction();
    ball.vel = Vec2::new(speed * away, hit_offset * config.deflection_scale);

    // Push ball out of paddle face
    ball.pos.x = match toward {
        Side::Player => rect.max.x + radius,
        Side::Opponent => rect.min.x - radius,
    };

    trace!(side = ?toward, speed, hit_offset, "ball hit paddle");
    rally.record_hit(toward);
    events.ball_hit_paddle = Some(toward);
    events.impacts.push(Impact {
        pos: ball.pos,
        tint: match toward {
            Side::Player => ParticleTint::PlayerPaddle,
            Side::Opponent => ParticleTint::OpponentPaddle,
        },
    });
}
