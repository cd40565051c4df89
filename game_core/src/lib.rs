pub mod components;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod input;
pub mod params;
pub mod presenter;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use error::*;
pub use fsm::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use presenter::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    profile: &DifficultyProfile,
    input: &InputSnapshot,
    score: &mut Score,
    rally: &mut Rally,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move the player paddle from input
    apply_player_input(world, input, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, rally, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, config, profile, score, rally, events, rng);

    // 5. Opponent paddle
    update_ai(world, config, profile, rng);

    // 6. Cosmetic particles
    spawn_particles(world, config, events, rng);
    update_particles(world, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Copy of the (single) ball, if one exists
pub fn find_ball(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Copy of the paddle on `side`, if one exists
pub fn find_paddle(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}
