use hecs::World;

use crate::{Config, InputSnapshot, Paddle, Side};

/// Move the player paddle from this tick's pointer and key state
pub fn apply_player_input(world: &mut World, input: &InputSnapshot, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        // Pointer centers the paddle on the cursor
        if let Some(pointer_y) = input.pointer_y {
            paddle.y = pointer_y - config.paddle_height / 2.0;
        }

        paddle.y += input.key_dir() as f32 * config.keyboard_speed;

        // Clamp to arena bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, find_paddle};

    fn setup_world() -> (World, Config) {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, config.centered_paddle_y());
        create_paddle(&mut world, Side::Opponent, config.centered_paddle_y());
        (world, config)
    }

    fn player_y(world: &World) -> f32 {
        find_paddle(world, Side::Player).map(|p| p.y).unwrap()
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let (mut world, config) = setup_world();
        apply_player_input(&mut world, &InputSnapshot::pointer(200.0), &config);
        assert_eq!(player_y(&world), 150.0);
    }

    #[test]
    fn test_keys_move_by_keyboard_speed() {
        let (mut world, config) = setup_world();
        let input = InputSnapshot {
            up: true,
            ..InputSnapshot::default()
        };
        apply_player_input(&mut world, &input, &config);
        assert_eq!(player_y(&world), 250.0 - config.keyboard_speed);

        let input = InputSnapshot {
            down: true,
            ..InputSnapshot::default()
        };
        apply_player_input(&mut world, &input, &config);
        apply_player_input(&mut world, &input, &config);
        assert_eq!(player_y(&world), 250.0 + config.keyboard_speed);
    }

    #[test]
    fn test_paddle_clamped_to_arena() {
        let (mut world, config) = setup_world();
        apply_player_input(&mut world, &InputSnapshot::pointer(-500.0), &config);
        assert_eq!(player_y(&world), 0.0);

        apply_player_input(&mut world, &InputSnapshot::pointer(5000.0), &config);
        assert_eq!(player_y(&world), config.arena_height - config.paddle_height);

        let input = InputSnapshot {
            down: true,
            ..InputSnapshot::default()
        };
        for _ in 0..10 {
            apply_player_input(&mut world, &input, &config);
        }
        assert_eq!(player_y(&world), config.arena_height - config.paddle_height);
    }

    #[test]
    fn test_opponent_ignores_player_input() {
        let (mut world, config) = setup_world();
        apply_player_input(&mut world, &InputSnapshot::pointer(100.0), &config);
        let opponent = find_paddle(&world, Side::Opponent).unwrap();
        assert_eq!(opponent.y, config.centered_paddle_y());
    }
}
