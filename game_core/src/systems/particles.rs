use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Config, Events, GameRng, Particle};

/// Burst particles out of every impact recorded this tick
pub fn spawn_particles(world: &mut World, config: &Config, events: &Events, rng: &mut GameRng) {
    let spread = config.particle_spread;
    for impact in &events.impacts {
        for _ in 0..config.particle_count {
            let vel = Vec2::new(
                rng.0.gen_range(-spread..=spread),
                rng.0.gen_range(-spread..=spread),
            );
            world.spawn((Particle::new(impact.pos, vel, config.particle_life, impact.tint),));
        }
    }
}

/// Integrate, damp and age particles, despawning expired ones
pub fn update_particles(world: &mut World, config: &Config) {
    let mut to_remove = Vec::new();

    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel;
        particle.vel *= config.particle_damping;
        particle.life = particle.life.saturating_sub(1);

        if particle.is_expired() {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Remove every particle
pub fn clear_particles(world: &mut World) {
    let particles: Vec<_> = world.query::<&Particle>().iter().map(|(e, _)| e).collect();
    for entity in particles {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Impact, ParticleTint};

    fn impact_events(count: usize) -> Events {
        let mut events = Events::new();
        for i in 0..count {
            events.impacts.push(Impact {
                pos: Vec2::new(100.0 * i as f32, 12.0),
                tint: ParticleTint::Wall,
            });
        }
        events
    }

    fn particles(world: &World) -> Vec<Particle> {
        world.query::<&Particle>().iter().map(|(_e, p)| *p).collect()
    }

    #[test]
    fn test_batch_per_impact() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(5);

        spawn_particles(&mut world, &config, &impact_events(2), &mut rng);

        let spawned = particles(&world);
        assert_eq!(spawned.len(), 2 * config.particle_count);
        for particle in spawned {
            assert_eq!(particle.life, config.particle_life);
            assert_eq!(particle.max_life, config.particle_life);
            assert!(particle.vel.x.abs() <= config.particle_spread);
            assert!(particle.vel.y.abs() <= config.particle_spread);
        }
    }

    #[test]
    fn test_particle_integrates_then_damps() {
        let mut world = World::new();
        let config = Config::new();
        world.spawn((Particle::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(5.0, -5.0),
            30,
            ParticleTint::PlayerPaddle,
        ),));

        update_particles(&mut world, &config);

        let particle = particles(&world)[0];
        assert_eq!(particle.pos, Vec2::new(15.0, 5.0));
        assert!((particle.vel.x - 4.9).abs() < 1e-5);
        assert!((particle.vel.y + 4.9).abs() < 1e-5);
        assert_eq!(particle.life, 29);
    }

    #[test]
    fn test_particles_expire_after_life() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(9);
        spawn_particles(&mut world, &config, &impact_events(1), &mut rng);

        for _ in 0..config.particle_life - 1 {
            update_particles(&mut world, &config);
        }
        assert_eq!(particles(&world).len(), config.particle_count, "One tick of life left");

        update_particles(&mut world, &config);
        assert!(particles(&world).is_empty(), "All particles should be despawned");
    }

    #[test]
    fn test_clear_particles_keeps_other_entities() {
        let mut world = World::new();
        let config = Config::new();
        let mut rng = GameRng::new(9);
        crate::create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);
        spawn_particles(&mut world, &config, &impact_events(3), &mut rng);

        clear_particles(&mut world);

        assert!(particles(&world).is_empty());
        assert!(crate::find_ball(&world).is_some());
    }
}
