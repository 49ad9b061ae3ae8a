//! Steering exhaust particles
//!
//! Purely decorative. Spawn parameters are drawn from the RNG handed in by
//! the caller so a seeded session replays identically.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::consts::*;

/// Emit one particle just behind the craft at `origin`
pub fn spawn_particle<R: Rng + ?Sized>(particles: &mut Vec<Particle>, origin: Vec2, rng: &mut R) {
    let jitter = rng.random_range(-PARTICLE_SPREAD_X..PARTICLE_SPREAD_X);
    particles.push(Particle {
        pos: Vec2::new(origin.x + jitter, origin.y + PARTICLE_OFFSET_Y),
        radius: rng.random_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX),
        life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
    });
}

/// Age every particle, scroll it with the lane and drop the expired ones
pub fn age_particles(particles: &mut Vec<Particle>, scroll_speed: f32, dt: f32) {
    let scroll = scroll_speed * dt * PARTICLE_SCROLL_FACTOR;
    for particle in particles.iter_mut() {
        particle.life -= dt;
        particle.pos.y += scroll;
    }
    particles.retain(|p| p.life > 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        let origin = Vec2::new(240.0, 480.0);
        for _ in 0..200 {
            spawn_particle(&mut particles, origin, &mut rng);
        }
        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert!((p.pos.x - origin.x).abs() <= PARTICLE_SPREAD_X);
            assert_eq!(p.pos.y, origin.y + PARTICLE_OFFSET_Y);
            assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
            assert!(p.life >= PARTICLE_LIFE_MIN && p.life < PARTICLE_LIFE_MAX);
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..10 {
            spawn_particle(&mut a, Vec2::ZERO, &mut rng_a);
            spawn_particle(&mut b, Vec2::ZERO, &mut rng_b);
        }
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.life, pb.life);
        }
    }

    #[test]
    fn test_age_scrolls_and_culls() {
        let mut particles = vec![
            Particle {
                pos: Vec2::new(0.0, 100.0),
                radius: 3.0,
                life: 0.5,
            },
            Particle {
                pos: Vec2::new(0.0, 100.0),
                radius: 3.0,
                life: 0.01,
            },
        ];
        age_particles(&mut particles, 150.0, 0.02);
        assert_eq!(particles.len(), 1);
        assert!((particles[0].life - 0.48).abs() < 1e-6);
        assert!((particles[0].pos.y - (100.0 + 150.0 * 0.02 * PARTICLE_SCROLL_FACTOR)).abs() < 1e-4);
    }

    #[test]
    fn test_exactly_zero_life_is_removed() {
        let mut particles = vec![Particle {
            pos: Vec2::ZERO,
            radius: 2.0,
            life: 0.25,
        }];
        age_particles(&mut particles, 0.0, 0.25);
        assert!(particles.is_empty());
    }

    proptest! {
        #[test]
        fn prop_no_expired_particle_survives(seed in any::<u64>(), dts in proptest::collection::vec(0.0f32..0.05, 1..80)) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut particles = Vec::new();
            for dt in dts {
                spawn_particle(&mut particles, Vec2::new(240.0, 480.0), &mut rng);
                age_particles(&mut particles, 160.0, dt);
                prop_assert!(particles.iter().all(|p| p.life > 0.0));
            }
        }
    }
}
