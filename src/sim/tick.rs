//! Per-frame simulation tick
//!
//! Advances one `Running` frame: lane, craft, edge check, score, particles.

use rand::Rng;

use super::collision::{judge_lane, warning_intensity};
use super::particles::{age_particles, spawn_particle};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Steering button held down
    pub steering: bool,
}

/// Advance the game state by `dt` seconds
///
/// Does nothing outside `Running`. Returns `RoundOver` on the frame the
/// craft leaves the lane; that frame earns no score.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) -> Option<GameEvent> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.track.advance(dt);
    state.craft.accelerate(dt);
    state.craft.steer(input.steering, dt);
    state.craft.drift(dt);

    let check = judge_lane(&state.craft, &state.track);

    match warning_intensity(check.edge_distance) {
        Some(intensity) => state.shake = state.shake.max(intensity),
        None => state.shake *= SHAKE_DECAY,
    }

    let event = if check.out_of_bounds {
        state.phase = GamePhase::Idle;
        log::debug!(
            "Left the lane at t={:.2}s (offset {:.1}, speed {:.1})",
            state.track.time,
            check.offset,
            state.craft.speed
        );
        Some(GameEvent::RoundOver { score: state.score })
    } else {
        state.score += state.craft.speed * dt * SCORE_RATE;
        None
    };

    if input.steering {
        spawn_particle(&mut state.particles, state.craft.pos, rng);
    }
    age_particles(&mut state.particles, state.craft.speed, dt);

    event
}
