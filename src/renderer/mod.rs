//! Rendering module
//!
//! The simulation hands each frame a [`RenderSnapshot`]; sinks only draw it.

pub mod headless;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use headless::HeadlessSink;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::SHAKE_MAX_OFFSET;
use crate::sim::{GamePhase, GameState};

/// Particle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub lane_left: f32,
    pub lane_right: f32,
    pub craft_pos: Vec2,
    pub craft_heading: f32,
    pub craft_radius: f32,
    pub particles: Vec<ParticleView>,
    /// Whole round score
    pub score: u64,
    pub best_score: u64,
    pub shake: f32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState, best_score: u64) -> Self {
        Self {
            phase: state.phase,
            lane_left: state.track.left(),
            lane_right: state.track.right(),
            craft_pos: state.craft.pos,
            craft_heading: state.craft.heading,
            craft_radius: state.craft.radius,
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    radius: p.radius,
                    opacity: p.opacity(),
                })
                .collect(),
            score: state.whole_score(),
            best_score,
            shake: state.shake,
        }
    }

    pub fn lane_width(&self) -> f32 {
        self.lane_right - self.lane_left
    }

    /// Whether the start prompt should be drawn
    pub fn show_overlay(&self) -> bool {
        self.phase == GamePhase::Idle
    }
}

/// Draw-origin jitter for a shake intensity
pub fn shake_offset<R: Rng + ?Sized>(shake: f32, rng: &mut R) -> Vec2 {
    let shake = shake.clamp(0.0, 1.0);
    if shake <= 0.0 {
        return Vec2::ZERO;
    }
    let reach = SHAKE_MAX_OFFSET * shake;
    Vec2::new(
        rng.random_range(-reach..=reach),
        rng.random_range(-reach..=reach),
    )
}

/// Anything that can present a frame
pub trait RenderSink {
    fn present(&mut self, snapshot: &RenderSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_capture_idle_state() {
        let state = GameState::new();
        let snap = RenderSnapshot::capture(&state, 77);
        assert!(snap.show_overlay());
        assert_eq!(snap.best_score, 77);
        assert_eq!(snap.score, 0);
        assert!((snap.lane_width() - LANE_WIDTH).abs() < 1e-4);
        assert_eq!(snap.craft_pos.x, ARENA_WIDTH / 2.0);
    }

    #[test]
    fn test_capture_floors_score_and_maps_particles() {
        let mut state = GameState::new();
        state.reset_round();
        state.score = 41.99;
        state.particles.push(crate::sim::Particle {
            pos: Vec2::new(10.0, 20.0),
            radius: 3.0,
            life: 0.2,
        });
        let snap = RenderSnapshot::capture(&state, 0);
        assert!(!snap.show_overlay());
        assert_eq!(snap.score, 41);
        assert_eq!(snap.particles.len(), 1);
        assert!((snap.particles[0].opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_shake_offset_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        assert_eq!(shake_offset(0.0, &mut rng), Vec2::ZERO);
        for _ in 0..500 {
            let half = shake_offset(0.5, &mut rng);
            assert!(half.x.abs() <= 1.5 && half.y.abs() <= 1.5);
            let full = shake_offset(4.0, &mut rng);
            assert!(full.x.abs() <= SHAKE_MAX_OFFSET && full.y.abs() <= SHAKE_MAX_OFFSET);
        }
    }
}
