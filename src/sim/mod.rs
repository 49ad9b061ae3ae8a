//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Delta time is derived by `SimulationClock` and clamped
//! - Randomness comes only from an injected RNG
//! - Particles are kept in spawn order

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod particles;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use clock::SimulationClock;
pub use collision::{LaneCheck, judge_lane, warning_intensity};
pub use particles::{age_particles, spawn_particle};
pub use state::{GameEvent, GamePhase, GameState, LaneTrack, Particle, PlayerCraft};
pub use tick::{TickInput, tick};
