//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a press to start a round
    #[default]
    Idle,
    /// Active gameplay
    Running,
}

/// Events emitted by a tick for the session to act on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The craft left the lane; carries the final round score
    RoundOver { score: f32 },
}

/// The player's craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCraft {
    pub pos: Vec2,
    /// Heading in radians (0 = straight up the lane, positive drifts right)
    pub heading: f32,
    pub speed: f32,
    pub turn_rate: f32,
    pub radius: f32,
}

impl Default for PlayerCraft {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT * CRAFT_Y_FRACTION),
            heading: 0.0,
            speed: CRAFT_START_SPEED,
            turn_rate: CRAFT_TURN_RATE,
            radius: CRAFT_RADIUS,
        }
    }
}

impl PlayerCraft {
    /// Speed ramps up for as long as the round lasts
    pub fn accelerate(&mut self, dt: f32) {
        self.speed += CRAFT_ACCELERATION * dt;
    }

    /// Turn while steering, otherwise ease the heading back to zero
    pub fn steer(&mut self, steering: bool, dt: f32) {
        if steering {
            self.heading += self.turn_rate * dt;
        } else {
            self.heading *= HEADING_DAMPING.powf(dt * HEADING_DAMPING_RATE);
        }
    }

    /// Apply lateral drift from the current heading
    pub fn drift(&mut self, dt: f32) {
        self.pos.x += self.heading.sin() * self.speed * dt * DRIFT_FACTOR;
    }
}

/// The oscillating lane the craft has to stay inside
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneTrack {
    /// Centerline x (cached from time, amplitude and frequency)
    pub center_x: f32,
    /// Resting centerline x
    pub base_center: f32,
    pub width: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Seconds since the round started
    pub time: f32,
}

impl Default for LaneTrack {
    fn default() -> Self {
        Self {
            center_x: ARENA_WIDTH / 2.0,
            base_center: ARENA_WIDTH / 2.0,
            width: LANE_WIDTH,
            amplitude: LANE_BASE_AMPLITUDE,
            frequency: LANE_BASE_FREQUENCY,
            time: 0.0,
        }
    }
}

impl LaneTrack {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// Centerline position for the given parameters
    pub fn center_at(&self, time: f32) -> f32 {
        self.base_center + (time * self.frequency).sin() * self.amplitude
    }

    /// Advance time, ramp difficulty and refresh the cached center
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
        self.amplitude += LANE_AMPLITUDE_RAMP * dt;
        self.frequency += LANE_FREQUENCY_RAMP * dt;
        self.center_x = self.center_at(self.time);
    }

    /// Left lane edge x
    pub fn left(&self) -> f32 {
        self.center_x - self.half_width()
    }

    /// Right lane edge x
    pub fn right(&self) -> f32 {
        self.center_x + self.half_width()
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    /// Seconds left before the particle is culled
    pub life: f32,
}

impl Particle {
    /// Draw opacity (fades out over the last half second)
    pub fn opacity(&self) -> f32 {
        (self.life * 2.0).clamp(0.0, 1.0)
    }
}

/// Complete per-round simulation state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Round score (fractional; floored for display and records)
    pub score: f32,
    /// Edge warning intensity in [0, 1]
    pub shake: f32,
    pub craft: PlayerCraft,
    pub track: LaneTrack,
    /// Visual particles (not gameplay-affecting), oldest first
    #[serde(skip)]
    pub particles: Vec<Particle>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinitialize everything a round touches and enter `Running`
    pub fn reset_round(&mut self) {
        self.score = 0.0;
        self.shake = 0.0;
        self.particles.clear();
        self.craft = PlayerCraft::default();
        self.track = LaneTrack::default();
        self.phase = GamePhase::Running;
    }

    /// Round score as the integer the HUD and records use
    pub fn whole_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}
