//! Drift Lane - A one-button lane drifting arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (clock, lane, craft, particles, tick)
//! - `session`: Idle/Running state machine that owns the simulation
//! - `renderer`: Render snapshot plus canvas/headless sinks
//! - `platform`: Input mapping and the frame run loop
//! - `persistence`: Key-value storage backends (memory, file, LocalStorage)

pub mod best_score;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use session::GameSession;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest delta-time handed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Arena dimensions (canvas pixels)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 640.0;

    /// Lane defaults
    pub const LANE_WIDTH: f32 = 190.0;
    pub const LANE_BASE_AMPLITUDE: f32 = 40.0;
    pub const LANE_BASE_FREQUENCY: f32 = 0.6;
    /// Amplitude growth (pixels per second)
    pub const LANE_AMPLITUDE_RAMP: f32 = 3.5;
    /// Frequency growth (per second)
    pub const LANE_FREQUENCY_RAMP: f32 = 0.02;

    /// Craft defaults
    pub const CRAFT_START_SPEED: f32 = 140.0;
    /// Speed growth (pixels/s²)
    pub const CRAFT_ACCELERATION: f32 = 6.0;
    pub const CRAFT_TURN_RATE: f32 = 2.4; // radians per second
    pub const CRAFT_RADIUS: f32 = 14.0;
    /// Vertical placement as a fraction of arena height
    pub const CRAFT_Y_FRACTION: f32 = 0.75;
    /// Share of forward speed converted into lateral drift
    pub const DRIFT_FACTOR: f32 = 0.45;
    /// Heading retained per reference frame when not steering
    pub const HEADING_DAMPING: f32 = 0.2;
    /// Reference frames per second for the heading damping
    pub const HEADING_DAMPING_RATE: f32 = 8.0;

    /// Score earned per pixel of forward travel
    pub const SCORE_RATE: f32 = 0.2;
    /// Distance from the lane edge where the warning shake kicks in
    pub const WARNING_DISTANCE: f32 = 24.0;
    /// Per-frame shake decay when clear of the edges
    pub const SHAKE_DECAY: f32 = 0.9;
    /// Maximum draw-origin jitter (pixels per axis at full shake)
    pub const SHAKE_MAX_OFFSET: f32 = 3.0;

    /// Particle spawn ranges
    pub const PARTICLE_SPREAD_X: f32 = 5.0;
    pub const PARTICLE_OFFSET_Y: f32 = 20.0;
    pub const PARTICLE_RADIUS_MIN: f32 = 2.0;
    pub const PARTICLE_RADIUS_MAX: f32 = 5.0;
    pub const PARTICLE_LIFE_MIN: f32 = 0.4;
    pub const PARTICLE_LIFE_MAX: f32 = 0.6;
    /// Fraction of craft speed particles scroll with
    pub const PARTICLE_SCROLL_FACTOR: f32 = 0.2;
}
