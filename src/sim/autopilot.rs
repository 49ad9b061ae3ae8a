//! Demo pilot for attract mode and headless runs
//!
//! Looks a short way ahead under both "hold" and "let go" and picks whichever
//! keeps the craft closer to the centerline. It is not meant to be good.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Frames simulated ahead for each choice
const LOOKAHEAD_FRAMES: usize = 60;

/// Step size used for the look-ahead
const LOOKAHEAD_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Restart automatically once a round ends
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self { auto_restart }
    }

    /// Whether the steering button should be held this frame
    pub fn wants_steering(&self, state: &GameState) -> bool {
        match state.phase {
            GamePhase::Idle => self.auto_restart,
            GamePhase::Running => worst_offset(state, true) < worst_offset(state, false),
        }
    }

    /// Input for the next tick
    pub fn next_input(&self, state: &GameState) -> TickInput {
        TickInput {
            steering: self.wants_steering(state),
        }
    }
}

/// Largest centerline offset over the look-ahead window when holding `steering`
fn worst_offset(state: &GameState, steering: bool) -> f32 {
    let mut craft = state.craft.clone();
    let mut track = state.track.clone();
    let mut worst = 0.0f32;
    for _ in 0..LOOKAHEAD_FRAMES {
        track.advance(LOOKAHEAD_DT);
        craft.accelerate(LOOKAHEAD_DT);
        craft.steer(steering, LOOKAHEAD_DT);
        craft.drift(LOOKAHEAD_DT);
        worst = worst.max((craft.pos.x - track.center_x).abs());
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_pilot_only_presses_with_auto_restart() {
        let state = GameState::new();
        assert!(!Autopilot::new(false).wants_steering(&state));
        assert!(Autopilot::new(true).wants_steering(&state));
    }

    #[test]
    fn test_pilot_lets_go_when_turned_hard_right() {
        let mut state = GameState::new();
        state.reset_round();
        // Already drifting right near the right edge: holding only makes it worse
        state.craft.heading = 1.0;
        state.craft.pos.x = state.track.center_x + 60.0;
        assert!(!Autopilot::default().wants_steering(&state));
    }

    #[test]
    fn test_lookahead_does_not_touch_state() {
        let mut state = GameState::new();
        state.reset_round();
        let before = (state.craft.pos, state.craft.heading, state.track.time);
        let _ = Autopilot::default().next_input(&state);
        assert_eq!(before, (state.craft.pos, state.craft.heading, state.track.time));
    }
}
