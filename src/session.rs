//! Game session: the Idle/Running state machine
//!
//! Owns the simulation state, the clock, the particle RNG and the store the
//! best score lives in. Input handlers only flip flags here; everything else
//! happens inside [`GameSession::frame`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::best_score::BestScore;
use crate::persistence::KeyValueStore;
use crate::renderer::RenderSnapshot;
use crate::sim::{GameEvent, GamePhase, GameState, SimulationClock, TickInput, tick};

/// Logical input state, consumed at the start of each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Steering button currently held
    pub steering: bool,
    /// A press arrived while idle and the round has not started yet
    pub start_requested: bool,
}

pub struct GameSession<S: KeyValueStore> {
    state: GameState,
    clock: SimulationClock,
    input: InputState,
    best: BestScore,
    rng: Pcg32,
    store: S,
    rounds_played: u32,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Create a session, reading the best score from `store`
    pub fn new(store: S, seed: u64) -> Self {
        let best = BestScore::load(&store);
        log::info!("Session created with seed: {}", seed);
        Self {
            state: GameState::new(),
            clock: SimulationClock::new(),
            input: InputState::default(),
            best,
            rng: Pcg32::seed_from_u64(seed),
            store,
            rounds_played: 0,
        }
    }

    /// Steering button went down
    pub fn press(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.input.start_requested = true;
        }
        self.input.steering = true;
    }

    /// Steering button came up
    pub fn release(&mut self) {
        self.input.steering = false;
    }

    /// Set steering from a level-triggered source (pilots, replays)
    pub fn set_steering(&mut self, held: bool) {
        if held && !self.input.steering {
            self.press();
        } else if !held && self.input.steering {
            self.release();
        }
    }

    /// Reset everything a round owns and enter `Running`
    pub fn start_round(&mut self) {
        self.state.reset_round();
        self.clock.reset();
        self.input.start_requested = false;
        self.rounds_played += 1;
        log::info!("Round {} started (best {})", self.rounds_played, self.best.value);
    }

    /// Per-frame entry point; `now` is an absolute timestamp in seconds
    pub fn frame(&mut self, now: f64) -> Option<GameEvent> {
        if self.input.start_requested && self.state.phase == GamePhase::Idle {
            self.start_round();
        }

        let dt = self.clock.tick(now);
        let input = TickInput {
            steering: self.input.steering,
        };
        let event = tick(&mut self.state, &input, dt, &mut self.rng);

        if let Some(GameEvent::RoundOver { score }) = event {
            self.finish_round(score);
        }
        event
    }

    /// Same as [`frame`](Self::frame) for millisecond timestamps
    pub fn frame_millis(&mut self, now_ms: f64) -> Option<GameEvent> {
        self.frame(now_ms / 1000.0)
    }

    /// Commit the best score; runs before the caller sees `Idle`
    fn finish_round(&mut self, score: f32) {
        let whole = score.max(0.0).floor() as u64;
        if self.best.record(whole) {
            log::info!("New best score: {}", whole);
        } else {
            log::info!("Round over with {} (best {})", whole, self.best.value);
        }
        if let Err(err) = self.best.save(&mut self.store) {
            log::warn!("Failed to save best score: {}", err);
        }
    }

    /// Read-only view for the render sink
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state, self.best.value)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn best_score(&self) -> u64 {
        self.best.value
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down the session and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }
}
