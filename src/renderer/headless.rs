//! Headless sink for native runs
//!
//! Draws nothing; keeps a few counters and logs phase changes so a run can be
//! followed from the terminal.

use super::{RenderSink, RenderSnapshot};
use crate::sim::GamePhase;

#[derive(Debug, Default)]
pub struct HeadlessSink {
    pub frames: u64,
    pub peak_particles: usize,
    pub peak_shake: f32,
    last_phase: Option<GamePhase>,
    last: Option<RenderSnapshot>,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent snapshot presented
    pub fn last(&self) -> Option<&RenderSnapshot> {
        self.last.as_ref()
    }
}

impl RenderSink for HeadlessSink {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self.frames += 1;
        self.peak_particles = self.peak_particles.max(snapshot.particles.len());
        self.peak_shake = self.peak_shake.max(snapshot.shake);

        if self.last_phase != Some(snapshot.phase) {
            match snapshot.phase {
                GamePhase::Running => log::info!("Drifting..."),
                GamePhase::Idle => log::info!(
                    "Score: {}  Best: {}",
                    snapshot.score,
                    snapshot.best_score
                ),
            }
            self.last_phase = Some(snapshot.phase);
        }
        self.last = Some(snapshot.clone());
    }
}
