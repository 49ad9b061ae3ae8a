//! Frame timestamp to delta-time conversion

use crate::consts::MAX_FRAME_DT;

/// Turns absolute frame timestamps into clamped delta times.
///
/// The first frame after construction or [`SimulationClock::reset`] yields
/// `0.0` so a resumed loop never sees one huge step.
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    last: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the baseline; the next tick returns zero
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advance to `now` (seconds) and return the clamped delta
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Same as [`tick`](Self::tick) for millisecond timestamps
    pub fn tick_millis(&mut self, now_ms: f64) -> f32 {
        self.tick(now_ms / 1000.0)
    }

    /// Last recorded timestamp (seconds)
    pub fn baseline(&self) -> Option<f64> {
        self.last
    }
}
