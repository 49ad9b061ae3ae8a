//! Frame run loop
//!
//! One iteration per frame timestamp: pilot input, session frame, present.
//! The loop ends when the timestamp source runs dry or the round limit is hit.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;
use crate::renderer::RenderSink;
use crate::session::GameSession;
use crate::sim::{Autopilot, GameEvent, GamePhase};

/// What happened over a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub rounds_finished: u32,
    pub last_score: u64,
    pub best_score: u64,
}

/// Drive `session` with `frames` timestamps (seconds)
///
/// With a pilot, its choice replaces external input each frame. Stops early
/// once `max_rounds` rounds have finished.
pub fn run_frames<S, K, I>(
    session: &mut GameSession<S>,
    sink: &mut K,
    pilot: Option<&Autopilot>,
    frames: I,
    max_rounds: Option<u32>,
) -> RunSummary
where
    S: KeyValueStore,
    K: RenderSink + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let mut summary = RunSummary {
        best_score: session.best_score(),
        ..Default::default()
    };

    for now in frames {
        if let Some(pilot) = pilot {
            let held = pilot.wants_steering(session.state());
            if held && session.phase() == GamePhase::Idle {
                // Only a fresh press starts a round
                session.release();
            }
            session.set_steering(held);
        }

        let event = session.frame(now);
        sink.present(&session.snapshot());
        summary.frames += 1;

        if let Some(GameEvent::RoundOver { .. }) = event {
            summary.rounds_finished += 1;
            summary.last_score = session.state().whole_score();
            summary.best_score = session.best_score();
            if max_rounds.is_some_and(|max| summary.rounds_finished >= max) {
                break;
            }
        }
    }

    summary
}

/// Wall-clock paced timestamps for native runs
#[cfg(not(target_arch = "wasm32"))]
pub struct RealTimeFrames {
    start: std::time::Instant,
    frame_interval: std::time::Duration,
    limit: std::time::Duration,
    next: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl RealTimeFrames {
    /// Frames at `fps` until `limit` has elapsed
    pub fn new(fps: u32, limit: std::time::Duration) -> Self {
        let start = std::time::Instant::now();
        Self {
            start,
            frame_interval: std::time::Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            limit,
            next: start,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Iterator for RealTimeFrames {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let now = std::time::Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
        }
        let elapsed = self.start.elapsed();
        if elapsed > self.limit {
            return None;
        }
        self.next += self.frame_interval;
        Some(elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::renderer::HeadlessSink;

    fn timestamps(count: usize, dt: f64) -> impl Iterator<Item = f64> {
        (0..count).map(move |i| i as f64 * dt)
    }

    #[test]
    fn test_without_input_stays_idle() {
        let mut session = GameSession::new(MemoryStore::new(), 1);
        let mut sink = HeadlessSink::new();
        let summary = run_frames(&mut session, &mut sink, None, timestamps(100, 0.016), None);
        assert_eq!(summary.frames, 100);
        assert_eq!(summary.rounds_finished, 0);
        assert_eq!(sink.frames, 100);
        assert!(sink.last().is_some_and(|s| s.show_overlay()));
    }

    #[test]
    fn test_pilot_plays_requested_rounds() {
        let mut session = GameSession::new(MemoryStore::new(), 7);
        let mut sink = HeadlessSink::new();
        let pilot = Autopilot::new(true);
        // Far more frames than three rounds need
        let summary = run_frames(
            &mut session,
            &mut sink,
            Some(&pilot),
            timestamps(200_000, 1.0 / 60.0),
            Some(3),
        );
        assert_eq!(summary.rounds_finished, 3);
        assert_eq!(session.rounds_played(), 3);
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(summary.best_score >= summary.last_score);
        assert_eq!(summary.best_score, session.best_score());
        assert!(summary.frames < 200_000);
    }

    #[test]
    fn test_pilot_without_restart_plays_nothing() {
        let mut session = GameSession::new(MemoryStore::new(), 7);
        let mut sink = HeadlessSink::new();
        let pilot = Autopilot::new(false);
        let summary = run_frames(
            &mut session,
            &mut sink,
            Some(&pilot),
            timestamps(50, 0.016),
            None,
        );
        assert_eq!(summary.rounds_finished, 0);
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn test_real_time_frames_stop_at_limit() {
        let frames: Vec<f64> =
            RealTimeFrames::new(1000, std::time::Duration::from_millis(20)).collect();
        assert!(!frames.is_empty());
        assert!(frames.windows(2).all(|w| w[1] >= w[0]));
        assert!(frames.iter().all(|&t| t <= 0.02));
    }
}
