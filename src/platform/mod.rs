//! Platform abstraction layer
//!
//! Handles the pieces that sit between the host and the session:
//! - Input events (pointer, touch, keys) mapped to press/release
//! - The frame run loop (timestamps in, snapshots out)

pub mod input;
pub mod run_loop;

pub use input::{InputEvent, apply_input, key_event};
pub use run_loop::{RunSummary, run_frames};

#[cfg(not(target_arch = "wasm32"))]
pub use run_loop::RealTimeFrames;
