//! Logical input events
//!
//! Every physical source collapses into press/release of the one steering
//! button.

use crate::persistence::KeyValueStore;
use crate::session::GameSession;

/// Key codes that act as the steering button
pub const STEER_KEYS: [&str; 2] = ["Space", "ArrowUp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press,
    Release,
}

/// Map a `KeyboardEvent.code` to an input event; `None` for unmapped keys
///
/// Callers should suppress the browser default whenever this returns `Some`.
pub fn key_event(code: &str, pressed: bool) -> Option<InputEvent> {
    if !STEER_KEYS.contains(&code) {
        return None;
    }
    Some(if pressed {
        InputEvent::Press
    } else {
        InputEvent::Release
    })
}

/// Forward an event to the session
pub fn apply_input<S: KeyValueStore>(session: &mut GameSession<S>, event: InputEvent) {
    match event {
        InputEvent::Press => session.press(),
        InputEvent::Release => session.release(),
    }
}
