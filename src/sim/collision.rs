//! Lane boundary checks
//!
//! The craft only fails by drifting fully outside the lane, so collision is
//! a one-dimensional comparison of the craft's offset from the centerline
//! against the lane half-width.

use serde::{Deserialize, Serialize};

use super::state::{LaneTrack, PlayerCraft};
use crate::consts::WARNING_DISTANCE;

/// Result of a lane check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneCheck {
    /// Absolute distance between craft and lane centerline
    pub offset: f32,
    /// Room left before the nearest edge (negative once outside)
    pub edge_distance: f32,
    /// Whether the craft has left the lane
    pub out_of_bounds: bool,
}

/// Compare the craft position against the lane
pub fn judge_lane(craft: &PlayerCraft, track: &LaneTrack) -> LaneCheck {
    let half_width = track.half_width();
    let offset = (craft.pos.x - track.center_x).abs();
    LaneCheck {
        offset,
        edge_distance: half_width - offset,
        out_of_bounds: offset > half_width,
    }
}

/// Warning intensity for a given edge distance, `None` when clear of the edges
///
/// Ramps from 0 at `WARNING_DISTANCE` to 1 at the edge itself.
pub fn warning_intensity(edge_distance: f32) -> Option<f32> {
    if edge_distance < WARNING_DISTANCE {
        Some(((WARNING_DISTANCE - edge_distance) / WARNING_DISTANCE).clamp(0.0, 1.0))
    } else {
        None
    }
}
