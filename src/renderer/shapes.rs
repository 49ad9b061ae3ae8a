//! Shape generation for 2D primitives

use glam::Vec2;

/// Craft triangle (nose, left tail, right tail) rotated by `heading`
///
/// At heading 0 the nose points up the screen (negative y).
pub fn craft_triangle(pos: Vec2, heading: f32, radius: f32) -> [Vec2; 3] {
    let rot = Vec2::from_angle(heading);
    let local = [
        Vec2::new(0.0, -radius * 1.2),
        Vec2::new(-radius, radius),
        Vec2::new(radius, radius),
    ];
    local.map(|p| pos + rot.rotate(p))
}

/// Lane edge segments as (top, bottom) pairs for the left and right walls
pub fn lane_edges(left: f32, right: f32, height: f32) -> [(Vec2, Vec2); 2] {
    [
        (Vec2::new(left, 0.0), Vec2::new(left, height)),
        (Vec2::new(right, 0.0), Vec2::new(right, height)),
    ]
}
