//! Drag progress and release policy for the opening and closing gestures.
//!
//! Opening is driven by an edge pan and measures open-ness directly. Closing
//! is driven by a pan on the open snapshot and measures closing progress
//! (1 = fully closed), which callers convert with [`openness_from_closing`].

use crate::direction::Direction;

/// Directional velocity, in px/s, above which a release always commits.
pub const COMMIT_VELOCITY: f32 = 500.0;

/// Open-ness past which a slow edge-pan release opens the menu.
pub const OPEN_DISTANCE_THRESHOLD: f32 = 0.5;

/// Closing progress past which a slow pan release closes the menu.
pub const CLOSE_DISTANCE_THRESHOLD: f32 = 0.8;

/// Duration, in seconds, of the snap back after an abandoned edge pan.
pub const EDGE_CANCEL_SECONDS: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    Open,
    Close,
}

fn progress(translation_x: f32, panel_width: f32, sign: f32) -> f32 {
    if panel_width <= 0.0 || !translation_x.is_finite() {
        return 0.0;
    }
    translation_x * sign / panel_width
}

/// Open-ness of an edge pan. Dragging back past the start floors at 0.
pub fn opening_percentage(translation_x: f32, panel_width: f32, direction: Direction) -> f32 {
    progress(translation_x, panel_width, direction.sign()).clamp(0.0, 1.0)
}

/// Closing progress of a pan on the open snapshot, capped at 1.
///
/// Negative values mean the drag went further open than the resting state.
pub fn closing_progress(translation_x: f32, panel_width: f32, direction: Direction) -> f32 {
    progress(translation_x, panel_width, -direction.sign()).min(1.0)
}

pub fn openness_from_closing(closing: f32) -> f32 {
    (1.0 - closing).clamp(0.0, 1.0)
}

/// Horizontal velocity measured in the opening direction.
pub fn opening_velocity(velocity_x: f32, direction: Direction) -> f32 {
    velocity_x * direction.sign()
}

/// Horizontal velocity measured in the closing direction.
pub fn closing_velocity(velocity_x: f32, direction: Direction) -> f32 {
    -velocity_x * direction.sign()
}

/// A flick always opens; a slow drag opens only past the halfway point.
pub fn decide_edge_release(opening_velocity: f32, percentage: f32) -> ReleaseDecision {
    if opening_velocity > COMMIT_VELOCITY || percentage.abs() > OPEN_DISTANCE_THRESHOLD {
        ReleaseDecision::Open
    } else {
        ReleaseDecision::Close
    }
}

/// A flick always closes; a slow drag closes only past 80% of the way.
pub fn decide_pan_release(closing_velocity: f32, closing: f32) -> ReleaseDecision {
    if closing_velocity > COMMIT_VELOCITY || closing.abs() > CLOSE_DISTANCE_THRESHOLD {
        ReleaseDecision::Close
    } else {
        ReleaseDecision::Open
    }
}

/// Time left to finish closing after a pan covered `closing` of the way.
pub fn remaining_close_time(slide_time: f64, closing: f32) -> f64 {
    (slide_time * (1.0 - closing.abs() as f64)).max(0.0)
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
