//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels.

/// Drag threshold in logical pixels.
///
/// Movement beyond this distance from the press position starts a drag;
/// a release inside it is a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum reported velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Width of the strip along a screen edge where an edge pan may start.
pub const EDGE_ZONE_WIDTH: f32 = 20.0;
