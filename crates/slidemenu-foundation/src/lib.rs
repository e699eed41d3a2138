//! Pointer input and gesture recognition
//!
//! Hosts that already deliver recognised pan gestures (translation and
//! velocity) can skip this crate. Hosts that only see raw pointer events feed
//! them through a [`DragGestureDetector`] to obtain the same [`GestureEvent`]
//! stream.

pub mod drag;
pub mod gesture_constants;
pub mod pointer;
pub mod velocity_tracker;

pub use drag::{DetectedGesture, DragGestureDetector, GestureEvent, GesturePhase, ScreenEdge};
pub use gesture_constants::*;
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;
