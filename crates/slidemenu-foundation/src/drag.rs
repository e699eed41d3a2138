//! Single-pointer drag, edge-pan and tap recognition.

use slidemenu_graphics::Point;

use crate::gesture_constants::{DRAG_THRESHOLD, EDGE_ZONE_WIDTH, MAX_FLING_VELOCITY};
use crate::pointer::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::VelocityTracker1D;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Screen edge an edge-pan must start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenEdge {
    Left,
    Right,
}

/// A recognised pan sample: translation is measured from the press position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub translation: Point,
    /// Velocity in logical pixels per second.
    pub velocity: Point,
}

impl GestureEvent {
    pub fn new(phase: GesturePhase, translation: Point, velocity: Point) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }

    /// Horizontal-only convenience constructor.
    pub fn horizontal(phase: GesturePhase, translation_x: f32, velocity_x: f32) -> Self {
        Self::new(
            phase,
            Point::new(translation_x, 0.0),
            Point::new(velocity_x, 0.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetectedGesture {
    Pan(GestureEvent),
    Tap(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TrackingState {
    Idle,
    Pressed { origin: Point },
    Dragging { origin: Point },
}

/// Turns a raw pointer stream into pan and tap gestures.
///
/// An edge detector only accepts presses that land within
/// [`EDGE_ZONE_WIDTH`] of its edge and never reports taps.
#[derive(Clone)]
pub struct DragGestureDetector {
    edge: Option<(ScreenEdge, f32)>,
    state: TrackingState,
    tracker_x: VelocityTracker1D,
    tracker_y: VelocityTracker1D,
    last_position: Point,
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGestureDetector {
    /// Detector for pans and taps anywhere.
    pub fn new() -> Self {
        Self {
            edge: None,
            state: TrackingState::Idle,
            tracker_x: VelocityTracker1D::new(),
            tracker_y: VelocityTracker1D::new(),
            last_position: Point::ZERO,
        }
    }

    /// Detector for pans starting at `edge` of a container `container_width` wide.
    pub fn edge(edge: ScreenEdge, container_width: f32) -> Self {
        Self {
            edge: Some((edge, container_width)),
            ..Self::new()
        }
    }

    pub fn screen_edge(&self) -> Option<ScreenEdge> {
        self.edge.map(|(edge, _)| edge)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, TrackingState::Dragging { .. })
    }

    fn accepts_press(&self, position: Point) -> bool {
        match self.edge {
            None => true,
            Some((ScreenEdge::Left, _)) => position.x <= EDGE_ZONE_WIDTH,
            Some((ScreenEdge::Right, width)) => position.x >= width - EDGE_ZONE_WIDTH,
        }
    }

    fn velocity(&self) -> Point {
        Point::new(
            self.tracker_x.calculate_velocity_with_max(MAX_FLING_VELOCITY),
            self.tracker_y.calculate_velocity_with_max(MAX_FLING_VELOCITY),
        )
    }

    fn record(&mut self, event: &PointerEvent) {
        self.tracker_x.add_data_point(event.time_ms, event.position.x);
        self.tracker_y.add_data_point(event.time_ms, event.position.y);
        self.last_position = event.position;
    }

    fn reset(&mut self) {
        self.state = TrackingState::Idle;
        self.tracker_x.reset();
        self.tracker_y.reset();
    }

    /// Feed one pointer event; returns a gesture when one is recognised.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<DetectedGesture> {
        match (self.state, event.kind) {
            (TrackingState::Idle, PointerEventKind::Down) => {
                if !self.accepts_press(event.position) {
                    return None;
                }
                self.reset();
                self.record(&event);
                self.state = TrackingState::Pressed {
                    origin: event.position,
                };
                None
            }
            (TrackingState::Pressed { origin }, PointerEventKind::Move) => {
                self.record(&event);
                if origin.distance_to(event.position) <= DRAG_THRESHOLD {
                    return None;
                }
                self.state = TrackingState::Dragging { origin };
                log::trace!("drag began at ({}, {})", origin.x, origin.y);
                Some(DetectedGesture::Pan(GestureEvent::new(
                    GesturePhase::Began,
                    translation(origin, event.position),
                    self.velocity(),
                )))
            }
            (TrackingState::Dragging { origin }, PointerEventKind::Move) => {
                self.record(&event);
                Some(DetectedGesture::Pan(GestureEvent::new(
                    GesturePhase::Changed,
                    translation(origin, event.position),
                    self.velocity(),
                )))
            }
            (TrackingState::Pressed { origin }, PointerEventKind::Up) => {
                self.reset();
                if self.edge.is_some() {
                    None
                } else {
                    Some(DetectedGesture::Tap(origin))
                }
            }
            (TrackingState::Dragging { origin }, PointerEventKind::Up) => {
                self.record(&event);
                let gesture = GestureEvent::new(
                    GesturePhase::Ended,
                    translation(origin, event.position),
                    self.velocity(),
                );
                self.reset();
                Some(DetectedGesture::Pan(gesture))
            }
            (TrackingState::Dragging { origin }, PointerEventKind::Cancel) => {
                let gesture = GestureEvent::new(
                    GesturePhase::Cancelled,
                    translation(origin, self.last_position),
                    Point::ZERO,
                );
                self.reset();
                Some(DetectedGesture::Pan(gesture))
            }
            (TrackingState::Pressed { .. }, PointerEventKind::Cancel) => {
                self.reset();
                None
            }
            _ => None,
        }
    }
}

fn translation(origin: Point, position: Point) -> Point {
    Point::new(position.x - origin.x, position.y - origin.y)
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
