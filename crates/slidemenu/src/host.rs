//! Contract between the menu and the UI toolkit hosting it.
//!
//! The host owns the real view tree, bitmap capture and gesture recognizers.
//! The menu only ever talks to it through [`SlideMenuHost`], which keeps the
//! state machine testable without a windowing system.

use slidemenu_foundation::ScreenEdge;
use slidemenu_graphics::{Color, Rect};

use crate::geometry::MenuLayout;

/// Opaque handle to a bitmap captured by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotId(pub u64);

/// Opaque handle to a host image used as the menu background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Handle to a registered gesture recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecognizerId(pub u64);

/// Background revealed behind the receding content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoverContent {
    Color(Color),
    Image(ImageId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Snapshot,
    Cover,
    Panel,
}

/// A view the menu inserts into the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layer {
    Snapshot(SnapshotId),
    Cover(CoverContent),
    Panel,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Snapshot(_) => LayerKind::Snapshot,
            Layer::Cover(_) => LayerKind::Cover,
            Layer::Panel => LayerKind::Panel,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    /// Window-level pan starting at the given screen edge.
    EdgePan(ScreenEdge),
    /// Pan on the content snapshot, used to drag the menu closed.
    SnapshotPan,
    /// Tap on the content snapshot.
    SnapshotTap,
}

pub trait SlideMenuHost {
    /// Bounds of the window the menu presents over, or `None` without one.
    fn window_bounds(&self) -> Option<Rect>;

    /// Captures the current full-screen content.
    fn capture_snapshot(&mut self) -> Option<SnapshotId>;

    /// Inserts `layer` below the layer of kind `below`, or on top when `None`.
    fn insert_layer(&mut self, layer: Layer, below: Option<LayerKind>);

    /// Removes a layer. Removing a detached layer is a no-op.
    fn remove_layer(&mut self, kind: LayerKind);

    /// Applies one frame of geometry synchronously.
    fn apply_layout(&mut self, layout: &MenuLayout);

    fn set_snapshot_alpha(&mut self, alpha: f32);

    fn set_panel_background(&mut self, color: Color);

    fn add_recognizer(&mut self, kind: RecognizerKind) -> RecognizerId;

    /// Unregisters a recognizer, returning whether it was registered.
    fn remove_recognizer(&mut self, id: RecognizerId) -> bool;

    fn has_recognizer(&self, id: RecognizerId) -> bool;
}
