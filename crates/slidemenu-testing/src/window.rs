//! In-memory host window that records every mutation the menu makes.

use slidemenu::{
    Layer, LayerKind, MenuLayout, RecognizerId, RecognizerKind, SlideMenuHost, SnapshotId,
};
use slidemenu_graphics::{Color, Rect};
use smallvec::SmallVec;

pub struct TestWindow {
    bounds: Option<Rect>,
    snapshots_available: bool,
    next_id: u64,
    /// Bottom to top.
    layers: SmallVec<[Layer; 4]>,
    recognizers: Vec<(RecognizerId, RecognizerKind)>,
    layouts: Vec<MenuLayout>,
    snapshot_alpha: f32,
    panel_background: Option<Color>,
}

impl TestWindow {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Some(Rect::new(0.0, 0.0, width, height)),
            snapshots_available: true,
            next_id: 1,
            layers: SmallVec::new(),
            recognizers: Vec::new(),
            layouts: Vec::new(),
            snapshot_alpha: 1.0,
            panel_background: None,
        }
    }

    /// A phone-sized portrait window.
    pub fn phone() -> Self {
        Self::new(400.0, 800.0)
    }

    /// A host with no window attached.
    pub fn detached() -> Self {
        Self {
            bounds: None,
            ..Self::phone()
        }
    }

    pub fn without_snapshots(mut self) -> Self {
        self.snapshots_available = false;
        self
    }

    pub fn set_snapshots_available(&mut self, available: bool) {
        self.snapshots_available = available;
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Layer kinds from bottom to top.
    pub fn layer_kinds(&self) -> Vec<LayerKind> {
        self.layers.iter().map(Layer::kind).collect()
    }

    pub fn layer(&self, kind: LayerKind) -> Option<Layer> {
        self.layers.iter().copied().find(|layer| layer.kind() == kind)
    }

    pub fn has_layer(&self, kind: LayerKind) -> bool {
        self.layer(kind).is_some()
    }

    pub fn recognizers(&self) -> &[(RecognizerId, RecognizerKind)] {
        &self.recognizers
    }

    pub fn count_recognizers(&self, predicate: impl Fn(RecognizerKind) -> bool) -> usize {
        self.recognizers
            .iter()
            .filter(|(_, kind)| predicate(*kind))
            .count()
    }

    pub fn edge_pan_count(&self) -> usize {
        self.count_recognizers(|kind| matches!(kind, RecognizerKind::EdgePan(_)))
    }

    pub fn layouts(&self) -> &[MenuLayout] {
        &self.layouts
    }

    pub fn last_layout(&self) -> Option<MenuLayout> {
        self.layouts.last().copied()
    }

    pub fn snapshot_alpha(&self) -> f32 {
        self.snapshot_alpha
    }

    pub fn panel_background(&self) -> Option<Color> {
        self.panel_background
    }
}

impl SlideMenuHost for TestWindow {
    fn window_bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn capture_snapshot(&mut self) -> Option<SnapshotId> {
        if !self.snapshots_available {
            return None;
        }
        let id = self.next_id();
        self.snapshot_alpha = 1.0;
        Some(SnapshotId(id))
    }

    fn insert_layer(&mut self, layer: Layer, below: Option<LayerKind>) {
        let index = below
            .and_then(|kind| self.layers.iter().position(|existing| existing.kind() == kind))
            .unwrap_or(self.layers.len());
        self.layers.insert(index, layer);
    }

    fn remove_layer(&mut self, kind: LayerKind) {
        self.layers.retain(|layer| layer.kind() != kind);
    }

    fn apply_layout(&mut self, layout: &MenuLayout) {
        self.layouts.push(*layout);
    }

    fn set_snapshot_alpha(&mut self, alpha: f32) {
        self.snapshot_alpha = alpha;
    }

    fn set_panel_background(&mut self, color: Color) {
        self.panel_background = Some(color);
    }

    fn add_recognizer(&mut self, kind: RecognizerKind) -> RecognizerId {
        let id = RecognizerId(self.next_id());
        log::trace!("test window: add recognizer {id:?} {kind:?}");
        self.recognizers.push((id, kind));
        id
    }

    fn remove_recognizer(&mut self, id: RecognizerId) -> bool {
        let before = self.recognizers.len();
        self.recognizers.retain(|(existing, _)| *existing != id);
        self.recognizers.len() != before
    }

    fn has_recognizer(&self, id: RecognizerId) -> bool {
        self.recognizers.iter().any(|(existing, _)| *existing == id)
    }
}
