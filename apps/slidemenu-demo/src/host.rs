//! A host that keeps just enough state to hit-test and logs everything else.

use slidemenu::{
    Layer, LayerKind, MenuLayout, RecognizerId, RecognizerKind, SlideMenuHost, SnapshotId,
};
use slidemenu_graphics::{Color, Point, Rect};

pub struct ConsoleWindow {
    bounds: Rect,
    next_id: u64,
    layers: Vec<LayerKind>,
    recognizers: Vec<(RecognizerId, RecognizerKind)>,
    last_layout: Option<MenuLayout>,
    frames: usize,
}

impl ConsoleWindow {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            next_id: 1,
            layers: Vec::new(),
            recognizers: Vec::new(),
            last_layout: None,
            frames: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    /// Whether `point` lands on the snapshot of a live presentation.
    pub fn hits_snapshot(&self, point: Point) -> bool {
        self.layers.contains(&LayerKind::Snapshot)
            && self
                .last_layout
                .is_some_and(|layout| layout.snapshot.contains(point.x, point.y))
    }

    pub fn has_recognizer_kind(&self, kind: RecognizerKind) -> bool {
        self.recognizers.iter().any(|(_, existing)| *existing == kind)
    }

    /// Number of layouts applied since the last call.
    pub fn take_frame_count(&mut self) -> usize {
        std::mem::take(&mut self.frames)
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl SlideMenuHost for ConsoleWindow {
    fn window_bounds(&self) -> Option<Rect> {
        Some(self.bounds)
    }

    fn capture_snapshot(&mut self) -> Option<SnapshotId> {
        let id = SnapshotId(self.next_id());
        log::info!("captured snapshot {}", id.0);
        Some(id)
    }

    fn insert_layer(&mut self, layer: Layer, below: Option<LayerKind>) {
        let index = below
            .and_then(|kind| self.layers.iter().position(|existing| *existing == kind))
            .unwrap_or(self.layers.len());
        self.layers.insert(index, layer.kind());
        log::debug!("layers now {:?}", self.layers);
    }

    fn remove_layer(&mut self, kind: LayerKind) {
        self.layers.retain(|existing| *existing != kind);
        log::debug!("layers now {:?}", self.layers);
    }

    fn apply_layout(&mut self, layout: &MenuLayout) {
        self.frames += 1;
        log::trace!(
            "snapshot x={:.1} y={:.1} w={:.1} h={:.1} panel x={:.1} scale={:.3}",
            layout.snapshot.x,
            layout.snapshot.y,
            layout.snapshot.width,
            layout.snapshot.height,
            layout.panel.x,
            layout.panel_layer.scale
        );
        self.last_layout = Some(*layout);
    }

    fn set_snapshot_alpha(&mut self, alpha: f32) {
        log::trace!("snapshot alpha {alpha:.2}");
    }

    fn set_panel_background(&mut self, color: Color) {
        log::debug!("panel background {color:?}");
    }

    fn add_recognizer(&mut self, kind: RecognizerKind) -> RecognizerId {
        let id = RecognizerId(self.next_id());
        self.recognizers.push((id, kind));
        log::debug!("recognizer {kind:?} attached");
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
