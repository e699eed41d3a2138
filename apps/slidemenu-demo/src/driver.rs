//! Routes pointer input to the menu and paces frames against wall time.

use std::thread;
use std::time::Duration;

use slidemenu::{RecognizerKind, Result, SlideMenu};
use slidemenu_foundation::{DetectedGesture, DragGestureDetector, PointerEvent, PointerEventKind};
use slidemenu_graphics::Point;
use web_time::Instant;

use crate::host::ConsoleWindow;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct Driver {
    menu: SlideMenu<ConsoleWindow>,
    edge_detector: DragGestureDetector,
    snapshot_detector: DragGestureDetector,
    origin: Instant,
}

impl Driver {
    pub fn new(mut menu: SlideMenu<ConsoleWindow>) -> Self {
        menu.setup_edge_pan();
        let edge = menu.config().direction().edge_pan_edge();
        let width = menu.host().width();
        Self {
            menu,
            edge_detector: DragGestureDetector::edge(edge, width),
            snapshot_detector: DragGestureDetector::new(),
            origin: Instant::now(),
        }
    }

    pub fn menu_mut(&mut self) -> &mut SlideMenu<ConsoleWindow> {
        &mut self.menu
    }

    fn frame(&mut self) {
        let nanos = Instant::now()
            .saturating_duration_since(self.origin)
            .as_nanos() as u64;
        self.menu.advance_frame(nanos);
    }

    /// Delivers one pointer sample, then lets a frame pass.
    pub fn pointer(&mut self, kind: PointerEventKind, x: f32, y: f32) -> Result<()> {
        let event = PointerEvent::at_instant(kind, Point::new(x, y), self.origin, Instant::now());
        self.route(event)?;
        thread::sleep(FRAME_INTERVAL);
        self.frame();
        Ok(())
    }

    fn route(&mut self, event: PointerEvent) -> Result<()> {
        let host = self.menu.host();
        let snapshot_input = self.snapshot_detector.is_dragging()
            || (event.kind == PointerEventKind::Down && host.hits_snapshot(event.position));
        let edge_armed = host.has_recognizer_kind(RecognizerKind::EdgePan(
            self.menu.config().direction().edge_pan_edge(),
        ));

        if snapshot_input {
            match self.snapshot_detector.on_pointer(event) {
                Some(DetectedGesture::Pan(gesture)) => self.menu.handle_pan(gesture),
                Some(DetectedGesture::Tap(_)) => self.menu.handle_tap(),
                None => Ok(()),
            }
        } else if edge_armed || self.edge_detector.is_dragging() {
            match self.edge_detector.on_pointer(event) {
                Some(DetectedGesture::Pan(gesture)) => self.menu.handle_edge_pan(gesture),
                _ => Ok(()),
            }
        } else {
            Ok(())
        }
    }

    /// Drags in `steps` equal moves from `from` to `to`.
    pub fn swipe(&mut self, from: Point, to: Point, steps: usize) -> Result<()> {
        self.pointer(PointerEventKind::Down, from.x, from.y)?;
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.pointer(PointerEventKind::Move, x, y)?;
        }
        self.pointer(PointerEventKind::Up, to.x, to.y)
    }

    pub fn tap(&mut self, at: Point) -> Result<()> {
        self.pointer(PointerEventKind::Down, at.x, at.y)?;
        self.pointer(PointerEventKind::Up, at.x, at.y)
    }

    /// Paces frames until every animation has finished.
    pub fn settle(&mut self) {
        let started = Instant::now();
        while self.menu.is_animating() {
            thread::sleep(FRAME_INTERVAL);
            self.frame();
        }
        let frames = self.menu.host_mut().take_frame_count();
        log::info!(
            "settled after {:?} ({frames} layouts), presented={} phase={:?}",
            started.elapsed(),
            self.menu.is_presented(),
            self.menu.phase()
        );
    }
}
