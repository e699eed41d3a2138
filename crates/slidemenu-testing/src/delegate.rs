use std::cell::RefCell;
use std::rc::Rc;

use slidemenu::{MenuEvent, SlideMenuDelegate};

/// Delegate that appends every notification to a shared log.
///
/// Clone it before handing it to the menu to keep a handle for assertions.
#[derive(Clone, Default)]
pub struct RecordingDelegate {
    events: Rc<RefCell<Vec<MenuEvent>>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MenuEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: MenuEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn push(&self, event: MenuEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl SlideMenuDelegate for RecordingDelegate {
    fn will_present(&mut self) {
        self.push(MenuEvent::WillPresent);
    }

    fn did_present(&mut self) {
        self.push(MenuEvent::DidPresent);
    }

    fn will_dismiss(&mut self) {
        self.push(MenuEvent::WillDismiss);
    }

    fn did_dismiss(&mut self) {
        self.push(MenuEvent::DidDismiss);
    }

    fn did_start_edge_pan(&mut self) {
        self.push(MenuEvent::DidStartEdgePan);
    }
}
