/// Observer of menu phase transitions.
///
/// Every method defaults to a no-op, so implementors only override the
/// notifications they care about. Notifications cannot veto a transition.
pub trait SlideMenuDelegate {
    fn will_present(&mut self) {}

    fn did_present(&mut self) {}

    fn will_dismiss(&mut self) {}

    fn did_dismiss(&mut self) {}

    /// An edge pan began; fired before the presentation is set up.
    fn did_start_edge_pan(&mut self) {}
}

/// Phase notifications as values, for hosts that prefer a single callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    WillPresent,
    DidPresent,
    WillDismiss,
    DidDismiss,
    DidStartEdgePan,
}

impl MenuEvent {
    pub(crate) fn dispatch(self, delegate: &mut dyn SlideMenuDelegate) {
        match self {
            MenuEvent::WillPresent => delegate.will_present(),
            MenuEvent::DidPresent => delegate.did_present(),
            MenuEvent::WillDismiss => delegate.will_dismiss(),
            MenuEvent::DidDismiss => delegate.did_dismiss(),
            MenuEvent::DidStartEdgePan => delegate.did_start_edge_pan(),
        }
    }
}

/// Adapts a closure into a delegate receiving every [`MenuEvent`].
pub struct EventCallback<F: FnMut(MenuEvent)>(pub F);

impl<F: FnMut(MenuEvent)> SlideMenuDelegate for EventCallback<F> {
    fn will_present(&mut self) {
        (self.0)(MenuEvent::WillPresent)
    }

    fn did_present(&mut self) {
        (self.0)(MenuEvent::DidPresent)
    }

    fn will_dismiss(&mut self) {
        (self.0)(MenuEvent::WillDismiss)
    }

    fn did_dismiss(&mut self) {
        (self.0)(MenuEvent::DidDismiss)
    }

    fn did_start_edge_pan(&mut self) {
        (self.0)(MenuEvent::DidStartEdgePan)
    }
}
