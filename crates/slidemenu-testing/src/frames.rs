//! Deterministic frame clock for driving menu animations in tests.

use slidemenu::{SlideMenu, SlideMenuHost};

/// ~60 FPS frame interval.
pub const FRAME_NANOS: u64 = 16_666_667;

pub const fn millis(ms: u64) -> u64 {
    ms * 1_000_000
}

/// Monotonic fake display clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    now_nanos: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now_nanos
    }

    /// Delivers a frame at the current time without advancing it.
    pub fn frame<H: SlideMenuHost>(&self, menu: &mut SlideMenu<H>) {
        menu.advance_frame(self.now_nanos);
    }

    /// Advances the clock by `nanos` and delivers one frame.
    pub fn advance<H: SlideMenuHost>(&mut self, menu: &mut SlideMenu<H>, nanos: u64) {
        self.now_nanos += nanos;
        menu.advance_frame(self.now_nanos);
    }

    /// Delivers frames every [`FRAME_NANOS`] until the menu stops animating.
    ///
    /// Returns the number of frames delivered. Panics past `max_frames`.
    pub fn run_until_idle<H: SlideMenuHost>(
        &mut self,
        menu: &mut SlideMenu<H>,
        max_frames: usize,
    ) -> usize {
        let mut frames = 0;
        while menu.is_animating() {
            assert!(
                frames < max_frames,
                "menu still animating after {max_frames} frames"
            );
            self.advance(menu, FRAME_NANOS);
            frames += 1;
        }
        frames
    }
}
