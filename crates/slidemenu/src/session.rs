//! State owned by one presentation, from snapshot capture to teardown.

use slidemenu_animation::{Lerp, Transition};
use slidemenu_graphics::Rect;
use smallvec::SmallVec;

use crate::config::SlideMenuConfig;
use crate::geometry::{geometry_at, resolve_layout, slide_amount, GeometryState, MenuLayout};
use crate::host::{CoverContent, RecognizerId};

pub type CompletionCallback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Following an edge pan; nothing is animating.
    Tracking,
    Opening,
    Open,
    Closing,
    /// Cover and panel are gone; the snapshot is fading out.
    Fading,
}

impl Lerp for GeometryState {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        GeometryState {
            top_inset: self.top_inset.lerp(&target.top_inset, fraction),
            bottom_inset: self.bottom_inset.lerp(&target.bottom_inset, fraction),
            slide_offset: self.slide_offset.lerp(&target.slide_offset, fraction),
            scale: self.scale.lerp(&target.scale, fraction),
            corner_radius: self.corner_radius.lerp(&target.corner_radius, fraction),
            menu_offset: self.menu_offset.lerp(&target.menu_offset, fraction),
        }
    }
}

/// What is on screen: the logical open-ness and the geometry drawn for it.
///
/// Interpolation extrapolates the geometry so spring overshoot is visible,
/// while the percentage stays within [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MenuFrame {
    pub percentage: f32,
    pub geometry: GeometryState,
}

impl Lerp for MenuFrame {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        MenuFrame {
            percentage: self
                .percentage
                .lerp(&target.percentage, fraction)
                .clamp(0.0, 1.0),
            geometry: self.geometry.lerp(&target.geometry, fraction),
        }
    }
}

pub(crate) enum AnimationKind {
    Open {
        transition: Transition<MenuFrame>,
        on_complete: Option<CompletionCallback>,
    },
    Close {
        transition: Transition<MenuFrame>,
    },
    Fade {
        transition: Transition<f32>,
    },
}

impl AnimationKind {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Open { .. } => "open",
            AnimationKind::Close { .. } => "close",
            AnimationKind::Fade { .. } => "fade",
        }
    }
}

pub(crate) struct PendingAnimation {
    pub generation: u64,
    pub kind: AnimationKind,
}

pub(crate) struct Session {
    pub cover: CoverContent,
    /// Configuration captured when the presentation began.
    pub config: SlideMenuConfig,
    pub window: Rect,
    pub slide_amount: f32,
    pub frame: MenuFrame,
    pub phase: SessionPhase,
    /// Bumped by every new transition or gesture. An animation carries the
    /// generation it was scheduled under and never completes under another.
    pub generation: u64,
    pub recognizers: SmallVec<[RecognizerId; 2]>,
    pub animation: Option<PendingAnimation>,
}

impl Session {
    pub fn new(cover: CoverContent, config: SlideMenuConfig, window: Rect) -> Self {
        let slide_amount = slide_amount(window.width, config.travel_percent(), config.direction());
        let frame = MenuFrame {
            percentage: 0.0,
            geometry: geometry_at(0.0, &config, slide_amount),
        };
        Self {
            cover,
            config,
            window,
            slide_amount,
            frame,
            phase: SessionPhase::Tracking,
            generation: 0,
            recognizers: SmallVec::new(),
            animation: None,
        }
    }

    pub fn panel_width(&self) -> f32 {
        self.window.width * self.config.travel_percent()
    }

    pub fn frame_at(&self, percentage: f32) -> MenuFrame {
        let percentage = percentage.clamp(0.0, 1.0);
        MenuFrame {
            percentage,
            geometry: geometry_at(percentage, &self.config, self.slide_amount),
        }
    }

    pub fn set_percentage(&mut self, percentage: f32) {
        self.frame = self.frame_at(percentage);
    }

    pub fn layout(&self) -> MenuLayout {
        resolve_layout(
            &self.frame.geometry,
            self.window,
            self.config.direction(),
            self.config.travel_percent(),
        )
    }

    pub fn is_dismissing(&self) -> bool {
        matches!(self.phase, SessionPhase::Closing | SessionPhase::Fading)
    }

    /// Cancels whatever animation is in flight, dropping its completion.
    pub fn interrupt(&mut self) {
        self.generation += 1;
        if let Some(pending) = self.animation.take() {
            log::debug!("interrupted {} animation", pending.kind.name());
        }
    }

    pub fn schedule(&mut self, kind: AnimationKind) {
        self.interrupt();
        self.animation = Some(PendingAnimation {
            generation: self.generation,
            kind,
        });
    }
}
