//! Presentation lifecycle and gesture handling.

use slidemenu_animation::{
    seconds_to_millis, AnimationSpec, AnimationType, Easing, SpringSpec, Transition,
};
use slidemenu_foundation::{GestureEvent, GesturePhase, ScreenEdge};
use slidemenu_graphics::Color;

use crate::config::SlideMenuConfig;
use crate::delegate::{MenuEvent, SlideMenuDelegate};
use crate::error::{Result, SlideMenuError};
use crate::gesture::{
    closing_progress, closing_velocity, decide_edge_release, decide_pan_release,
    opening_percentage, opening_velocity, openness_from_closing, remaining_close_time,
    ReleaseDecision, EDGE_CANCEL_SECONDS,
};
use crate::host::{CoverContent, Layer, LayerKind, RecognizerId, RecognizerKind, SlideMenuHost};
use crate::session::{AnimationKind, CompletionCallback, Session, SessionPhase};

/// Fade-out of the snapshot after the menu has closed.
pub const SNAPSHOT_FADE_MILLIS: u64 = 100;

struct EdgePanRegistration {
    edge: ScreenEdge,
    /// `None` while detached, i.e. while a presentation is live.
    id: Option<RecognizerId>,
}

/// A slide-out side menu presented over a host window.
///
/// All methods run on the UI thread. Animations advance only when the host
/// calls [`SlideMenu::advance_frame`] from its display refresh.
pub struct SlideMenu<H: SlideMenuHost> {
    host: H,
    config: SlideMenuConfig,
    delegate: Option<Box<dyn SlideMenuDelegate>>,
    session: Option<Session>,
    edge_pan: Option<EdgePanRegistration>,
}

impl<H: SlideMenuHost> SlideMenu<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, SlideMenuConfig::default())
    }

    pub fn with_config(host: H, mut config: SlideMenuConfig) -> Self {
        if let Some(bounds) = host.window_bounds() {
            config.set_display_height(bounds.height);
        }
        Self {
            host,
            config,
            delegate: None,
            session: None,
            edge_pan: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SlideMenuConfig {
        &self.config
    }

    /// Changes take effect at the next `present` or `setup_edge_pan`.
    pub fn config_mut(&mut self) -> &mut SlideMenuConfig {
        &mut self.config
    }

    pub fn set_delegate(&mut self, delegate: impl SlideMenuDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn is_presented(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> Option<SessionPhase> {
        self.session.as_ref().map(|session| session.phase)
    }

    /// Current open-ness, 0 = closed and 1 = open.
    pub fn percentage(&self) -> Option<f32> {
        self.session.as_ref().map(|session| session.frame.percentage)
    }

    /// Whether the host should keep delivering frames.
    pub fn is_animating(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.animation.is_some())
    }

    pub fn edge_recognizer(&self) -> Option<RecognizerId> {
        self.edge_pan.as_ref().and_then(|registration| registration.id)
    }

    fn notify(&mut self, event: MenuEvent) {
        log::debug!("slide menu {event:?}");
        if let Some(delegate) = self.delegate.as_mut() {
            event.dispatch(delegate.as_mut());
        }
    }

    fn apply_layout(&mut self) {
        if let Some(session) = self.session.as_ref() {
            let layout = session.layout();
            log::trace!(
                "slide menu layout p={:.3} snapshot={:?} panel={:?}",
                session.frame.percentage,
                layout.snapshot,
                layout.panel
            );
            self.host.apply_layout(&layout);
        }
    }

    /// Registers the window-level edge pan for the configured direction,
    /// replacing any previous registration. Call again after changing the
    /// direction.
    pub fn setup_edge_pan(&mut self) {
        if let Some(EdgePanRegistration { id: Some(id), .. }) = self.edge_pan.take() {
            self.host.remove_recognizer(id);
        }
        let edge = self.config.direction().edge_pan_edge();
        // While presented the recognizer stays detached; teardown re-arms it.
        let id = if self.session.is_none() {
            Some(self.host.add_recognizer(RecognizerKind::EdgePan(edge)))
        } else {
            None
        };
        log::debug!("edge pan registered on {edge:?} edge");
        self.edge_pan = Some(EdgePanRegistration { edge, id });
    }

    fn disarm_edge_pan(&mut self) {
        if let Some(registration) = self.edge_pan.as_mut() {
            if let Some(id) = registration.id.take() {
                self.host.remove_recognizer(id);
            }
        }
    }

    fn rearm_edge_pan(&mut self) {
        if let Some(registration) = self.edge_pan.as_mut() {
            let attached = registration
                .id
                .is_some_and(|id| self.host.has_recognizer(id));
            if !attached {
                registration.id = Some(
                    self.host
                        .add_recognizer(RecognizerKind::EdgePan(registration.edge)),
                );
            }
        }
    }

    /// Builds a session in the closed state without animating anything.
    fn begin_session(&mut self) -> Result<()> {
        let window = self.host.window_bounds().ok_or(SlideMenuError::NoWindow)?;

        match self.session.as_ref() {
            Some(session) if session.is_dismissing() => {
                log::debug!("presenting while previous dismissal is tearing down");
                self.finish_teardown();
            }
            Some(_) => return Err(SlideMenuError::AlreadyPresented),
            None => {}
        }

        self.config.set_display_height(window.height);
        let snapshot = self
            .host
            .capture_snapshot()
            .ok_or(SlideMenuError::SnapshotUnavailable)?;
        let config = self.config.clone();

        let cover = match config.background_image() {
            Some(image) => CoverContent::Image(image),
            None => CoverContent::Color(config.panel_color()),
        };
        self.host.insert_layer(Layer::Snapshot(snapshot), None);
        self.host
            .insert_layer(Layer::Cover(cover), Some(LayerKind::Snapshot));
        if matches!(cover, CoverContent::Image(_)) {
            self.host.set_panel_background(Color::TRANSPARENT);
        }
        self.host.insert_layer(Layer::Panel, Some(LayerKind::Snapshot));

        let mut session = Session::new(cover, config, window);
        session
            .recognizers
            .push(self.host.add_recognizer(RecognizerKind::SnapshotPan));
        session
            .recognizers
            .push(self.host.add_recognizer(RecognizerKind::SnapshotTap));
        log::debug!(
            "slide menu session started over {snapshot:?}, slide amount {}",
            session.slide_amount
        );
        self.session = Some(session);
        self.apply_layout();
        Ok(())
    }

    /// Presents the menu, animated or immediately.
    ///
    /// `on_complete` runs once the menu is fully open, right after
    /// `did_present`. Fails without side effects when there is no window or
    /// the snapshot cannot be captured.
    pub fn present(
        &mut self,
        animated: bool,
        on_complete: Option<CompletionCallback>,
    ) -> Result<()> {
        self.begin_session()?;
        if animated {
            self.animate_open(on_complete)
        } else {
            self.snap_open(on_complete)
        }
    }

    fn animate_open(&mut self, on_complete: Option<CompletionCallback>) -> Result<()> {
        if self.session.is_none() {
            return Err(SlideMenuError::NoSession);
        }
        self.notify(MenuEvent::WillPresent);
        self.disarm_edge_pan();

        let session = self.session.as_mut().ok_or(SlideMenuError::NoSession)?;
        let spring = SpringSpec::new(
            session.config.open_damping(),
            seconds_to_millis(session.config.slide_time()),
        );
        let transition = Transition::new(
            session.frame,
            session.frame_at(1.0),
            AnimationType::Spring(spring),
        );
        session.phase = SessionPhase::Opening;
        session.schedule(AnimationKind::Open {
            transition,
            on_complete,
        });
        Ok(())
    }

    fn snap_open(&mut self, on_complete: Option<CompletionCallback>) -> Result<()> {
        if self.session.is_none() {
            return Err(SlideMenuError::NoSession);
        }
        self.notify(MenuEvent::WillPresent);
        self.disarm_edge_pan();

        let session = self.session.as_mut().ok_or(SlideMenuError::NoSession)?;
        session.interrupt();
        session.set_percentage(1.0);
        session.phase = SessionPhase::Open;
        self.apply_layout();

        if let Some(on_complete) = on_complete {
            on_complete();
        }
        self.notify(MenuEvent::DidPresent);
        Ok(())
    }

    /// Closes the menu over `time` seconds (the configured slide time when
    /// `None`), then fades the snapshot out over [`SNAPSHOT_FADE_MILLIS`] and
    /// tears the session down.
    ///
    /// Without animation the menu jumps closed immediately; the fade still
    /// runs. Dismissing while already dismissing is a no-op.
    pub fn dismiss(&mut self, animated: bool, time: Option<f64>) -> Result<()> {
        let session = self.session.as_ref().ok_or(SlideMenuError::NoSession)?;
        if session.is_dismissing() {
            log::debug!("slide menu already dismissing");
            return Ok(());
        }
        let duration = time.unwrap_or_else(|| session.config.slide_time());

        self.notify(MenuEvent::WillDismiss);

        let session = self.session.as_mut().ok_or(SlideMenuError::NoSession)?;
        if !animated {
            session.interrupt();
            session.set_percentage(0.0);
            self.apply_layout();
            self.begin_fade(None);
            return Ok(());
        }

        let transition = Transition::new(
            session.frame,
            session.frame_at(0.0),
            AnimationType::Spring(SpringSpec::critically_damped(seconds_to_millis(duration))),
        );
        session.phase = SessionPhase::Closing;
        session.schedule(AnimationKind::Close { transition });
        Ok(())
    }

    /// Main close animation finished: drop cover and panel, start the fade.
    ///
    /// `start_time_nanos` is when the close reached its target; without one
    /// the fade starts on the next frame.
    fn begin_fade(&mut self, start_time_nanos: Option<u64>) {
        self.host.remove_layer(LayerKind::Cover);
        self.host.remove_layer(LayerKind::Panel);
        self.restore_panel_background();

        if let Some(session) = self.session.as_mut() {
            let mut transition = Transition::new(
                1.0,
                0.0,
                AnimationType::Tween(AnimationSpec::tween(
                    SNAPSHOT_FADE_MILLIS,
                    Easing::EASE_IN_OUT,
                )),
            );
            if let Some(start) = start_time_nanos {
                transition = transition.starting_at(start);
            }
            session.phase = SessionPhase::Fading;
            session.schedule(AnimationKind::Fade { transition });
        }
    }

    fn restore_panel_background(&mut self) {
        if let Some(session) = self.session.as_ref() {
            if matches!(session.cover, CoverContent::Image(_)) {
                let color = session.config.panel_color();
                self.host.set_panel_background(color);
            }
        }
    }

    /// Removes everything the session put on screen. Safe to call on a
    /// partially torn-down or absent session.
    fn finish_teardown(&mut self) {
        self.restore_panel_background();
        let Some(session) = self.session.take() else {
            return;
        };
        self.host.remove_layer(LayerKind::Cover);
        self.host.remove_layer(LayerKind::Panel);
        self.host.remove_layer(LayerKind::Snapshot);
        for id in session.recognizers {
            self.host.remove_recognizer(id);
        }
        self.rearm_edge_pan();
        log::debug!("slide menu session ended");
        self.notify(MenuEvent::DidDismiss);
    }

    /// Advances in-flight animations to `frame_time_nanos` and runs any
    /// completions that fall due.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) {
        loop {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            let Some(mut pending) = session.animation.take() else {
                return;
            };
            if pending.generation != session.generation {
                log::debug!("dropping superseded {} animation", pending.kind.name());
                return;
            }

            let finished = match &mut pending.kind {
                AnimationKind::Open { transition, .. } | AnimationKind::Close { transition } => {
                    let frame = transition.sample(frame_time_nanos);
                    session.frame = frame.value;
                    let layout = session.layout();
                    self.host.apply_layout(&layout);
                    frame.finished
                }
                AnimationKind::Fade { transition } => {
                    let frame = transition.sample(frame_time_nanos);
                    self.host.set_snapshot_alpha(frame.value);
                    frame.finished
                }
            };

            if !finished {
                session.animation = Some(pending);
                return;
            }

            match pending.kind {
                AnimationKind::Open { on_complete, .. } => {
                    session.phase = SessionPhase::Open;
                    self.notify(MenuEvent::DidPresent);
                    if let Some(on_complete) = on_complete {
                        on_complete();
                    }
                    return;
                }
                // The fade is timed from the close's scheduled end, not from
                // this frame, and is sampled again before returning.
                AnimationKind::Close { transition } => {
                    self.begin_fade(transition.end_time_nanos())
                }
                AnimationKind::Fade { .. } => {
                    self.finish_teardown();
                    return;
                }
            }
        }
    }

    /// Drives presentation from the window-level edge pan.
    pub fn handle_edge_pan(&mut self, event: GestureEvent) -> Result<()> {
        match event.phase {
            GesturePhase::Began => {
                self.notify(MenuEvent::DidStartEdgePan);
                self.begin_session()
            }
            GesturePhase::Changed => {
                let session = self.session.as_mut().ok_or(SlideMenuError::NoSession)?;
                session.interrupt();
                session.phase = SessionPhase::Tracking;
                let percentage = opening_percentage(
                    event.translation.x,
                    session.panel_width(),
                    session.config.direction(),
                );
                session.set_percentage(percentage);
                self.apply_layout();
                Ok(())
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                let session = self.session.as_ref().ok_or(SlideMenuError::NoSession)?;
                let direction = session.config.direction();
                let percentage =
                    opening_percentage(event.translation.x, session.panel_width(), direction);
                let velocity = match event.phase {
                    GesturePhase::Cancelled => 0.0,
                    _ => opening_velocity(event.velocity.x, direction),
                };
                match decide_edge_release(velocity, percentage) {
                    ReleaseDecision::Open => self.animate_open(None),
                    ReleaseDecision::Close => self.dismiss(true, Some(EDGE_CANCEL_SECONDS)),
                }
            }
        }
    }

    /// Drives dismissal from a pan on the open snapshot.
    pub fn handle_pan(&mut self, event: GestureEvent) -> Result<()> {
        let session = self.session.as_mut().ok_or(SlideMenuError::NoSession)?;
        if session.is_dismissing() {
            return Ok(());
        }
        let direction = session.config.direction();
        let closing = closing_progress(event.translation.x, session.panel_width(), direction);

        match event.phase {
            GesturePhase::Began => Ok(()),
            GesturePhase::Changed => {
                session.interrupt();
                session.phase = SessionPhase::Tracking;
                session.set_percentage(openness_from_closing(closing));
                self.apply_layout();
                Ok(())
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                let velocity = match event.phase {
                    GesturePhase::Cancelled => 0.0,
                    _ => closing_velocity(event.velocity.x, direction),
                };
                match decide_pan_release(velocity, closing) {
                    ReleaseDecision::Close => {
                        let time = remaining_close_time(session.config.slide_time(), closing);
                        self.dismiss(true, Some(time))
                    }
                    ReleaseDecision::Open => self.animate_open(None),
                }
            }
        }
    }

    /// A tap on the open snapshot always closes at full duration.
    pub fn handle_tap(&mut self) -> Result<()> {
        let session = self.session.as_ref().ok_or(SlideMenuError::NoSession)?;
        if session.is_dismissing() {
            return Ok(());
        }
        self.dismiss(true, None)
    }
}
