//! Presentation and dismissal lifecycle against an in-memory host window.

use std::cell::Cell;
use std::rc::Rc;

use slidemenu::{
    CoverContent, Direction, ImageId, Layer, LayerKind, MenuEvent, RecognizerKind, ScreenEdge,
    SessionPhase, SlideMenu, SlideMenuConfig, SlideMenuError,
};
use slidemenu_graphics::{Color, Rect};
use slidemenu_testing::{
    assert_approx_eq, assert_rect_approx_eq, millis, FrameClock, RecordingDelegate, TestWindow,
};

fn menu_with_delegate(window: TestWindow) -> (SlideMenu<TestWindow>, RecordingDelegate) {
    let mut menu = SlideMenu::new(window);
    let delegate = RecordingDelegate::new();
    menu.set_delegate(delegate.clone());
    (menu, delegate)
}

#[test]
fn present_without_animation_opens_immediately() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    let completed = Rc::new(Cell::new(false));
    let flag = completed.clone();

    menu.present(false, Some(Box::new(move || flag.set(true))))
        .expect("present succeeds");

    assert!(completed.get());
    assert_eq!(
        delegate.events(),
        vec![MenuEvent::WillPresent, MenuEvent::DidPresent]
    );
    assert_eq!(menu.phase(), Some(SessionPhase::Open));
    assert_eq!(menu.percentage(), Some(1.0));
    assert!(!menu.is_animating());

    let layout = menu.host().last_layout().expect("layout applied");
    assert_approx_eq(layout.snapshot_corner_radius, 5.0, 1e-4, "open corner radius");
    assert_approx_eq(layout.panel_layer.scale, 1.0, 1e-4, "open panel scale");
}

#[test]
fn presentation_stacks_cover_panel_and_snapshot() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");

    assert_eq!(
        menu.host().layer_kinds(),
        vec![LayerKind::Cover, LayerKind::Panel, LayerKind::Snapshot]
    );
    assert_eq!(
        menu.host().layer(LayerKind::Cover),
        Some(Layer::Cover(CoverContent::Color(Color::WHITE)))
    );
    assert_eq!(
        menu.host()
            .count_recognizers(|kind| kind == RecognizerKind::SnapshotPan),
        1
    );
    assert_eq!(
        menu.host()
            .count_recognizers(|kind| kind == RecognizerKind::SnapshotTap),
        1
    );
}

#[test]
fn animated_present_fires_did_present_after_animation() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    let completed = Rc::new(Cell::new(false));
    let flag = completed.clone();
    let observer = delegate.clone();

    menu.present(
        true,
        Some(Box::new(move || {
            assert_eq!(observer.count(MenuEvent::DidPresent), 1);
            flag.set(true);
        })),
    )
    .expect("present succeeds");

    assert_eq!(delegate.events(), vec![MenuEvent::WillPresent]);
    assert_eq!(menu.phase(), Some(SessionPhase::Opening));
    assert!(menu.is_animating());

    let mut clock = FrameClock::new();
    let frames = clock.run_until_idle(&mut menu, 120);
    assert!(frames > 1, "opening should take several frames");
    assert!(completed.get());
    assert_eq!(
        delegate.events(),
        vec![MenuEvent::WillPresent, MenuEvent::DidPresent]
    );
    assert_eq!(menu.phase(), Some(SessionPhase::Open));
    assert_eq!(menu.percentage(), Some(1.0));
}

#[test]
fn open_animation_lasts_slide_time() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.config_mut().set_slide_time(0.3);
    menu.present(true, None).expect("present succeeds");

    let mut clock = FrameClock::new();
    clock.frame(&mut menu);
    clock.advance(&mut menu, millis(299));
    assert_eq!(delegate.count(MenuEvent::DidPresent), 0);
    clock.advance(&mut menu, millis(1));
    assert_eq!(delegate.count(MenuEvent::DidPresent), 1);
}

#[test]
fn bouncy_spring_overshoots_geometry_but_not_percentage() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.config_mut().set_spring_damping(0.2);
    menu.present(true, None).expect("present succeeds");

    let mut clock = FrameClock::new();
    let mut max_percentage = 0.0f32;
    while menu.is_animating() {
        clock.advance(&mut menu, slidemenu_testing::FRAME_NANOS);
        max_percentage = max_percentage.max(menu.percentage().unwrap_or(0.0));
    }

    let max_scale = menu
        .host()
        .layouts()
        .iter()
        .map(|layout| layout.panel_layer.scale)
        .fold(0.0f32, f32::max);
    assert!(max_scale > 1.01, "spring should overshoot, max scale {max_scale}");
    assert!(max_percentage <= 1.0);
}

#[test]
fn disabled_spring_settles_without_overshoot() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.config_mut().set_spring_enabled(false);
    menu.present(true, None).expect("present succeeds");
    FrameClock::new().run_until_idle(&mut menu, 120);

    for layout in menu.host().layouts() {
        assert!(layout.panel_layer.scale <= 1.0 + 1e-5);
    }
}

#[test]
fn dismiss_tears_down_after_slide_time_plus_fade() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    delegate.clear();

    menu.dismiss(true, None).expect("dismiss succeeds");
    assert_eq!(delegate.events(), vec![MenuEvent::WillDismiss]);

    let mut clock = FrameClock::new();
    clock.frame(&mut menu);
    clock.advance(&mut menu, millis(499));
    assert_eq!(menu.phase(), Some(SessionPhase::Closing));
    assert!(menu.host().has_layer(LayerKind::Cover));

    clock.advance(&mut menu, millis(1));
    assert_eq!(menu.phase(), Some(SessionPhase::Fading));
    assert!(!menu.host().has_layer(LayerKind::Cover));
    assert!(!menu.host().has_layer(LayerKind::Panel));
    assert!(menu.host().has_layer(LayerKind::Snapshot));

    clock.advance(&mut menu, millis(99));
    assert!(menu.is_presented());
    assert!(menu.host().snapshot_alpha() < 1.0);

    clock.advance(&mut menu, millis(1));
    assert!(!menu.is_presented());
    assert!(menu.host().layer_kinds().is_empty());
    assert_eq!(
        delegate.events(),
        vec![MenuEvent::WillDismiss, MenuEvent::DidDismiss]
    );
}

#[test]
fn late_frame_does_not_delay_teardown() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    menu.dismiss(true, None).expect("dismiss succeeds");

    let mut clock = FrameClock::new();
    clock.frame(&mut menu);
    clock.advance(&mut menu, millis(480));
    assert_eq!(menu.phase(), Some(SessionPhase::Closing));

    // The close ended at 500ms, so the fade is already 60ms in.
    clock.advance(&mut menu, millis(80));
    assert_eq!(menu.phase(), Some(SessionPhase::Fading));
    assert!(menu.host().snapshot_alpha() < 1.0);

    clock.advance(&mut menu, millis(40));
    assert!(!menu.is_presented());
    assert_eq!(delegate.count(MenuEvent::DidDismiss), 1);
}

#[test]
fn dismiss_without_animation_still_fades_the_snapshot() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    delegate.clear();

    menu.dismiss(false, None).expect("dismiss succeeds");
    assert_eq!(delegate.events(), vec![MenuEvent::WillDismiss]);
    assert_eq!(menu.phase(), Some(SessionPhase::Fading));
    assert_eq!(menu.percentage(), Some(0.0));
    assert_eq!(menu.host().layer_kinds(), vec![LayerKind::Snapshot]);
    assert!(menu.is_animating());

    let mut clock = FrameClock::new();
    clock.frame(&mut menu);
    clock.advance(&mut menu, millis(99));
    assert!(menu.is_presented());
    assert!(menu.host().snapshot_alpha() < 1.0);

    clock.advance(&mut menu, millis(1));
    assert!(!menu.is_presented());
    assert!(menu.host().layer_kinds().is_empty());
    assert_eq!(
        delegate.events(),
        vec![MenuEvent::WillDismiss, MenuEvent::DidDismiss]
    );
}

#[test]
fn instant_round_trip_restores_closed_geometry() {
    let window = TestWindow::phone();
    let (mut menu, delegate) = menu_with_delegate(window);
    menu.setup_edge_pan();

    menu.present(false, None).expect("present succeeds");
    menu.dismiss(false, Some(0.0)).expect("dismiss succeeds");
    FrameClock::new().run_until_idle(&mut menu, 20);

    let layout = menu.host().last_layout().expect("layout applied");
    assert_rect_approx_eq(
        layout.snapshot,
        Rect::new(0.0, 0.0, 400.0, 800.0),
        1e-3,
        "closed snapshot",
    );
    assert_approx_eq(layout.snapshot_corner_radius, 0.0, 1e-6, "closed radius");
    assert_approx_eq(layout.panel_layer.scale, 0.8, 1e-6, "closed scale");

    assert!(!menu.is_presented());
    assert!(menu.host().layer_kinds().is_empty());
    assert_eq!(menu.host().recognizers().len(), 1, "only the edge pan remains");
    assert_eq!(menu.host().edge_pan_count(), 1);
    assert_eq!(
        delegate.events(),
        vec![
            MenuEvent::WillPresent,
            MenuEvent::DidPresent,
            MenuEvent::WillDismiss,
            MenuEvent::DidDismiss,
        ]
    );
}

#[test]
fn snapshot_failure_aborts_without_side_effects() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone().without_snapshots());
    let completed = Rc::new(Cell::new(false));
    let flag = completed.clone();

    let result = menu.present(true, Some(Box::new(move || flag.set(true))));

    assert_eq!(result, Err(SlideMenuError::SnapshotUnavailable));
    assert!(!menu.is_presented());
    assert!(menu.host().layer_kinds().is_empty());
    assert!(delegate.events().is_empty());
    assert!(!completed.get());
}

#[test]
fn missing_window_is_a_precondition_error() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::detached());
    assert_eq!(menu.present(false, None), Err(SlideMenuError::NoWindow));
    assert!(delegate.events().is_empty());
}

#[test]
fn dismiss_without_presentation_fails() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    assert_eq!(menu.dismiss(true, None), Err(SlideMenuError::NoSession));
    assert_eq!(menu.handle_tap(), Err(SlideMenuError::NoSession));
    assert!(delegate.events().is_empty());
}

#[test]
fn presenting_twice_is_rejected() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    assert_eq!(
        menu.present(false, None),
        Err(SlideMenuError::AlreadyPresented)
    );
    assert_eq!(
        menu.host()
            .layer_kinds()
            .iter()
            .filter(|kind| **kind == LayerKind::Snapshot)
            .count(),
        1
    );
}

#[test]
fn second_dismiss_while_closing_is_ignored() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    menu.dismiss(true, None).expect("dismiss succeeds");
    menu.dismiss(true, None).expect("second dismiss is a no-op");
    menu.handle_tap().expect("tap while closing is a no-op");
    assert_eq!(delegate.count(MenuEvent::WillDismiss), 1);

    FrameClock::new().run_until_idle(&mut menu, 120);
    assert_eq!(delegate.count(MenuEvent::DidDismiss), 1);
}

#[test]
fn presenting_during_fade_finishes_previous_teardown_first() {
    let (mut menu, delegate) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    menu.dismiss(true, Some(0.2)).expect("dismiss succeeds");

    let mut clock = FrameClock::new();
    clock.frame(&mut menu);
    clock.advance(&mut menu, millis(200));
    assert_eq!(menu.phase(), Some(SessionPhase::Fading));

    delegate.clear();
    menu.present(false, None).expect("present during fade succeeds");
    assert_eq!(
        delegate.events(),
        vec![
            MenuEvent::DidDismiss,
            MenuEvent::WillPresent,
            MenuEvent::DidPresent
        ]
    );
    assert_eq!(
        menu.host().layer_kinds(),
        vec![LayerKind::Cover, LayerKind::Panel, LayerKind::Snapshot]
    );

    // The old fade never completes against the new session.
    clock.advance(&mut menu, millis(200));
    assert_eq!(menu.phase(), Some(SessionPhase::Open));
    assert_eq!(delegate.count(MenuEvent::DidDismiss), 1);
}

#[test]
fn setup_edge_pan_is_idempotent() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.setup_edge_pan();
    menu.setup_edge_pan();
    assert_eq!(menu.host().edge_pan_count(), 1);
    assert_eq!(
        menu.host().recognizers()[0].1,
        RecognizerKind::EdgePan(ScreenEdge::Right)
    );

    menu.config_mut().set_direction(Direction::Right);
    menu.setup_edge_pan();
    assert_eq!(menu.host().edge_pan_count(), 1);
    assert_eq!(
        menu.host().recognizers()[0].1,
        RecognizerKind::EdgePan(ScreenEdge::Left)
    );
}

#[test]
fn edge_pan_is_detached_while_open_and_rearmed_after_dismiss() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.setup_edge_pan();
    menu.present(true, None).expect("present succeeds");
    assert_eq!(menu.host().edge_pan_count(), 0);
    assert_eq!(menu.edge_recognizer(), None);

    let mut clock = FrameClock::new();
    clock.run_until_idle(&mut menu, 120);
    menu.dismiss(true, None).expect("dismiss succeeds");
    clock.run_until_idle(&mut menu, 120);

    assert_eq!(menu.host().edge_pan_count(), 1);
    let id = menu.edge_recognizer().expect("edge pan re-armed");
    assert!(menu.host().recognizers().iter().any(|(existing, _)| *existing == id));
}

#[test]
fn setup_edge_pan_while_open_waits_for_teardown() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    menu.setup_edge_pan();
    assert_eq!(menu.host().edge_pan_count(), 0);

    menu.dismiss(false, None).expect("dismiss succeeds");
    assert_eq!(menu.host().edge_pan_count(), 0, "still fading");
    FrameClock::new().run_until_idle(&mut menu, 20);
    assert_eq!(menu.host().edge_pan_count(), 1);
}

#[test]
fn background_image_replaces_cover_color_for_one_session() {
    let config = SlideMenuConfig::default()
        .with_panel_color(Color::BLACK)
        .with_background_image(ImageId(7));
    let mut menu = SlideMenu::with_config(TestWindow::phone(), config);

    menu.present(false, None).expect("present succeeds");
    assert_eq!(
        menu.host().layer(LayerKind::Cover),
        Some(Layer::Cover(CoverContent::Image(ImageId(7))))
    );
    assert_eq!(menu.host().panel_background(), Some(Color::TRANSPARENT));

    menu.dismiss(false, None).expect("dismiss succeeds");
    assert_eq!(menu.host().panel_background(), Some(Color::BLACK));
}

#[test]
fn config_changes_apply_to_the_next_presentation_only() {
    let (mut menu, _) = menu_with_delegate(TestWindow::phone());
    menu.present(false, None).expect("present succeeds");
    let open = menu.host().last_layout().expect("layout applied");

    menu.config_mut().set_travel_percent(0.5);
    menu.handle_pan(slidemenu::GestureEvent::horizontal(
        slidemenu::GesturePhase::Changed,
        0.0,
        0.0,
    ))
    .expect("pan handled");
    let during = menu.host().last_layout().expect("layout applied");
    assert_eq!(open.panel.width, during.panel.width);

    menu.dismiss(false, None).expect("dismiss succeeds");
    menu.present(false, None).expect("present succeeds");
    let next = menu.host().last_layout().expect("layout applied");
    assert_approx_eq(next.panel.width, 200.0, 1e-3, "new travel percent");
}

#[test]
fn shrink_amount_is_capped_by_the_host_window() {
    let mut menu = SlideMenu::new(TestWindow::new(400.0, 100.0));
    menu.config_mut().set_shrink_amount(80.0);
    assert_eq!(menu.config().shrink_amount(), 50.0);
}
