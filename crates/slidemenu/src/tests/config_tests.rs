use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = SlideMenuConfig::default();
    assert_eq!(config.direction(), Direction::Left);
    assert_eq!(config.travel_percent(), 0.8);
    assert_eq!(config.shrink_amount(), 60.0);
    assert_eq!(config.menu_offset(), 150.0);
    assert_eq!(config.slide_time(), 0.5);
    assert_eq!(config.zoom_factor(), 0.8);
    assert!(config.spring_enabled());
    assert_eq!(config.spring_damping(), 0.5);
    assert_eq!(config.background_image(), None);
}

#[test]
fn travel_percent_clamps_to_range() {
    let mut config = SlideMenuConfig::default();
    config.set_travel_percent(1.5);
    assert_eq!(config.travel_percent(), 1.0);
    config.set_travel_percent(0.05);
    assert_eq!(config.travel_percent(), 0.1);
    config.set_travel_percent(0.6);
    assert_eq!(config.travel_percent(), 0.6);
}

#[test]
fn spring_damping_clamps_to_unit_range() {
    let mut config = SlideMenuConfig::default();
    config.set_spring_damping(-0.2);
    assert_eq!(config.spring_damping(), 0.0);
    config.set_spring_damping(1.7);
    assert_eq!(config.spring_damping(), 1.0);
}

#[test]
fn zoom_factor_and_slide_time_clamp() {
    let config = SlideMenuConfig::default()
        .with_zoom_factor(1.4)
        .with_slide_time(-2.0);
    assert_eq!(config.zoom_factor(), 1.0);
    assert_eq!(config.slide_time(), 0.0);
}

#[test]
fn shrink_amount_is_capped_at_half_the_display() {
    let mut config = SlideMenuConfig::default();
    config.set_shrink_amount(-10.0);
    assert_eq!(config.shrink_amount(), 0.0);

    config.set_shrink_amount(500.0);
    assert_eq!(config.shrink_amount(), 500.0, "no cap before the display is known");

    config.set_display_height(640.0);
    assert_eq!(config.shrink_amount(), 320.0);

    config.set_shrink_amount(400.0);
    assert_eq!(config.shrink_amount(), 320.0);
}

#[test]
fn non_finite_input_keeps_previous_value() {
    let mut config = SlideMenuConfig::default();
    config.set_travel_percent(f32::NAN);
    config.set_menu_offset(f32::INFINITY);
    config.set_slide_time(f64::NAN);
    assert_eq!(config.travel_percent(), 0.8);
    assert_eq!(config.menu_offset(), 150.0);
    assert_eq!(config.slide_time(), 0.5);
}

#[test]
fn open_damping_is_critical_without_spring() {
    let config = SlideMenuConfig::default().with_spring(false, 0.3);
    assert_eq!(config.open_damping(), 1.0);
    let config = config.with_spring(true, 0.3);
    assert_eq!(config.open_damping(), 0.3);
}

#[test]
fn direction_names_parse_leniently() {
    assert_eq!(Direction::from_name("Right"), Direction::Right);
    assert_eq!(Direction::from_name(" left "), Direction::Left);
    assert_eq!(Direction::from_name("up"), Direction::Left);
    assert_eq!(Direction::Right.to_string(), "right");
}
