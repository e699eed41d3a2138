//! Tunable parameters of the slide-out menu.
//!
//! Every numeric setter clamps its input into range instead of rejecting it.
//! Non-finite values leave the previous setting untouched.

use slidemenu_graphics::Color;

use crate::direction::Direction;
use crate::host::ImageId;

pub const DEFAULT_TRAVEL_PERCENT: f32 = 0.8;
pub const MIN_TRAVEL_PERCENT: f32 = 0.1;
pub const MAX_TRAVEL_PERCENT: f32 = 1.0;
pub const DEFAULT_SHRINK_AMOUNT: f32 = 60.0;
pub const DEFAULT_MENU_OFFSET: f32 = 150.0;
pub const DEFAULT_SLIDE_TIME: f64 = 0.5;
pub const DEFAULT_ZOOM_FACTOR: f32 = 0.8;
pub const DEFAULT_SPRING_DAMPING: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct SlideMenuConfig {
    direction: Direction,
    travel_percent: f32,
    shrink_amount: f32,
    menu_offset: f32,
    slide_time: f64,
    zoom_factor: f32,
    spring_enabled: bool,
    spring_damping: f32,
    background_image: Option<ImageId>,
    panel_color: Color,
    /// Display height the shrink amount is capped against, once known.
    display_height: Option<f32>,
}

impl Default for SlideMenuConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            travel_percent: DEFAULT_TRAVEL_PERCENT,
            shrink_amount: DEFAULT_SHRINK_AMOUNT,
            menu_offset: DEFAULT_MENU_OFFSET,
            slide_time: DEFAULT_SLIDE_TIME,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            spring_enabled: true,
            spring_damping: DEFAULT_SPRING_DAMPING,
            background_image: None,
            panel_color: Color::WHITE,
            display_height: None,
        }
    }
}

fn clamp_logged(name: &str, value: f32, min: f32, max: f32) -> f32 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{name} {value} out of range, clamped to {clamped}");
    }
    clamped
}

impl SlideMenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn travel_percent(&self) -> f32 {
        self.travel_percent
    }

    pub fn shrink_amount(&self) -> f32 {
        self.shrink_amount
    }

    pub fn menu_offset(&self) -> f32 {
        self.menu_offset
    }

    /// Duration of a full open or close, in seconds.
    pub fn slide_time(&self) -> f64 {
        self.slide_time
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    pub fn spring_enabled(&self) -> bool {
        self.spring_enabled
    }

    pub fn spring_damping(&self) -> f32 {
        self.spring_damping
    }

    pub fn background_image(&self) -> Option<ImageId> {
        self.background_image
    }

    pub fn panel_color(&self) -> Color {
        self.panel_color
    }

    pub fn display_height(&self) -> Option<f32> {
        self.display_height
    }

    /// Damping used when animating open: the configured damping with the
    /// spring enabled, critically damped otherwise.
    pub fn open_damping(&self) -> f32 {
        if self.spring_enabled {
            self.spring_damping
        } else {
            1.0
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_travel_percent(&mut self, travel_percent: f32) {
        if !travel_percent.is_finite() {
            return;
        }
        self.travel_percent = clamp_logged(
            "travel percent",
            travel_percent,
            MIN_TRAVEL_PERCENT,
            MAX_TRAVEL_PERCENT,
        );
    }

    /// Sets the vertical shrink of the content, capped at half the display
    /// height when the display is known.
    pub fn set_shrink_amount(&mut self, shrink_amount: f32) {
        if !shrink_amount.is_finite() {
            return;
        }
        let max = self
            .display_height
            .map(|height| (height / 2.0).max(0.0))
            .unwrap_or(f32::MAX);
        self.shrink_amount = clamp_logged("shrink amount", shrink_amount, 0.0, max);
    }

    pub fn set_menu_offset(&mut self, menu_offset: f32) {
        if menu_offset.is_finite() {
            self.menu_offset = menu_offset;
        }
    }

    pub fn set_slide_time(&mut self, slide_time: f64) {
        if !slide_time.is_finite() {
            return;
        }
        if slide_time < 0.0 {
            log::warn!("slide time {slide_time} out of range, clamped to 0");
        }
        self.slide_time = slide_time.max(0.0);
    }

    pub fn set_zoom_factor(&mut self, zoom_factor: f32) {
        if !zoom_factor.is_finite() {
            return;
        }
        self.zoom_factor = clamp_logged("zoom factor", zoom_factor, 0.0, 1.0);
    }

    pub fn set_spring_enabled(&mut self, spring_enabled: bool) {
        self.spring_enabled = spring_enabled;
    }

    pub fn set_spring_damping(&mut self, spring_damping: f32) {
        if !spring_damping.is_finite() {
            return;
        }
        self.spring_damping = clamp_logged("spring damping", spring_damping, 0.0, 1.0);
    }

    pub fn set_background_image(&mut self, image: Option<ImageId>) {
        self.background_image = image;
    }

    pub fn set_panel_color(&mut self, color: Color) {
        self.panel_color = color;
    }

    /// Records the display height and re-applies the shrink cap against it.
    pub fn set_display_height(&mut self, height: f32) {
        if !height.is_finite() || height < 0.0 {
            return;
        }
        self.display_height = Some(height);
        let shrink_amount = self.shrink_amount;
        self.set_shrink_amount(shrink_amount);
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.set_direction(direction);
        self
    }

    pub fn with_travel_percent(mut self, travel_percent: f32) -> Self {
        self.set_travel_percent(travel_percent);
        self
    }

    pub fn with_shrink_amount(mut self, shrink_amount: f32) -> Self {
        self.set_shrink_amount(shrink_amount);
        self
    }

    pub fn with_menu_offset(mut self, menu_offset: f32) -> Self {
        self.set_menu_offset(menu_offset);
        self
    }

    pub fn with_slide_time(mut self, slide_time: f64) -> Self {
        self.set_slide_time(slide_time);
        self
    }

    pub fn with_zoom_factor(mut self, zoom_factor: f32) -> Self {
        self.set_zoom_factor(zoom_factor);
        self
    }

    pub fn with_spring(mut self, enabled: bool, damping: f32) -> Self {
        self.set_spring_enabled(enabled);
        self.set_spring_damping(damping);
        self
    }

    pub fn with_background_image(mut self, image: ImageId) -> Self {
        self.set_background_image(Some(image));
        self
    }

    pub fn with_panel_color(mut self, color: Color) -> Self {
        self.set_panel_color(color);
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
