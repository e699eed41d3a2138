//! Geometry model: open-ness percentage to concrete layout values.
//!
//! Everything here is a pure function of the percentage, where 0 is fully
//! closed and 1 is fully open. Closing gestures convert their progress into
//! open-ness before calling in, so there is a single scale formula.

use slidemenu_graphics::{GraphicsLayer, Rect};

use crate::config::SlideMenuConfig;
use crate::direction::Direction;

/// Corner radius of the content snapshot when the menu is fully open.
pub const OPEN_CORNER_RADIUS: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryState {
    /// Distance the snapshot's top edge moves down.
    pub top_inset: f32,
    /// Always `-top_inset`: the snapshot shrinks symmetrically.
    pub bottom_inset: f32,
    /// Horizontal displacement of the snapshot, signed by direction.
    pub slide_offset: f32,
    /// Scale of the menu panel.
    pub scale: f32,
    /// Corner radius of the snapshot.
    pub corner_radius: f32,
    /// Gap between the panel and the snapshot edge it is attached to.
    pub menu_offset: f32,
}

/// Panel scale at open-ness `percentage`.
pub fn scale_at(percentage: f32, zoom_factor: f32) -> f32 {
    let p = percentage.clamp(0.0, 1.0);
    zoom_factor + (1.0 - zoom_factor) * p
}

pub fn corner_radius_at(percentage: f32) -> f32 {
    OPEN_CORNER_RADIUS * percentage.clamp(0.0, 1.0)
}

/// Total horizontal travel of the snapshot for a window `window_width` wide.
pub fn slide_amount(window_width: f32, travel_percent: f32, direction: Direction) -> f32 {
    window_width * travel_percent * direction.sign()
}

/// Geometry at open-ness `percentage`, which is clamped to [0, 1].
pub fn geometry_at(percentage: f32, config: &SlideMenuConfig, slide_amount: f32) -> GeometryState {
    let p = percentage.clamp(0.0, 1.0);
    let top_inset = config.shrink_amount() * p;
    GeometryState {
        top_inset,
        bottom_inset: -top_inset,
        slide_offset: slide_amount * p,
        scale: scale_at(p, config.zoom_factor()),
        corner_radius: corner_radius_at(p),
        menu_offset: config.menu_offset() * config.direction().sign() * (1.0 - p),
    }
}

/// Frames handed to the host for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuLayout {
    pub snapshot: Rect,
    pub snapshot_corner_radius: f32,
    /// Panel frame before `panel_layer` is applied.
    pub panel: Rect,
    pub panel_layer: GraphicsLayer,
}

/// Resolves a [`GeometryState`] against the window into concrete frames.
///
/// The snapshot keeps the window's aspect ratio while its top and bottom are
/// inset, and is pinned to the trailing edge (content receding left) or the
/// leading edge (content receding right) plus the slide offset. The panel
/// spans the full window height, is `travel_percent` of the window wide, and
/// hangs off the snapshot's exposed edge plus the menu offset.
pub fn resolve_layout(
    state: &GeometryState,
    window: Rect,
    direction: Direction,
    travel_percent: f32,
) -> MenuLayout {
    let snapshot_height = (window.height - 2.0 * state.top_inset).max(0.0);
    let snapshot_width = snapshot_height / window.size().aspect_ratio();
    let snapshot_y = window.y + state.top_inset;
    let snapshot_x = match direction {
        Direction::Left => window.max_x() + state.slide_offset - snapshot_width,
        Direction::Right => window.x + state.slide_offset,
    };
    let snapshot = Rect::new(snapshot_x, snapshot_y, snapshot_width, snapshot_height);

    let panel_width = window.width * travel_percent;
    let panel_x = match direction {
        Direction::Left => snapshot.max_x() + state.menu_offset,
        Direction::Right => snapshot.x + state.menu_offset - panel_width,
    };

    MenuLayout {
        snapshot,
        snapshot_corner_radius: state.corner_radius,
        panel: Rect::new(panel_x, window.y, panel_width, window.height),
        panel_layer: GraphicsLayer::scaled(state.scale),
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
