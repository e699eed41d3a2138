use std::fmt;

use slidemenu_foundation::ScreenEdge;

/// Side toward which the content recedes when the menu opens.
///
/// The panel is revealed on the opposite side, and edge pans start from the
/// screen edge the panel is revealed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// +1 for `Right`, -1 for `Left`.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Screen edge an opening edge pan starts from.
    pub fn edge_pan_edge(self) -> ScreenEdge {
        match self {
            Direction::Left => ScreenEdge::Right,
            Direction::Right => ScreenEdge::Left,
        }
    }

    /// Lenient parse of `"left"` / `"right"`; anything else falls back to `Left`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Direction::Left,
            "right" => Direction::Right,
            other => {
                log::warn!("unknown slide direction {other:?}, using left");
                Direction::Left
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
