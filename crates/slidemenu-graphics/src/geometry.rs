//! Geometric primitives and layer transforms

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Height divided by width, or 1.0 for a degenerate size.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0.0 {
            1.0
        } else {
            self.height / self.width
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Transform applied to a layer on top of its laid-out frame.
///
/// `scale` is applied about the frame's centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl GraphicsLayer {
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Visual bounds of `frame` once this layer's transform is applied.
    pub fn apply_to(&self, frame: Rect) -> Rect {
        let center = frame.center();
        let width = frame.width * self.scale;
        let height = frame.height * self.scale;
        Rect::new(
            center.x - width / 2.0 + self.translation_x,
            center.y - height / 2.0 + self.translation_y,
            width,
            height,
        )
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_follow_origin_and_size() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn layer_scale_shrinks_about_center() {
        let frame = Rect::new(0.0, 0.0, 200.0, 100.0);
        let visual = GraphicsLayer::scaled(0.5).apply_to(frame);
        assert_eq!(visual, Rect::new(50.0, 25.0, 100.0, 50.0));
    }

    #[test]
    fn degenerate_size_has_unit_aspect_ratio() {
        assert_eq!(Size::ZERO.aspect_ratio(), 1.0);
        assert_eq!(Size::new(320.0, 640.0).aspect_ratio(), 2.0);
    }
}
