//! Glyph classification and geometry.
//!
//! Each icon name maps to exactly one [`Glyph`], and each glyph owns a fixed
//! list of filled [`Shape`]s laid out on the 32x32 canvas.

/// A filled primitive with an inclusive corner box.
///
/// `(x0, y0)` and `(x1, y1)` are both covered, so `Rect { 8, 8, 24, 24 }` is
/// 17 pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Axis-aligned filled rectangle.
    Rect { x0: u32, y0: u32, x1: u32, y1: u32 },
    /// Filled ellipse inscribed in the corner box.
    Ellipse { x0: u32, y0: u32, x1: u32, y1: u32 },
}

impl Shape {
    /// Inclusive corner box of the shape.
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        match *self {
            Shape::Rect { x0, y0, x1, y1 } | Shape::Ellipse { x0, y0, x1, y1 } => {
                (x0, y0, x1, y1)
            }
        }
    }

    /// Edge rectangle for rasterizing: the far corner pixel is covered, so
    /// the right and bottom edges sit one past `x1`/`y1`.
    pub fn edges(&self) -> Option<tiny_skia::Rect> {
        let (x0, y0, x1, y1) = self.bounds();
        tiny_skia::Rect::from_ltrb(x0 as f32, y0 as f32, (x1 + 1) as f32, (y1 + 1) as f32)
    }
}

const CONTAINER_SHAPES: &[Shape] = &[
    // body
    Shape::Rect { x0: 4, y0: 8, x1: 28, y1: 26 },
    // tab
    Shape::Rect { x0: 8, y0: 4, x1: 24, y1: 8 },
];

const PIPE_SHAPES: &[Shape] = &[
    Shape::Rect { x0: 8, y0: 8, x1: 24, y1: 24 },
    Shape::Rect { x0: 12, y0: 4, x1: 20, y1: 28 },
];

const POINT_SHAPES: &[Shape] = &[Shape::Ellipse { x0: 6, y0: 6, x1: 26, y1: 26 }];

// Solid block; the area icon has no separate border color.
const AREA_SHAPES: &[Shape] = &[Shape::Rect { x0: 6, y0: 6, x1: 26, y1: 26 }];

const DEFAULT_SHAPES: &[Shape] = &[Shape::Rect { x0: 8, y0: 8, x1: 24, y1: 24 }];

/// Names drawn as a folder silhouette.
const CONTAINER_NAMES: &[&str] = &[
    "system", "folder", "generic", "water", "telecom", "pipeline", "gas",
];

/// Shape group an icon is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Folder silhouette: body plus tab
    Container,
    /// Cross-like pipe: wide segment plus narrow vertical segment
    Pipe,
    /// Filled circle
    Point,
    /// Large solid square
    Area,
    /// Small solid square, used for any unrecognised name
    Default,
}

impl Glyph {
    /// Classify an icon name. Total: unknown names get [`Glyph::Default`].
    pub fn classify(name: &str) -> Self {
        match name {
            "pipe" => Glyph::Pipe,
            "point" => Glyph::Point,
            "area" => Glyph::Area,
            n if CONTAINER_NAMES.contains(&n) => Glyph::Container,
            _ => Glyph::Default,
        }
    }

    /// Shapes to fill, in drawing order.
    pub fn shapes(&self) -> &'static [Shape] {
        match self {
            Glyph::Container => CONTAINER_SHAPES,
            Glyph::Pipe => PIPE_SHAPES,
            Glyph::Point => POINT_SHAPES,
            Glyph::Area => AREA_SHAPES,
            Glyph::Default => DEFAULT_SHAPES,
        }
    }

    /// Display name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Container => "container",
            Glyph::Pipe => "pipe",
            Glyph::Point => "point",
            Glyph::Area => "area",
            Glyph::Default => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_container_names() {
        for name in CONTAINER_NAMES {
            assert_eq!(Glyph::classify(name), Glyph::Container, "{name}");
        }
    }

    #[test]
    fn test_classify_single_names() {
        assert_eq!(Glyph::classify("pipe"), Glyph::Pipe);
        assert_eq!(Glyph::classify("point"), Glyph::Point);
        assert_eq!(Glyph::classify("area"), Glyph::Area);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(Glyph::classify("feature"), Glyph::Default);
        assert_eq!(Glyph::classify("default"), Glyph::Default);
        assert_eq!(Glyph::classify("anything-else"), Glyph::Default);
        assert_eq!(Glyph::classify(""), Glyph::Default);
        // Matching is exact
        assert_eq!(Glyph::classify("Pipe"), Glyph::Default);
    }

    #[test]
    fn test_edges_cover_far_corner() {
        let rect = Shape::Rect { x0: 8, y0: 8, x1: 24, y1: 24 };
        let edges = rect.edges().unwrap();
        assert_eq!((edges.left(), edges.top()), (8.0, 8.0));
        assert_eq!((edges.right(), edges.bottom()), (25.0, 25.0));
        assert_eq!(edges.width(), 17.0);
    }

    #[test]
    fn test_ellipse_edges_match_box() {
        let circle = POINT_SHAPES[0];
        assert_eq!(circle.bounds(), (6, 6, 26, 26));
        let edges = circle.edges().unwrap();
        assert_eq!((edges.width(), edges.height()), (21.0, 21.0));
    }

    #[test]
    fn test_area_is_single_solid_rect() {
        assert_eq!(
            Glyph::Area.shapes(),
            &[Shape::Rect { x0: 6, y0: 6, x1: 26, y1: 26 }]
        );
    }

    #[test]
    fn test_shapes_fit_canvas() {
        let size = crate::constants::CANVAS_SIZE;
        for spec in crate::model::ICON_TABLE {
            let glyph = spec.glyph();
            assert!(!glyph.shapes().is_empty(), "{}", glyph.name());
            for shape in glyph.shapes() {
                let (x0, y0, x1, y1) = shape.bounds();
                assert!(x0 <= x1 && y0 <= y1);
                assert!(x1 < size && y1 < size);
                assert!(shape.edges().is_some());
            }
        }
    }
}
