//! In-memory icon canvas backed by a `tiny_skia` pixmap.

use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::constants::CANVAS_SIZE;
use crate::error::{IconError, Result};
use crate::glyph::{Glyph, Shape};
use crate::model::{IconSpec, Rgb};

/// Value written for uncovered pixels: white at zero alpha.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Square RGBA surface one icon is drawn on.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a fully transparent `CANVAS_SIZE` x `CANVAS_SIZE` canvas.
    pub fn new() -> Result<Self> {
        Pixmap::new(CANVAS_SIZE, CANVAS_SIZE)
            .map(|pixmap| Self { pixmap })
            .ok_or(IconError::InvalidCanvas {
                width: CANVAS_SIZE,
                height: CANVAS_SIZE,
            })
    }

    /// Canvas width.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha pixel at `(x, y)`, or `None` outside the canvas.
    /// Uncovered pixels read as [`BACKGROUND`].
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        if c.alpha() == 0 {
            return Some(BACKGROUND);
        }
        Some(Rgba([c.red(), c.green(), c.blue(), c.alpha()]))
    }

    /// Fill `shape` with `color` at full opacity, without anti-aliasing.
    pub fn fill_shape(&mut self, shape: &Shape, color: Rgb) {
        let mut paint = Paint::default();
        paint.set_color(color.to_color());
        paint.anti_alias = false;

        let Some(edges) = shape.edges() else {
            log::warn!("Skipping degenerate shape {:?}", shape);
            return;
        };

        match shape {
            Shape::Rect { .. } => {
                self.pixmap
                    .fill_rect(edges, &paint, Transform::identity(), None);
            }
            Shape::Ellipse { .. } => match PathBuilder::from_oval(edges) {
                Some(path) => {
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
                None => log::warn!("Failed to build ellipse path for {:?}", shape),
            },
        }
    }

    /// Draw all shapes of `glyph` in `color`.
    pub fn draw_glyph(&mut self, glyph: Glyph, color: Rgb) {
        for shape in glyph.shapes() {
            self.fill_shape(shape, color);
        }
    }

    /// Convert to a straight-alpha image ready for PNG encoding.
    pub fn into_image(self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            self.pixel(x, y).unwrap_or(BACKGROUND)
        })
    }
}

/// Render one icon into a fresh canvas.
pub fn render_icon(spec: &IconSpec) -> Result<Canvas> {
    let glyph = spec.glyph();
    log::debug!("Rendering '{}' as {} glyph", spec.name, glyph.name());

    let mut canvas = Canvas::new()?;
    canvas.draw_glyph(glyph, spec.color);
    Ok(canvas)
}
