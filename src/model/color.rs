//! Color type for icon fills.

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// The color at full opacity, as a paint color.
    pub fn to_color(self) -> tiny_skia::Color {
        let [r, g, b] = self.0;
        tiny_skia::Color::from_rgba8(r, g, b, u8::MAX)
    }
}
