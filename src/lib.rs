//! iconbatch - placeholder icon generator
//!
//! Draws a fixed set of 32x32 placeholder icons (solid shapes on a
//! transparent background) and writes them as PNG files into `icons/`.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod glyph;
pub mod model;

pub use canvas::{BACKGROUND, Canvas, render_icon};
pub use config::{GeneratorConfig, LogLevel};
pub use error::{IconError, Result};
pub use generator::{GenerateReport, IconGenerator, report_completion};
pub use glyph::{Glyph, Shape};
pub use model::{ICON_TABLE, IconSpec, Rgb, find_icon, icon_for_node, icon_or_default};
