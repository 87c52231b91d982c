//! Data models for the icon generator.

mod color;
mod icon;

pub use color::Rgb;
pub use icon::{ICON_TABLE, IconSpec, find_icon, icon_for_node, icon_or_default};
