//! Global constants for icon generation

/// Width and height of every icon canvas, in pixels
pub const CANVAS_SIZE: u32 = 32;

/// Output directory, relative to the working directory
pub const OUTPUT_DIR: &str = "icons";

/// File extension of written icons
pub const ICON_EXTENSION: &str = "png";

/// Line printed once every icon has been written
pub const COMPLETION_MESSAGE: &str = "Icons generated successfully!";
