//! Generator configuration.
//!
//! The binary always runs with [`GeneratorConfig::default`]. Library callers
//! and tests may redirect output with [`GeneratorConfig::with_output_dir`];
//! the canvas size is fixed at [`CANVAS_SIZE`](crate::constants::CANVAS_SIZE).

use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_DIR;

/// Default log verbosity, applied before `RUST_LOG` overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Per-run summaries
    #[default]
    Info,
    /// Per-icon progress
    Debug,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    output_dir: PathBuf,
    /// Default log verbosity
    pub log_level: LogLevel,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            log_level: LogLevel::default(),
        }
    }
}

impl GeneratorConfig {
    /// Write icons into `dir` instead of `icons/`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
