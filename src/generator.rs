//! Batch icon generation.
//!
//! Writes one PNG per table entry into the configured output directory.
//! Any failure aborts the batch; icons written before the failure are kept.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::canvas::render_icon;
use crate::config::GeneratorConfig;
use crate::constants::COMPLETION_MESSAGE;
use crate::error::{IconError, Result};
use crate::model::{ICON_TABLE, IconSpec};

/// Result of a generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of icons written.
    pub icons_written: usize,

    /// Files created or overwritten, in write order.
    pub files_created: Vec<PathBuf>,
}

impl GenerateReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, path: PathBuf) {
        self.icons_written += 1;
        self.files_created.push(path);
    }
}

/// Renders the icon table to disk.
#[derive(Debug, Clone, Default)]
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_output_directory(&self) -> Result<()> {
        let dir = self.config.output_dir();
        std::fs::create_dir_all(dir).map_err(|e| IconError::create_dir(dir, e))?;
        log::debug!("Output directory ready: {:?}", dir);
        Ok(())
    }

    /// Destination path for `spec`.
    pub fn icon_path(&self, spec: &IconSpec) -> PathBuf {
        self.config.output_dir().join(spec.file_name())
    }

    /// Render `spec` and write it as PNG, replacing any existing file.
    pub fn render_icon_to_file(&self, spec: &IconSpec) -> Result<PathBuf> {
        let path = self.icon_path(spec);
        let image = render_icon(spec)?.into_image();
        write_png(&image, &path)?;
        log::debug!("Wrote {:?}", path);
        Ok(path)
    }

    /// Render every entry of `table`. Stops at the first failure.
    pub fn render_all(&self, table: &[IconSpec]) -> Result<GenerateReport> {
        log::info!(
            "Generating {} icons into {:?}",
            table.len(),
            self.config.output_dir()
        );

        let mut report = GenerateReport::new();
        for spec in table {
            let path = self.render_icon_to_file(spec)?;
            report.record(path);
        }

        log::info!("Generated {} icons", report.icons_written);
        Ok(report)
    }

    /// Create the output directory and write the built-in icon set.
    pub fn run(&self) -> Result<GenerateReport> {
        self.ensure_output_directory()?;
        self.render_all(ICON_TABLE)
    }
}

fn write_png(image: &image::RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::write(path, e))
}

/// Print the completion line to stdout.
pub fn report_completion() {
    println!("{}", COMPLETION_MESSAGE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rgb, find_icon};

    #[test]
    fn test_icon_path_uses_name() {
        let generator = IconGenerator::new(GeneratorConfig::default().with_output_dir("out"));
        let spec = find_icon("pipeline").unwrap();
        assert_eq!(generator.icon_path(spec), Path::new("out").join("pipeline.png"));
    }

    #[test]
    fn test_default_generator_targets_icons_dir() {
        let generator = IconGenerator::default();
        let spec = find_icon("area").unwrap();
        assert_eq!(generator.icon_path(spec), Path::new("icons").join("area.png"));
    }

    #[test]
    fn test_render_all_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let generator = IconGenerator::new(GeneratorConfig::default().with_output_dir(dir.path()));
        let report = generator.render_all(&[]).unwrap();
        assert_eq!(report, GenerateReport::new());
    }

    #[test]
    fn test_render_all_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        let generator = IconGenerator::new(GeneratorConfig::default().with_output_dir(dir.path()));
        let table = [IconSpec::new("unlisted", Rgb::new(1, 2, 3))];

        let report = generator.render_all(&table).unwrap();

        assert_eq!(report.icons_written, 1);
        assert!(dir.path().join("unlisted.png").is_file());
    }

    #[test]
    fn test_missing_directory_fails_write() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            IconGenerator::new(GeneratorConfig::default().with_output_dir(dir.path().join("absent")));
        let err = generator.render_all(ICON_TABLE).unwrap_err();
        assert!(matches!(err, IconError::Write { .. }));
    }
}
