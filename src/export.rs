//! Figure persistence: directory creation and multi-format writes.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::paths::{ImageFormat, PlotIdentity, PlotPaths, EXPORT_FORMATS};
use crate::plots::{draw_error, Render};

/// Write `figure` to every export format under the configured plots root.
///
/// The figure is taken by value: once its files are written the handle is
/// dropped and cannot be redrawn. Destination directories are created as
/// needed; exporting the same identity twice overwrites the prior files.
/// Filesystem and render failures propagate to the caller, and a failed
/// second write leaves the first format's file on disk.
///
/// Returns the written paths, one per format.
pub fn export_figure<R: Render>(
    figure: R,
    identity: &PlotIdentity,
    config: &PlotConfig,
) -> Result<Vec<PathBuf>> {
    let resolver = PlotPaths::new(config.root.clone(), config.layout);
    let (width, height) = figure.pixel_size();
    let mut written = Vec::with_capacity(EXPORT_FORMATS.len());

    for format in EXPORT_FORMATS {
        let path = resolver.resolve(identity, format);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create plot directory: {}", parent.display())
            })?;
        }

        match format {
            ImageFormat::Svg => {
                let area = SVGBackend::new(&path, (width, height)).into_drawing_area();
                figure.render(&area)?;
                area.present()
                    .map_err(draw_error)
                    .with_context(|| format!("Failed to write figure: {}", path.display()))?;
            }
            ImageFormat::Png => {
                let area = BitMapBackend::new(&path, (width, height)).into_drawing_area();
                figure.render(&area)?;
                area.present()
                    .map_err(draw_error)
                    .with_context(|| format!("Failed to write figure: {}", path.display()))?;
            }
        }

        log::debug!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
