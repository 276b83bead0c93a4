//! Plot builders: single-panel and faceted true-vs-estimated scatterplots.
pub mod diagonal;
pub mod grid;
pub(crate) mod palette;

use std::path::PathBuf;

use anyhow::Result;
use plotters::chart::SeriesLabelPosition;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::{LegendAnchor, PlotConfig};
use crate::data::AccuracyTable;
use crate::error::PlotError;
use crate::export::export_figure;
use crate::paths::PlotIdentity;

pub use diagonal::DiagonalPlot;
pub use grid::DiagonalGrid;

/// A figure that can draw itself onto any plotters backend.
///
/// One rendered figure is exported to several formats by replaying the same
/// draw onto each backend, so implementations must be deterministic.
pub trait Render {
    /// Canvas size in pixels, derived from the style's DPI setting.
    fn pixel_size(&self) -> (u32, u32);

    /// Draw the figure onto `area`.
    fn render<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), PlotError>;
}

pub(crate) fn draw_error<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

pub(crate) fn anchor_position(anchor: LegendAnchor) -> SeriesLabelPosition {
    match anchor {
        LegendAnchor::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendAnchor::UpperRight => SeriesLabelPosition::UpperRight,
        LegendAnchor::MiddleRight => SeriesLabelPosition::MiddleRight,
        LegendAnchor::LowerCenter => SeriesLabelPosition::LowerMiddle,
        LegendAnchor::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

/// Render a single-panel diagonal plot and write it to every export format.
pub fn plot_diagonal(
    table: &AccuracyTable,
    identity: &PlotIdentity,
    config: &PlotConfig,
) -> Result<Vec<PathBuf>> {
    let figure = DiagonalPlot::new(table, config.style.clone());
    export_figure(figure, identity, config)
}

/// Render a faceted diagonal grid, one panel per dataset, and write it to
/// every export format.
pub fn plot_diagonal_grid(
    table: &AccuracyTable,
    identity: &PlotIdentity,
    n_cols: usize,
    config: &PlotConfig,
) -> Result<Vec<PathBuf>> {
    let figure = DiagonalGrid::new(table, n_cols, config.style.clone());
    export_figure(figure, identity, config)
}
