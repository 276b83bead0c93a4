use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Central configuration for plot output and styling.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Root directory that all resolved plot paths live under.
    pub root: PathBuf,
    /// How identity segments are ordered beneath the root.
    pub layout: PathLayout,
    /// Styling applied to every figure built with this configuration.
    pub style: StyleConfig,
}

/// Ordering of the identity segments beneath the plots root.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PathLayout {
    /// `<root>/<classifier>/<metric>/<dataset>/<kind>.<ext>`; the metric
    /// segment is skipped when the identity carries none.
    Nested,
    /// `<root>/<classifier>/<dataset>/<kind>.<ext>`; never emits a metric
    /// segment.
    Compact,
}

impl FromStr for PathLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nested" => Ok(PathLayout::Nested),
            "compact" => Ok(PathLayout::Compact),
            _ => Err(format!(
                "Unknown path layout: {}. Expected 'nested' or 'compact'",
                s
            )),
        }
    }
}

/// Grid and background treatment for a figure.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// White background with light grey grid lines.
    WhiteGrid,
    /// White background, no grid.
    Plain,
}

/// Where the series legend is drawn inside the plot area.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LegendAnchor {
    UpperLeft,
    UpperRight,
    MiddleRight,
    LowerCenter,
    LowerRight,
}

/// Presentation parameters threaded into each plot builder.
///
/// Styling is an explicit value rather than process-wide state so that plots
/// with different looks can be produced in the same process without
/// interfering with each other.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub theme: Theme,
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Size of one panel in inches (width, height).
    pub panel_inches: (f64, f64),
    pub legend_anchor: LegendAnchor,
    /// Draw x tick labels vertically.
    pub rotate_x_ticks: bool,
    /// Approximate number of x tick labels; `None` lets the backend decide.
    pub x_ticks: Option<usize>,
    /// Approximate number of y tick labels; `None` lets the backend decide.
    pub y_ticks: Option<usize>,
    /// Scatter marker radius in pixels.
    pub marker_size: u32,
    /// Scatter marker opacity in `[0, 1]`.
    pub marker_alpha: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::WhiteGrid,
            dpi: 300,
            panel_inches: (4.0, 4.0),
            legend_anchor: LegendAnchor::LowerRight,
            rotate_x_ticks: false,
            x_ticks: None,
            y_ticks: None,
            marker_size: 3,
            marker_alpha: 0.5,
        }
    }
}

impl StyleConfig {
    /// Panel size in pixels at the configured resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.panel_inches;
        (
            (w * self.dpi as f64).round() as u32,
            (h * self.dpi as f64).round() as u32,
        )
    }
}

impl PlotConfig {
    /// Nested output tree keyed by classifier, metric, and dataset.
    pub fn nested(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: PathLayout::Nested,
            style: StyleConfig::default(),
        }
    }

    /// Flat output tree keyed by classifier and dataset only, with the
    /// legend pulled to the right edge and vertical x tick labels.
    pub fn compact(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: PathLayout::Compact,
            style: StyleConfig {
                legend_anchor: LegendAnchor::MiddleRight,
                rotate_x_ticks: true,
                ..StyleConfig::default()
            },
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::nested("plots")
    }
}
