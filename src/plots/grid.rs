use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;

use crate::config::{StyleConfig, Theme};
use crate::data::AccuracyTable;
use crate::error::PlotError;

use super::{anchor_position, draw_error, palette, Render};

// Panels are denser than a standalone plot, so markers shrink and fade.
const MARKER_SIZE: i32 = 2;
const MARKER_ALPHA: f64 = 0.2;

/// Faceted scatter grid: one `[0, 1]` panel per dataset, wrapped at `n_cols`
/// columns, each with a dashed slope-1 reference line marking perfect
/// estimation.
pub struct DiagonalGrid<'a> {
    table: &'a AccuracyTable,
    n_cols: usize,
    style: StyleConfig,
}

impl<'a> DiagonalGrid<'a> {
    pub fn new(table: &'a AccuracyTable, n_cols: usize, style: StyleConfig) -> Self {
        Self {
            table,
            n_cols: n_cols.max(1),
            style,
        }
    }

    fn shape(&self) -> (usize, usize) {
        let panels = self.table.datasets().len().max(1);
        let cols = self.n_cols.min(panels);
        (panels.div_ceil(cols), cols)
    }
}

impl Render for DiagonalGrid<'_> {
    fn pixel_size(&self) -> (u32, u32) {
        let (rows, cols) = self.shape();
        let (w, h) = self.style.pixel_size();
        (w * cols as u32, h * rows as u32)
    }

    fn render<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        // Facet selection needs a dataset value on every row.
        if let Some(row) = self
            .table
            .records()
            .iter()
            .position(|r| r.dataset.is_none())
        {
            return Err(PlotError::MissingDataset(row));
        }

        area.fill(&WHITE).map_err(draw_error)?;

        let datasets = self.table.datasets();
        if datasets.is_empty() {
            return Ok(());
        }
        let methods = self.table.methods();
        let (rows, cols) = self.shape();
        let panels = area.split_evenly((rows, cols));
        let last = datasets.len() - 1;

        for (panel_index, dataset) in datasets.iter().enumerate() {
            let mut chart = ChartBuilder::on(&panels[panel_index])
                .caption(*dataset, ("sans-serif", 18))
                .margin(8)
                .x_label_area_size(35)
                .y_label_area_size(45)
                .build_cartesian_2d(0f64..1f64, 0f64..1f64)
                .map_err(draw_error)?;

            let mut mesh = chart.configure_mesh();
            mesh.x_desc("true accs.").y_desc("estim. accs.");
            match self.style.theme {
                Theme::WhiteGrid => {
                    mesh.light_line_style(palette::GRID_GREY.mix(0.5))
                        .bold_line_style(palette::GRID_GREY);
                }
                Theme::Plain => {
                    mesh.disable_mesh();
                }
            }
            if let Some(n) = self.style.x_ticks {
                mesh.x_labels(n);
            }
            if let Some(n) = self.style.y_ticks {
                mesh.y_labels(n);
            }
            if self.style.rotate_x_ticks {
                mesh.x_label_style(
                    ("sans-serif", 10)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                );
            }
            mesh.draw().map_err(draw_error)?;

            chart
                .draw_series(DashedLineSeries::new(
                    [(0.0, 0.0), (1.0, 1.0)],
                    4,
                    3,
                    BLACK.stroke_width(1),
                ))
                .map_err(draw_error)?;

            for (index, method) in methods.iter().enumerate() {
                let color = palette::series_color(index);
                let marker = color.mix(MARKER_ALPHA).filled();
                let series = chart
                    .draw_series(
                        self.table
                            .rows_for_method(method)
                            .filter(|r| r.dataset.as_deref() == Some(*dataset))
                            .map(|r| Circle::new((r.true_accs, r.estim_accs), MARKER_SIZE, marker)),
                    )
                    .map_err(draw_error)?;
                // One shared legend, drawn on the final panel.
                if panel_index == last {
                    series
                        .label(*method)
                        .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
                }
            }

            if panel_index == last && !methods.is_empty() {
                chart
                    .configure_series_labels()
                    .position(anchor_position(self.style.legend_anchor))
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()
                    .map_err(draw_error)?;
            }
        }

        Ok(())
    }
}
