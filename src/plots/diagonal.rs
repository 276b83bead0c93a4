use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::config::{StyleConfig, Theme};
use crate::data::AccuracyTable;
use crate::error::PlotError;

use super::{anchor_position, draw_error, palette, Render};

/// Single-panel scatter of true versus estimated accuracy, one color per
/// method, axes fixed to `[0, 1]`.
pub struct DiagonalPlot<'a> {
    table: &'a AccuracyTable,
    style: StyleConfig,
}

impl<'a> DiagonalPlot<'a> {
    pub fn new(table: &'a AccuracyTable, style: StyleConfig) -> Self {
        Self { table, style }
    }
}

impl Render for DiagonalPlot<'_> {
    fn pixel_size(&self) -> (u32, u32) {
        self.style.pixel_size()
    }

    fn render<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), PlotError> {
        area.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
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
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            );
        }
        mesh.draw().map_err(draw_error)?;

        let methods = self.table.methods();
        for (index, method) in methods.iter().enumerate() {
            let color = palette::series_color(index);
            let marker = color.mix(self.style.marker_alpha).filled();
            let size = self.style.marker_size as i32;
            chart
                .draw_series(
                    self.table
                        .rows_for_method(method)
                        .map(|r| Circle::new((r.true_accs, r.estim_accs), size, marker)),
                )
                .map_err(draw_error)?
                .label(*method)
                .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
        }

        if !methods.is_empty() {
            chart
                .configure_series_labels()
                .position(anchor_position(self.style.legend_anchor))
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(draw_error)?;
        }

        Ok(())
    }
}
