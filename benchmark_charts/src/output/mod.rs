//!
//! Cycle tracker breakdown chart rendering.
//!

#[cfg(test)]
mod tests;

pub mod canvas;
pub mod error;
pub mod figure;
pub mod fonts;
pub mod path;

use std::path::Path;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;

use crate::model::breakdown::Breakdown;
use crate::model::chart::Chart;
use crate::model::summary::Summary;
use crate::util::thousands;

use self::canvas::Canvas;
use self::error::Error as OutputError;
use self::figure::Figure;

/// Sky blue.
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// The vertical grid line color.
const GRID_COLOR: RGBColor = RGBColor(176, 176, 176);

/// The gap between a bar and its annotation, relative to the largest count.
const ANNOTATION_OFFSET: f64 = 0.01;

/// The horizontal axis extent relative to the largest count, leaving room for annotations.
const X_AXIS_HEADROOM: f64 = 1.15;

/// Average glyph width relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;

/// Share of a bar slot covered by the bar.
const BAR_THICKNESS: f64 = 0.8;

///
/// Renders charts to PNG files.
///
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    /// The figure geometry.
    pub figure: Figure,
}

impl Renderer {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    ///
    /// Draws the chart and writes it to `path`, replacing any existing file.
    ///
    /// The canvas is released before returning, whether rendering succeeded or not.
    ///
    pub fn render(&self, chart: &Chart, path: &Path) -> Result<(), OutputError> {
        fonts::register()?;

        let mut canvas = Canvas::new(self.figure.canvas_size(chart.summary.lines.len()));
        {
            let root = canvas.backend().into_drawing_area();
            self.draw(chart, &root)
                .and_then(|()| root.present())
                .map_err(|error| OutputError::Drawing {
                    message: error.to_string(),
                    path: path.to_path_buf(),
                })?;
        }
        canvas.save(path, self.figure.inches_to_pixels(self.figure.padding))
    }

    ///
    /// Draws the chart onto any drawing area.
    ///
    /// The upper part holds the bar chart, the rest holds the summary.
    ///
    pub fn draw<DB: DrawingBackend>(
        &self,
        chart: &Chart,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let (upper, lower) = root.split_vertically(self.figure.chart_height());
        self.draw_breakdown(chart.title.as_str(), &chart.breakdown, &upper)?;
        self.draw_summary(&chart.summary, &lower)?;
        Ok(())
    }

    ///
    /// Draws the horizontal bar chart, largest count at the top.
    ///
    fn draw_breakdown<DB: DrawingBackend>(
        &self,
        title: &str,
        breakdown: &Breakdown,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let (width, _) = area.dim_in_pixel();
        let margin = self.figure.points_to_pixels(self.figure.margin).round() as u32;
        let label_size = self.figure.points_to_pixels(self.figure.label_font_size);
        let title_style = (
            fonts::SANS_SERIF,
            self.figure.points_to_pixels(self.figure.title_font_size),
        )
            .into_font()
            .color(&BLACK);
        let label_style = (fonts::SANS_SERIF, label_size)
            .into_font()
            .color(&BLACK);

        // An empty breakdown has no maximum, so the axis falls back to a unit range.
        let max_count = breakdown.max_count() as f64;
        let x_end = if max_count > 0.0 {
            max_count * X_AXIS_HEADROOM
        } else {
            1.0
        };
        let offset = max_count * ANNOTATION_OFFSET;

        // Segment positions grow upwards, so the first bar takes the last position.
        let last = breakdown.len().saturating_sub(1) as u32;
        let position = |rank: usize| last - rank as u32;

        let y_label_area_size = ((breakdown.longest_label() as f64 * label_size * GLYPH_WIDTH)
            .round() as u32
            + margin)
            .min(width / 2);
        let x_label_area_size = (label_size * 3.5).round() as u32;

        let mut context = ChartBuilder::on(area)
            .caption(title, title_style)
            .margin(margin)
            .x_label_area_size(x_label_area_size)
            .y_label_area_size(y_label_area_size)
            .build_cartesian_2d(0f64..x_end, (0u32..last).into_segmented())?;

        let tick_formatter = |value: &f64| thousands::format_decimal(*value);
        let label_formatter = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(index) if *index <= last => breakdown
                .bars
                .get((last - index) as usize)
                .map(|bar| bar.label.to_owned())
                .unwrap_or_default(),
            _ => String::new(),
        };
        context
            .configure_mesh()
            .disable_y_mesh()
            .bold_line_style(GRID_COLOR.mix(0.5))
            .light_line_style(TRANSPARENT)
            .x_desc("Cycle Count")
            .x_label_formatter(&tick_formatter)
            .y_labels(breakdown.len() + 1)
            .y_label_formatter(&label_formatter)
            .label_style(label_style.clone())
            .axis_desc_style(label_style.clone())
            .draw()?;

        let (_, plotting_height) = context.plotting_area().dim_in_pixel();
        let slot = plotting_height as f64 / breakdown.len().max(1) as f64;
        let bar_margin = (slot * (1.0 - BAR_THICKNESS) / 2.0).round() as u32;
        context.draw_series(
            Histogram::horizontal(&context)
                .style(BAR_COLOR.filled())
                .margin(bar_margin)
                .data(
                    breakdown
                        .bars
                        .iter()
                        .enumerate()
                        .map(|(rank, bar)| (position(rank), bar.count as f64)),
                ),
        )?;

        let annotation_style = label_style.pos(Pos::new(HPos::Left, VPos::Center));
        context.draw_series(breakdown.bars.iter().enumerate().map(|(rank, bar)| {
            Text::new(
                bar.annotation(),
                (
                    bar.count as f64 + offset,
                    SegmentValue::CenterOf(position(rank)),
                ),
                annotation_style.clone(),
            )
        }))?;

        Ok(())
    }

    ///
    /// Draws the summary block as left-aligned monospaced lines without axes.
    ///
    fn draw_summary<DB: DrawingBackend>(
        &self,
        summary: &Summary,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let size = self.figure.points_to_pixels(self.figure.summary_font_size);
        let style = (fonts::MONOSPACE, size)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Left, VPos::Top));
        let left = self.figure.points_to_pixels(self.figure.margin).round() as i32;
        let line_height = size * self.figure.line_spacing.max(1.0);

        for (index, line) in summary.lines.iter().enumerate() {
            let top = (index as f64 * line_height).round() as i32;
            area.draw(&Text::new(line.to_string(), (left, top), style.clone()))?;
        }
        Ok(())
    }
}
