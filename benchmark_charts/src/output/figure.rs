//!
//! The figure geometry.
//!

///
/// The figure geometry.
///
/// Sizes are given in inches and typographic points and converted to pixels with `dpi`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
    /// Resolution in pixels per inch.
    pub dpi: u32,
    /// Share of the height taken by the bar chart; the summary gets the rest.
    pub chart_ratio: f64,
    /// Margin around the regions in points.
    pub margin: f64,
    /// Title font size in points.
    pub title_font_size: f64,
    /// Axis label and annotation font size in points.
    pub label_font_size: f64,
    /// Summary font size in points.
    pub summary_font_size: f64,
    /// Summary line height relative to its font size.
    pub line_spacing: f64,
    /// Whitespace kept around the content after cropping, in inches.
    pub padding: f64,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width: 12.0,
            height: 7.0,
            dpi: 300,
            chart_ratio: 0.8,
            margin: 10.0,
            title_font_size: 12.0,
            label_font_size: 10.0,
            summary_font_size: 11.0,
            line_spacing: 1.5,
            padding: 0.1,
        }
    }
}

impl Figure {
    /// Points per inch.
    pub const POINTS_PER_INCH: f64 = 72.0;

    ///
    /// A figure with the default layout at another resolution.
    ///
    pub fn with_dpi(dpi: u32) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }

    ///
    /// The canvas size in pixels before cropping.
    ///
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.inches_to_pixels(self.width).max(1),
            self.inches_to_pixels(self.height).max(1),
        )
    }

    ///
    /// Converts a length in inches to pixels.
    ///
    pub fn inches_to_pixels(&self, inches: f64) -> u32 {
        (inches * self.dpi as f64).round().max(0.0) as u32
    }

    ///
    /// Converts a length in points to pixels.
    ///
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi as f64 / Self::POINTS_PER_INCH
    }

    ///
    /// The height of the bar chart region in pixels.
    ///
    pub fn chart_height(&self) -> u32 {
        let (_, height) = self.pixel_size();
        (height as f64 * self.chart_ratio.clamp(0.0, 1.0)).round() as u32
    }

    ///
    /// The height taken by a summary block of `lines` lines in pixels.
    ///
    pub fn summary_height(&self, lines: usize) -> u32 {
        let line_height =
            self.points_to_pixels(self.summary_font_size) * self.line_spacing.max(1.0);
        (lines as f64 * line_height + self.points_to_pixels(self.margin)).ceil() as u32
    }

    ///
    /// The canvas size in pixels for a summary block of `lines` lines.
    ///
    /// The canvas grows downwards when the summary does not fit below the chart.
    ///
    pub fn canvas_size(&self, lines: usize) -> (u32, u32) {
        let (width, height) = self.pixel_size();
        (
            width,
            height.max(self.chart_height() + self.summary_height(lines)),
        )
    }
}
