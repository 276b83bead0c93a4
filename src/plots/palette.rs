use plotters::style::RGBColor;

/// Light grey used for the theme's grid lines.
pub const GRID_GREY: RGBColor = RGBColor(229, 229, 229);

const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
    RGBColor(188, 189, 34),  // Yellow-green
    RGBColor(23, 190, 207),  // Cyan
];

/// Color assigned to the n-th series, cycling past the palette's end.
pub fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
