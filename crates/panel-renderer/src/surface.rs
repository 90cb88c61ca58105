//! The plotting capability this core draws through.

use forecast_common::{BoundingBox, GridField};

/// Map-drawing surface.
///
/// One method per primitive the panel renderer and figure composer need:
/// canvas creation, geographic-projected subplot placement, extent, base
/// layers, filled contours, colorbars, titles, and free figure text.
/// Implementations own projection and rasterization; this core never sees
/// pixels. Figures are plain values returned to the caller, who owns their
/// lifetime.
pub trait PlotSurface {
    type Figure;
    type Axes;

    /// Create a figure canvas of the given size in inches.
    fn create_figure(&mut self, width_in: f64, height_in: f64) -> Self::Figure;

    /// Add a geographic-projected subplot at `cell` (row-major) of a
    /// rows-by-cols grid.
    fn add_map_axes(
        &mut self,
        figure: &mut Self::Figure,
        rows: usize,
        cols: usize,
        cell: usize,
    ) -> Self::Axes;

    /// Clip the axes to a geographic bounding box.
    fn set_extent(&mut self, axes: &mut Self::Axes, extent: &BoundingBox);

    fn draw_coastlines(&mut self, axes: &mut Self::Axes, line_width: f64);

    fn draw_state_borders(&mut self, axes: &mut Self::Axes, line_width: f64);

    fn draw_county_borders(&mut self, axes: &mut Self::Axes, line_width: f64);

    /// Filled contour of `values` located by the coordinate arrays, binned
    /// by the explicit level array and colored by the named color table.
    fn filled_contour(
        &mut self,
        axes: &mut Self::Axes,
        values: &GridField,
        longitudes: &GridField,
        latitudes: &GridField,
        levels: &[f64],
        colormap: &str,
    );

    /// Attach a colorbar scaled by `shrink` and labeled with `units`.
    fn colorbar(&mut self, axes: &mut Self::Axes, shrink: f64, units: &str);

    fn set_title(&mut self, axes: &mut Self::Axes, text: &str);

    fn set_suptitle(&mut self, figure: &mut Self::Figure, text: &str);

    /// Stamp text at normalized figure coordinates (0..1, origin bottom
    /// left).
    fn figure_text(&mut self, figure: &mut Self::Figure, x: f64, y: f64, text: &str);
}
