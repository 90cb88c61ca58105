//! Single map-panel rendering.

use crate::surface::PlotSurface;
use forecast_common::{BoundingBox, GraphicsResult, GridField};
use panel_layout::PanelStyle;
use tracing::debug;

/// Fixed base-layer line weights, identical on every panel.
pub const COASTLINE_LINE_WIDTH: f64 = 0.75;
pub const STATE_BORDER_LINE_WIDTH: f64 = 0.5;
pub const COUNTY_BORDER_LINE_WIDTH: f64 = 0.25;

/// Draw one map panel onto `axes`.
///
/// The fixed recipe: extent, coastline/state/county base layers, filled
/// contour at the given levels, colorbar, title. Value/coordinate shape
/// disagreement fails before anything is drawn, so an aborted call leaves
/// no partially drawn panel behind.
#[allow(clippy::too_many_arguments)]
pub fn render_panel<S: PlotSurface>(
    surface: &mut S,
    axes: &mut S::Axes,
    values: &GridField,
    longitudes: &GridField,
    latitudes: &GridField,
    extent: &BoundingBox,
    levels: &[f64],
    style: &PanelStyle,
    title: &str,
) -> GraphicsResult<()> {
    values.require_same_shape(longitudes, "longitudes")?;
    values.require_same_shape(latitudes, "latitudes")?;

    surface.set_extent(axes, extent);
    surface.draw_coastlines(axes, COASTLINE_LINE_WIDTH);
    surface.draw_state_borders(axes, STATE_BORDER_LINE_WIDTH);
    surface.draw_county_borders(axes, COUNTY_BORDER_LINE_WIDTH);
    surface.filled_contour(axes, values, longitudes, latitudes, levels, &style.colormap);
    surface.colorbar(axes, style.colorbar_shrink, &style.units);
    surface.set_title(axes, title);

    debug!(
        colormap = %style.colormap,
        level_count = levels.len(),
        title,
        "panel rendered"
    );
    Ok(())
}
