//! A plot surface that records every drawing call.

use forecast_common::{BoundingBox, GridField};
use panel_renderer::PlotSurface;

/// Recorded state of one figure.
#[derive(Debug, Clone, Default)]
pub struct FigureRecord {
    pub width_in: f64,
    pub height_in: f64,
    pub suptitle: Option<String>,
    /// Free text stamps: (x, y, text) in normalized figure coordinates.
    pub texts: Vec<(f64, f64, String)>,
    pub axes: Vec<AxesRecord>,
}

impl FigureRecord {
    /// The footer stamp, if one was placed.
    pub fn footer(&self) -> Option<&str> {
        self.texts.last().map(|(_, _, text)| text.as_str())
    }
}

/// Recorded state of one axes/panel.
#[derive(Debug, Clone, Default)]
pub struct AxesRecord {
    pub rows: usize,
    pub cols: usize,
    pub cell: usize,
    pub extent: Option<BoundingBox>,
    /// Base layers in draw order: (layer name, line width).
    pub base_layers: Vec<(&'static str, f64)>,
    pub contours: Vec<ContourRecord>,
    /// (shrink, units label)
    pub colorbars: Vec<(f64, String)>,
    pub title: Option<String>,
}

/// One filled-contour call.
#[derive(Debug, Clone)]
pub struct ContourRecord {
    pub values: Vec<f32>,
    pub nx: usize,
    pub ny: usize,
    pub levels: Vec<f64>,
    pub colormap: String,
}

/// Implements [`PlotSurface`] by recording rather than drawing.
///
/// Handles are indices into the surface's figure list; inspect figures
/// through [`RecordingSurface::figure`] after composition.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    figures: Vec<FigureRecord>,
}

/// Opaque figure handle returned to composition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureHandle(usize);

/// Opaque axes handle: (figure index, axes index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxesHandle {
    figure: usize,
    axes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    pub fn figure(&self, handle: &FigureHandle) -> &FigureRecord {
        &self.figures[handle.0]
    }

    fn axes_mut(&mut self, handle: &AxesHandle) -> &mut AxesRecord {
        &mut self.figures[handle.figure].axes[handle.axes]
    }
}

impl PlotSurface for RecordingSurface {
    type Figure = FigureHandle;
    type Axes = AxesHandle;

    fn create_figure(&mut self, width_in: f64, height_in: f64) -> FigureHandle {
        self.figures.push(FigureRecord {
            width_in,
            height_in,
            ..Default::default()
        });
        FigureHandle(self.figures.len() - 1)
    }

    fn add_map_axes(
        &mut self,
        figure: &mut FigureHandle,
        rows: usize,
        cols: usize,
        cell: usize,
    ) -> AxesHandle {
        let record = &mut self.figures[figure.0];
        record.axes.push(AxesRecord {
            rows,
            cols,
            cell,
            ..Default::default()
        });
        AxesHandle {
            figure: figure.0,
            axes: record.axes.len() - 1,
        }
    }

    fn set_extent(&mut self, axes: &mut AxesHandle, extent: &BoundingBox) {
        self.axes_mut(axes).extent = Some(*extent);
    }

    fn draw_coastlines(&mut self, axes: &mut AxesHandle, line_width: f64) {
        self.axes_mut(axes).base_layers.push(("coastlines", line_width));
    }

    fn draw_state_borders(&mut self, axes: &mut AxesHandle, line_width: f64) {
        self.axes_mut(axes).base_layers.push(("states", line_width));
    }

    fn draw_county_borders(&mut self, axes: &mut AxesHandle, line_width: f64) {
        self.axes_mut(axes).base_layers.push(("counties", line_width));
    }

    fn filled_contour(
        &mut self,
        axes: &mut AxesHandle,
        values: &GridField,
        _longitudes: &GridField,
        _latitudes: &GridField,
        levels: &[f64],
        colormap: &str,
    ) {
        let record = ContourRecord {
            values: values.values().to_vec(),
            nx: values.nx(),
            ny: values.ny(),
            levels: levels.to_vec(),
            colormap: colormap.to_string(),
        };
        self.axes_mut(axes).contours.push(record);
    }

    fn colorbar(&mut self, axes: &mut AxesHandle, shrink: f64, units: &str) {
        self.axes_mut(axes).colorbars.push((shrink, units.to_string()));
    }

    fn set_title(&mut self, axes: &mut AxesHandle, text: &str) {
        self.axes_mut(axes).title = Some(text.to_string());
    }

    fn set_suptitle(&mut self, figure: &mut FigureHandle, text: &str) {
        self.figures[figure.0].suptitle = Some(text.to_string());
    }

    fn figure_text(&mut self, figure: &mut FigureHandle, x: f64, y: f64, text: &str) {
        self.figures[figure.0].texts.push((x, y, text.to_string()));
    }
}
