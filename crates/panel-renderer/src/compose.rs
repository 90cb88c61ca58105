//! Figure composition.

use crate::panel::render_panel;
use crate::surface::PlotSurface;
use forecast_common::accessor::{collect_snapshots, GridAccessor};
use forecast_common::{
    footer_line, no_data_banner, Clock, GraphicsError, GraphicsResult, GridField, GridSnapshot,
    Season,
};
use panel_layout::{
    select_layout, FieldMode, LayoutDecision, PanelSource, PanelStyle, ProductConfig, ProductKind,
};
use tracing::debug;

/// Normalized figure coordinates of the footer stamp.
const FOOTER_X: f64 = 0.01;
const FOOTER_Y: f64 = 0.01;

/// Canvas size of the no-data placeholder, inches.
const NO_DATA_WIDTH_IN: f64 = 10.0;
const NO_DATA_HEIGHT_IN: f64 = 10.0;

/// Compose one multi-panel figure from a layout decision.
///
/// The figure is created at the decision's canvas size, stamped with the
/// suptitle and footer, and returned to the caller; nothing is registered
/// globally.
pub fn compose<S: PlotSurface>(
    surface: &mut S,
    decision: &LayoutDecision,
    snapshots: &[GridSnapshot],
    config: &ProductConfig,
    clock: &Clock,
) -> GraphicsResult<S::Figure> {
    let value_levels = config
        .value_style
        .levels
        .resolve(decision.season)
        .levels()?;
    let trend_levels = match &config.trend_style {
        Some(style) => Some(style.levels.resolve(decision.season).levels()?),
        None => None,
    };

    let mut figure = surface.create_figure(
        decision.figure_size.width_in,
        decision.figure_size.height_in,
    );
    let suptitle = format!(
        "{} - {}",
        config.banner,
        config.subtitle.resolve(decision.season)
    );
    surface.set_suptitle(&mut figure, &suptitle);

    for plan in &decision.panels {
        let mut axes = surface.add_map_axes(&mut figure, decision.rows, decision.cols, plan.cell);

        let diff_storage;
        let (field, coord_snapshot, style, levels): (&GridField, _, &PanelStyle, &[f64]) =
            match plan.source {
                PanelSource::Value { snapshot } => {
                    let snap = snapshot_at(snapshots, snapshot)?;
                    (
                        &snap.values,
                        snap,
                        &config.value_style,
                        value_levels.as_slice(),
                    )
                }
                PanelSource::Difference { later, earlier } => {
                    let later_snap = snapshot_at(snapshots, later)?;
                    let earlier_snap = snapshot_at(snapshots, earlier)?;
                    diff_storage = GridField::diff(&later_snap.values, &earlier_snap.values)?;
                    let style = config.trend_style.as_ref().ok_or_else(|| {
                        GraphicsError::ProductMisconfigured(format!(
                            "{:?} has no trend style but the layout holds difference panels",
                            config.kind
                        ))
                    })?;
                    let levels = trend_levels.as_deref().unwrap_or(value_levels.as_slice());
                    (&diff_storage, later_snap, style, levels)
                }
            };

        let title = format!("{} | {}", plan.label, plan.window.title_label());
        render_panel(
            surface,
            &mut axes,
            field,
            &coord_snapshot.longitudes,
            &coord_snapshot.latitudes,
            &config.extent,
            levels,
            style,
            &title,
        )?;
    }

    surface.figure_text(
        &mut figure,
        FOOTER_X,
        FOOTER_Y,
        &footer_line(&config.attribution, clock),
    );

    debug!(product = ?config.kind, panels = decision.panels.len(), "figure composed");
    Ok(figure)
}

/// Compose the SPC fire-weather outlook as independent per-day figures.
///
/// Consumers page through day 1 / day 2 / days 3+ images separately, so
/// this returns a fixed three-slot array of figure-or-absent rather than
/// one multi-panel figure. Never more than three figures regardless of
/// input.
pub fn compose_spc<S: PlotSurface>(
    surface: &mut S,
    snapshots: &[GridSnapshot],
    config: &ProductConfig,
    clock: &Clock,
) -> GraphicsResult<[Option<S::Figure>; 3]> {
    let count = snapshots.len();
    if count == 0 || count > 3 {
        return Err(GraphicsError::UnsupportedSnapshotCount {
            count,
            min: 1,
            max: 3,
        });
    }

    let season = Season::of(clock.utc);
    let levels = config.value_style.levels.resolve(season).levels()?;
    let suptitle = format!("{} - {}", config.banner, config.subtitle.resolve(season));
    let size = config.figure_size(1);
    let footer = footer_line(&config.attribution, clock);

    let mut figures = [None, None, None];
    for (day, snapshot) in snapshots.iter().enumerate() {
        let mut figure = surface.create_figure(size.width_in, size.height_in);
        surface.set_suptitle(&mut figure, &suptitle);

        let mut axes = surface.add_map_axes(&mut figure, 1, 1, 0);
        let label = if day == 2 {
            "Days 3+".to_string()
        } else {
            format!("Day {}", day + 1)
        };
        let title = format!("{} | {}", label, snapshot.window().title_label());
        render_panel(
            surface,
            &mut axes,
            &snapshot.values,
            &snapshot.longitudes,
            &snapshot.latitudes,
            &config.extent,
            &levels,
            &config.value_style,
            &title,
        )?;

        surface.figure_text(&mut figure, FOOTER_X, FOOTER_Y, &footer);
        figures[day] = Some(figure);
    }

    debug!(populated = count, "SPC outlook figures composed");
    Ok(figures)
}

/// Top-level entry: pull snapshots, convert units when the product needs
/// it, select the layout, compose.
///
/// For the SPC product the per-day figures come back as the populated
/// slots, in day order; callers needing the fixed three-slot shape use
/// [`compose_spc`] directly.
pub fn render_product<S, A>(
    surface: &mut S,
    accessor: &A,
    config: &ProductConfig,
    mode: FieldMode,
    clock: &Clock,
) -> GraphicsResult<Vec<S::Figure>>
where
    S: PlotSurface,
    A: GridAccessor + ?Sized,
{
    let mut snapshots = collect_snapshots(accessor, config.max_snapshots)?;
    if snapshots.is_empty() {
        return Err(GraphicsError::UnsupportedSnapshotCount {
            count: 0,
            min: 1,
            max: config.max_snapshots,
        });
    }

    if config.needs_unit_conversion {
        let converted = accessor.converted_temperatures(snapshots.len())?;
        if converted.len() != snapshots.len() {
            return Err(GraphicsError::MissingGridAccessorField {
                field: "converted temperature values",
            });
        }
        snapshots = snapshots
            .iter()
            .zip(converted)
            .map(|(snap, values)| snap.with_values(values))
            .collect::<GraphicsResult<Vec<_>>>()?;
    }

    if config.kind == ProductKind::SpcCriticalFireWx {
        let figures = compose_spc(surface, &snapshots, config, clock)?;
        return Ok(figures.into_iter().flatten().collect());
    }

    let windows: Vec<_> = snapshots.iter().map(|s| s.window()).collect();
    let decision = select_layout(&windows, clock.utc, config, mode)?;
    let figure = compose(surface, &decision, &snapshots, config, clock)?;
    Ok(vec![figure])
}

/// Fixed-layout placeholder for when no snapshots are available at all.
///
/// The layout policy and panel renderer are never involved here.
pub fn no_data_figure<S: PlotSurface>(
    surface: &mut S,
    attribution: &str,
    clock: &Clock,
) -> S::Figure {
    let mut figure = surface.create_figure(NO_DATA_WIDTH_IN, NO_DATA_HEIGHT_IN);
    surface.figure_text(&mut figure, 0.5, 0.5, &no_data_banner(clock.utc));
    surface.figure_text(
        &mut figure,
        FOOTER_X,
        FOOTER_Y,
        &footer_line(attribution, clock),
    );
    figure
}

fn snapshot_at(snapshots: &[GridSnapshot], index: usize) -> GraphicsResult<&GridSnapshot> {
    snapshots.get(index).ok_or_else(|| {
        GraphicsError::ProductMisconfigured(format!(
            "layout references snapshot {index} but only {} supplied",
            snapshots.len()
        ))
    })
}
