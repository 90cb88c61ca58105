//! Layout selection.

use crate::product::{FieldMode, FigureSize, ProductConfig};
use chrono::{DateTime, Timelike, Utc};
use forecast_common::{GraphicsError, GraphicsResult, Season, TimeWindow};
use tracing::{debug, warn};

/// What a single panel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSource {
    /// Raw value of one snapshot (index into the supplied snapshot list).
    Value { snapshot: usize },
    /// Elementwise `later - earlier` of two consecutive snapshots.
    Difference { later: usize, earlier: usize },
}

/// One panel's assignment: grid cell, data source, label, and time window.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    /// Cell index in row-major order within the subplot grid. Every panel
    /// gets its own cell, including the fifth of a 1x5 row.
    pub cell: usize,
    pub source: PanelSource,
    /// Panel label, numbered by the snapshot's position in the supplied
    /// list so "Day 2" stays "Day 2" after day 1 is dropped.
    pub label: String,
    /// The panel's own valid window; titles never borrow a neighbor's.
    pub window: TimeWindow,
}

/// Output of the layout policy.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDecision {
    pub rows: usize,
    pub cols: usize,
    pub figure_size: FigureSize,
    /// Season resolved once from the current UTC month; level tables and
    /// subtitles branch on this, never per panel.
    pub season: Season,
    pub panels: Vec<PanelPlan>,
}

impl LayoutDecision {
    /// True when each panel's window starts exactly where the previous
    /// panel's ends.
    pub fn windows_are_contiguous(&self) -> bool {
        self.panels
            .windows(2)
            .all(|pair| pair[0].window.contiguous_with(&pair[1].window))
    }
}

/// Pick the panel arrangement for the supplied snapshot windows.
///
/// Pure over its inputs: the same windows, time, config, and mode always
/// produce the same decision.
///
/// One snapshot always yields a single panel showing snapshot 0. With more,
/// the product's hour window decides between showing everything ("early")
/// and dropping the first, already-elapsed period ("late"). The retained
/// set is always a suffix of the supplied list, so the first displayed
/// panel starts at the most recently begun period boundary.
pub fn select_layout(
    windows: &[TimeWindow],
    now_utc: DateTime<Utc>,
    config: &ProductConfig,
    mode: FieldMode,
) -> GraphicsResult<LayoutDecision> {
    let count = windows.len();
    if count == 0 || count > config.max_snapshots {
        return Err(GraphicsError::UnsupportedSnapshotCount {
            count,
            min: 1,
            max: config.max_snapshots,
        });
    }

    let season = Season::of(now_utc);
    let hour = now_utc.hour();
    let early = config.hour_window.is_early(hour);

    let first = if count == 1 || early { 0 } else { 1 };
    if first > 0 {
        warn!(
            product = ?config.kind,
            hour,
            "late window: dropping elapsed first period from display"
        );
    }
    let retained: Vec<usize> = (first..count).collect();

    let (rows, cols) = grid_shape(retained.len());
    let figure_size = config.figure_size(retained.len());

    let mut panels = Vec::with_capacity(retained.len());
    match mode {
        FieldMode::Value => {
            for (cell, &idx) in retained.iter().enumerate() {
                panels.push(PanelPlan {
                    cell,
                    source: PanelSource::Value { snapshot: idx },
                    label: format!("{} {}", config.period_label, idx + 1),
                    window: windows[idx],
                });
            }
        }
        FieldMode::Trend => {
            // Panel 0 anchors the trend with the raw first retained value;
            // every later panel shows the change from the period before it.
            let anchor = retained[0];
            panels.push(PanelPlan {
                cell: 0,
                source: PanelSource::Value { snapshot: anchor },
                label: format!("{} {}", config.period_label, anchor + 1),
                window: windows[anchor],
            });
            for (cell, pair) in retained.windows(2).enumerate() {
                let (earlier, later) = (pair[0], pair[1]);
                panels.push(PanelPlan {
                    cell: cell + 1,
                    source: PanelSource::Difference { later, earlier },
                    label: format!("{} {} Trend", config.period_label, later + 1),
                    window: windows[later],
                });
            }
        }
    }

    debug!(
        product = ?config.kind,
        hour,
        early,
        panel_count = panels.len(),
        rows,
        cols,
        "layout selected"
    );

    Ok(LayoutDecision {
        rows,
        cols,
        figure_size,
        season,
        panels,
    })
}

/// Subplot grid shape per panel count. Five panels occupy five distinct
/// cells of a 1x5 row.
fn grid_shape(panel_count: usize) -> (usize, usize) {
    match panel_count {
        1 => (1, 1),
        2 => (1, 2),
        3 => (1, 3),
        4 => (2, 2),
        _ => (1, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::product::ProductKind;
    use chrono::TimeZone;

    fn windows(count: usize) -> Vec<TimeWindow> {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                TimeWindow::from_interval(start + chrono::Duration::hours(24 * i as i64), 12)
            })
            .collect()
    }

    fn at_hour(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 2, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_single_snapshot_ignores_hour() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MinRh).unwrap();
        for hour in [0, 6, 12, 20] {
            let decision =
                select_layout(&windows(1), at_hour(hour), config, FieldMode::Value).unwrap();
            assert_eq!(decision.panels.len(), 1);
            assert_eq!(
                decision.panels[0].source,
                PanelSource::Value { snapshot: 0 }
            );
        }
    }

    #[test]
    fn test_late_window_keeps_suffix() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MinRh).unwrap();
        let decision = select_layout(&windows(4), at_hour(20), config, FieldMode::Value).unwrap();
        let sources: Vec<_> = decision.panels.iter().map(|p| p.source).collect();
        assert_eq!(
            sources,
            vec![
                PanelSource::Value { snapshot: 1 },
                PanelSource::Value { snapshot: 2 },
                PanelSource::Value { snapshot: 3 },
            ]
        );
        assert_eq!((decision.rows, decision.cols), (1, 3));
    }

    #[test]
    fn test_five_panels_get_distinct_cells() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MinRh).unwrap();
        let decision = select_layout(&windows(5), at_hour(10), config, FieldMode::Value).unwrap();
        assert_eq!((decision.rows, decision.cols), (1, 5));
        let mut cells: Vec<_> = decision.panels.iter().map(|p| p.cell).collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_trend_anchor_and_pairs() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MaxRhRecovery).unwrap();
        let decision = select_layout(&windows(3), at_hour(20), config, FieldMode::Trend).unwrap();
        assert_eq!(decision.panels[0].source, PanelSource::Value { snapshot: 0 });
        assert_eq!(
            decision.panels[1].source,
            PanelSource::Difference {
                later: 1,
                earlier: 0
            }
        );
        assert_eq!(
            decision.panels[2].source,
            PanelSource::Difference {
                later: 2,
                earlier: 1
            }
        );
        assert!(decision.panels[1].label.contains("Trend"));
    }

    #[test]
    fn test_count_bounds() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MinRh).unwrap();
        assert!(matches!(
            select_layout(&[], at_hour(10), config, FieldMode::Value),
            Err(GraphicsError::UnsupportedSnapshotCount { count: 0, .. })
        ));
        assert!(matches!(
            select_layout(&windows(6), at_hour(10), config, FieldMode::Value),
            Err(GraphicsError::UnsupportedSnapshotCount { count: 6, .. })
        ));
    }

    #[test]
    fn test_pure_function() {
        let catalog = ProductCatalog::builtin();
        let config = catalog.get(ProductKind::MinTemperature).unwrap();
        let w = windows(4);
        let a = select_layout(&w, at_hour(3), config, FieldMode::Trend).unwrap();
        let b = select_layout(&w, at_hour(3), config, FieldMode::Trend).unwrap();
        assert_eq!(a, b);
    }
}
