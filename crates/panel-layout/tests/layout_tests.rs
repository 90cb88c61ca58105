//! Layout policy integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use forecast_common::{Season, TimeWindow};
use panel_layout::{
    select_layout, FieldMode, PanelSource, ProductCatalog, ProductKind,
};

fn contiguous_windows(count: usize, interval_hours: i64) -> Vec<TimeWindow> {
    let start = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            TimeWindow::from_interval(
                start + Duration::hours(interval_hours * i as i64),
                interval_hours,
            )
        })
        .collect()
}

fn utc_at(month: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, 2, hour, 0, 0).unwrap()
}

// ============================================================================
// Panel-count properties across all products and counts
// ============================================================================

#[test]
fn test_panel_count_never_exceeds_snapshot_count() {
    let catalog = ProductCatalog::builtin();
    for kind in catalog.kinds() {
        let config = catalog.get(kind).unwrap();
        for count in 1..=config.max_snapshots {
            for mode in [FieldMode::Value, FieldMode::Trend] {
                for hour in 0..24 {
                    let decision =
                        select_layout(&contiguous_windows(count, 24), utc_at(7, hour), config, mode)
                            .unwrap();
                    assert!(decision.panels.len() <= count);
                    assert!(!decision.panels.is_empty());
                    // Every assigned panel occupies its own cell.
                    let mut cells: Vec<_> =
                        decision.panels.iter().map(|p| p.cell).collect();
                    cells.sort_unstable();
                    cells.dedup();
                    assert_eq!(cells.len(), decision.panels.len());
                }
            }
        }
    }
}

#[test]
fn test_trend_difference_panel_count() {
    let catalog = ProductCatalog::builtin();
    for kind in [ProductKind::MinRh, ProductKind::MaxRhRecovery] {
        let config = catalog.get(kind).unwrap();
        for count in 2..=5 {
            let decision = select_layout(
                &contiguous_windows(count, 24),
                utc_at(7, 12),
                config,
                FieldMode::Trend,
            )
            .unwrap();
            let diffs = decision
                .panels
                .iter()
                .filter(|p| matches!(p.source, PanelSource::Difference { .. }))
                .count();
            assert_eq!(diffs, decision.panels.len() - 1);
        }
    }
}

#[test]
fn test_displayed_windows_are_contiguous() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MaxRhRecovery).unwrap();
    for count in 1..=5 {
        for hour in [2, 20] {
            let decision = select_layout(
                &contiguous_windows(count, 24),
                utc_at(7, hour),
                config,
                FieldMode::Value,
            )
            .unwrap();
            // 24h spacing with 24h intervals: neighbors must chain exactly.
            assert!(decision.windows_are_contiguous());
        }
    }
}

// ============================================================================
// Hour boundaries (each product keeps its own operators)
// ============================================================================

#[test]
fn test_recovery_humidity_hour_boundaries() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MaxRhRecovery).unwrap();
    let windows = contiguous_windows(2, 24);

    // Early per the >= 18 or < 6 rule: both periods shown side by side.
    for hour in [18, 5] {
        let decision =
            select_layout(&windows, utc_at(7, hour), config, FieldMode::Value).unwrap();
        assert_eq!(decision.panels.len(), 2, "hour {hour} should be early");
        assert_eq!((decision.rows, decision.cols), (1, 2));
    }

    // 06Z is late: the first overnight period has elapsed.
    let decision = select_layout(&windows, utc_at(7, 6), config, FieldMode::Value).unwrap();
    assert_eq!(decision.panels.len(), 1);
    assert_eq!(
        decision.panels[0].source,
        PanelSource::Value { snapshot: 1 }
    );
}

#[test]
fn test_min_rh_three_snapshot_scenario() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MinRh).unwrap();
    let windows = contiguous_windows(3, 24);

    let early = select_layout(&windows, utc_at(7, 10), config, FieldMode::Value).unwrap();
    let sources: Vec<_> = early.panels.iter().map(|p| p.source).collect();
    assert_eq!(
        sources,
        vec![
            PanelSource::Value { snapshot: 0 },
            PanelSource::Value { snapshot: 1 },
            PanelSource::Value { snapshot: 2 },
        ]
    );
    assert_eq!((early.rows, early.cols), (1, 3));

    let levels = config
        .value_style
        .levels
        .resolve(early.season)
        .levels()
        .unwrap();
    assert_eq!(levels, (0..16).map(f64::from).collect::<Vec<_>>());
    assert_eq!(config.value_style.colormap, "YlOrBr_r");

    let late = select_layout(&windows, utc_at(7, 20), config, FieldMode::Value).unwrap();
    let sources: Vec<_> = late.panels.iter().map(|p| p.source).collect();
    assert_eq!(
        sources,
        vec![
            PanelSource::Value { snapshot: 1 },
            PanelSource::Value { snapshot: 2 },
        ]
    );
}

#[test]
fn test_frost_hour_boundaries() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MinTemperature).unwrap();
    let windows = contiguous_windows(2, 24);

    for (hour, early) in [(14, true), (10, true), (11, false), (13, false)] {
        let decision =
            select_layout(&windows, utc_at(1, hour), config, FieldMode::Value).unwrap();
        let expected = if early { 2 } else { 1 };
        assert_eq!(decision.panels.len(), expected, "hour {hour}");
    }
}

// ============================================================================
// Seasonal level ranges
// ============================================================================

#[test]
fn test_temperature_seasonal_boundaries() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MaxTemperature).unwrap();
    let windows = contiguous_windows(2, 24);

    let warm = select_layout(&windows, utc_at(7, 10), config, FieldMode::Value).unwrap();
    assert_eq!(warm.season, Season::Warm);
    let warm_levels = config
        .value_style
        .levels
        .resolve(warm.season)
        .levels()
        .unwrap();
    assert_eq!(warm_levels[0], 40.0);

    // January, November, and March all resolve cold.
    for month in [1, 11, 3] {
        let cold = select_layout(&windows, utc_at(month, 10), config, FieldMode::Value).unwrap();
        assert_eq!(cold.season, Season::Cold, "month {month}");
        let cold_levels = config
            .value_style
            .levels
            .resolve(cold.season)
            .levels()
            .unwrap();
        assert_eq!(cold_levels[0], 10.0);
    }
}

// ============================================================================
// Labels
// ============================================================================

#[test]
fn test_labels_keep_original_period_numbers() {
    let catalog = ProductCatalog::builtin();
    let config = catalog.get(ProductKind::MinRh).unwrap();
    let windows = contiguous_windows(3, 24);

    let late = select_layout(&windows, utc_at(7, 20), config, FieldMode::Value).unwrap();
    assert_eq!(late.panels[0].label, "Day 2");
    assert_eq!(late.panels[1].label, "Day 3");
    // Each panel's window is its own snapshot's window.
    assert_eq!(late.panels[0].window, windows[1]);
    assert_eq!(late.panels[1].window, windows[2]);
}
