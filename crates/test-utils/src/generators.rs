//! Deterministic grid and snapshot generators.

use chrono::{DateTime, Duration, Utc};
use forecast_common::{GridField, GridSnapshot};

/// Grid where each cell value is `col * 1000 + row`.
///
/// Makes indexing mistakes visible: `field.get(i, j) == i * 1000 + j`.
pub fn ramp_field(nx: usize, ny: usize) -> GridField {
    let mut values = Vec::with_capacity(nx * ny);
    for row in 0..ny {
        for col in 0..nx {
            values.push((col * 1000 + row) as f32);
        }
    }
    GridField::new(values, nx, ny).expect("ramp_field dimensions are consistent")
}

/// Coordinate arrays for a small regular grid over the central US.
pub fn coordinate_fields(nx: usize, ny: usize) -> (GridField, GridField) {
    let mut lats = Vec::with_capacity(nx * ny);
    let mut lons = Vec::with_capacity(nx * ny);
    for row in 0..ny {
        for col in 0..nx {
            lats.push(45.0 - row as f32 * 0.5);
            lons.push(-110.0 + col as f32 * 0.5);
        }
    }
    (
        GridField::new(lats, nx, ny).expect("latitude dimensions are consistent"),
        GridField::new(lons, nx, ny).expect("longitude dimensions are consistent"),
    )
}

/// Snapshot with a constant value field and a derived valid window.
pub fn snapshot_at(
    valid_start: DateTime<Utc>,
    interval_hours: i64,
    value: f32,
    nx: usize,
    ny: usize,
) -> GridSnapshot {
    let (lats, lons) = coordinate_fields(nx, ny);
    GridSnapshot::new(
        GridField::constant(value, nx, ny),
        lats,
        lons,
        valid_start,
        interval_hours,
    )
    .expect("generator shapes are consistent")
}

/// Time-ordered snapshots with contiguous windows.
///
/// Snapshot `i` has constant value `i * 10.0` so difference panels come out
/// to exactly 10.0 everywhere.
pub fn snapshot_series(
    first_start: DateTime<Utc>,
    interval_hours: i64,
    count: usize,
    nx: usize,
    ny: usize,
) -> Vec<GridSnapshot> {
    (0..count)
        .map(|i| {
            snapshot_at(
                first_start + Duration::hours(interval_hours * i as i64),
                interval_hours,
                i as f32 * 10.0,
                nx,
                ny,
            )
        })
        .collect()
}
