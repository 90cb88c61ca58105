//! The seam between this core and upstream grid retrieval/parsing.

use crate::error::{GraphicsError, GraphicsResult};
use crate::field::GridField;
use crate::snapshot::GridSnapshot;

/// Supplier of parsed forecast-grid snapshots.
///
/// Everything behind this trait (file retrieval, grid-file decoding, unit
/// arithmetic) is upstream's responsibility; implementations hand this core
/// fully resident in-memory arrays. Retry and timeout logic belongs behind
/// the implementation, never in the render path.
pub trait GridAccessor {
    /// Number of time-ordered snapshots available for this render call.
    fn snapshot_count(&self) -> usize;

    /// Snapshot at `index`, earliest first.
    fn snapshot(&self, index: usize) -> GraphicsResult<GridSnapshot>;

    /// Unit-converted value fields for temperature products.
    ///
    /// Returns `count` converted arrays for the first `count` snapshots.
    /// Accessors backing non-temperature products may leave the default,
    /// which reports the field as missing.
    fn converted_temperatures(&self, count: usize) -> GraphicsResult<Vec<GridField>> {
        let _ = count;
        Err(GraphicsError::MissingGridAccessorField {
            field: "converted temperature values",
        })
    }
}

/// Collect up to `max` snapshots from an accessor, earliest first.
pub fn collect_snapshots<A: GridAccessor + ?Sized>(
    accessor: &A,
    max: usize,
) -> GraphicsResult<Vec<GridSnapshot>> {
    let count = accessor.snapshot_count().min(max);
    (0..count).map(|i| accessor.snapshot(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct TwoSlices;

    impl GridAccessor for TwoSlices {
        fn snapshot_count(&self) -> usize {
            2
        }

        fn snapshot(&self, index: usize) -> GraphicsResult<GridSnapshot> {
            let start = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap()
                + chrono::Duration::hours(12 * index as i64);
            GridSnapshot::new(
                GridField::constant(index as f32, 2, 2),
                GridField::constant(40.0, 2, 2),
                GridField::constant(-100.0, 2, 2),
                start,
                12,
            )
        }
    }

    #[test]
    fn test_collect_caps_at_max() {
        let snaps = collect_snapshots(&TwoSlices, 1).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].values.get(0, 0), Some(0.0));
    }

    #[test]
    fn test_default_conversion_is_missing_field() {
        assert!(matches!(
            TwoSlices.converted_temperatures(2),
            Err(GraphicsError::MissingGridAccessorField { .. })
        ));
    }
}
