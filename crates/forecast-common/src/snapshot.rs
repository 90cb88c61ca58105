//! Forecast grid snapshots.

use crate::error::GraphicsResult;
use crate::field::GridField;
use crate::time::TimeWindow;
use chrono::{DateTime, Utc};

/// One forecast-grid valid-time slice.
///
/// Values and both coordinate arrays share one shape, checked at
/// construction. Snapshots are built per render call and discarded once the
/// figure is produced; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    pub values: GridField,
    pub latitudes: GridField,
    pub longitudes: GridField,
    pub valid_start: DateTime<Utc>,
    pub valid_end: DateTime<Utc>,
}

impl GridSnapshot {
    /// Assemble a snapshot, deriving `valid_end` from the grid interval.
    pub fn new(
        values: GridField,
        latitudes: GridField,
        longitudes: GridField,
        valid_start: DateTime<Utc>,
        interval_hours: i64,
    ) -> GraphicsResult<Self> {
        values.require_same_shape(&latitudes, "latitudes")?;
        values.require_same_shape(&longitudes, "longitudes")?;
        let window = TimeWindow::from_interval(valid_start, interval_hours);
        Ok(Self {
            values,
            latitudes,
            longitudes,
            valid_start: window.start,
            valid_end: window.end,
        })
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.valid_start, self.valid_end)
    }

    /// Replace the value field, keeping coordinates and window.
    ///
    /// Used after unit conversion for temperature products.
    pub fn with_values(&self, values: GridField) -> GraphicsResult<Self> {
        self.latitudes.require_same_shape(&values, "converted values")?;
        Ok(Self {
            values,
            latitudes: self.latitudes.clone(),
            longitudes: self.longitudes.clone(),
            valid_start: self.valid_start,
            valid_end: self.valid_end,
        })
    }
}
