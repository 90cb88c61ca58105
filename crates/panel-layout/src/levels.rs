//! Contour level tables.

use forecast_common::{GraphicsError, GraphicsResult, Season};
use serde::{Deserialize, Serialize};

/// A half-open arithmetic level sequence: start, start+step, ... < stop.
///
/// The stop value is exclusive, so `(0, 16, 1)` yields 0 through 15.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl LevelRange {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Generate the concrete level array.
    ///
    /// Levels are computed by index rather than accumulation so float drift
    /// cannot add or lose a boundary.
    pub fn levels(&self) -> GraphicsResult<Vec<f64>> {
        if self.step <= 0.0 || self.stop <= self.start {
            return Err(GraphicsError::InvalidLevelRange {
                start: self.start,
                stop: self.stop,
                step: self.step,
            });
        }
        let span = (self.stop - self.start) / self.step;
        let count = (span - 1e-9).floor() as usize + 1;
        Ok((0..count)
            .map(|k| self.start + k as f64 * self.step)
            .collect())
    }
}

/// A product's level table, either fixed or split by season.
///
/// The seasonal split follows the warm (April-October) / cold
/// (November-March) rule and is resolved once per render call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scale", rename_all = "snake_case")]
pub enum LevelScale {
    Fixed { range: LevelRange },
    Seasonal { warm: LevelRange, cold: LevelRange },
}

impl LevelScale {
    pub fn resolve(&self, season: Season) -> &LevelRange {
        match self {
            LevelScale::Fixed { range } => range,
            LevelScale::Seasonal { warm, cold } => match season {
                Season::Warm => warm,
                Season::Cold => cold,
            },
        }
    }
}
