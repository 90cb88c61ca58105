//! Early/late hour windows.
//!
//! Each product decides, from the current UTC hour, whether its first
//! forecast period is still worth showing ("early") or has already elapsed
//! and should be dropped ("late"). The boundary operators genuinely differ
//! between products because they track different upstream refresh schedules.
//! Each convention is a separate variant; do not unify them.

use serde::{Deserialize, Serialize};

/// A product's early-window rule over UTC hours (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "convention", rename_all = "snake_case")]
pub enum HourWindow {
    /// Early iff `hour >= start || hour < end`.
    ///
    /// Overnight windows whose start hour is inclusive and end hour
    /// exclusive, e.g. the humidity-recovery 18Z/06Z split.
    WrapInclusiveStart { start: u32, end: u32 },

    /// Early iff `hour > after && hour <= through`.
    ///
    /// Daytime windows with an exclusive lower edge and inclusive upper
    /// edge, e.g. the red-flag minimum-humidity 06Z/18Z split.
    SpanExclusiveStart { after: u32, through: u32 },

    /// Early iff `hour >= start || hour <= through`.
    ///
    /// Overnight windows inclusive on both edges, e.g. the frost product's
    /// 14Z/11Z split.
    WrapInclusiveBoth { start: u32, through: u32 },
}

impl HourWindow {
    /// Whether `hour` falls in this product's early window.
    pub fn is_early(&self, hour: u32) -> bool {
        match *self {
            HourWindow::WrapInclusiveStart { start, end } => hour >= start || hour < end,
            HourWindow::SpanExclusiveStart { after, through } => hour > after && hour <= through,
            HourWindow::WrapInclusiveBoth { start, through } => hour >= start || hour <= through,
        }
    }
}
