//! Time handling for forecast panel graphics.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The valid window of one forecast period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Window derived from a start time and a grid interval in hours.
    pub fn from_interval(start: DateTime<Utc>, interval_hours: i64) -> Self {
        Self {
            start,
            end: start + Duration::hours(interval_hours),
        }
    }

    /// True when `next` begins exactly where this window ends.
    pub fn contiguous_with(&self, next: &TimeWindow) -> bool {
        self.end == next.start
    }

    /// Short panel-title form: "MM/DD HHZ - MM/DD HHZ".
    pub fn title_label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%m/%d %HZ"),
            self.end.format("%m/%d %HZ")
        )
    }
}

/// Paired local and UTC timestamps for footer stamping.
///
/// Both come from the caller; this core never reads the system clock.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    pub local: NaiveDateTime,
    pub utc: DateTime<Utc>,
}

impl Clock {
    pub fn new(local: NaiveDateTime, utc: DateTime<Utc>) -> Self {
        Self { local, utc }
    }
}

/// Warm/cold season split used by temperature-style level tables.
///
/// Evaluated once per render call from the current UTC month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// April through October inclusive.
    Warm,
    /// November through March inclusive.
    Cold,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        if (4..=10).contains(&month) {
            Season::Warm
        } else {
            Season::Cold
        }
    }

    pub fn of(utc: DateTime<Utc>) -> Self {
        Self::from_month(utc.month())
    }
}

/// Fixed-format attribution/timestamp footer stamped on every figure.
pub fn footer_line(attribution: &str, clock: &Clock) -> String {
    format!(
        "{} | Image Created: {} Local | {} UTC",
        attribution,
        clock.local.format("%m/%d/%Y %H:%M"),
        clock.utc.format("%m/%d/%Y %H:%M")
    )
}

/// Banner text for the no-data placeholder figure.
pub fn no_data_banner(utc: DateTime<Utc>) -> String {
    format!("NO DATA FOR: {}", utc.format("%m/%d/%Y %HZ"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_window_from_interval() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let w = TimeWindow::from_interval(start, 12);
        assert_eq!(w.end, Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_contiguous_windows() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let a = TimeWindow::from_interval(start, 12);
        let b = TimeWindow::from_interval(a.end, 12);
        assert!(a.contiguous_with(&b));
        assert!(!b.contiguous_with(&a));
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(4), Season::Warm);
        assert_eq!(Season::from_month(7), Season::Warm);
        assert_eq!(Season::from_month(10), Season::Warm);
        assert_eq!(Season::from_month(11), Season::Cold);
        assert_eq!(Season::from_month(3), Season::Cold);
        assert_eq!(Season::from_month(1), Season::Cold);
    }

    #[test]
    fn test_footer_format() {
        let local = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        let line = footer_line("Data: NWS/NDFD", &Clock::new(local, utc));
        assert_eq!(
            line,
            "Data: NWS/NDFD | Image Created: 01/15/2024 06:30 Local | 01/15/2024 14:30 UTC"
        );
    }

    #[test]
    fn test_no_data_banner() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 9, 12, 0).unwrap();
        assert_eq!(no_data_banner(utc), "NO DATA FOR: 01/15/2024 09Z");
    }
}
