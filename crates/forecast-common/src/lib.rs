//! Common types shared across the forecast-panels crates.

pub mod accessor;
pub mod bbox;
pub mod error;
pub mod field;
pub mod snapshot;
pub mod time;

pub use accessor::GridAccessor;
pub use bbox::BoundingBox;
pub use error::{GraphicsError, GraphicsResult};
pub use field::GridField;
pub use snapshot::GridSnapshot;
pub use time::{footer_line, no_data_banner, Clock, Season, TimeWindow};
