//! Panel layout policy for forecast graphics.
//!
//! Maps (snapshot count, current UTC hour, current UTC month) to a subplot
//! arrangement: which snapshots fill which panel, each panel's time window
//! and label, and for trend products which snapshot pairs to difference.

pub mod catalog;
pub mod decision;
pub mod levels;
pub mod product;
pub mod window;

pub use catalog::{CatalogError, ProductCatalog};
pub use decision::{select_layout, LayoutDecision, PanelPlan, PanelSource};
pub use levels::{LevelRange, LevelScale};
pub use product::{FieldMode, FigureSize, PanelStyle, ProductConfig, ProductKind, SubtitleSpec};
pub use window::HourWindow;
