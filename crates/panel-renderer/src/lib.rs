//! Map-panel rendering and figure composition for forecast graphics.
//!
//! The actual drawing goes through the [`surface::PlotSurface`] trait; this
//! crate decides what gets drawn where and hands every created figure back
//! to the caller. No implicit current-figure registry anywhere.

pub mod compose;
pub mod panel;
pub mod surface;

pub use compose::{compose, compose_spc, no_data_figure, render_product};
pub use panel::render_panel;
pub use surface::PlotSurface;
