//! Shared test utilities for the forecast-panels workspace.
//!
//! Provides deterministic snapshot/field generators and a recording
//! implementation of the plot surface so integration tests can assert on
//! exactly what a figure was told to draw.

pub mod generators;
pub mod surface;

pub use generators::*;
pub use surface::{
    AxesHandle, AxesRecord, ContourRecord, FigureHandle, FigureRecord, RecordingSurface,
};
