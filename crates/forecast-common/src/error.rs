//! Error types for the forecast-panels crates.

use thiserror::Error;

/// Result type alias using GraphicsError.
pub type GraphicsResult<T> = Result<T, GraphicsError>;

/// Primary error type for panel layout and rendering.
///
/// All variants are fatal for the render call that raised them: no partial
/// figure is returned. Recoverable conditions (missing upstream files,
/// network timeouts) are the grid accessor's concern and never reach here.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// Value and coordinate grids disagree on shape.
    #[error("grid shape mismatch in {context}: expected {expected_nx}x{expected_ny}, found {found_nx}x{found_ny}")]
    GridShapeMismatch {
        context: &'static str,
        expected_nx: usize,
        expected_ny: usize,
        found_nx: usize,
        found_ny: usize,
    },

    /// A flat value buffer does not hold nx * ny entries.
    #[error("field buffer holds {found} values, expected {expected} ({nx}x{ny})")]
    FieldSizeMismatch {
        nx: usize,
        ny: usize,
        expected: usize,
        found: usize,
    },

    /// Snapshot count outside the range a product supports.
    #[error("unsupported snapshot count {count}; this product accepts {min}..={max}")]
    UnsupportedSnapshotCount {
        count: usize,
        min: usize,
        max: usize,
    },

    /// The upstream grid accessor could not supply an expected field.
    #[error("grid accessor is missing expected field: {field}")]
    MissingGridAccessorField { field: &'static str },

    /// A contour level table that cannot produce any levels.
    #[error("invalid level range: start {start}, stop {stop}, step {step}")]
    InvalidLevelRange { start: f64, stop: f64, step: f64 },

    /// A product configuration that cannot drive the requested render.
    #[error("product configuration error: {0}")]
    ProductMisconfigured(String),
}
