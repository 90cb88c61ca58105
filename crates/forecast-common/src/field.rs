//! 2-D gridded value fields.

use crate::error::{GraphicsError, GraphicsResult};
use serde::{Deserialize, Serialize};

/// A 2-D numeric field stored as a flat row-major buffer.
///
/// Row-major means the value at column `i`, row `j` lives at index
/// `j * nx + i`, matching the ordering the upstream grid parsers emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridField {
    values: Vec<f32>,
    nx: usize,
    ny: usize,
}

impl GridField {
    /// Wrap a flat buffer as an nx-by-ny field.
    ///
    /// Rejects buffers whose length disagrees with the declared shape.
    pub fn new(values: Vec<f32>, nx: usize, ny: usize) -> GraphicsResult<Self> {
        let expected = nx * ny;
        if values.len() != expected {
            return Err(GraphicsError::FieldSizeMismatch {
                nx,
                ny,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { values, nx, ny })
    }

    /// Build a field of constant value, mostly useful for placeholder grids.
    pub fn constant(value: f32, nx: usize, ny: usize) -> Self {
        Self {
            values: vec![value; nx * ny],
            nx,
            ny,
        }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at column `i`, row `j`, or None when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        self.values.get(j * self.nx + i).copied()
    }

    pub fn same_shape(&self, other: &GridField) -> bool {
        self.nx == other.nx && self.ny == other.ny
    }

    /// Check another field against this one's shape.
    pub fn require_same_shape(
        &self,
        other: &GridField,
        context: &'static str,
    ) -> GraphicsResult<()> {
        if !self.same_shape(other) {
            return Err(GraphicsError::GridShapeMismatch {
                context,
                expected_nx: self.nx,
                expected_ny: self.ny,
                found_nx: other.nx,
                found_ny: other.ny,
            });
        }
        Ok(())
    }

    /// Elementwise `later - earlier`, used for trend panels.
    pub fn diff(later: &GridField, earlier: &GridField) -> GraphicsResult<GridField> {
        later.require_same_shape(earlier, "trend difference")?;
        let values = later
            .values
            .iter()
            .zip(earlier.values.iter())
            .map(|(l, e)| l - e)
            .collect();
        Ok(GridField {
            values,
            nx: later.nx,
            ny: later.ny,
        })
    }

    /// Minimum and maximum finite values, ignoring NaN.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut result: Option<(f32, f32)> = None;
        for &v in &self.values {
            if v.is_nan() {
                continue;
            }
            result = Some(match result {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            });
        }
        result
    }
}
