//! Per-product configuration.
//!
//! Every branch the layout policy and composer take is driven by the
//! constants collected here, so adding a product means adding a table
//! entry, not another copy of the control flow.

use crate::levels::LevelScale;
use crate::window::HourWindow;
use forecast_common::{BoundingBox, Season};
use serde::{Deserialize, Serialize};

/// The forecast products this core knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    /// Red-flag-warning minimum relative humidity.
    MinRh,
    /// Overnight maximum relative humidity recovery.
    MaxRhRecovery,
    /// Daytime maximum temperature (heat risk in the warm season).
    MaxTemperature,
    /// Overnight minimum temperature (frost/freeze in the cold season).
    MinTemperature,
    /// SPC critical fire weather risk outlook.
    SpcCriticalFireWx,
}

/// Whether panels show raw values or successive differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    Value,
    Trend,
}

/// Styling for one panel family (value panels or trend panels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStyle {
    /// Color table name, passed through to the plotting surface.
    pub colormap: String,
    pub levels: LevelScale,
    /// Units label for the colorbar.
    pub units: String,
    /// Colorbar shrink factor.
    pub colorbar_shrink: f64,
}

/// Canvas size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }
}

/// Figure suptitle text below the banner, possibly season-branched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "subtitle", rename_all = "snake_case")]
pub enum SubtitleSpec {
    Fixed { text: String },
    Seasonal { warm: String, cold: String },
}

impl SubtitleSpec {
    pub fn fixed(text: &str) -> Self {
        SubtitleSpec::Fixed {
            text: text.to_string(),
        }
    }

    pub fn seasonal(warm: &str, cold: &str) -> Self {
        SubtitleSpec::Seasonal {
            warm: warm.to_string(),
            cold: cold.to_string(),
        }
    }

    pub fn resolve(&self, season: Season) -> &str {
        match self {
            SubtitleSpec::Fixed { text } => text,
            SubtitleSpec::Seasonal { warm, cold } => match season {
                Season::Warm => warm,
                Season::Cold => cold,
            },
        }
    }
}

/// Everything product-specific the layout policy and composer consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub kind: ProductKind,
    /// Fixed banner line of the suptitle.
    pub banner: String,
    pub subtitle: SubtitleSpec,
    /// Period noun for panel labels: "Day" or "Night".
    pub period_label: String,
    /// This product's early/late rule. Thresholds are per product and
    /// intentionally not shared.
    pub hour_window: HourWindow,
    pub value_style: PanelStyle,
    /// Absent for products that have no trend variant.
    pub trend_style: Option<PanelStyle>,
    /// Canvas size by panel count; index = panel count - 1.
    pub figure_sizes: [FigureSize; 5],
    /// Temperature products route values through the accessor's
    /// unit-conversion entry point before layout.
    pub needs_unit_conversion: bool,
    pub attribution: String,
    /// Geographic extent every panel is clipped to.
    pub extent: BoundingBox,
    /// Most snapshots this product will display (5, or 3 for SPC).
    pub max_snapshots: usize,
}

impl ProductConfig {
    /// Canvas size for a figure holding `panel_count` panels.
    pub fn figure_size(&self, panel_count: usize) -> FigureSize {
        debug_assert!((1..=5).contains(&panel_count));
        self.figure_sizes[panel_count.clamp(1, 5) - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_resolution() {
        let s = SubtitleSpec::seasonal("Heat Risk", "Temperature");
        assert_eq!(s.resolve(Season::Warm), "Heat Risk");
        assert_eq!(s.resolve(Season::Cold), "Temperature");

        let f = SubtitleSpec::fixed("Minimum RH");
        assert_eq!(f.resolve(Season::Warm), "Minimum RH");
    }

    #[test]
    fn test_kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&ProductKind::SpcCriticalFireWx).unwrap();
        assert_eq!(json, "\"spc_critical_fire_wx\"");
    }
}
