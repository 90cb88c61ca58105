//! The built-in product catalog.
//!
//! One `ProductConfig` per product, loadable from JSON for overrides. The
//! hour thresholds are named per product below; several pairs look similar
//! but track different upstream refresh schedules, so they stay separate.

use crate::levels::{LevelRange, LevelScale};
use crate::product::{FigureSize, PanelStyle, ProductConfig, ProductKind, SubtitleSpec};
use crate::window::HourWindow;
use forecast_common::BoundingBox;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Red-flag minimum RH refreshes with the daytime package: hour > 5, <= 17.
pub const MIN_RH_EARLY: HourWindow = HourWindow::SpanExclusiveStart {
    after: 5,
    through: 17,
};

/// Overnight recovery runs 18Z through 06Z exclusive.
pub const MAX_RH_RECOVERY_EARLY: HourWindow = HourWindow::WrapInclusiveStart { start: 18, end: 6 };

/// Daytime max temperature, same shape as MIN_RH_EARLY but owned by a
/// different data source.
pub const MAX_TEMPERATURE_EARLY: HourWindow = HourWindow::SpanExclusiveStart {
    after: 5,
    through: 17,
};

/// Frost/min temperature cuts over at 14Z and 11Z, both edges inclusive.
pub const MIN_TEMPERATURE_EARLY: HourWindow = HourWindow::WrapInclusiveBoth {
    start: 14,
    through: 10,
};

/// SPC outlook figures are per-day and never drop a period, but the window
/// still drives logging of the package age.
pub const SPC_FIRE_WX_EARLY: HourWindow = HourWindow::SpanExclusiveStart {
    after: 5,
    through: 17,
};

const CONUS_EXTENT: BoundingBox = BoundingBox {
    min_x: -125.0,
    min_y: 24.0,
    max_x: -66.5,
    max_y: 50.5,
};

const NDFD_ATTRIBUTION: &str = "Data Source: NOAA/NWS/NDFD";
const SPC_ATTRIBUTION: &str = "Data Source: NOAA/NWS/SPC";

/// Named product configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: HashMap<ProductKind, ProductConfig>,
}

impl ProductCatalog {
    /// The catalog with the shipped constants for every product.
    pub fn builtin() -> Self {
        let mut products = HashMap::new();
        for config in [
            min_rh(),
            max_rh_recovery(),
            max_temperature(),
            min_temperature(),
            spc_critical_fire_wx(),
        ] {
            products.insert(config.kind, config);
        }
        Self { products }
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn get(&self, kind: ProductKind) -> Option<&ProductConfig> {
        self.products.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProductKind> + '_ {
        self.products.keys().copied()
    }

    /// Check every config can actually drive a render call.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (kind, config) in &self.products {
            if config.kind != *kind {
                return Err(CatalogError::ValidationError(format!(
                    "catalog key {kind:?} holds config for {:?}",
                    config.kind
                )));
            }
            if !(1..=5).contains(&config.max_snapshots) {
                return Err(CatalogError::ValidationError(format!(
                    "{kind:?}: max_snapshots {} outside 1..=5",
                    config.max_snapshots
                )));
            }
            for style in std::iter::once(&config.value_style).chain(config.trend_style.as_ref()) {
                validate_style(*kind, style)?;
            }
            for size in &config.figure_sizes {
                if size.width_in <= 0.0 || size.height_in <= 0.0 {
                    return Err(CatalogError::ValidationError(format!(
                        "{kind:?}: non-positive figure size"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn validate_style(kind: ProductKind, style: &PanelStyle) -> Result<(), CatalogError> {
    for range in level_ranges(&style.levels) {
        range.levels().map_err(|e| {
            CatalogError::ValidationError(format!("{kind:?}: {e}"))
        })?;
    }
    if !(0.0..=1.0).contains(&style.colorbar_shrink) || style.colorbar_shrink == 0.0 {
        return Err(CatalogError::ValidationError(format!(
            "{kind:?}: colorbar shrink {} outside (0, 1]",
            style.colorbar_shrink
        )));
    }
    Ok(())
}

fn level_ranges(scale: &LevelScale) -> Vec<&LevelRange> {
    match scale {
        LevelScale::Fixed { range } => vec![range],
        LevelScale::Seasonal { warm, cold } => vec![warm, cold],
    }
}

fn min_rh() -> ProductConfig {
    ProductConfig {
        kind: ProductKind::MinRh,
        banner: "National Weather Service Forecast".to_string(),
        subtitle: SubtitleSpec::fixed("Red Flag Warning Minimum Relative Humidity (RH <= 15%)"),
        period_label: "Day".to_string(),
        hour_window: MIN_RH_EARLY,
        value_style: PanelStyle {
            colormap: "YlOrBr_r".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(0.0, 16.0, 1.0),
            },
            units: "%".to_string(),
            colorbar_shrink: 0.8,
        },
        trend_style: Some(PanelStyle {
            colormap: "BrBG".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(-15.0, 16.0, 1.0),
            },
            units: "%".to_string(),
            colorbar_shrink: 0.8,
        }),
        figure_sizes: [
            FigureSize::new(10.0, 10.0),
            FigureSize::new(9.0, 6.0),
            FigureSize::new(15.0, 6.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(25.0, 10.0),
        ],
        needs_unit_conversion: false,
        attribution: NDFD_ATTRIBUTION.to_string(),
        extent: CONUS_EXTENT,
        max_snapshots: 5,
    }
}

fn max_rh_recovery() -> ProductConfig {
    ProductConfig {
        kind: ProductKind::MaxRhRecovery,
        banner: "National Weather Service Forecast".to_string(),
        subtitle: SubtitleSpec::fixed("Maximum Relative Humidity Recovery (Excellent >= 80%)"),
        period_label: "Night".to_string(),
        hour_window: MAX_RH_RECOVERY_EARLY,
        value_style: PanelStyle {
            colormap: "YlGnBu".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(50.0, 101.0, 1.0),
            },
            units: "%".to_string(),
            colorbar_shrink: 0.8,
        },
        trend_style: Some(PanelStyle {
            colormap: "BrBG".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(-25.0, 26.0, 1.0),
            },
            units: "%".to_string(),
            colorbar_shrink: 0.8,
        }),
        figure_sizes: [
            FigureSize::new(10.0, 10.0),
            FigureSize::new(9.0, 6.0),
            FigureSize::new(9.0, 6.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(25.0, 10.0),
        ],
        needs_unit_conversion: false,
        attribution: NDFD_ATTRIBUTION.to_string(),
        extent: CONUS_EXTENT,
        max_snapshots: 5,
    }
}

fn max_temperature() -> ProductConfig {
    ProductConfig {
        kind: ProductKind::MaxTemperature,
        banner: "National Weather Service Forecast".to_string(),
        subtitle: SubtitleSpec::seasonal(
            "Maximum Temperature (Heat Risk)",
            "Maximum Temperature",
        ),
        period_label: "Day".to_string(),
        hour_window: MAX_TEMPERATURE_EARLY,
        value_style: PanelStyle {
            colormap: "coolwarm".to_string(),
            levels: LevelScale::Seasonal {
                warm: LevelRange::new(40.0, 121.0, 1.0),
                cold: LevelRange::new(10.0, 81.0, 1.0),
            },
            units: "\u{00b0}F".to_string(),
            colorbar_shrink: 0.8,
        },
        trend_style: Some(PanelStyle {
            colormap: "seismic".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(-25.0, 26.0, 1.0),
            },
            units: "\u{00b0}F".to_string(),
            colorbar_shrink: 0.8,
        }),
        figure_sizes: [
            FigureSize::new(10.0, 10.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(15.0, 6.0),
            FigureSize::new(15.0, 6.0),
            FigureSize::new(25.0, 10.0),
        ],
        needs_unit_conversion: true,
        attribution: NDFD_ATTRIBUTION.to_string(),
        extent: CONUS_EXTENT,
        max_snapshots: 5,
    }
}

fn min_temperature() -> ProductConfig {
    ProductConfig {
        kind: ProductKind::MinTemperature,
        banner: "National Weather Service Forecast".to_string(),
        subtitle: SubtitleSpec::seasonal(
            "Minimum Temperature",
            "Frost & Freeze Outlook (Min T <= 32\u{00b0}F)",
        ),
        period_label: "Night".to_string(),
        hour_window: MIN_TEMPERATURE_EARLY,
        value_style: PanelStyle {
            colormap: "cool_r".to_string(),
            levels: LevelScale::Seasonal {
                warm: LevelRange::new(20.0, 91.0, 1.0),
                cold: LevelRange::new(-10.0, 41.0, 1.0),
            },
            units: "\u{00b0}F".to_string(),
            colorbar_shrink: 0.8,
        },
        trend_style: Some(PanelStyle {
            colormap: "seismic".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(-25.0, 26.0, 1.0),
            },
            units: "\u{00b0}F".to_string(),
            colorbar_shrink: 0.8,
        }),
        figure_sizes: [
            FigureSize::new(10.0, 10.0),
            FigureSize::new(9.0, 6.0),
            FigureSize::new(15.0, 6.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(25.0, 10.0),
        ],
        needs_unit_conversion: true,
        attribution: NDFD_ATTRIBUTION.to_string(),
        extent: CONUS_EXTENT,
        max_snapshots: 5,
    }
}

fn spc_critical_fire_wx() -> ProductConfig {
    ProductConfig {
        kind: ProductKind::SpcCriticalFireWx,
        banner: "Critical Fire Weather Risk Outlook".to_string(),
        subtitle: SubtitleSpec::fixed("SPC Critical Fire Weather Risk"),
        period_label: "Day".to_string(),
        hour_window: SPC_FIRE_WX_EARLY,
        value_style: PanelStyle {
            colormap: "YlOrRd".to_string(),
            levels: LevelScale::Fixed {
                range: LevelRange::new(4.0, 12.0, 2.0),
            },
            units: "Risk Category".to_string(),
            colorbar_shrink: 0.8,
        },
        trend_style: None,
        figure_sizes: [
            FigureSize::new(10.0, 10.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(10.0, 10.0),
            FigureSize::new(10.0, 10.0),
        ],
        needs_unit_conversion: false,
        attribution: SPC_ATTRIBUTION.to_string(),
        extent: CONUS_EXTENT,
        max_snapshots: 3,
    }
}

/// Catalog loading/validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
