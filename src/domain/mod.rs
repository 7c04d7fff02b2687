// src/domain/mod.rs

//! Pure reshaping of the dataset into chart-ready tables.
//!
//! Nothing in here performs I/O or reads the clock; callers pass in the
//! document, the control values and the current date.

pub mod daily;
pub mod options;
pub mod pie;
pub mod prices;

pub use daily::{daily_overlay, DailyCounter, SeriesKind};
pub use options::{build_options, OptionField, SelectOption};
pub use pie::pie_table;
pub use prices::{district_area_series, district_price_series, PriceSelection};

/// Prices at or above this (PLN per m²) are treated as outliers when fixing the axis.
pub const PRICE_OUTLIER_THRESHOLD: f64 = 50_000.0;

/// Window of the upstream moving averages, in days. Only used for legend
/// text: the averages are computed upstream.
pub const MOVING_AVERAGE_DAYS: u32 = 7;

/// Tunables for the pipeline, defaulting to the threshold above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub price_outlier_threshold: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            price_outlier_threshold: PRICE_OUTLIER_THRESHOLD,
        }
    }
}
