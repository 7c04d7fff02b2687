// src/domain/prices.rs

use crate::feed::{AreaPriceRecord, Document, LocationPriceRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Current values of the three price controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSelection {
    pub district: String,
    pub area: String,
    pub axis_lock: bool,
}

/// One month of one price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPoint {
    pub month: String,
    pub month_num: i64,
    pub avg_price_per_m: f64,
}

/// Fixed y-axis range used when the axis lock is on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictAreaSeries {
    pub points: Vec<MonthPoint>,
    /// Sum of `num_flats` over the selected records.
    pub num_flats: u64,
    /// Present only when the axis lock is on and at least one price qualifies.
    pub bounds: Option<PriceBounds>,
}

/// No price records exist for the requested district and area bucket.
///
/// Not fatal: the chart is drawn empty with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no listings for {district} with flat size {area}")]
pub struct EmptySelection {
    pub district: String,
    pub area: String,
}

impl DistrictAreaSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Classifies an empty series for the caller; the series itself stays usable.
    pub fn check_selection(&self, selection: &PriceSelection) -> Result<(), EmptySelection> {
        if self.is_empty() {
            return Err(EmptySelection {
                district: selection.district.clone(),
                area: selection.area.clone(),
            });
        }
        Ok(())
    }
}

/// Monthly prices for one district and area bucket, oldest first.
pub fn district_area_series(
    doc: &Document,
    selection: &PriceSelection,
    outlier_threshold: f64,
) -> DistrictAreaSeries {
    let mut selected: Vec<&AreaPriceRecord> = doc
        .price_m_loc_area_cat
        .iter()
        .filter(|r| r.location == selection.district && r.area_category == selection.area)
        .collect();
    selected.sort_by_key(|r| r.month_num);

    let num_flats = selected.iter().map(|r| r.num_flats).sum();

    let bounds = if selection.axis_lock {
        price_bounds(&doc.price_m_loc_area_cat, outlier_threshold)
    } else {
        None
    };

    DistrictAreaSeries {
        points: selected
            .into_iter()
            .map(|r| MonthPoint {
                month: r.month.clone(),
                month_num: r.month_num,
                avg_price_per_m: r.avg_price_per_m,
            })
            .collect(),
        num_flats,
        bounds,
    }
}

/// Min/max price over every record, ignoring prices at or above `outlier_threshold`.
///
/// Independent of any selection so the locked axis is comparable across districts.
pub fn price_bounds(records: &[AreaPriceRecord], outlier_threshold: f64) -> Option<PriceBounds> {
    records
        .iter()
        .map(|r| r.avg_price_per_m)
        .filter(|price| *price < outlier_threshold)
        .fold(None, |acc, price| match acc {
            None => Some(PriceBounds { min: price, max: price }),
            Some(b) => Some(PriceBounds {
                min: b.min.min(price),
                max: b.max.max(price),
            }),
        })
}

/// Monthly prices of every district, each series oldest first.
pub fn district_price_series(records: &[LocationPriceRecord]) -> BTreeMap<String, Vec<MonthPoint>> {
    let mut sorted: Vec<&LocationPriceRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.month_num);

    let mut grouped: BTreeMap<String, Vec<MonthPoint>> = BTreeMap::new();
    for r in sorted {
        grouped.entry(r.location.clone()).or_default().push(MonthPoint {
            month: r.month.clone(),
            month_num: r.month_num,
            avg_price_per_m: r.avg_price_per_m,
        });
    }
    grouped
}
