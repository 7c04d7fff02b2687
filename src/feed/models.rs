use serde::Deserialize;
use std::collections::BTreeMap;

// flats.json
//  ├── flats_per_location        { district: count }
//  ├── flats_per_area_cat        { bucket: count }
//  ├── price_m_loc_area_cat      [ { location, area_category, month, month_num, avg_price_per_m, num_flats } ]
//  ├── price_m_location          [ { location, month, month_num, avg_price_per_m } ]
//  ├── scraped_per_day           { date: count }
//  ├── scraped_per_day_m_avg     { date: float }
//  ├── posted_per_day            { date: count }
//  ├── posted_per_day_m_avg      { date: float }
//  ├── changes_per_day           { date: count }
//  ├── changed_per_day_m_avg     { date: float }
//  └── dates
//       ├── min_date
//       └── max_date

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub flats_per_location: BTreeMap<String, u64>,
    pub flats_per_area_cat: BTreeMap<String, u64>,
    pub price_m_loc_area_cat: Vec<AreaPriceRecord>,
    pub price_m_location: Vec<LocationPriceRecord>,

    #[serde(default)]
    pub scraped_per_day: BTreeMap<String, u64>,
    #[serde(default)]
    pub scraped_per_day_m_avg: BTreeMap<String, f64>,
    #[serde(default)]
    pub posted_per_day: BTreeMap<String, u64>,
    #[serde(default)]
    pub posted_per_day_m_avg: BTreeMap<String, f64>,
    #[serde(default)]
    pub changes_per_day: BTreeMap<String, u64>,
    // Published upstream under the "changed" spelling.
    #[serde(default, rename = "changed_per_day_m_avg", alias = "changes_per_day_m_avg")]
    pub changes_per_day_m_avg: BTreeMap<String, f64>,

    #[serde(default)]
    pub dates: Option<Dates>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AreaPriceRecord {
    pub location: String,
    pub area_category: String,
    pub month: String,
    pub month_num: i64,
    pub avg_price_per_m: f64,
    pub num_flats: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationPriceRecord {
    pub location: String,
    pub month: String,
    pub month_num: i64,
    pub avg_price_per_m: f64,
}

/// Reporting window of the dataset, as ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dates {
    pub min_date: String,
    pub max_date: String,
}
