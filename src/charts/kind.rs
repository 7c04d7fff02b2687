use crate::domain::DailyCounter;
use std::fmt;
use std::str::FromStr;

/// Every chart on the dashboard; the slug doubles as its URL segment and DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    FlatsPerLocation,
    FlatsPerArea,
    Daily(DailyCounter),
    DistrictPrices,
    DistrictAreaPrice,
}

impl ChartKind {
    /// Page order.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::FlatsPerLocation,
        ChartKind::FlatsPerArea,
        ChartKind::Daily(DailyCounter::Scraped),
        ChartKind::Daily(DailyCounter::Posted),
        ChartKind::Daily(DailyCounter::Changes),
        ChartKind::DistrictPrices,
        ChartKind::DistrictAreaPrice,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::FlatsPerLocation => "flats-per-location",
            ChartKind::FlatsPerArea => "flats-per-area",
            ChartKind::Daily(DailyCounter::Scraped) => "scraped-per-day",
            ChartKind::Daily(DailyCounter::Posted) => "posted-per-day",
            ChartKind::Daily(DailyCounter::Changes) => "changes-per-day",
            ChartKind::DistrictPrices => "district-prices",
            ChartKind::DistrictAreaPrice => "district-area-price",
        }
    }

    /// Heading shown above charts whose figure carries no title of its own.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            ChartKind::FlatsPerLocation => Some("Number of flats in each district"),
            ChartKind::FlatsPerArea => Some("Size of flats (m2)"),
            _ => None,
        }
    }

    /// Only the district/area chart reacts to the controls.
    pub fn uses_controls(self) -> bool {
        matches!(self, ChartKind::DistrictAreaPrice)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| format!("unknown chart: {s}"))
    }
}
