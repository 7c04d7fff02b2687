use crate::feed::Document;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// The three daily counters published with the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyCounter {
    Scraped,
    Posted,
    Changes,
}

impl DailyCounter {
    pub const ALL: [DailyCounter; 3] = [
        DailyCounter::Scraped,
        DailyCounter::Posted,
        DailyCounter::Changes,
    ];

    fn raw(self, doc: &Document) -> &BTreeMap<String, u64> {
        match self {
            DailyCounter::Scraped => &doc.scraped_per_day,
            DailyCounter::Posted => &doc.posted_per_day,
            DailyCounter::Changes => &doc.changes_per_day,
        }
    }

    fn moving_average(self, doc: &Document) -> &BTreeMap<String, f64> {
        match self {
            DailyCounter::Scraped => &doc.scraped_per_day_m_avg,
            DailyCounter::Posted => &doc.posted_per_day_m_avg,
            DailyCounter::Changes => &doc.changes_per_day_m_avg,
        }
    }
}

/// Discriminates raw daily values from their moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SeriesKind {
    Value,
    MovingAverage,
}

impl SeriesKind {
    pub fn label(self, window_days: u32) -> String {
        match self {
            SeriesKind::Value => "Value".to_string(),
            SeriesKind::MovingAverage => format!("Moving Average ({window_days} days)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub date: String,
    pub value: f64,
    pub kind: SeriesKind,
}

/// Raw and moving-average rows for `counter`, sorted by date, without `today`.
///
/// Today's counts are still being collected, so the whole day is left out.
pub fn daily_overlay(doc: &Document, counter: DailyCounter, today: NaiveDate) -> Vec<DailyRow> {
    let today = today.format("%Y-%m-%d").to_string();

    let raw = counter.raw(doc).iter().map(|(date, value)| DailyRow {
        date: date.clone(),
        // Counts stay well inside f64's exact integer range.
        value: *value as f64,
        kind: SeriesKind::Value,
    });
    let averaged = counter
        .moving_average(doc)
        .iter()
        .map(|(date, value)| DailyRow {
            date: date.clone(),
            value: *value,
            kind: SeriesKind::MovingAverage,
        });

    let mut rows: Vec<DailyRow> = raw.chain(averaged).filter(|row| row.date != today).collect();
    // Stable: on equal dates the raw value stays ahead of the average.
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}
