// src/charts/builder.rs

use crate::charts::figure::{Annotation, Axis, Figure, Layout, Title, Trace};
use crate::charts::ChartKind;
use crate::domain::{
    daily_overlay, district_area_series, district_price_series, pie_table, DailyCounter,
    PipelineSettings, PriceSelection, SeriesKind, MOVING_AVERAGE_DAYS,
};
use crate::feed::Document;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeMap;

/// Everything a chart may depend on besides the document.
#[derive(Debug, Clone)]
pub struct ChartParams {
    pub selection: PriceSelection,
    pub today: NaiveDate,
    pub settings: PipelineSettings,
}

/// Builds the figure for `kind`; the single entry point for every chart.
pub fn build_figure(kind: ChartKind, doc: &Document, params: &ChartParams) -> Figure {
    match kind {
        ChartKind::FlatsPerLocation => pie_figure(&doc.flats_per_location),
        ChartKind::FlatsPerArea => pie_figure(&doc.flats_per_area_cat),
        ChartKind::Daily(counter) => daily_figure(doc, counter, params),
        ChartKind::DistrictPrices => district_prices_figure(doc),
        ChartKind::DistrictAreaPrice => district_area_figure(doc, params),
    }
}

fn pie_figure(counts: &BTreeMap<String, u64>) -> Figure {
    let (labels, values) = pie_table(counts)
        .into_iter()
        .map(|row| (row.label, row.value))
        .unzip();

    Figure {
        data: vec![Trace::pie(labels, values)],
        layout: Layout::default(),
    }
}

fn daily_figure(doc: &Document, counter: DailyCounter, params: &ChartParams) -> Figure {
    let (title, y_title) = match counter {
        DailyCounter::Scraped => ("Ads scraped daily", "Number of ads scraped"),
        DailyCounter::Posted => ("Ads posted daily", "Number of ads posted"),
        DailyCounter::Changes => ("Daily price changes", "Number of price changes per day"),
    };

    let mut by_kind: BTreeMap<SeriesKind, (Vec<Value>, Vec<f64>)> = BTreeMap::new();
    for row in daily_overlay(doc, counter, params.today) {
        let (x, y) = by_kind.entry(row.kind).or_default();
        x.push(Value::from(row.date));
        y.push(row.value);
    }

    let data = by_kind
        .into_iter()
        .map(|(kind, (x, y))| Trace::line(kind.label(MOVING_AVERAGE_DAYS), x, y))
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Some(Title::centered(title)),
            xaxis: Some(Axis::titled("Date")),
            yaxis: Some(Axis::titled(y_title)),
            ..Layout::default()
        },
    }
}

fn district_prices_figure(doc: &Document) -> Figure {
    let data = district_price_series(&doc.price_m_location)
        .into_iter()
        .map(|(location, points)| {
            let (x, y) = points
                .into_iter()
                .map(|p| (Value::from(p.month), p.avg_price_per_m))
                .unzip();
            Trace::line(location, x, y)
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Some(Title::centered(
                "Average prices per m2 for each district (flats of all sizes)",
            )),
            xaxis: Some(Axis::titled("Month")),
            yaxis: Some(Axis::titled("Average price per m2 (PLN)")),
            ..Layout::default()
        },
    }
}

fn district_area_figure(doc: &Document, params: &ChartParams) -> Figure {
    let selection = &params.selection;
    let series = district_area_series(doc, selection, params.settings.price_outlier_threshold);

    let mut yaxis = Axis::titled("Price per m2 (PLN)");
    yaxis.range = series.bounds.map(|b| [b.min, b.max]);

    let mut annotations = Vec::new();
    if let Err(empty) = series.check_selection(selection) {
        tracing::debug!(district = %empty.district, area = %empty.area, "empty price selection");
        annotations.push(Annotation::placeholder(empty.to_string()));
    }

    let title = format!(
        "Prices in {} for flats of size {} ({} flats)",
        selection.district, selection.area, series.num_flats
    );
    let (x, y) = series
        .points
        .into_iter()
        .map(|p| (Value::from(p.month), p.avg_price_per_m))
        .unzip();

    Figure {
        data: vec![Trace::line_with_markers("avg_price_per_m", x, y)],
        layout: Layout {
            title: Some(Title::centered(title)),
            xaxis: Some(Axis::titled("Month")),
            yaxis: Some(yaxis),
            annotations,
            showlegend: Some(false),
        },
    }
}
