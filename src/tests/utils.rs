use crate::config::AppConfig;
use crate::domain::PipelineSettings;
use crate::feed::{DatasetSource, Document, FeedError};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A small but complete dataset: two districts, three area buckets,
/// three days of counters (the last one being 2021-05-03).
pub fn fixture_json() -> Value {
    json!({
        "flats_per_location": { "Wola": 80, "Mokotów": 120 },
        "flats_per_area_cat": { "60_70": 60, "30_40": 50, "40_50": 90 },
        "price_m_loc_area_cat": [
            { "location": "Mokotów", "area_category": "40_50", "month": "2021-05", "month_num": 5, "avg_price_per_m": 14500.0, "num_flats": 8 },
            { "location": "Mokotów", "area_category": "40_50", "month": "2021-03", "month_num": 3, "avg_price_per_m": 14000.0, "num_flats": 10 },
            { "location": "Mokotów", "area_category": "40_50", "month": "2021-04", "month_num": 4, "avg_price_per_m": 14200.0, "num_flats": 9 },
            { "location": "Mokotów", "area_category": "60_70", "month": "2021-03", "month_num": 3, "avg_price_per_m": 15000.0, "num_flats": 5 },
            { "location": "Mokotów", "area_category": "30_40", "month": "2021-03", "month_num": 3, "avg_price_per_m": 13000.0, "num_flats": 2 },
            { "location": "Wola", "area_category": "40_50", "month": "2021-04", "month_num": 4, "avg_price_per_m": 12300.0, "num_flats": 7 },
            { "location": "Wola", "area_category": "40_50", "month": "2021-03", "month_num": 3, "avg_price_per_m": 12000.0, "num_flats": 6 },
            { "location": "Wola", "area_category": "60_70", "month": "2021-04", "month_num": 4, "avg_price_per_m": 61000.0, "num_flats": 1 }
        ],
        "price_m_location": [
            { "location": "Mokotów", "month": "2021-04", "month_num": 4, "avg_price_per_m": 14300.0 },
            { "location": "Wola", "month": "2021-03", "month_num": 3, "avg_price_per_m": 12100.0 },
            { "location": "Mokotów", "month": "2021-03", "month_num": 3, "avg_price_per_m": 14100.0 },
            { "location": "Wola", "month": "2021-04", "month_num": 4, "avg_price_per_m": 12400.0 }
        ],
        "scraped_per_day": { "2021-05-01": 500, "2021-05-02": 450, "2021-05-03": 120 },
        "scraped_per_day_m_avg": { "2021-05-01": 480.0, "2021-05-02": 470.5, "2021-05-03": 430.0 },
        "posted_per_day": { "2021-05-01": 40, "2021-05-02": 35, "2021-05-03": 5 },
        "posted_per_day_m_avg": { "2021-05-01": 38.0, "2021-05-02": 37.2, "2021-05-03": 33.0 },
        "changes_per_day": { "2021-05-01": 12, "2021-05-02": 9, "2021-05-03": 1 },
        "changed_per_day_m_avg": { "2021-05-01": 10.0, "2021-05-02": 10.4, "2021-05-03": 9.1 },
        "dates": { "min_date": "2021-03-01", "max_date": "2021-05-03" }
    })
}

pub fn fixture_document() -> Document {
    serde_json::from_value(fixture_json()).expect("fixture decodes")
}

/// An otherwise empty document with the keys of `patch` filled in.
pub fn document_with(patch: Value) -> Document {
    let mut base = json!({
        "flats_per_location": {},
        "flats_per_area_cat": {},
        "price_m_loc_area_cat": [],
        "price_m_location": []
    });
    if let (Some(base), Value::Object(patch)) = (base.as_object_mut(), patch) {
        base.extend(patch);
    }
    serde_json::from_value(base).expect("patched document decodes")
}

/// In-memory source that counts fetches and can be switched to failing.
#[derive(Clone)]
pub struct FixtureSource {
    document: Document,
    fetches: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
    delay: Duration,
}

impl FixtureSource {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            fetches: Arc::new(AtomicUsize::new(0)),
            failing: Arc::new(AtomicBool::new(false)),
            delay: Duration::ZERO,
        }
    }

    /// Makes every fetch take `delay`, like a slow upstream.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing() -> Self {
        let source = Self::new(fixture_document());
        source.set_failing(true);
        source
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl DatasetSource for FixtureSource {
    fn fetch_dataset(&self) -> Result<Document, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FeedError::Fetch {
                url: "fixture://flats.json".into(),
                reason: "connection refused".into(),
            });
        }
        Ok(self.document.clone())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        data_url: "https://example.test/json_dir/flats.json".into(),
        log_level: "debug".into(),
        fetch_timeout: Duration::from_secs(5),
        cache_ttl: Duration::from_secs(60),
        max_workers: 1,
        pipeline: PipelineSettings::default(),
        default_district: "Mokotów".into(),
        default_area: "40_50".into(),
    }
}

pub fn test_state(source: &FixtureSource) -> AppState {
    AppState::with_source(test_config(), Box::new(source.clone()))
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().expect("valid uri");
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .expect("body readable");
    String::from_utf8(body_bytes).expect("utf-8 body")
}
