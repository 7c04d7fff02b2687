use crate::router::handle;
use crate::tests::utils::{body_string, fixture_document, request, test_state, FixtureSource};
use http::Method;
use serde_json::Value;
use std::time::{Duration, Instant};

fn json_body(resp: &mut astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("json body")
}

#[test]
fn figure_endpoint_returns_plotly_json() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/api/figures/flats-per-location"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let fig = json_body(&mut resp);
    assert_eq!(fig["data"][0]["type"], "pie");
    assert_eq!(fig["data"][0]["labels"], serde_json::json!(["Mokotów", "Wola"]));
    assert_eq!(fig["data"][0]["values"], serde_json::json!([120, 80]));
}

#[test]
fn district_prices_figure_has_one_trace_per_district() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/api/figures/district-prices"), &state).unwrap();
    let fig = json_body(&mut resp);

    let traces = fig["data"].as_array().unwrap();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0]["name"], "Mokotów");
    assert_eq!(traces[0]["x"], serde_json::json!(["2021-03", "2021-04"]));
}

#[test]
fn unknown_figure_is_json_bad_request() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/api/figures/heatmap"), &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(json_body(&mut resp)["error"].as_str().unwrap().contains("heatmap"));
}

#[test]
fn upstream_failure_is_json_bad_gateway() {
    let source = FixtureSource::failing();
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/api/options/locations"), &state).unwrap();

    assert_eq!(resp.status(), 502);
    assert!(json_body(&mut resp)["error"].as_str().unwrap().starts_with("Data unavailable"));
}

#[test]
fn options_endpoint_lists_sorted_buckets() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/api/options/areas"), &state).unwrap();
    let options = json_body(&mut resp);

    let values: Vec<&str> = options
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["30_40", "40_50", "60_70"]);
}

#[test]
fn health_reports_snapshot_after_first_fetch() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/health"), &state).unwrap();
    let health = json_body(&mut resp);
    assert_eq!(health["status"], "ok");
    assert!(health["snapshot"].is_null());
    assert_eq!(health["cache_ttl_secs"], 60);

    handle(request(Method::GET, "/api/options/locations"), &state).unwrap();

    let mut resp = handle(request(Method::GET, "/health"), &state).unwrap();
    assert!(json_body(&mut resp)["snapshot"]["fetched_at"].is_string());
}

#[test]
fn health_answers_while_a_chart_waits_on_the_upstream() {
    let source = FixtureSource::new(fixture_document()).with_delay(Duration::from_millis(1500));
    let state = test_state(&source);

    std::thread::scope(|s| {
        let chart = s.spawn(|| {
            handle(request(Method::GET, "/charts/flats-per-area"), &state)
                .map(|resp| resp.status().as_u16())
        });
        std::thread::sleep(Duration::from_millis(200));

        let started = Instant::now();
        let mut resp = handle(request(Method::GET, "/health"), &state).unwrap();
        assert!(started.elapsed() < Duration::from_millis(500));
        assert!(json_body(&mut resp)["snapshot"].is_null());

        let resp = handle(request(Method::POST, "/refresh"), &state).unwrap();
        assert_eq!(resp.status(), 200);
        assert!(started.elapsed() < Duration::from_millis(500));

        assert_eq!(chart.join().unwrap().unwrap(), 200);
    });
}
