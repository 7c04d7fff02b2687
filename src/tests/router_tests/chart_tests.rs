use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, fixture_document, request, test_state, FixtureSource};
use http::Method;

#[test]
fn price_chart_fragment_reflects_controls() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(
        request(
            Method::GET,
            "/charts/district-area-price?district=Mokot%C3%B3w&area=40_50&lock=true",
        ),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="district-area-price-plot""#));
    assert!(body.contains("Prices in Mokotów for flats of size 40_50 (27 flats)"));
    assert!(body.contains(r#""range":[12000.0,15000.0]"#));
    assert!(body.contains("Plotly.react"));
}

#[test]
fn price_chart_defaults_to_configured_selection() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/charts/district-area-price"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Prices in Mokotów for flats of size 40_50 (27 flats)"));
    assert!(!body.contains(r#""range""#));
}

#[test]
fn empty_selection_renders_placeholder_not_error() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(
        request(Method::GET, "/charts/district-area-price?district=Wola&area=30_40"),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("(0 flats)"));
    assert!(body.contains("no listings for Wola with flat size 30_40"));
}

#[test]
fn daily_chart_overlays_moving_average() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/charts/scraped-per-day"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Ads scraped daily"));
    assert!(body.contains("Moving Average (7 days)"));
}

#[test]
fn unknown_chart_is_bad_request() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let result = handle(request(Method::GET, "/charts/heatmap"), &state);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn invalid_lock_is_bad_request() {
    let source = FixtureSource::new(fixture_document());
    let state = test_state(&source);

    let result = handle(request(Method::GET, "/charts/district-area-price?lock=maybe"), &state);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn upstream_failure_renders_retry_card() {
    let source = FixtureSource::failing();
    let state = test_state(&source);

    let mut resp = handle(request(Method::GET, "/charts/district-area-price"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Data unavailable"));
    assert!(body.contains(r#"hx-get="/charts/district-area-price""#));
    assert!(body.contains(r##"hx-target="#district-area-price""##));
    assert!(body.contains(r##"hx-include="#price-controls""##));

    // Recovers once the source is back.
    source.set_failing(false);
    let mut resp = handle(request(Method::GET, "/charts/district-area-price"), &state).unwrap();
    assert!(body_string(&mut resp).contains("Plotly.react"));
}
