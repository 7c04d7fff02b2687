use crate::charts::{build_figure, ChartKind, ChartParams};
use crate::domain::{build_options, OptionField, PriceSelection};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, html_response_with_status, json_error_response, json_response};
use crate::state::AppState;
use crate::templates::components::PRICE_CONTROLS_ID;
use crate::templates::pages::{dashboard_page, unavailable_page, DashboardVm};
use crate::templates::{chart_fragment, unavailable_card};
use astra::Request;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::time::Instant;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let today = Local::now().date_naive();

    match (method, path) {
        ("GET", "/") => dashboard(state, &parse_query(&req)),
        ("GET", "/health") => health(state),
        ("POST", "/refresh") => {
            state.store.invalidate();
            json_response(&serde_json::json!({ "status": "invalidated" }))
        }
        ("GET", p) if p.starts_with("/charts/") => {
            let slug = &p["/charts/".len()..];
            chart(state, slug, &parse_query(&req), today)
        }
        ("GET", p) if p.starts_with("/api/figures/") => {
            let slug = &p["/api/figures/".len()..];
            api(figure_json(state, slug, &parse_query(&req), today))
        }
        ("GET", p) if p.starts_with("/api/options/") => {
            let field = &p["/api/options/".len()..];
            api(options_json(state, field))
        }
        _ => Err(ServerError::NotFound),
    }
}

/// JSON endpoints report their own errors as JSON rather than as HTML pages.
fn api(result: ResultResp) -> ResultResp {
    result.or_else(|err| json_error_response(&err))
}

fn dashboard(state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let snapshot = match state.store.current() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "rendering dashboard without data");
            return html_response_with_status(503, unavailable_page());
        }
    };
    let doc = &snapshot.document;

    let vm = DashboardVm {
        dates: doc.dates.clone(),
        districts: build_options(doc, OptionField::Locations),
        areas: build_options(doc, OptionField::AreaCategories),
        selection: selection_from_query(state, query)?,
        data_url: state.config.data_url.clone(),
        fetched_at: snapshot.fetched_at,
    };

    html_response(dashboard_page(&vm))
}

fn chart(
    state: &AppState,
    slug: &str,
    query: &HashMap<String, String>,
    today: NaiveDate,
) -> ResultResp {
    let kind: ChartKind = slug.parse().map_err(ServerError::BadRequest)?;
    let params = chart_params(state, query, today)?;

    let snapshot = match state.store.current() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(chart = %kind, error = %e, "chart data unavailable");
            let include = kind
                .uses_controls()
                .then(|| format!("#{PRICE_CONTROLS_ID}"));
            return html_response(unavailable_card(
                &format!("/charts/{slug}"),
                kind.slug(),
                include.as_deref(),
            ));
        }
    };

    let figure = build_figure(kind, &snapshot.document, &params);
    let markup = chart_fragment(kind, &figure).map_err(|e| {
        tracing::error!(chart = %kind, error = %e, "failed to encode figure");
        ServerError::InternalError
    })?;

    html_response(markup)
}

fn figure_json(
    state: &AppState,
    slug: &str,
    query: &HashMap<String, String>,
    today: NaiveDate,
) -> ResultResp {
    let kind: ChartKind = slug.parse().map_err(ServerError::BadRequest)?;
    let params = chart_params(state, query, today)?;
    let snapshot = state.store.current()?;

    json_response(&build_figure(kind, &snapshot.document, &params))
}

fn options_json(state: &AppState, field: &str) -> ResultResp {
    let field: OptionField = field.parse().map_err(ServerError::BadRequest)?;
    let snapshot = state.store.current()?;

    json_response(&build_options(&snapshot.document, field))
}

fn health(state: &AppState) -> ResultResp {
    let snapshot = state.store.peek().map(|s| {
        serde_json::json!({
            "fetched_at": s.fetched_at.to_rfc3339(),
            "age_secs": s.age(Instant::now()).as_secs(),
        })
    });

    json_response(&serde_json::json!({
        "status": "ok",
        "cache_ttl_secs": state.store.ttl().as_secs(),
        "snapshot": snapshot,
    }))
}

fn chart_params(
    state: &AppState,
    query: &HashMap<String, String>,
    today: NaiveDate,
) -> Result<ChartParams, ServerError> {
    Ok(ChartParams {
        selection: selection_from_query(state, query)?,
        today,
        settings: state.config.pipeline,
    })
}

fn selection_from_query(
    state: &AppState,
    query: &HashMap<String, String>,
) -> Result<PriceSelection, ServerError> {
    let pick = |key: &str, default: &str| {
        query
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    Ok(PriceSelection {
        district: pick("district", &state.config.default_district),
        area: pick("area", &state.config.default_area),
        axis_lock: parse_lock(query.get("lock").map(String::as_str))?,
    })
}

fn parse_lock(raw: Option<&str>) -> Result<bool, ServerError> {
    match raw {
        None | Some("" | "false" | "off" | "0") => Ok(false),
        Some("true" | "on" | "1") => Ok(true),
        Some(other) => Err(ServerError::BadRequest(format!(
            "lock must be true or false, got {other:?}"
        ))),
    }
}

fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
