use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod domain;
mod errors;
mod feed;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1. Configuration (.env + environment)
    let config = match config::load_app_config() {
        Ok(config) => config,
        Err(e) => {
            // No configured level to honour yet; fall back to the defaults.
            init_tracing(DEFAULT_LOG_LEVEL);
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    // 2. Logging: RUST_LOG wins over the configured level
    init_tracing(&config.log_level);

    // 3. Dataset loader + snapshot cache
    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build dataset client");
            std::process::exit(1);
        }
    };

    tracing::info!(
        %addr,
        data_url = %state.config.data_url,
        cache_ttl_secs = state.store.ttl().as_secs(),
        "starting dashboard at http://{addr}"
    );

    // 4. Serve requests
    let server = Server::bind(addr).max_workers(max_workers);
    let result = server.serve(move |req, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::error_to_response(err),
        };

        tracing::info!(
            %method,
            path = %path,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}

const DEFAULT_LOG_LEVEL: &str = "info";

fn init_tracing(configured: &str) {
    let filter = env_filter(std::env::var("RUST_LOG").ok(), configured);
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn env_filter(rust_log: Option<String>, configured: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
