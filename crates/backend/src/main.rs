use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::{extract::Request, middleware};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use libs::util;

use backend::{
    CONFIG, api,
    common::{AppState, metrics},
    db::Repository,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("LOG_LEVEL"))
        .init();

    let repo = Repository::load(&CONFIG.backend_seed_file)?;
    let state = AppState::new(repo, CONFIG.legacy_status_codes);

    let api_router = api::router(state.clone())
        .route_layer(middleware::from_fn(metrics::track_http))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri(),
                    client_ip = %req.headers().get("x-forwarded-for").and_then(|h| h.to_str().ok())
                    .unwrap_or("unknown"),
                )
            })
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(true))
            .on_failure(DefaultOnFailure::new().level(Level::INFO))
        )
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024 /* 10MiB */));
    let metrics_router = metrics::prometheus_router()?;

    metrics::spawn_system_metrics(
        state.repo.clone(),
        Duration::from_secs(CONFIG.prometheus_refresh_interval),
    );

    let shutdown_notify = Arc::new(Notify::new());
    tokio::spawn(util::listen_for_shutdown(shutdown_notify.clone()));

    let api_listener = TcpListener::bind((
        CONFIG.backend_ipv4_address.as_str(),
        CONFIG.backend_port,
    ))
    .await?;
    let metrics_listener = TcpListener::bind((
        CONFIG.prometheus_ipv4_address.as_str(),
        CONFIG.prometheus_port,
    ))
    .await?;

    tracing::info!("⇢ API listening on: http://{}", api_listener.local_addr()?);
    tracing::info!(
        "⇢ Metrics listening on: http://{}/metrics",
        metrics_listener.local_addr()?
    );

    let api_server = axum::serve(api_listener, api_router).with_graceful_shutdown({
        let n = shutdown_notify.clone();
        async move { n.notified().await }
    });
    let metrics_server = axum::serve(metrics_listener, metrics_router).with_graceful_shutdown({
        let n = shutdown_notify.clone();
        async move { n.notified().await }
    });

    tokio::try_join!(api_server, metrics_server)?;

    Ok(())
}
