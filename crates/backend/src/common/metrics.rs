use std::{
    future,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::Result;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::IntoResponse,
    routing,
};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::db::Repository;

const HTTP_DURATION: &str = "http_requests_duration_seconds";

/// Records count and latency of every routed request, keyed by route template.
pub async fn track_http(req: Request, next: Next) -> impl IntoResponse {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path(), MatchedPath::as_str)
        .to_owned();
    let method = req.method().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let labels = [
        ("method", method),
        ("path", route),
        ("status", response.status().as_u16().to_string()),
    ];
    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!(HTTP_DURATION, &labels).record(started.elapsed().as_secs_f64());

    response
}

/// Installs the global recorder and returns the router serving `/metrics`.
pub fn prometheus_router() -> Result<Router> {
    let handle = prometheus_builder()?.install_recorder()?;
    Ok(Router::new().route(
        "/metrics",
        routing::get(move || future::ready(handle.render())),
    ))
}

fn prometheus_builder() -> Result<PrometheusBuilder> {
    const LATENCY_BUCKETS: &[f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];

    Ok(PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(HTTP_DURATION.to_string()), LATENCY_BUCKETS)?)
}

/// Periodically publishes the collection size and this process' cpu/memory.
pub fn spawn_system_metrics(repo: Arc<Repository>, refresh_interval: Duration) {
    tokio::spawn(async move {
        let pid = Pid::from_u32(std::process::id());
        let mut sys = System::new();
        let mut ticker = tokio::time::interval(refresh_interval);

        loop {
            ticker.tick().await;

            metrics::gauge!("pictures_total").set(repo.count().await as f64);

            sys.refresh_processes_specifics(
                ProcessesToUpdate::Some(&[pid]),
                true,
                ProcessRefreshKind::nothing().with_cpu().with_memory(),
            );
            if let Some(process) = sys.process(pid) {
                metrics::gauge!("process_cpu_usage_percent").set(process.cpu_usage() as f64);
                metrics::gauge!("process_resident_memory_bytes").set(process.memory() as f64);
            } else {
                tracing::debug!(%pid, "own process missing from sysinfo snapshot");
            }
        }
    });
}
