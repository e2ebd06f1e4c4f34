// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use clap::Parser;
use futures::StreamExt;
use kube::{
    runtime::{controller::Action, watcher::Config as WatcherConfig, Controller},
    Api, Client, ResourceExt,
};
use provider_gcp::{
    config::Config,
    constants::{
        ERROR_REQUEUE_DURATION_SECS, HEALTH_SERVER_PATH, METRICS_SERVER_PATH,
        TOKIO_WORKER_THREADS,
    },
    context::Context,
    crd::{CloudMemorystoreInstance, GKECluster, ManagedZone},
    metrics::{gather_metrics, record_reconciliation_requeue},
    reconcilers::{reconcile, Connector, GcpConnector, Managed},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct ReconcileError(#[from] anyhow::Error);

fn main() -> Result<()> {
    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("provider-gcp")
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = Config::parse();

    // Respects RUST_LOG (default: info) and RUST_LOG_FORMAT (json|text)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    info!(
        project = %config.project_id,
        token_source = ?config.token_source,
        "Starting GCP provider"
    );

    if config.project_id.is_empty() {
        anyhow::bail!("no GCP project configured; set --project-id or GCP_PROJECT_ID");
    }

    debug!("Initializing Kubernetes client");
    let client = Client::try_default().await?;

    let http = reqwest::Client::builder().build()?;
    let tokens = config.token_source(http.clone())?;
    let connector = GcpConnector::new(http, tokens, &config.project_id, config.endpoints());
    let ctx = Arc::new(Context::new(client, connector, &config));
    debug!(
        poll_interval_secs = config.poll_interval_secs,
        short_wait_secs = config.short_wait_secs,
        "Controller context created"
    );

    let listener = TcpListener::bind(&config.metrics_addr).await?;
    info!(addr = %config.metrics_addr, "Metrics server listening");

    info!("Starting all controllers");

    // Controllers should never exit - if one does, log it and exit the process
    tokio::select! {
        result = serve_metrics(listener) => {
            error!("CRITICAL: metrics server exited unexpectedly: {:?}", result);
            result?;
            anyhow::bail!("metrics server exited unexpectedly without error")
        }
        result = run_controller::<GKECluster>(ctx.clone()) => {
            error!("CRITICAL: GKECluster controller exited unexpectedly: {:?}", result);
            result?;
            anyhow::bail!("GKECluster controller exited unexpectedly without error")
        }
        result = run_controller::<CloudMemorystoreInstance>(ctx.clone()) => {
            error!("CRITICAL: CloudMemorystoreInstance controller exited unexpectedly: {:?}", result);
            result?;
            anyhow::bail!("CloudMemorystoreInstance controller exited unexpectedly without error")
        }
        result = run_controller::<ManagedZone>(ctx.clone()) => {
            error!("CRITICAL: ManagedZone controller exited unexpectedly: {:?}", result);
            result?;
            anyhow::bail!("ManagedZone controller exited unexpectedly without error")
        }
        () = shutdown_signal() => {
            info!("Shutdown signal received, stopping controllers");
            Ok(())
        }
    }
}

/// Run the controller for one managed resource kind
async fn run_controller<K>(ctx: Arc<Context>) -> Result<()>
where
    K: Managed,
    GcpConnector: Connector<K>,
{
    info!("Starting {} controller", K::KIND);

    let api = Api::<K>::all(ctx.client.clone());

    Controller::new(api, WatcherConfig::default())
        .run(reconcile_wrapper::<K>, error_policy::<K>, ctx)
        .for_each(|_| futures::future::ready(()))
        .await;

    Ok(())
}

/// Reconcile wrapper shared by every kind
async fn reconcile_wrapper<K>(
    resource: Arc<K>,
    ctx: Arc<Context>,
) -> Result<Action, ReconcileError>
where
    K: Managed,
    GcpConnector: Connector<K>,
{
    let name = resource.name_any();
    match reconcile(resource, ctx).await {
        Ok(action) => {
            debug!("Successfully reconciled {}: {}", K::KIND, name);
            Ok(action)
        }
        Err(e) => {
            error!("Failed to reconcile {} {}: {}", K::KIND, name, e);
            Err(anyhow::Error::from(e).into())
        }
    }
}

/// Error policy for every controller
fn error_policy<K: Managed>(resource: Arc<K>, err: &ReconcileError, _ctx: Arc<Context>) -> Action {
    warn!(
        "Requeueing {} {} after error: {}",
        K::KIND,
        resource.name_any(),
        err
    );
    record_reconciliation_requeue(K::KIND);
    Action::requeue(Duration::from_secs(ERROR_REQUEUE_DURATION_SECS))
}

fn metrics_router() -> Router {
    Router::new()
        .route(METRICS_SERVER_PATH, get(metrics_handler))
        .route(HEALTH_SERVER_PATH, get(health_handler))
}

/// Serve `/metrics` and `/healthz` until the listener fails
async fn serve_metrics(listener: TcpListener) -> Result<()> {
    axum::serve(listener, metrics_router()).await?;
    Ok(())
}

async fn metrics_handler() -> impl IntoResponse {
    match gather_metrics() {
        Ok(metrics) => (StatusCode::OK, metrics),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {e}"),
        ),
    }
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok\n")
}

/// Resolves on SIGINT, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
