//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, put},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::commands::CommandRouter;
use crate::metrics::Metrics;
use crate::models::market::Market;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub commands: Arc<CommandRouter>,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, commands: Arc<CommandRouter>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            commands,
        }
    }
}

#[derive(Debug, Serialize)]
struct MarketResponse {
    command: &'static str,
    ticker: &'static str,
    label: &'static str,
    selected: bool,
}

impl MarketResponse {
    fn new(market: Market, selected: Market) -> Self {
        Self {
            command: market.command(),
            ticker: market.ticker(),
            label: market.label(),
            selected: market == selected,
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    let market = state.commands.selected().await;
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "fxsignal-bot",
        "market": market.ticker(),
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// List the selectable markets, flagging the current one
async fn list_markets(State(state): State<AppState>) -> Json<Vec<MarketResponse>> {
    let selected = state.commands.selected().await;
    Json(
        Market::ALL
            .into_iter()
            .map(|m| MarketResponse::new(m, selected))
            .collect(),
    )
}

/// Select a market and trigger an immediate cycle
async fn select_market(
    State(state): State<AppState>,
    Path(market): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let market = Market::find(&market).ok_or(StatusCode::NOT_FOUND)?;
    let outcome = state.commands.select(market).await;
    Ok(Json(json!({
        "market": market.ticker(),
        "message": outcome.reply,
    })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/markets", get(list_markets))
        .route("/api/markets/{market}", put(select_market))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(state: AppState, port: u16) -> Result<(), std::io::Error> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await
}
