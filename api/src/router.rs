mod generate_stake_transaction;
mod get_validator_info;

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use http::StatusCode;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use stake_delegation_sdk::models::config::StakeConfig;
use tower::{
    buffer::BufferLayer, limit::RateLimitLayer, load_shed::LoadShedLayer, timeout::TimeoutLayer,
    ServiceBuilder,
};
use tower_http::{
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, instrument, Span};

pub struct RouterState {
    pub stake_config: StakeConfig,
    pub rpc_client: RpcClient,
}

impl std::fmt::Debug for RouterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterState")
            .field("stake_config", &self.stake_config)
            .field("rpc_client", &self.rpc_client.url())
            .finish()
    }
}

#[instrument]
pub fn get_routes(state: Arc<RouterState>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(crate::error::handle_error))
        .layer(BufferLayer::new(1000))
        .layer(RateLimitLayer::new(10000, Duration::from_secs(1)))
        .layer(TimeoutLayer::new(Duration::from_secs(20)))
        .layer(LoadShedLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|request: &http::Request<Body>, _span: &Span| {
                    info!("started {} {}", request.method(), request.uri().path())
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing_core::Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    let stake_routes = Router::new().route(
        "/generate",
        post(generate_stake_transaction::generate_stake_transaction),
    );

    let api_routes = Router::new()
        .route("/", get(root))
        .route("/validator", get(get_validator_info::get_validator_info))
        .nest("/stake", stake_routes);

    let app = Router::new()
        .nest("/api/v1", api_routes)
        .route("/validator", get(get_validator_info::get_validator_card))
        .fallback(fallback);

    app.layer(middleware).with_state(state)
}

async fn root() -> impl IntoResponse {
    "Stake Delegation API"
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
