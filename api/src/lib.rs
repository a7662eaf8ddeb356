//! AgroFund HTTP API
//!
//! JSON endpoints for browsing campaigns, pricing and recording
//! reservations, and the admin operations behind them.

#[macro_use]
mod response;

mod admin_handlers;
mod campaign_handlers;
mod error;
pub mod models;
mod reservation_handlers;
mod routes;
mod state;

pub use error::{ApiError, ApiResult};
pub use state::ApiState;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router with middleware attached
pub fn create_app(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    routes::create_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn start_server(addr: SocketAddr, state: ApiState) -> std::io::Result<()> {
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
