//! In-process stand-in for the homelink appliance gateway.
//!
//! Serves the same wire protocol the real gateway speaks: appliance list,
//! per-appliance operation list, and a passphrase-guarded operation POST
//! with a plain-text confirmation body, with a JSON error envelope on every
//! non-200 response. Client integration tests bind it to an ephemeral port;
//! the binary runs it standalone for manual poking.

mod handlers;
mod state;

pub use state::GatewayState;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Create the gateway router with all routes over the given state.
pub fn app(state: GatewayState) -> Router {
    Router::new()
        .route("/api/v1/list", get(handlers::list_appliances))
        .route("/api/v1/{appliance_id}", get(handlers::list_operations))
        .route(
            "/api/v1/{appliance_id}/{operation_id}",
            post(handlers::post_operation),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the gateway on the given listener until the task is cancelled.
pub async fn run(listener: TcpListener, state: GatewayState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
