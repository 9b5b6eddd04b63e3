//! Notes API server for calnotes.
//!
//! Serves the JSON contract the calnotes client speaks, storing notes in
//! SQLite. Exposed as a library so tests can mount the router in-process.

pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use crate::state::AppState;
pub use crate::store::NoteStore;

/// Build the application router with open CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::notes::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, app(state)).await
}
