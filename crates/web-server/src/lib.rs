use axum::{
    routing::{get, post},
    Router,
};
use ledger::SharedLedger;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

pub use error::AppError;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub ledger: SharedLedger,
}

/// Builds the application router. Split out from `run_server` so tests can
/// drive the routes without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/funds", get(handlers::get_funds))
        .route("/api/funds/:fund_id", get(handlers::get_fund))
        .route("/api/funds/subscribe", post(handlers::subscribe))
        .route("/api/funds/unsubscribe", post(handlers::unsubscribe))
        .route("/api/wallet", get(handlers::get_wallet))
        .route("/api/transactions", get(handlers::get_transactions))
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, ledger: SharedLedger) -> anyhow::Result<()> {
    let app = build_router(AppState { ledger });

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
