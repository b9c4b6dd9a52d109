//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each storefront route group maps to one page handler, and each handler
//! renders through the layout wrapper that belongs to its group.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Storefront pages plus the health probe.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/account", get(pages::account_page))
        .route("/products", get(pages::products_page))
        .route("/shop", get(pages::shop_page))
        .route("/product/{slug}", get(pages::product_page))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
