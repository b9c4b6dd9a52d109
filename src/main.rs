mod components;
mod config;
mod content;
mod header;
mod layout;
mod routes;
mod state;

use std::sync::Arc;

use header::{HeaderDataProvider, HttpHeaderDataProvider, StaticHeaderDataProvider};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::StorefrontConfig::from_env().expect("invalid configuration");

    // Without a catalog backend the built-in category tree is served.
    let header: Arc<dyn HeaderDataProvider> = match &config.catalog_api_url {
        Some(url) => {
            let provider =
                HttpHeaderDataProvider::new(url, config.catalog_timeouts).expect("catalog client init failed");
            tracing::info!(url = provider.categories_url(), "catalog header provider initialized");
            Arc::new(provider)
        }
        None => {
            tracing::warn!("CATALOG_API_URL not set, serving built-in categories");
            Arc::new(StaticHeaderDataProvider::builtin())
        }
    };

    let commitments = match &config.commitments_path {
        Some(path) => content::CommitmentData::load(path).expect("failed to load commitments"),
        None => content::CommitmentData::new(),
    };
    if commitments.is_empty() {
        tracing::warn!("no commitment content configured");
    } else {
        tracing::info!(languages = commitments.languages().count(), "commitment content loaded");
    }

    let port = config.port;
    let state = state::AppState::new(header, commitments, config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
