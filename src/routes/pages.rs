//! Storefront page handlers.
//!
//! Each handler builds its page body and hands it to the layout wrapper for
//! its route group. A header data failure aborts the page with 502.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use leptos::prelude::*;
use serde::Deserialize;

use crate::components::{CommitmentSection, Schema, SchemaPayload, Star};
use crate::header::RetrievalError;
use crate::layout::{self, render_document};
use crate::state::AppState;

pub(crate) fn retrieval_error_to_status(err: RetrievalError) -> StatusCode {
    tracing::error!(error = %err, "header data retrieval failed");
    StatusCode::BAD_GATEWAY
}

/// `GET /account`: account overview.
pub async fn account_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let body = layout::account_layout(
        state.header.as_ref(),
        Box::new(|| {
            view! {
                <section class="account">
                    <h1>"Your account"</h1>
                    <ul class="account__links">
                        <li><a href="/account/orders">"Orders"</a></li>
                        <li><a href="/account/addresses">"Addresses"</a></li>
                        <li><a href="/account/settings">"Settings"</a></li>
                    </ul>
                </section>
            }
            .into_any()
        }),
    )
    .await
    .map_err(retrieval_error_to_status)?;

    Ok(Html(render_document("Account", &state.config.default_locale, &body)))
}

/// `GET /products`: product listing group.
pub async fn products_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let body = layout::product_group_layout(
        state.header.as_ref(),
        Box::new(|| {
            view! {
                <section class="products">
                    <h1>"All products"</h1>
                    <div class="products__grid"></div>
                </section>
            }
            .into_any()
        }),
    )
    .await
    .map_err(retrieval_error_to_status)?;

    Ok(Html(render_document("Products", &state.config.default_locale, &body)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub lang: Option<String>,
}

/// `GET /shop?lang=xx`: shop landing with store commitments.
pub async fn shop_page(
    State(state): State<AppState>,
    Query(query): Query<ShopQuery>,
) -> Result<Html<String>, StatusCode> {
    let requested = query.lang.unwrap_or_default();
    let (lang, items) = state
        .commitments
        .items_or_fallback(&requested, &state.config.default_locale);
    let lang = lang.to_string();
    let items = items.to_vec();

    let body = layout::shop_layout(
        state.header.as_ref(),
        Box::new(move || {
            view! {
                <section class="shop">
                    <h1>"Shop"</h1>
                    <p class="shop__rating">
                        <Star class="shop__star" />
                        " Rated by thousands of customers"
                    </p>
                </section>
                <CommitmentSection items=items />
            }
            .into_any()
        }),
    )
    .await
    .map_err(retrieval_error_to_status)?;

    Ok(Html(render_document("Shop", &lang, &body)))
}

/// `GET /product/{slug}`: single product with Product structured data.
pub async fn product_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let name = display_name(&slug);
    let schema = product_schema(&state.config.site_base_url, &slug, &name);
    let heading = name.clone();

    let body = layout::product_detail_layout(
        state.header.as_ref(),
        Box::new(move || {
            view! {
                <article class="product">
                    <h1>{heading}</h1>
                </article>
                <Schema schema=schema />
            }
            .into_any()
        }),
    )
    .await
    .map_err(retrieval_error_to_status)?;

    Ok(Html(render_document(&name, &state.config.default_locale, &body)))
}

/// Human-readable name from a URL slug: `red-wool-scarf` -> `Red Wool Scarf`.
fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// schema.org `Product` document for a product page.
fn product_schema(site_base_url: &str, slug: &str, name: &str) -> SchemaPayload {
    let mut payload = SchemaPayload::new();
    payload.insert("@context".into(), serde_json::json!("https://schema.org"));
    payload.insert("@type".into(), serde_json::json!("Product"));
    payload.insert("name".into(), serde_json::json!(name));
    payload.insert("url".into(), serde_json::json!(format!("{site_base_url}/product/{slug}")));
    payload
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
