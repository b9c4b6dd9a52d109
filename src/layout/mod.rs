//! Shared page layout and the per-route-group wrappers around it.
//!
//! DESIGN
//! ======
//! Every route group wraps its pages in the same `SharedLayout`. Groups
//! differ only in two switches, captured by `LayoutPolicy`:
//!
//! - whether header data is fetched (and the navigation shown), and
//! - whether the reviews section follows the page content.
//!
//! The header data provider is passed in by the caller. A group that does
//! not need navigation never touches the provider, so its render has no
//! suspension point at all. Provider failures propagate unchanged: there is
//! no fallback chrome.

use leptos::prelude::*;

use crate::components::{ReviewsSection, SiteNav};
use crate::header::{Category, HeaderDataProvider, RetrievalError};

/// Reviews are shown unless a route group opts out.
pub const DEFAULT_INCLUDE_REVIEWS: bool = true;

// =============================================================================
// SHARED LAYOUT
// =============================================================================

/// Page chrome around `children`.
///
/// The navigation is rendered only when `menu_data` is present; the reviews
/// section only when `include_reviews` is true.
#[component]
pub fn SharedLayout(
    children: Children,
    #[prop(default = None)] menu_data: Option<Vec<Category>>,
    #[prop(default = DEFAULT_INCLUDE_REVIEWS)] include_reviews: bool,
) -> impl IntoView {
    let nav = menu_data.map(|categories| view! { <SiteNav categories=categories /> });
    let reviews = include_reviews.then(|| view! { <ReviewsSection /> });

    view! {
        <div class="page">
            <header class="site-header">
                <a class="site-header__brand" href="/">"Storefront"</a>
                {nav}
            </header>
            <main class="page__content">{children()}</main>
            {reviews}
            <footer class="site-footer">
                <a href="/shop">"Shop"</a>
                <a href="/account">"Account"</a>
            </footer>
        </div>
    }
}

// =============================================================================
// POLICY
// =============================================================================

/// The two switches that distinguish one route group's chrome from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub fetch_header_data: bool,
    pub include_reviews: bool,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self { fetch_header_data: true, include_reviews: DEFAULT_INCLUDE_REVIEWS }
    }
}

/// Route groups that share a layout wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    Account,
    /// Group-level product listing.
    Products,
    Shop,
    /// A single product page under `/product/{slug}`.
    ProductDetail,
}

impl RouteGroup {
    #[must_use]
    pub fn policy(self) -> LayoutPolicy {
        match self {
            Self::Account | Self::ProductDetail => LayoutPolicy::default(),
            Self::Products => LayoutPolicy { fetch_header_data: false, include_reviews: false },
            Self::Shop => LayoutPolicy { fetch_header_data: true, include_reviews: true },
        }
    }
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// Render `children` inside the shared layout according to `policy`.
///
/// # Errors
///
/// Returns the provider's error if header data is required and cannot be
/// retrieved. Nothing is rendered in that case.
pub async fn compose_layout(
    provider: &dyn HeaderDataProvider,
    policy: LayoutPolicy,
    children: Children,
) -> Result<String, RetrievalError> {
    let menu_data = if policy.fetch_header_data {
        Some(provider.get_header_data().await?.categories)
    } else {
        None
    };
    let include_reviews = policy.include_reviews;

    Ok(render_to_html(move || {
        view! {
            <SharedLayout menu_data=menu_data include_reviews=include_reviews>
                {children()}
            </SharedLayout>
        }
    }))
}

/// Account pages: navigation and reviews.
///
/// # Errors
///
/// Propagates header data retrieval failures.
pub async fn account_layout(provider: &dyn HeaderDataProvider, children: Children) -> Result<String, RetrievalError> {
    compose_layout(provider, RouteGroup::Account.policy(), children).await
}

/// Product listing group: bare chrome, no header fetch, no reviews.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other wrappers.
pub async fn product_group_layout(
    provider: &dyn HeaderDataProvider,
    children: Children,
) -> Result<String, RetrievalError> {
    compose_layout(provider, RouteGroup::Products.policy(), children).await
}

/// Shop pages: navigation and reviews.
///
/// # Errors
///
/// Propagates header data retrieval failures.
pub async fn shop_layout(provider: &dyn HeaderDataProvider, children: Children) -> Result<String, RetrievalError> {
    compose_layout(provider, RouteGroup::Shop.policy(), children).await
}

/// Single product pages: navigation and reviews.
///
/// # Errors
///
/// Propagates header data retrieval failures.
pub async fn product_detail_layout(
    provider: &dyn HeaderDataProvider,
    children: Children,
) -> Result<String, RetrievalError> {
    compose_layout(provider, RouteGroup::ProductDetail.policy(), children).await
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render_to_html<V: IntoView>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

/// Wrap rendered body markup in a complete HTML document.
#[must_use]
pub fn render_document(title: &str, lang: &str, body: &str) -> String {
    let title = title.to_string();
    let lang = lang.to_string();
    let body = body.to_string();
    render_to_html(move || {
        view! {
            <!DOCTYPE html>
            <html lang=lang>
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                </head>
                <body inner_html=body></body>
            </html>
        }
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
