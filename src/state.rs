//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the header data provider and the static content loaded at startup.
//! Nothing in it is mutated after construction; each request performs its
//! own header data retrieval through the provider.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::CommitmentData;
use crate::header::HeaderDataProvider;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub header: Arc<dyn HeaderDataProvider>,
    pub commitments: Arc<CommitmentData>,
    pub config: Arc<StorefrontConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(header: Arc<dyn HeaderDataProvider>, commitments: CommitmentData, config: StorefrontConfig) -> Self {
        Self { header, commitments: Arc::new(commitments), config: Arc::new(config) }
    }
}
