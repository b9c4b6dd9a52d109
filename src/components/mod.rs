//! Presentational components used by the shared page chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is rendered server-side. Components are stateless: they
//! take props and produce markup, with no signals or context lookups.

pub mod commitments;
pub mod icons;
pub mod nav;
pub mod reviews;
pub mod schema;
pub mod star;

pub use commitments::CommitmentSection;
pub use nav::SiteNav;
pub use reviews::ReviewsSection;
pub use schema::{Schema, SchemaPayload};
pub use star::Star;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
