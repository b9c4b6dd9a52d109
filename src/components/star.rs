//! Rating star.

use leptos::prelude::*;

use super::icons::StarIcon;

/// Star icon with an optional style class passed through unchanged.
#[component]
pub fn Star(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! { <StarIcon class=class /> }
}
