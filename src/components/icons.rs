//! Inline SVG icon primitives.

use leptos::prelude::*;

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87L18.18 21 12 17.27 5.82 21 7 14.14l-5-4.87 6.91-1.01L12 2z";

/// Five-point star glyph. `class` lands on the `<svg>` as given; no
/// attribute is emitted without one.
#[component]
pub fn StarIcon(#[prop(default = None)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d=STAR_PATH></path>
        </svg>
    }
}
