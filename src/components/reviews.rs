//! Customer reviews band shown beneath page content.

use leptos::prelude::*;

use super::star::Star;

pub const REVIEWS_SECTION_ID: &str = "reviews";

#[component]
pub fn ReviewsSection() -> impl IntoView {
    view! {
        <section id=REVIEWS_SECTION_ID class="reviews" aria-labelledby="reviews-heading">
            <h2 id="reviews-heading">"What our customers say"</h2>
            <div class="reviews__rating" aria-label="Average rating">
                <Star class="reviews__star" />
                <Star class="reviews__star" />
                <Star class="reviews__star" />
                <Star class="reviews__star" />
                <Star class="reviews__star" />
            </div>
            <div class="reviews__list"></div>
        </section>
    }
}
