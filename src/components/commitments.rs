//! Store commitments band.

use leptos::prelude::*;

use crate::content::CommitmentItem;

/// Renders commitments in order. Nothing is emitted for an empty list.
#[component]
pub fn CommitmentSection(items: Vec<CommitmentItem>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="commitments" aria-label="Our commitments">
                <ol class="commitments__list">
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="commitments__item">
                                    <h3>{item.title}</h3>
                                    <p>{item.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        }
    })
}
