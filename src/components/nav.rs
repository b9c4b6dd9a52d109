//! Category navigation rendered in the page header.

use leptos::prelude::*;

use crate::header::Category;

/// Top-level categories with one level of subcategories beneath each.
#[component]
pub fn SiteNav(categories: Vec<Category>) -> impl IntoView {
    view! {
        <nav class="site-nav" aria-label="Categories">
            <ul class="site-nav__menu">
                {categories.into_iter().map(|category| view! { <NavItem category=category /> }).collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavItem(category: Category) -> impl IntoView {
    let href = category.href();
    let submenu = (!category.children.is_empty()).then(|| {
        view! {
            <ul class="site-nav__submenu">
                {category
                    .children
                    .into_iter()
                    .map(|child| {
                        let href = child.href();
                        view! {
                            <li class="site-nav__subitem">
                                <a href=href>{child.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <li class="site-nav__item">
            <a href=href>{category.name}</a>
            {submenu}
        </li>
    }
}
