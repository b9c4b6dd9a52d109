use super::*;
use crate::content::CommitmentItem;
use crate::header::Category;
use crate::layout::render_to_html;
use leptos::prelude::*;

// =========================================================================
// Star
// =========================================================================

#[test]
fn star_applies_class_unchanged() {
    let html = render_to_html(|| view! { <Star class="w-4 h-4 text-amber-400" /> });
    assert!(html.contains("<svg"));
    assert!(html.contains("class=\"w-4 h-4 text-amber-400\""));
    assert!(html.contains("<path"));
}

#[test]
fn star_without_class_emits_no_class_attribute() {
    let html = render_to_html(|| view! { <Star /> });
    assert!(html.contains("<svg"));
    assert!(html.contains("aria-hidden=\"true\""));
    assert!(!html.contains("class="));
}

// =========================================================================
// SiteNav
// =========================================================================

#[test]
fn nav_lists_categories_in_order() {
    let categories = vec![
        Category::new("2", "Men", "men"),
        Category::new("1", "Women", "women"),
    ];
    let html = render_to_html(move || view! { <SiteNav categories=categories /> });
    let men = html.find("Men").unwrap();
    let women = html.find("Women").unwrap();
    assert!(men < women);
    assert!(html.contains("href=\"/shop/men\""));
    assert!(html.contains("href=\"/shop/women\""));
}

#[test]
fn nav_renders_submenu_only_for_parents() {
    let categories = vec![
        Category::new("1", "Women", "women").with_children(vec![Category::new("11", "Dresses", "women-dresses")]),
        Category::new("2", "Gifts", "gifts"),
    ];
    let html = render_to_html(move || view! { <SiteNav categories=categories /> });
    assert_eq!(html.matches("site-nav__submenu").count(), 1);
    assert!(html.contains("href=\"/shop/women-dresses\""));
}

#[test]
fn nav_escapes_category_names() {
    let categories = vec![Category::new("1", "<b>Sale</b>", "sale")];
    let html = render_to_html(move || view! { <SiteNav categories=categories /> });
    assert!(!html.contains("<b>Sale</b>"));
    assert!(html.contains("&lt;b&gt;Sale&lt;/b&gt;"));
}

// =========================================================================
// ReviewsSection
// =========================================================================

#[test]
fn reviews_section_has_anchor_and_stars() {
    let html = render_to_html(|| view! { <ReviewsSection /> });
    assert!(html.contains("id=\"reviews\""));
    assert_eq!(html.matches("<svg").count(), 5);
}

// =========================================================================
// CommitmentSection
// =========================================================================

#[test]
fn commitments_render_in_order() {
    let items = vec![
        CommitmentItem::new("Free shipping", "On orders over $50"),
        CommitmentItem::new("Easy returns", "Within 30 days"),
    ];
    let html = render_to_html(move || view! { <CommitmentSection items=items /> });
    let first = html.find("Free shipping").unwrap();
    let second = html.find("Easy returns").unwrap();
    assert!(first < second);
    assert!(html.contains("Within 30 days"));
}

#[test]
fn commitments_empty_renders_nothing() {
    let html = render_to_html(|| view! { <CommitmentSection items=Vec::new() /> });
    assert!(!html.contains("commitments"));
}
