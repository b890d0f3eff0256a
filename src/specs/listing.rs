// src/specs/listing.rs
//! Listing page: every `<a class="staff__link" href=...>` is one profile.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::STAFF_LINK_CLASS;
use crate::core::html::selector;

static STAFF_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(&format!("a.{STAFF_LINK_CLASS}[href]")));

/// Raw `href` values of the staff links, in document order.
/// Unexpected markup yields an empty list.
pub fn profile_urls(doc: &str) -> Vec<String> {
    let html = Html::parse_document(doc);
    html.select(&STAFF_LINK)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| s!(href))
        .collect()
}
