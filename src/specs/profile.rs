// src/specs/profile.rs
//! Scraping *spec* for a single staff profile page.
//!
//! Layout the site uses:
//! ```text
//! .staff-title
//!   .staff-title__content   h1 = name, span = title, h6* = teams ("Research,")
//!   .staff-title__photo     img[src] = photo link
//! .post-content             biography (anywhere on the page)
//! ```
//! Each field is looked up on its own. Only a missing name rejects the page.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::consts::{
    BIOGRAPHY_CLASS, TITLE_BLOCK_CLASS, TITLE_CONTENT_CLASS, TITLE_PHOTO_CLASS,
};
use crate::core::html::{class_selector, element_text, first_attr, first_text, selector};
use crate::core::sanitize::clean_team_label;
use crate::store::StaffRecord;

struct Selectors {
    title_block: Selector,
    content: Selector,
    photo: Selector,
    biography: Selector,
    name: Selector,
    title: Selector,
    team: Selector,
    img: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    title_block: class_selector(TITLE_BLOCK_CLASS),
    content: class_selector(TITLE_CONTENT_CLASS),
    photo: class_selector(TITLE_PHOTO_CLASS),
    biography: class_selector(BIOGRAPHY_CLASS),
    name: selector("h1"),
    title: selector("span"),
    team: selector("h6"),
    img: selector("img"),
});

/// Fields found inside `.staff-title__content`.
#[derive(Default)]
struct TitleContent {
    name: Option<String>,
    title: Option<String>,
    teams: Vec<String>,
}

/// Parse a profile page. `None` when no usable name is present.
pub fn extract(doc: &str) -> Option<StaffRecord> {
    let html = Html::parse_document(doc);
    let root = html.root_element();

    let block = root.select(&SEL.title_block).next();

    let content = block
        .and_then(|b| b.select(&SEL.content).next())
        .map(read_title_content)
        .unwrap_or_default();

    let photo_link = block
        .and_then(|b| b.select(&SEL.photo).next())
        .and_then(|photo| first_attr(photo, &SEL.img, "src"));

    let biography = root
        .select(&SEL.biography)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty());

    let Some(mut record) = content.name.as_deref().and_then(StaffRecord::new) else {
        debug!(has_title_block = block.is_some(), "profile has no usable name");
        return None;
    };
    record.title = content.title;
    record.teams = content.teams;
    record.photo_link = photo_link;
    record.biography = biography;
    Some(record)
}

fn read_title_content(content: ElementRef<'_>) -> TitleContent {
    TitleContent {
        name: first_text(content, &SEL.name),
        title: first_text(content, &SEL.title),
        teams: content
            .select(&SEL.team)
            .map(|h6| clean_team_label(&element_text(h6)))
            .collect(),
    }
}
