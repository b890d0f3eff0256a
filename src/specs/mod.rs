// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction rules for the staff directory. Each spec covers one
//! kind of page and encodes *where the ground truth lives in the markup*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched page text (`listing`, `profile`).
//! - **Selector choice**, built from the class names in `config::consts`.
//! - **Tolerant extraction**: every field is looked up on its own and a miss
//!   only drops that field.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`), filtering (`config::options::TeamFilter`),
//!   aggregation (`store`) or CSV output (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_staff → Fetch::fetch(listing) → specs::listing::profile_urls
//!                               ↘ Fetch::fetch(profile) → specs::profile::extract
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against small inline HTML fixtures.
pub mod listing;
pub mod profile;
