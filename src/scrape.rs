// src/scrape.rs
use tracing::{debug, info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::Fetch,
    error::ScrapeError,
    progress::Progress,
    specs::{listing, profile},
    store::StaffCollection,
};

/// Counters for one pass over the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    /// Staff links found on the listing page.
    pub found: usize,
    /// Records dropped by the team filter.
    pub filtered_out: usize,
    /// Profiles whose URL could not be resolved or fetched.
    pub unreachable: usize,
    /// Profiles fetched but without a usable name.
    pub unnamed: usize,
    /// Records that overwrote an earlier one with the same name.
    pub replaced: usize,
}

/// Fetch the listing, then every profile on it, in listing order.
/// Only a listing failure is an error; profile problems are reported and skipped.
pub fn collect_staff(
    scrape: &ScrapeOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(StaffCollection, ScrapeStats), ScrapeError> {
    info!(url = %scrape.listing_url, "fetching listing");
    let doc = fetcher
        .fetch(scrape.listing_url.as_str())
        .map_err(ScrapeError::Listing)?;

    let hrefs = listing::profile_urls(&doc);
    if hrefs.is_empty() {
        warn!(url = %scrape.listing_url, "no staff links on listing page");
    }

    let mut stats = ScrapeStats { found: hrefs.len(), ..Default::default() };
    let mut staff = StaffCollection::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(hrefs.len());
    }

    for (i, href) in hrefs.iter().enumerate() {
        let url = match scrape.listing_url.join(href) {
            Ok(u) => u,
            Err(e) => {
                warn!(href, error = %e, "unusable profile link");
                stats.unreachable += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_start(i, href);
                    p.item_failed(i, href);
                }
                continue;
            }
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_start(i, url.as_str());
        }

        let page = match fetcher.fetch(url.as_str()) {
            Ok(page) => page,
            Err(e) => {
                warn!(status = ?e.status(), "{e}");
                stats.unreachable += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(i, url.as_str());
                }
                continue;
            }
        };

        let Some(record) = profile::extract(&page) else {
            warn!(url = %url, "no name found on profile page");
            stats.unnamed += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(i, url.as_str());
            }
            continue;
        };

        if !scrape.teams.matches(&record) {
            debug!(name = record.name(), teams = ?record.teams, "filtered out by team");
            stats.filtered_out += 1;
            continue;
        }

        if let Some(old) = staff.insert(record) {
            debug!(name = old.name(), "duplicate name, keeping the later profile");
            stats.replaced += 1;
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    info!(kept = staff.len(), ?stats, "scrape complete");
    Ok((staff, stats))
}
