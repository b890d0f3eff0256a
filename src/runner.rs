// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    core::Fetch,
    error::ScrapeError,
    file::write_staff_csv,
    progress::Progress,
    scrape::{ScrapeStats, collect_staff},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub rows: usize,
    pub stats: ScrapeStats,
}

/// Top-level pipeline: listing → profiles → filter/aggregate → CSV.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError> {
    let (staff, stats) = collect_staff(&opts.scrape, fetcher, progress.as_deref_mut())?;

    let path = write_staff_csv(&staff, opts.export.out_path())?;
    info!(path = %path.display(), rows = staff.len(), "csv written");
    if let Some(p) = progress.as_deref_mut() {
        p.log("Successfully wrote to CSV");
    }

    Ok(RunSummary { file_written: path, rows: staff.len(), stats })
}
