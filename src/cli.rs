// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use url::Url;

use crate::config::options::{
    AppOptions, ExportOptions, ScrapeOptions, TeamFilter, parse_listing_url, parse_output_filename,
    parse_timeout,
};
use crate::core::HttpFetcher;
use crate::error::ScrapeError;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Scrape the staff directory into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "staff_scrape", version, about)]
pub struct Cli {
    /// Only keep staff on at least one of these teams (comma-separated, exact match)
    #[arg(long, value_name = "LIST")]
    pub teams: Option<TeamFilter>,

    /// Output file, must end in .csv [default: CSET_Staff.csv]
    #[arg(long = "output-filename", value_name = "FILE", value_parser = parse_output_filename)]
    pub output_filename: Option<PathBuf>,

    /// Listing page to discover profiles from [default: https://cset.georgetown.edu/team]
    #[arg(long, value_name = "URL", value_parser = parse_listing_url)]
    pub listing_url: Option<Url>,

    /// HTTP timeout per request, in seconds [default: 30]
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_options(self) -> AppOptions {
        let defaults = ScrapeOptions::default();
        AppOptions {
            scrape: ScrapeOptions {
                listing_url: self.listing_url.unwrap_or(defaults.listing_url),
                teams: self.teams.unwrap_or(defaults.teams),
                timeout: self.timeout.unwrap_or(defaults.timeout),
            },
            export: match self.output_filename {
                Some(path) => ExportOptions::with_path(path),
                None => ExportOptions::default(),
            },
        }
    }
}

/// Parse args (exits on bad config before any request), then scrape and write.
pub fn run() -> Result<RunSummary, ScrapeError> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let opts = cli.into_options();
    let fetcher = HttpFetcher::new(opts.scrape.timeout)?;
    let mut progress = ConsoleProgress::new();

    let summary = runner::run(&opts, &fetcher, Some(&mut progress))?;
    println!("Wrote {} staff records to {}", summary.rows, summary.file_written.display());
    Ok(summary)
}
