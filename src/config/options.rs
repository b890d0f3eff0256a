// src/config/options.rs
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::ConfigError;
use crate::store::StaffRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: Url,
    pub teams: TeamFilter,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            teams: TeamFilter::default(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

fn default_listing_url() -> Url {
    // Compile-time constant; covered by `default_listing_url_parses`.
    Url::parse(LISTING_URL).expect("LISTING_URL is a valid absolute URL")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME) }
    }
}

impl ExportOptions {
    /// Takes an already validated path (see `parse_output_filename`).
    pub fn with_path(out_path: PathBuf) -> Self {
        Self { out_path }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Replace the output path. Rejects anything not ending in `.csv`.
    pub fn set_path(&mut self, text: &str) -> Result<(), ConfigError> {
        self.out_path = parse_output_filename(text)?;
        Ok(())
    }
}

/// Teams a record must belong to (any one of them) to be kept.
/// Empty means "keep everyone".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamFilter {
    required: Vec<String>,
}

impl TeamFilter {
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { required: teams.into_iter().map(Into::into).collect() }
    }

    /// Split on `,` and trim each part. Empty parts stay: `""` requires a
    /// team labelled `""`, which keeps nobody on a normal page.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim))
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.required
    }

    /// Exact, case-sensitive match of any record team against any required team.
    pub fn matches(&self, record: &StaffRecord) -> bool {
        self.is_empty()
            || record
                .teams
                .iter()
                .any(|team| self.required.iter().any(|want| want == team))
    }
}

impl FromStr for TeamFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/* ---------------- Value parsers (shared by the CLI) ---------------- */

pub fn parse_output_filename(text: &str) -> Result<PathBuf, ConfigError> {
    let suffix = format!(".{OUTPUT_EXT}");
    if !text.ends_with(&suffix) {
        return Err(ConfigError::BadExtension { given: s!(text), expected: OUTPUT_EXT });
    }
    Ok(PathBuf::from(text))
}

pub fn parse_listing_url(text: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(text)
        .map_err(|e| ConfigError::BadUrl { given: s!(text), reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::BadUrl {
            given: s!(text),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

pub fn parse_timeout(text: &str) -> Result<Duration, ConfigError> {
    match text.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::BadTimeout(s!(text))),
    }
}
