// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Bad command-line input. Always fatal, always raised before any request goes out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Output filename must end in .{expected}: {given}")]
    BadExtension { given: String, expected: &'static str },

    #[error("Invalid listing URL {given}: {reason}")]
    BadUrl { given: String, reason: String },

    #[error("Timeout must be a positive number of seconds: {0}")]
    BadTimeout(String),
}

/// A single page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { .. } => None,
        }
    }
}

/// Run-level failures. Anything per-profile is reported and skipped instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Listing page unavailable, nothing to scrape")]
    Listing(#[source] FetchError),

    #[error("Could not create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write CSV to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
