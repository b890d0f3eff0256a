// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::config::consts::CSV_HEADERS;
use crate::error::ScrapeError;
use crate::store::{StaffCollection, StaffRecord};

/// One CSV row in header order: Name, Title, Team(s), Biography, Photo Link.
pub fn record_row(record: &StaffRecord) -> [String; 5] {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        s!(record.name()),
        opt(&record.title),
        record.teams_joined(),
        opt(&record.biography),
        opt(&record.photo_link),
    ]
}

/// Write header + one row per record to any writer.
pub fn write_staff<W: Write>(w: W, staff: &StaffCollection) -> Result<(), csv::Error> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(w);

    out.write_record(CSV_HEADERS)?;
    for record in staff {
        out.write_record(record_row(record))?;
    }
    out.flush()?;
    Ok(())
}

/// Create/truncate `path` (and its parent dirs) and write the collection.
/// Returns the path written to.
pub fn write_staff_csv(staff: &StaffCollection, path: &Path) -> Result<PathBuf, ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(path).map_err(|e| ScrapeError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    write_staff(file, staff).map_err(|source| ScrapeError::Write { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    let err = |source| ScrapeError::OutputDir { path: dir.to_path_buf(), source };
    if dir.exists() && !dir.is_dir() {
        return Err(err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(err)?;
    }
    Ok(())
}
