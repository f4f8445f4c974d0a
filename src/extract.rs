//! Two-pass extraction of the latest daily log, and the cycle report.
//!
//! # Algorithm
//! - Pass 1 walks the archive with `LatestObserver`: every candidate under
//!   the target directory is ranked by its embedded timestamp; nothing is
//!   extracted.
//! - Pass 2 re-opens the source and walks again with `ExactNameMatcher`,
//!   stopping at the first (only) extraction.
//!
//! Extraction is deferred until the identity of the one worthwhile entry
//! is certain, so at most one candidate payload is in memory at a time.

use core::fmt;

use crate::archive::{
    walk_entries, ArchiveError, ArchiveSource, EntryFlow, ExtractConfig, ScanStats,
};
use crate::csv::{get_field, CsvError, RowSelector};
use crate::datestamp::Instant;
use crate::select::{ExactNameMatcher, LatestObserver};

/// The winning entry with its payload bytes.
pub struct ExtractedEntry {
    pub name: String,
    pub logged_at: Instant,
    pub data: Vec<u8>,
}

/// Values read from the latest daily log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Base filename of the winning entry.
    pub file_name: String,
    /// Instant embedded in the filename.
    pub logged_at: Instant,
    /// Last-row timestamp column value, verbatim.
    pub timestamp: String,
    /// Last-row cycle-count column value, verbatim (no numeric coercion).
    pub cycle_count: String,
}

#[derive(Debug)]
pub enum ExtractError {
    Archive(ArchiveError),
    /// No entry under the target directory matched the prefix with a
    /// parseable embedded date.
    NoMatchingFile,
    Csv(CsvError),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Archive(err) => write!(f, "{err}"),
            ExtractError::NoMatchingFile => write!(f, "no matching daily log found"),
            ExtractError::Csv(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Archive(err) => Some(err),
            ExtractError::Csv(err) => Some(err),
            ExtractError::NoMatchingFile => None,
        }
    }
}

impl From<ArchiveError> for ExtractError {
    fn from(err: ArchiveError) -> Self {
        ExtractError::Archive(err)
    }
}

impl From<CsvError> for ExtractError {
    fn from(err: CsvError) -> Self {
        ExtractError::Csv(err)
    }
}

/// Find and extract the latest matching daily log.
pub fn extract_latest<S: ArchiveSource>(
    source: &S,
    cfg: &ExtractConfig,
    stats: &mut ScanStats,
) -> Result<ExtractedEntry, ExtractError> {
    // Pass 1: observe and rank.
    let mut observer = LatestObserver::new(&cfg.file_prefix);
    let mut stream = source.open_stream()?;
    walk_entries(
        &mut stream,
        &cfg.target_dir,
        &mut observer,
        &mut |_, _| EntryFlow::Continue,
        cfg,
        stats,
    )?;
    stats.note_malformed_candidates(observer.malformed_names());
    let winner = observer.into_latest().ok_or(ExtractError::NoMatchingFile)?;

    // Pass 2: extract exactly the winner from a fresh stream.
    let mut matcher = ExactNameMatcher::new(&winner.name);
    let mut payload: Option<Vec<u8>> = None;
    let mut stream = source.open_stream()?;
    walk_entries(
        &mut stream,
        &cfg.target_dir,
        &mut matcher,
        &mut |_, data| {
            payload = Some(data.to_vec());
            EntryFlow::Stop
        },
        cfg,
        stats,
    )?;

    // The entry was present in pass 1; its absence now means the source
    // changed between passes.
    let data = payload.ok_or(ExtractError::NoMatchingFile)?;
    Ok(ExtractedEntry {
        name: winner.name,
        logged_at: winner.logged_at,
        data,
    })
}

/// Extract the latest daily log and read its last-row report values.
pub fn read_cycle_report<S: ArchiveSource>(
    source: &S,
    cfg: &ExtractConfig,
    stats: &mut ScanStats,
) -> Result<CycleReport, ExtractError> {
    let entry = extract_latest(source, cfg, stats)?;
    let text = String::from_utf8_lossy(&entry.data);
    let timestamp = get_field(&text, RowSelector::Last, &cfg.timestamp_column)?.to_owned();
    let cycle_count = get_field(&text, RowSelector::Last, &cfg.cycle_count_column)?.to_owned();
    Ok(CycleReport {
        file_name: entry.name,
        logged_at: entry.logged_at,
        timestamp,
        cycle_count,
    })
}
