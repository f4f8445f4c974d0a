//! Latest-daily-log extraction from gzip-compressed sysdiagnose tar
//! archives.
//!
//! ## Scope
//! This crate streams a `.tar.gz` sysdiagnose report, finds the most
//! recent daily battery log under a target directory by the timestamp
//! embedded in its filename, and reads single row/column values out of
//! its CSV content.
//!
//! ## Key invariants
//! - The archive is never materialized: headers are parsed block by
//!   block and non-matching payloads are discarded as they stream past.
//! - Header fields (sizes, names) are untrusted: octal parsing
//!   saturates, payload allocation is capped, and traversal-unsafe entry
//!   names are skipped before any content is read.
//! - At most one entry payload is held in memory, and only after a full
//!   observation pass has proven it is the one worth extracting.
//!
//! ## Flow
//! `ArchiveSource -> walk_entries (pass 1: LatestObserver) ->
//! walk_entries (pass 2: ExactNameMatcher) -> csv::get_field -> CycleReport`
//!
//! ## Notable entry points
//! - `extract::read_cycle_report`: the whole operation in one call.
//! - `archive::walk_entries` / `archive::EntryMatcher`: the streaming
//!   walk with a pluggable per-entry predicate.
//! - `csv::get_field`: quote-aware row/column access over raw text.

pub mod archive;
pub mod csv;
pub mod datestamp;
pub mod extract;
pub mod select;

pub use archive::{
    parse_octal, walk_entries, ArchiveError, ArchiveSource, ConfigError, EntryFlow, EntryMatcher,
    EntrySkipReason, ExtractConfig, GzipBytesSource, GzipFileSource, ScanStats,
};
pub use csv::{get_field, CsvError, RowSelector, MAX_COLUMNS};
pub use datestamp::{parse_embedded_date, DateError, Instant};
pub use extract::{extract_latest, read_cycle_report, CycleReport, ExtractError, ExtractedEntry};
pub use select::{Candidate, ExactNameMatcher, ExtensionMatcher, LatestObserver, WildcardMatcher};
