//! Streaming archive support.
//!
//! # Scope
//! This module defines the archive-side contract: configuration, typed
//! errors and scan diagnostics, gzip decoding, tar header parsing, path
//! safety, and the matcher-driven entry walk.
//!
//! # Design Notes
//! - Reading is streaming-only; multi-pass protocols re-open the source.
//! - Entry selection policy lives outside this module (`crate::select`);
//!   the walk only knows the `EntryMatcher` seam.

pub mod config;
pub mod gzip;
pub mod outcome;
pub mod path;
pub mod tar;
pub mod walk;

pub use config::{ConfigError, ExtractConfig};
pub use gzip::{is_gzip_magic, GzipStream, GZIP_MAGIC};
pub use outcome::{
    ArchiveError, EntrySkipReason, ScanStats, UNSAFE_SAMPLE_MAX, UNSAFE_SAMPLE_PREFIX_MAX,
};
pub use path::is_safe_entry_path;
pub use tar::{parse_octal, tar_pad, TarCursor, TarEntryMeta, TarNext, TAR_BLOCK_LEN};
pub use walk::{
    walk_entries, ArchiveSource, EntryFlow, EntryMatcher, GzipBytesSource, GzipFileSource,
};
