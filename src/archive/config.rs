//! Extraction policy and hard limits.
//!
//! # Invariants
//! - All limits are hard bounds; archive metadata is untrusted input.
//!
//! # Design Notes
//! - Defaults carry the product constants (sysdiagnose battery logs); the
//!   CLI overrides them per flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for one extraction run.
///
/// `target_dir` is compared as a directory prefix (a trailing separator is
/// implied regardless of how it was supplied; empty matches everything).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Archive directory the candidate entries must live under.
    pub target_dir: String,
    /// Base-filename prefix of the daily-log family.
    pub file_prefix: String,
    /// Header name of the timestamp column.
    pub timestamp_column: String,
    /// Header name of the cycle-count column.
    pub cycle_count_column: String,
    /// Maximum accepted payload size for a single extracted entry.
    pub max_entry_bytes: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            target_dir: "logs/BatteryBDC/".to_string(),
            file_prefix: "BDC_Daily_version".to_string(),
            timestamp_column: "TimeStamp".to_string(),
            cycle_count_column: "CycleCount".to_string(),
            max_entry_bytes: 64 * 1024 * 1024, // 64 MiB
        }
    }
}

/// Validation error returned by `ExtractConfig::validate`.
///
/// Callers should treat this as a configuration bug, not hostile input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MaxEntryBytesZero,
    FilePrefixEmpty,
    TimestampColumnEmpty,
    CycleCountColumnEmpty,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MaxEntryBytesZero => write!(f, "max_entry_bytes must be > 0"),
            ConfigError::FilePrefixEmpty => write!(f, "file_prefix must not be empty"),
            ConfigError::TimestampColumnEmpty => write!(f, "timestamp_column must not be empty"),
            ConfigError::CycleCountColumnEmpty => {
                write!(f, "cycle_count_column must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ExtractConfig {
    /// Validate field invariants. Cheap; call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entry_bytes == 0 {
            return Err(ConfigError::MaxEntryBytesZero);
        }
        if self.file_prefix.is_empty() {
            return Err(ConfigError::FilePrefixEmpty);
        }
        if self.timestamp_column.is_empty() {
            return Err(ConfigError::TimestampColumnEmpty);
        }
        if self.cycle_count_column.is_empty() {
            return Err(ConfigError::CycleCountColumnEmpty);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = ExtractConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.target_dir, "logs/BatteryBDC/");
        assert_eq!(cfg.file_prefix, "BDC_Daily_version");
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let cfg = ExtractConfig {
            max_entry_bytes: 0,
            ..ExtractConfig::default()
        };
        assert_eq!(cfg.validate().unwrap_err(), ConfigError::MaxEntryBytesZero);
    }

    #[test]
    fn validate_rejects_empty_columns() {
        let cfg = ExtractConfig {
            timestamp_column: String::new(),
            ..ExtractConfig::default()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            ConfigError::TimestampColumnEmpty
        );
    }

    #[test]
    fn empty_target_dir_is_allowed() {
        // An empty directory prefix matches every entry; only the matcher
        // narrows the candidate set then.
        let cfg = ExtractConfig {
            target_dir: String::new(),
            ..ExtractConfig::default()
        };
        cfg.validate().unwrap();
    }
}
