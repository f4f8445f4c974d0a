//! Entry-matcher strategies, including the two-pass "latest in family"
//! protocol.
//!
//! Pass 1 runs `LatestObserver`, which ranks candidate filenames by their
//! embedded timestamp without extracting anything. Pass 2 runs
//! `ExactNameMatcher` over a fresh stream to pull just the winner, so at
//! most one payload is ever held in memory.

use crate::archive::EntryMatcher;
use crate::datestamp::{parse_embedded_date, Instant};

/// Case-insensitive extension match (`".csv"`).
pub struct ExtensionMatcher {
    ext: String,
}

impl ExtensionMatcher {
    pub fn new(ext: &str) -> Self {
        Self {
            ext: ext.to_owned(),
        }
    }
}

impl EntryMatcher for ExtensionMatcher {
    fn matches(&mut self, file_name: &str) -> bool {
        match file_name.rfind('.') {
            Some(i) => file_name[i..].eq_ignore_ascii_case(&self.ext),
            None => false,
        }
    }
}

/// `*.ext` patterns, with exact-name fallback for anything else.
pub struct WildcardMatcher {
    pattern: String,
}

impl WildcardMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
        }
    }
}

impl EntryMatcher for WildcardMatcher {
    fn matches(&mut self, file_name: &str) -> bool {
        if let Some(ext) = self.pattern.strip_prefix('*') {
            if ext.starts_with('.') {
                return match file_name.rfind('.') {
                    Some(i) => file_name[i..].eq_ignore_ascii_case(ext),
                    None => false,
                };
            }
        }
        file_name == self.pattern
    }
}

/// A ranked candidate from pass 1.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub name: String,
    pub logged_at: Instant,
}

/// Pass-1 strategy: observe and rank, never extract.
///
/// A name qualifies when it starts with the family prefix and carries a
/// parseable timestamp after the first `_` past the prefix. Malformed
/// candidates are counted and skipped; a strictly-greater comparison
/// keeps the first of equals in archive order.
pub struct LatestObserver {
    prefix: String,
    best: Option<Candidate>,
    malformed: u64,
}

impl LatestObserver {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            best: None,
            malformed: 0,
        }
    }

    #[inline]
    pub fn malformed_names(&self) -> u64 {
        self.malformed
    }

    #[inline]
    pub fn into_latest(self) -> Option<Candidate> {
        self.best
    }
}

impl EntryMatcher for LatestObserver {
    fn matches(&mut self, file_name: &str) -> bool {
        let Some(rest) = file_name.strip_prefix(&self.prefix) else {
            return false;
        };
        let Some(sep) = rest.find('_') else {
            return false;
        };
        match parse_embedded_date(&rest[sep + 1..]) {
            Ok(logged_at) => {
                if self.best.as_ref().map_or(true, |b| logged_at > b.logged_at) {
                    self.best = Some(Candidate {
                        name: file_name.to_owned(),
                        logged_at,
                    });
                }
            }
            Err(_) => self.malformed = self.malformed.saturating_add(1),
        }
        false
    }
}

/// Pass-2 strategy: accept exactly the winning filename.
pub struct ExactNameMatcher {
    name: String,
}

impl ExactNameMatcher {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl EntryMatcher for ExactNameMatcher {
    fn matches(&mut self, file_name: &str) -> bool {
        file_name == self.name
    }
}
