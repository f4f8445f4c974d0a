//! Property tests for the untrusted-input parsers.

mod parsing;
