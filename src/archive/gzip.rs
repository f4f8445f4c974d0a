//! gzip sniff helper + streaming decoder wrapper.
//!
//! # Invariants
//! - The stream is read sequentially; no seeking.
//! - `MultiGzDecoder` treats concatenated members as a single stream.

use std::io::{self, Read};

use flate2::read::MultiGzDecoder;

/// gzip magic bytes (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[inline(always)]
pub fn is_gzip_magic(header: &[u8]) -> bool {
    header.len() >= 2 && header[0] == GZIP_MAGIC[0] && header[1] == GZIP_MAGIC[1]
}

/// Streaming gzip decoder that supports concatenated members.
pub struct GzipStream<R: Read> {
    dec: MultiGzDecoder<R>,
}

impl<R: Read> GzipStream<R> {
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            dec: MultiGzDecoder::new(reader),
        }
    }

    #[inline]
    pub fn into_inner(self) -> R {
        self.dec.into_inner()
    }
}

impl<R: Read> Read for GzipStream<R> {
    #[inline]
    fn read(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        self.dec.read(dst)
    }
}
