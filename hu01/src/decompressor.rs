//! Incremental push-style decompression facade.
//!
//! [`Hu01Decompressor`] resembles a `flate2::Decompress` in use: the caller
//! feeds compressed bytes in whatever chunks the transport produced and
//! drains plaintext until [`Hu01Decompressor::finished`] reports true. The
//! decoder buffers input internally, so headers and blocks that straddle
//! chunk boundaries are handled transparently.
//!
//! ```
//! use hu01::Hu01Decompressor;
//! use hu01_core::PushDecompressor;
//!
//! # fn demo(compressed_chunks: &[&[u8]]) -> hu01_core::Result<Vec<u8>> {
//! let mut decoder = Hu01Decompressor::new();
//! let mut plain = Vec::new();
//! let mut buf = [0u8; 1024];
//! for chunk in compressed_chunks {
//!     decoder.add_input(chunk);
//!     while let Some(n) = decoder.decompress(&mut buf)? {
//!         if n == 0 {
//!             break;
//!         }
//!         plain.extend_from_slice(&buf[..n]);
//!     }
//! }
//! assert!(decoder.finished());
//! # Ok(plain)
//! # }
//! ```

use crate::block::decode_block;
use crate::header::{peek_block_header, read_file_header};
use crate::table::{DESCRIPTOR_LEN, TABLE_SIZE, build_decode_table};
use hu01_core::buffer::InputBuffer;
use hu01_core::crc::Crc32;
use hu01_core::error::{Hu01Error, Result};
use hu01_core::traits::PushDecompressor;

/// Default initial capacity of the internal input buffer.
const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Streaming decoder for a complete HU01 container.
///
/// One decoder handles one stream at a time; [`Hu01Decompressor::reset`]
/// returns it to the freshly-constructed state (keeping its allocations)
/// for the next stream. The decoder is single-threaded by contract and
/// never blocks.
#[derive(Debug)]
pub struct Hu01Decompressor {
    /// True until the file header has been consumed.
    in_header: bool,
    /// Total plaintext size announced by the file header.
    declared_size: u64,
    /// Plaintext bytes already handed to the caller.
    produced: u64,
    /// Compressed bytes not yet consumed.
    input: InputBuffer,
    /// Plaintext of the most recent block, awaiting the caller.
    decoded: Vec<u8>,
    /// Drain position within `decoded`.
    decoded_pos: usize,
    /// Decode table scratch, reused across blocks.
    table: Box<[u16]>,
    /// First failure; re-raised on every call until reset.
    failure: Option<Hu01Error>,
}

impl Hu01Decompressor {
    /// Create a decoder with the default input buffer capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    /// Create a decoder with the given initial input buffer capacity.
    pub fn with_capacity(initial: usize) -> Self {
        Self {
            in_header: true,
            declared_size: 0,
            produced: 0,
            input: InputBuffer::with_capacity(initial),
            decoded: Vec::new(),
            decoded_pos: 0,
            table: vec![0u16; TABLE_SIZE].into_boxed_slice(),
            failure: None,
        }
    }

    /// Total plaintext size declared by the file header, or 0 while the
    /// header has not been seen yet.
    pub fn declared_size(&self) -> u64 {
        self.declared_size
    }

    /// Plaintext bytes delivered to the caller so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Parse and decode the next block if it is fully buffered.
    ///
    /// Returns false when more input is needed. On success `decoded` holds
    /// the block's plaintext (possibly empty for a zero-length block) and
    /// the block region has been consumed from the input.
    fn next_block(&mut self) -> Result<bool> {
        let header = match peek_block_header(&self.input)? {
            Some(header) => header,
            None => return Ok(false),
        };

        self.decoded.clear();
        self.decoded.resize(header.decompressed_size, 0);
        self.decoded_pos = 0;

        let region = self.input.slice(header.region_len());
        let payload = &region[header.header_size..];

        if header.is_raw() {
            self.decoded.copy_from_slice(payload);
        } else {
            if payload.len() < DESCRIPTOR_LEN {
                return Err(Hu01Error::bad_block_header(format!(
                    "compressed payload of {} bytes cannot hold the code length descriptor",
                    payload.len()
                )));
            }
            let (descriptor, stream) = payload.split_at(DESCRIPTOR_LEN);
            build_decode_table(descriptor, &mut self.table)?;
            decode_block(stream, &self.table, &mut self.decoded)?;
        }

        self.input.advance(header.region_len());

        let computed = Crc32::compute(&self.decoded);
        if computed != header.expected_crc {
            return Err(Hu01Error::crc_mismatch(header.expected_crc, computed));
        }

        Ok(true)
    }

    fn pump(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.in_header {
            match read_file_header(&mut self.input)? {
                Some(size) => {
                    self.in_header = false;
                    self.declared_size = size;
                }
                None => return Ok(0),
            }
        }

        if self.decoded_pos >= self.decoded.len() && !self.next_block()? {
            return Ok(0);
        }

        let n = out.len().min(self.decoded.len() - self.decoded_pos);
        out[..n].copy_from_slice(&self.decoded[self.decoded_pos..self.decoded_pos + n]);
        self.decoded_pos += n;
        self.produced += n as u64;
        Ok(n)
    }
}

impl Default for Hu01Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl PushDecompressor for Hu01Decompressor {
    fn add_input(&mut self, data: &[u8]) {
        self.input.append(data);
    }

    fn decompress(&mut self, out: &mut [u8]) -> Result<Option<usize>> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if self.finished() {
            return Ok(None);
        }
        match self.pump(out) {
            Ok(n) => Ok(Some(n)),
            Err(err) => {
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    fn finished(&self) -> bool {
        !self.in_header && self.produced == self.declared_size
    }

    fn reset(&mut self) {
        self.in_header = true;
        self.declared_size = 0;
        self.produced = 0;
        self.input.clear();
        self.decoded.clear();
        self.decoded_pos = 0;
        self.failure = None;
    }
}
