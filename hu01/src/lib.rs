//! # HU01
//!
//! Streaming decoder for the proprietary *HU01* compressed container used
//! by Microsoft's DeltaSync protocol to transport email bodies.
//!
//! An HU01 stream is a file header (declaring the total plaintext size)
//! followed by `SCBH` blocks. Each block is either stored verbatim or
//! entropy-coded: a 256-byte canonical-Huffman code-length descriptor, then
//! a bit stream of literal bytes and LZ77-style back-references, with a
//! CRC-32 over the decoded bytes. The format has no public documentation;
//! the decoder is bit-exact with the reverse-engineered reference routine,
//! including its quirks (byte-aligned length extensions, copies clipped at
//! the block end, the empirical raw-block heuristic).
//!
//! ## Decoding a stream
//!
//! The decoder is push-style: feed compressed chunks as the transport
//! delivers them, drain plaintext as it becomes available.
//!
//! ```
//! use hu01::Hu01Decompressor;
//! use hu01_core::PushDecompressor;
//!
//! # fn demo(chunks: &[Vec<u8>]) -> hu01_core::Result<Vec<u8>> {
//! let mut decoder = Hu01Decompressor::new();
//! let mut plain = Vec::new();
//! let mut buf = [0u8; 4096];
//! for chunk in chunks {
//!     decoder.add_input(chunk);
//!     while let Some(n) = decoder.decompress(&mut buf)? {
//!         if n == 0 {
//!             break;
//!         }
//!         plain.extend_from_slice(&buf[..n]);
//!     }
//! }
//! # Ok(plain)
//! # }
//! ```
//!
//! Alternatively, [`Hu01Writer`] adapts the decoder onto any
//! [`std::io::Write`] sink.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod header;
pub mod table;

mod block;
mod decompressor;
mod writer;

// Re-exports
pub use decompressor::Hu01Decompressor;
pub use hu01_core::{Hu01Error, PushDecompressor, Result};
pub use writer::Hu01Writer;
