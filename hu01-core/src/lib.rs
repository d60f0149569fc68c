//! # HU01 Core
//!
//! Core components for the HU01 decompressor library.
//!
//! This crate provides the building blocks the codec crate is assembled
//! from:
//!
//! - [`buffer`]: growable input byte queue with a read cursor
//! - [`crc`]: CRC-32 (ISO 3309) for per-block integrity checks
//! - [`error`]: the error taxonomy shared by every stage of decoding
//! - [`traits`]: the push-style decompressor capability
//!
//! ## Architecture
//!
//! The decoder is a single forward pipeline:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Facade: push API (add_input / decompress / finished)     │
//! ├──────────────────────────────────────────────────────────┤
//! │ Container: file header, SCBH block headers, CRC-32       │
//! ├──────────────────────────────────────────────────────────┤
//! │ Codec: Huffman decode table + LZ77-style block decoder   │
//! ├──────────────────────────────────────────────────────────┤
//! │ This crate: InputBuffer, Crc32, Hu01Error                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hu01_core::buffer::InputBuffer;
//! use hu01_core::crc::Crc32;
//!
//! let mut input = InputBuffer::with_capacity(4096);
//! input.append(b"SCBH");
//! assert_eq!(input.peek_le_u32(0), 0x48424353);
//!
//! assert_eq!(Crc32::compute(b"Hello, World!"), 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod crc;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use buffer::InputBuffer;
pub use crc::Crc32;
pub use error::{Hu01Error, Result};
pub use traits::PushDecompressor;
