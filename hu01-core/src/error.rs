//! Error types for HU01 decompression.
//!
//! Every failure the decoder can produce maps to one variant of
//! [`Hu01Error`]. All of them are fatal for the current stream: the facade
//! does not attempt recovery, and a decoder that has reported an error keeps
//! re-raising it until it is reset.

use thiserror::Error;

/// The error type for HU01 decompression.
///
/// The type is `Clone` so that an aborted decoder can re-raise the failure
/// that killed the stream on every subsequent call.
#[derive(Debug, Clone, Error)]
pub enum Hu01Error {
    /// File header magic mismatch, or a header-size field below the 40-byte
    /// minimum.
    #[error("bad file header: {message}")]
    BadFileHeader {
        /// Description of what was wrong with the header.
        message: String,
    },

    /// Block header magic mismatch, or block sizes that cannot hold the
    /// mandatory decode table.
    #[error("bad block header: {message}")]
    BadBlockHeader {
        /// Description of what was wrong with the header.
        message: String,
    },

    /// The 256-byte code-length descriptor is not a valid canonical-Huffman
    /// length set (parity or completeness violated, or fewer than two
    /// symbols present).
    #[error("invalid code length table")]
    BadTable,

    /// A decoded match references a position before the start of the block.
    #[error("back-reference before start of block (source position {src_pos})")]
    BadReference {
        /// The out-of-range source position, relative to the block start.
        src_pos: i64,
    },

    /// The entropy-coded stream used a reserved encoding.
    #[error("corrupt bit stream: {message}")]
    BadBitStream {
        /// Description of the reserved encoding that was hit.
        message: String,
    },

    /// CRC-32 over a decoded block did not match the value in its header.
    #[error("CRC mismatch: expected {expected:#010x}, computed {computed:#010x}")]
    CrcMismatch {
        /// Expected CRC value from the block header.
        expected: u32,
        /// CRC value computed over the decoded block.
        computed: u32,
    },
}

/// Result type alias for HU01 operations.
pub type Result<T> = std::result::Result<T, Hu01Error>;

impl Hu01Error {
    /// Create a bad file header error.
    pub fn bad_file_header(message: impl Into<String>) -> Self {
        Self::BadFileHeader {
            message: message.into(),
        }
    }

    /// Create a bad block header error.
    pub fn bad_block_header(message: impl Into<String>) -> Self {
        Self::BadBlockHeader {
            message: message.into(),
        }
    }

    /// Create a bad back-reference error.
    pub fn bad_reference(src_pos: i64) -> Self {
        Self::BadReference { src_pos }
    }

    /// Create a corrupt bit stream error.
    pub fn bad_bit_stream(message: impl Into<String>) -> Self {
        Self::BadBitStream {
            message: message.into(),
        }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(expected: u32, computed: u32) -> Self {
        Self::CrcMismatch { expected, computed }
    }
}
