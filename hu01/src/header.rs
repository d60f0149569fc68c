//! File-level and block-level header parsing.
//!
//! An HU01 stream opens with a file header announcing the total plaintext
//! size, followed by one or more `SCBH` blocks. Both readers peek at the
//! [`InputBuffer`] without advancing until the structure they describe is
//! fully visible, so partial input is never consumed.

use hu01_core::buffer::InputBuffer;
use hu01_core::error::{Hu01Error, Result};

/// File header magic, `HU01` read as a little-endian u32.
pub const HU01_MAGIC: u32 = 0x31305548;
/// Block header magic, `SCBH` read as a little-endian u32.
pub const SCBH_MAGIC: u32 = 0x48424353;

/// Minimum file header size in bytes.
pub const FILE_HEADER_MIN: usize = 0x28;
/// Fixed size of a block header in bytes.
pub const BLOCK_HEADER_LEN: usize = 20;

/// Offset of the declared plaintext size within the file header.
const DECLARED_SIZE_OFFSET: usize = 32;

/// A parsed `SCBH` block header.
///
/// The block region spans `header_size + compressed_size` bytes from the
/// start of the header; the payload starts `header_size` bytes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Size of the block header itself.
    pub header_size: usize,
    /// Number of plaintext bytes this block decodes to.
    pub decompressed_size: usize,
    /// Expected CRC-32 over the decoded block bytes.
    pub expected_crc: u32,
    /// Size of the compressed payload (including the 256-byte code-length
    /// descriptor when the block is compressed).
    pub compressed_size: usize,
}

impl BlockHeader {
    /// Total size of the block region: header plus payload.
    pub fn region_len(&self) -> usize {
        self.header_size + self.compressed_size
    }

    /// True if this block stores its payload verbatim.
    ///
    /// The compressor marks nothing; equal sizes on a small block are the
    /// only signal the reference decoder uses, and the heuristic is
    /// preserved exactly for compatibility.
    pub fn is_raw(&self) -> bool {
        self.compressed_size == self.decompressed_size && self.decompressed_size < 2048
    }
}

fn magic_chars(magic: u32) -> String {
    magic
        .to_le_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}

/// Try to read the file header at the cursor.
///
/// Returns `Ok(None)` while the full header is not yet visible. On success
/// the cursor is advanced past the header and the declared plaintext size
/// is returned.
pub fn read_file_header(input: &mut InputBuffer) -> Result<Option<u64>> {
    if input.remaining() < FILE_HEADER_MIN {
        return Ok(None);
    }
    let magic = input.peek_le_u32(0);
    if magic != HU01_MAGIC {
        return Err(Hu01Error::bad_file_header(format!(
            "'HU01' expected at beginning of header (was '{}')",
            magic_chars(magic)
        )));
    }
    let header_size = input.peek_le_u32(4) as usize;
    if header_size < FILE_HEADER_MIN {
        return Err(Hu01Error::bad_file_header(format!(
            "header size must be at least {:#x} bytes (was {:#x})",
            FILE_HEADER_MIN, header_size
        )));
    }
    if input.remaining() < header_size {
        return Ok(None);
    }
    let declared_size = input.peek_le_u32(DECLARED_SIZE_OFFSET) as u64;
    input.advance(header_size);
    Ok(Some(declared_size))
}

/// Try to read one block header at the cursor.
///
/// Returns `Ok(None)` until the header *and* its complete payload are
/// visible. The cursor is not advanced; the caller consumes
/// [`BlockHeader::region_len`] bytes once it has decoded the payload.
pub fn peek_block_header(input: &InputBuffer) -> Result<Option<BlockHeader>> {
    if input.remaining() < BLOCK_HEADER_LEN {
        return Ok(None);
    }
    let magic = input.peek_le_u32(0);
    if magic != SCBH_MAGIC {
        return Err(Hu01Error::bad_block_header(format!(
            "'SCBH' expected at beginning of block header (was '{}')",
            magic_chars(magic)
        )));
    }
    let header = BlockHeader {
        header_size: input.peek_le_u32(4) as usize,
        decompressed_size: input.peek_le_u32(8) as usize,
        expected_crc: input.peek_le_u32(12),
        compressed_size: input.peek_le_u32(16) as usize,
    };
    if (input.remaining() as u64) < header.header_size as u64 + header.compressed_size as u64 {
        return Ok(None);
    }
    Ok(Some(header))
}
