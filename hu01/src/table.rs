//! Canonical-Huffman decode table construction.
//!
//! Every compressed block opens with a 256-byte descriptor holding one
//! nibble per symbol: the code length (0 = absent) of each of the 512
//! symbols, low nibble first within each byte. From those lengths alone the
//! canonical code is fully determined, and this module expands it into the
//! 32,768-entry lookup table the block decoder runs on.
//!
//! ## Table layout
//!
//! Each entry packs `code_length` in its low 4 bits and the symbol in bits
//! 4..15. Codes of up to 10 bits resolve with a single lookup on the top 10
//! bits of the bit register: a length-`l` code owns `1 << (10 - l)`
//! consecutive slots of the primary region (indices 0..1024). Longer codes
//! mark their primary slot with bit 15 and store a pointer to a pair of
//! slots higher up in the table; the decoder then descends one bit at a
//! time through pointer pairs until it fetches an entry without the marker.
//! The decoder's walk indexes `table[(entry & 0x7FFF) + bit]`, which is the
//! unsigned form of the signed `table[0x8000 + entry]` arithmetic the
//! original 32-bit routine used.
//!
//! The construction is deterministic: two builds from the same descriptor
//! produce identical tables, which makes the table itself a testable
//! fingerprint of the descriptor.

use hu01_core::error::{Hu01Error, Result};

/// Number of entries in the decode table.
pub const TABLE_SIZE: usize = 0x8000;
/// Size of the code-length descriptor that precedes each compressed block.
pub const DESCRIPTOR_LEN: usize = 256;

/// Number of symbols described by the descriptor nibbles.
const SYMBOL_COUNT: usize = 512;
/// Marker bit for "long code, continue in the secondary region".
const LONG_CODE: u16 = 0x8000;

/// Code length of a descriptor nibble for `symbol`.
#[inline]
fn length_of(descriptor: &[u8], symbol: usize) -> usize {
    let nibbles = descriptor[symbol >> 1];
    if symbol & 1 != 0 {
        (nibbles >> 4) as usize
    } else {
        (nibbles & 0x0F) as usize
    }
}

/// Build the decode table for one block.
///
/// `descriptor` must hold the 256 code-length bytes; `table` must hold
/// [`TABLE_SIZE`] entries and is fully overwritten where the new code needs
/// it (stale entries outside the regions written here are unreachable).
///
/// Fails with [`Hu01Error::BadTable`] when the length set is not a valid,
/// complete canonical-Huffman code or describes fewer than two symbols.
pub fn build_decode_table(descriptor: &[u8], table: &mut [u16]) -> Result<()> {
    debug_assert_eq!(descriptor.len(), DESCRIPTOR_LEN);
    debug_assert_eq!(table.len(), TABLE_SIZE);

    // Count symbols per code length
    let mut counts = [0usize; 16];
    for &nibbles in descriptor {
        counts[(nibbles & 0x0F) as usize] += 1;
        counts[(nibbles >> 4) as usize] += 1;
    }
    if counts[0] >= SYMBOL_COUNT - 1 {
        return Err(Hu01Error::BadTable);
    }
    let class_counts = counts;

    // Kraft equality, checked the way the reference does: walking from the
    // longest length down, each level must pair off evenly, and exactly one
    // slot must remain at the root.
    let mut carry = 0usize;
    for length in (1..16).rev() {
        let nodes = counts[length] + carry;
        if nodes & 1 != 0 {
            return Err(Hu01Error::BadTable);
        }
        carry = nodes >> 1;
    }
    if carry != 1 {
        return Err(Hu01Error::BadTable);
    }

    // Inclusive prefix sums: counts[l] becomes the number of symbols with
    // length <= l
    let mut acc = 0usize;
    for length in 1..16 {
        counts[length] += acc;
        acc = counts[length];
    }
    let total = counts[15];

    // Place the symbols into table[0..total], grouped by length and in
    // symbol order within each group
    for symbol in (0..SYMBOL_COUNT).rev() {
        let length = length_of(descriptor, symbol);
        if length != 0 {
            counts[length] -= 1;
            table[counts[length]] = (length as u16) | ((symbol as u16) << 4);
        }
    }

    // Grow the secondary tree from the longest level down to length 11.
    // Each level first emits pointer pairs covering everything the previous
    // level left above `floor`, then moves its own leaves in below them.
    let mut next = total;
    let mut pair = 2048usize;
    let mut top = 2048usize;
    for length in (11..=15).rev() {
        let floor = top;
        while pair > floor {
            pair -= 2;
            top -= 1;
            table[top] = (pair as u16) | LONG_CODE;
        }
        for _ in 0..class_counts[length] {
            next -= 1;
            top -= 1;
            table[top] = table[next];
        }
        pair = floor;
    }

    // Root pointers for the long codes occupy the upper primary slots
    let mut slot = 1024usize;
    while pair > top {
        pair -= 2;
        slot -= 1;
        table[slot] = (pair as u16) | LONG_CODE;
    }

    // Fan the remaining (length <= 10) symbols out over the primary region;
    // a length-l code owns 1024 >> l consecutive slots
    while next > 0 {
        next -= 1;
        let leaf = table[next];
        let stop = slot - (1024 >> (leaf & 0x0F) as usize);
        while slot > stop {
            slot -= 1;
            table[slot] = leaf;
        }
    }
    debug_assert_eq!(slot, 0);

    Ok(())
}
