//! Core trait for push-style decompression.
//!
//! HU01 streams arrive in arbitrary-sized chunks (typically HTTP multipart
//! parts), so the decoder exposes a push API: the caller feeds compressed
//! bytes with [`PushDecompressor::add_input`] and drains plaintext with
//! [`PushDecompressor::decompress`] until [`PushDecompressor::finished`]
//! reports true.

use crate::error::Result;

/// A push-style streaming decompressor.
///
/// Implementors own their input buffering: bytes handed to `add_input` are
/// copied in, and decompressed bytes are copied out through `decompress`.
/// No method blocks or performs I/O.
pub trait PushDecompressor {
    /// Append compressed bytes to the decoder's input.
    fn add_input(&mut self, data: &[u8]);

    /// Decompress buffered input into `out`.
    ///
    /// Returns `Ok(Some(n))` with the number of bytes written; `n == 0`
    /// means more input is needed. Returns `Ok(None)` once the stream has
    /// finished. A failure aborts the stream: later calls keep failing
    /// until [`PushDecompressor::reset`].
    fn decompress(&mut self, out: &mut [u8]) -> Result<Option<usize>>;

    /// True once the declared plaintext size has been fully emitted.
    fn finished(&self) -> bool;

    /// Return to the freshly-constructed state, keeping allocations.
    fn reset(&mut self);

    /// Decompress a complete in-memory stream at once (convenience method).
    fn decompress_all(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.add_input(input);
        let mut output = Vec::new();
        let mut buffer = vec![0u8; 32768];

        loop {
            match self.decompress(&mut buffer)? {
                Some(0) | None => break,
                Some(n) => output.extend_from_slice(&buffer[..n]),
            }
        }

        Ok(output)
    }
}
