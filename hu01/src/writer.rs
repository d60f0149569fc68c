//! Write-side decompression adapter.
//!
//! [`Hu01Writer`] wraps an inner [`Write`] sink: compressed bytes written
//! to the adapter come out of the inner sink decompressed. It is a thin
//! shim over [`Hu01Decompressor`] that owns the drain buffering and maps
//! decoder failures onto [`io::Error`] (kind `InvalidData`) with the
//! original error attached as the source.

use crate::decompressor::Hu01Decompressor;
use hu01_core::traits::PushDecompressor;
use std::io::{self, Write};

/// Default size of the internal drain buffer.
const DEFAULT_BUFFER_SIZE: usize = 1024;

/// A `Write` adapter that decompresses everything written to it into an
/// inner sink.
///
/// ```no_run
/// use hu01::Hu01Writer;
/// use std::io::Write;
///
/// # fn demo(compressed: &[u8]) -> std::io::Result<Vec<u8>> {
/// let mut writer = Hu01Writer::new(Vec::new());
/// writer.write_all(compressed)?;
/// writer.finish()?;
/// # Ok(writer.into_inner())
/// # }
/// ```
#[derive(Debug)]
pub struct Hu01Writer<W: Write> {
    inner: W,
    decompressor: Hu01Decompressor,
    buf: Vec<u8>,
}

impl<W: Write> Hu01Writer<W> {
    /// Wrap `inner` with a default decompressor and drain buffer.
    pub fn new(inner: W) -> Self {
        Self::with_decompressor(inner, Hu01Decompressor::new(), DEFAULT_BUFFER_SIZE)
    }

    /// Wrap `inner` with a caller-supplied decompressor and drain buffer
    /// size.
    ///
    /// # Panics
    ///
    /// Panics if `buf_len` is zero.
    pub fn with_decompressor(inner: W, decompressor: Hu01Decompressor, buf_len: usize) -> Self {
        assert!(buf_len > 0, "drain buffer must not be empty");
        Self {
            inner,
            decompressor,
            buf: vec![0u8; buf_len],
        }
    }

    /// True once the wrapped decoder has emitted its declared size.
    pub fn finished(&self) -> bool {
        self.decompressor.finished()
    }

    /// Push everything currently decodable into the inner sink.
    pub fn finish(&mut self) -> io::Result<()> {
        self.drain()
    }

    /// Get a reference to the inner sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consume the adapter, returning the inner sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn drain(&mut self) -> io::Result<()> {
        loop {
            match self.decompressor.decompress(&mut self.buf) {
                Ok(Some(0)) | Ok(None) => return Ok(()),
                Ok(Some(n)) => self.inner.write_all(&self.buf[..n])?,
                Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidData, err)),
            }
        }
    }
}

impl<W: Write> Write for Hu01Writer<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.decompressor.add_input(data);
        self.drain()?;
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_maps_to_invalid_data() {
        let mut writer = Hu01Writer::new(Vec::new());
        let err = writer.write(&[b'Z'; 64]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        // The decoder error stays visible as the cause
        let source = err.get_ref().expect("cause missing");
        assert!(source.to_string().contains("bad file header"));
    }

    #[test]
    fn test_partial_header_is_buffered_without_output() {
        let mut writer = Hu01Writer::new(Vec::new());
        // Half a file header: nothing to decode yet, nothing written through
        writer.write_all(b"HU01\x28\x00\x00\x00").expect("write failed");
        assert!(writer.get_ref().is_empty());
        assert!(!writer.finished());
    }
}
