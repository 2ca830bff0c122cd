/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing AIF images
//!
//! This exposes the traits the decoder reads from and
//! the encoder writes into.

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};

/// The Input trait implemented for readers.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`ZCursor`](crate::bytestream::ZCursor) over [`Cursor`](std::io::Cursor).
/// Both work, but `ZCursor` never goes through `std::io` and is available in `no_std` builds.
pub trait ZByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    ///  ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError>;

    /// Read exactly `N` bytes, the fixed size version of [`read_exact_bytes`](Self::read_exact_bytes)
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }

    /// Seek into a new position from the buffer
    ///
    /// This is similar to the [seek](std::io::Seek::seek) function in the [Seek](std::io::Seek) trait
    /// but implemented to work for no-std environments
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError>;

    /// Report whether we are at the end of a stream.
    fn is_eof(&mut self) -> Result<bool, ZByteIoError>;

    /// Return the current position of the inner cursor.
    fn z_position(&mut self) -> Result<u64, ZByteIoError>;

    /// Read all bytes remaining in this input to `sink` until we hit eof
    ///
    /// # Returns
    /// - `Ok(usize)` The actual number of bytes added to the sink
    /// - `Err()` An error that occurred when reading bytes
    fn read_remaining(&mut self, sink: &mut alloc::vec::Vec<u8>) -> Result<usize, ZByteIoError>;
}

/// The writer trait implemented for the AIF encoder
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ZByteWriterTrait {
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.write_all_bytes(buf)
    }
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;

    /// A hint to tell the implementation how big of a size we expect the image to be
    ///
    /// This is just a hint, akin to calling `Vec::reserve` and should be treated as such.
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}
