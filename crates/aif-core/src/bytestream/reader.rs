/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use core::fmt::Formatter;

mod std_readers;
mod zcursor;

use crate::bytestream::ZByteReaderTrait;
pub use crate::bytestream::reader::zcursor::ZCursor;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),
    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),
    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    Current(i64)
}

impl ZSeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    #[cfg(feature = "std")]
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            ZSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ZSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ZSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    // buffer size, requested
    NotEnoughBuffer(usize, usize),
    SeekError(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(size, requested) => {
                writeln!(
                    f,
                    "Not enough buffer to write {requested} bytes, buffer size is {size}"
                )
            }
            ZByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

/// A byte reader with little endian reads over anything
/// implementing [`ZByteReaderTrait`]
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }

    #[inline(always)]
    pub fn seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.inner.z_seek(from)
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_const_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    /// Read a `u16` stored in little endian
    ///
    /// Returning an error if the underlying source does not have two bytes left
    #[inline]
    pub fn get_u16_le_err(&mut self) -> Result<u16, ZByteIoError> {
        self.read_fixed_bytes_or_error::<2>().map(u16::from_le_bytes)
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ZByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ZByteIoError> {
        self.inner.z_position()
    }

    /// Read everything from the current position to the end of the stream
    ///
    /// The bytes are handed to the caller, the reader keeps no copy.
    pub fn remaining_bytes(&mut self) -> Result<Vec<u8>, ZByteIoError> {
        let mut sink = Vec::new();
        self.inner.read_remaining(&mut sink)?;
        Ok(sink)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)
    }
}
