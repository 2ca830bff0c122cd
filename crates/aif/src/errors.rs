/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use aif_core::bytestream::ZByteIoError;

/// Reasons a single compressed row could not be expanded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RleError {
    /// A literal block announced zero pixels
    ZeroLengthLiteral,
    /// A block needs more bytes than the row record holds
    TruncatedBlock,
    /// A block would write past the end of the output row
    OutputOverrun,
    /// The row record ended before the row was full
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes the row needs
    /// - 2nd argument is number of bytes actually produced
    ShortRow(usize, usize)
}

impl Display for RleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RleError::ZeroLengthLiteral => write!(f, "literal block with a zero pixel count"),
            RleError::TruncatedBlock => write!(f, "block runs past the end of the row record"),
            RleError::OutputOverrun => write!(f, "block writes past the end of the row"),
            RleError::ShortRow(expected, found) => {
                write!(f, "row expands to {found} bytes, expected {expected}")
            }
        }
    }
}

/// Possible Errors that may occur during decoding
pub enum AifErrors {
    /// The input doesn't have enough bytes to fully
    /// reconstruct the image
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually left
    UnexpectedEndOfData(usize, usize),
    /// The image does not start with `AIF\0`
    InvalidMagic,
    /// The header contains a pixel format other than `1` or `2`
    InvalidPixelFormat(u8),
    /// The header contains a compression other than `0` or `1`
    InvalidCompression(u8),
    /// Width or height is zero
    InvalidDimensions(u32, u32),
    /// The image is larger than the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the dimension found in the file
    /// - 2nd argument is the configured limit
    LargeDimensions(usize, usize),
    /// The stored checksum does not match the file
    ///
    /// Only returned when the decoder is in strict mode
    ChecksumMismatch(u16, u16),
    /// A row of a run length compressed image is malformed
    MalformedRle(usize, RleError),
    /// A row record carried bytes the row codec did not use
    ///
    /// Only returned when the decoder is in strict mode
    TrailingRowData(usize, usize),
    /// Too small output size
    TooSmallOutput(usize, usize),
    Generic(&'static str),
    IoErrors(ZByteIoError)
}

impl Debug for AifErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            AifErrors::UnexpectedEndOfData(expected, found) => {
                writeln!(
                    f,
                    "Unexpected end of data, required {expected} bytes but remaining stream has {found}"
                )
            }
            AifErrors::InvalidMagic => {
                writeln!(f, "Invalid header magic, expected `AIF\\0` as image start")
            }
            AifErrors::InvalidPixelFormat(format) => {
                writeln!(
                    f,
                    "Invalid pixel format {format}, expected either 1 (RGB8) or 2 (GRAY8)"
                )
            }
            AifErrors::InvalidCompression(compression) => {
                writeln!(
                    f,
                    "Invalid compression {compression}, expected either 0 (none) or 1 (RLE)"
                )
            }
            AifErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be non zero"
                )
            }
            AifErrors::LargeDimensions(found, limit) => {
                writeln!(
                    f,
                    "Too large dimensions, found {found} but configured limit is {limit}"
                )
            }
            AifErrors::ChecksumMismatch(stored, computed) => {
                writeln!(
                    f,
                    "Checksum mismatch, stored {stored:04x} but calculated {computed:04x}"
                )
            }
            AifErrors::MalformedRle(row, reason) => {
                writeln!(f, "Malformed RLE data in row {row}: {reason}")
            }
            AifErrors::TrailingRowData(row, extra) => {
                writeln!(f, "Row {row} has {extra} unused compressed bytes")
            }
            AifErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            AifErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            AifErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl Display for AifErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AifErrors {}

impl From<ZByteIoError> for AifErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                AifErrors::UnexpectedEndOfData(expected, found)
            }
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(ref err) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
                AifErrors::UnexpectedEndOfData(0, 0)
            }
            _ => AifErrors::IoErrors(value)
        }
    }
}

/// Errors encountered during encoding
pub enum AifEncodeErrors {
    /// Width or height is zero
    InvalidDimensions(usize, usize),
    /// The dimensions cannot be stored in the header's 32 bit fields
    TooLargeDimensions(usize),
    /// Pixel buffer length does not match `width*height*bpp`
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length of the pixels given
    InvalidLength(usize, usize),
    /// A compressed row does not fit the 16 bit row length field
    RowTooLarge(usize, usize),
    Generic(&'static str),
    /// The sink refused the encoded bytes
    WriteFailure(ZByteIoError)
}

impl Debug for AifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            AifEncodeErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid dimensions {width}x{height}, width and height must be non zero"
                )
            }
            AifEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, AIF can only encode images less than {}",
                    u32::MAX
                )
            }
            AifEncodeErrors::InvalidLength(expected, found) => {
                writeln!(
                    f,
                    "Expected pixel length {expected} doesn't match pixels length {found}"
                )
            }
            AifEncodeErrors::RowTooLarge(row, len) => {
                writeln!(
                    f,
                    "Compressed row {row} is {len} bytes, larger than the {} a row record can hold",
                    u16::MAX
                )
            }
            AifEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            AifEncodeErrors::WriteFailure(v) => {
                writeln!(f, "Could not write image {:?}", v)
            }
        }
    }
}

impl Display for AifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AifEncodeErrors {}

impl From<ZByteIoError> for AifEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::WriteFailure(value)
    }
}
