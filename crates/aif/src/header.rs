/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed AIF header
//!
//! Fields are kept as the raw numbers found in the file so that
//! a broken header can still be reported field by field.

use aif_core::colorspace::ColorSpace;

use crate::constants::{AIF_HEADER_SIZE, AIF_MAGIC};
use crate::errors::AifErrors;

/// Pixel layouts an AIF file can store
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AifPixelFormat {
    /// Three bytes per pixel, R, G then B
    RGB8,
    /// One intensity byte per pixel
    GRAY8
}

impl AifPixelFormat {
    pub const fn from_u8(value: u8) -> Option<AifPixelFormat> {
        match value {
            1 => Some(AifPixelFormat::RGB8),
            2 => Some(AifPixelFormat::GRAY8),
            _ => None
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            AifPixelFormat::RGB8 => 1,
            AifPixelFormat::GRAY8 => 2
        }
    }

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            AifPixelFormat::RGB8 => 3,
            AifPixelFormat::GRAY8 => 1
        }
    }

    /// Human readable name, as printed by the `info` command
    pub const fn name(self) -> &'static str {
        match self {
            AifPixelFormat::RGB8 => "8-bit RGB",
            AifPixelFormat::GRAY8 => "8-bit grayscale"
        }
    }

    pub const fn to_colorspace(self) -> ColorSpace {
        match self {
            AifPixelFormat::RGB8 => ColorSpace::RGB,
            AifPixelFormat::GRAY8 => ColorSpace::Luma
        }
    }

    pub const fn from_colorspace(colorspace: ColorSpace) -> AifPixelFormat {
        match colorspace {
            ColorSpace::RGB => AifPixelFormat::RGB8,
            ColorSpace::Luma => AifPixelFormat::GRAY8
        }
    }
}

/// How pixel data follows the header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AifCompression {
    /// Raw rows, `width*bpp` bytes each
    None,
    /// Each row is a `u16` length followed by run length blocks
    Rle
}

impl AifCompression {
    pub const fn from_u8(value: u8) -> Option<AifCompression> {
        match value {
            0 => Some(AifCompression::None),
            1 => Some(AifCompression::Rle),
            _ => None
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            AifCompression::None => 0,
            AifCompression::Rle => 1
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AifCompression::None => "none",
            AifCompression::Rle => "run-length encoding compressed"
        }
    }
}

/// Result of checking every header field on its own
///
/// A `false` flag means the field is invalid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HeaderValidation {
    pub magic:        bool,
    pub pixel_format: bool,
    pub compression:  bool,
    pub width:        bool,
    pub height:       bool
}

impl HeaderValidation {
    /// Whether pixel data may be read using this header
    pub const fn is_usable(&self) -> bool {
        self.magic && self.pixel_format && self.compression && self.width && self.height
    }
}

/// The 20 byte AIF header
///
/// | offset | size | field             |
/// |--------|------|-------------------|
/// | 0      | 4    | magic `AIF\0`     |
/// | 4      | 2    | checksum          |
/// | 6      | 1    | pixel format      |
/// | 7      | 1    | compression       |
/// | 8      | 4    | width             |
/// | 12     | 4    | height            |
/// | 16     | 4    | pixel data offset |
///
/// Multi-byte fields are little endian.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AifHeader {
    pub magic:             [u8; 4],
    pub checksum:          u16,
    pub pixel_format:      u8,
    pub compression:       u8,
    pub width:             u32,
    pub height:            u32,
    /// Reserved, carried through rewrites but never used to find pixel data
    pub pixel_data_offset: u32
}

impl Default for AifHeader {
    fn default() -> Self {
        AifHeader {
            magic:             AIF_MAGIC,
            checksum:          0,
            pixel_format:      AifPixelFormat::RGB8.to_u8(),
            compression:       AifCompression::None.to_u8(),
            width:             0,
            height:            0,
            pixel_data_offset: AIF_HEADER_SIZE as u32
        }
    }
}

impl AifHeader {
    /// Create a header for an image with the given layout
    ///
    /// The checksum is left at zero, it is filled in once the whole
    /// file is known.
    pub fn new(
        width: u32, height: u32, format: AifPixelFormat, compression: AifCompression
    ) -> AifHeader {
        AifHeader {
            pixel_format: format.to_u8(),
            compression: compression.to_u8(),
            width,
            height,
            ..AifHeader::default()
        }
    }

    /// Decode the header fields from the first bytes of a file
    ///
    /// This never fails, invalid values are kept so that
    /// [`validate`](Self::validate) can report them.
    pub fn from_bytes(bytes: &[u8; AIF_HEADER_SIZE]) -> AifHeader {
        let u32_at = |pos: usize| {
            u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
        };

        AifHeader {
            magic:             [bytes[0], bytes[1], bytes[2], bytes[3]],
            checksum:          u16::from_le_bytes([bytes[4], bytes[5]]),
            pixel_format:      bytes[6],
            compression:       bytes[7],
            width:             u32_at(8),
            height:            u32_at(12),
            pixel_data_offset: u32_at(16)
        }
    }

    pub fn to_bytes(&self) -> [u8; AIF_HEADER_SIZE] {
        let mut out = [0; AIF_HEADER_SIZE];

        out[0..4].copy_from_slice(&self.magic);
        out[4..6].copy_from_slice(&self.checksum.to_le_bytes());
        out[6] = self.pixel_format;
        out[7] = self.compression;
        out[8..12].copy_from_slice(&self.width.to_le_bytes());
        out[12..16].copy_from_slice(&self.height.to_le_bytes());
        out[16..20].copy_from_slice(&self.pixel_data_offset.to_le_bytes());

        out
    }

    pub fn validate(&self) -> HeaderValidation {
        HeaderValidation {
            magic:        self.magic == AIF_MAGIC,
            pixel_format: AifPixelFormat::from_u8(self.pixel_format).is_some(),
            compression:  AifCompression::from_u8(self.compression).is_some(),
            width:        self.width > 0,
            height:       self.height > 0
        }
    }

    /// Return the first structural problem with this header
    ///
    /// Checked in order magic, pixel format, compression, dimensions.
    pub fn first_error(&self) -> Option<AifErrors> {
        let validation = self.validate();

        if !validation.magic {
            return Some(AifErrors::InvalidMagic);
        }
        if !validation.pixel_format {
            return Some(AifErrors::InvalidPixelFormat(self.pixel_format));
        }
        if !validation.compression {
            return Some(AifErrors::InvalidCompression(self.compression));
        }
        if !(validation.width && validation.height) {
            return Some(AifErrors::InvalidDimensions(self.width, self.height));
        }
        None
    }

    pub fn ensure_valid(&self) -> Result<(), AifErrors> {
        match self.first_error() {
            Some(err) => Err(err),
            None => Ok(())
        }
    }

    pub const fn pixel_format(&self) -> Option<AifPixelFormat> {
        AifPixelFormat::from_u8(self.pixel_format)
    }

    pub const fn compression(&self) -> Option<AifCompression> {
        AifCompression::from_u8(self.compression)
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::AIF_HEADER_SIZE;
    use crate::errors::AifErrors;
    use crate::header::{AifCompression, AifHeader, AifPixelFormat};

    fn sample_bytes() -> [u8; AIF_HEADER_SIZE] {
        [
            b'A', b'I', b'F', 0, // magic
            0x34, 0x12, // checksum
            2,    // gray
            1,    // rle
            4, 0, 0, 0, // width
            0, 1, 0, 0, // height
            20, 0, 0, 0 // offset
        ]
    }

    #[test]
    fn decodes_little_endian_fields() {
        let header = AifHeader::from_bytes(&sample_bytes());

        assert_eq!(header.checksum, 0x1234);
        assert_eq!(header.pixel_format(), Some(AifPixelFormat::GRAY8));
        assert_eq!(header.compression(), Some(AifCompression::Rle));
        assert_eq!(header.width, 4);
        assert_eq!(header.height, 256);
        assert_eq!(header.pixel_data_offset, 20);
        assert_eq!(header.to_bytes(), sample_bytes());
    }

    #[test]
    fn every_invalid_field_is_flagged() {
        let mut bytes = sample_bytes();
        bytes[0] = b'X';
        bytes[6] = 9;
        bytes[7] = 7;
        bytes[8] = 0;

        let validation = AifHeader::from_bytes(&bytes).validate();
        assert!(!validation.magic);
        assert!(!validation.pixel_format);
        assert!(!validation.compression);
        assert!(!validation.width);
        assert!(validation.height);
        assert!(!validation.is_usable());
    }

    #[test]
    fn first_error_follows_field_order() {
        let mut header = AifHeader::from_bytes(&sample_bytes());
        header.pixel_format = 0;
        header.height = 0;
        assert!(matches!(
            header.first_error(),
            Some(AifErrors::InvalidPixelFormat(0))
        ));

        header.pixel_format = 1;
        assert!(matches!(
            header.first_error(),
            Some(AifErrors::InvalidDimensions(4, 0))
        ));

        header.height = 3;
        assert!(header.ensure_valid().is_ok());
    }

    #[test]
    fn names() {
        assert_eq!(AifPixelFormat::RGB8.name(), "8-bit RGB");
        assert_eq!(AifPixelFormat::GRAY8.name(), "8-bit grayscale");
        assert_eq!(AifCompression::None.name(), "none");
        assert_eq!(AifCompression::Rle.name(), "run-length encoding compressed");
    }
}
