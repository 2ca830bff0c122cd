/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use aif_core::bytestream::{ZByteReaderTrait, ZReader, ZSeekFrom};
use aif_core::colorspace::ColorSpace;
use aif_core::log::{trace, warn};
use aif_core::options::DecoderOptions;

use crate::checksum::{compute_checksum, ChecksumReport};
use crate::constants::AIF_HEADER_SIZE;
use crate::errors::AifErrors;
use crate::header::{AifCompression, AifHeader, AifPixelFormat, HeaderValidation};
use crate::image::AifImage;
use crate::rle::decompress_row;

/// What can be learned about a file without decoding its pixels
///
/// Produced by [`AifDecoder::inspect`], invalid header fields are
/// reported in `validation` rather than returned as errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AifInfo {
    pub file_size:  usize,
    pub header:     AifHeader,
    pub validation: HeaderValidation,
    pub checksum:   ChecksumReport
}

/// An AIF decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:AifDecoder::decode_headers
/// [`decode`]:AifDecoder::decode
pub struct AifDecoder<T>
where
    T: ZByteReaderTrait
{
    header:          AifHeader,
    pixel_format:    AifPixelFormat,
    compression:     AifCompression,
    decoded_headers: bool,
    stream:          ZReader<T>,
    options:         DecoderOptions
}

impl<T> AifDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new AIF decoder with the default options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aif_core::bytestream::ZCursor;
    /// let mut decoder = aif::AifDecoder::new(ZCursor::new(&[0_u8; 0]));
    /// // additional code
    /// ```
    pub fn new(data: T) -> AifDecoder<T> {
        AifDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new AIF decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Example
    /// ```
    /// use aif_core::bytestream::ZCursor;
    /// use aif_core::options::DecoderOptions;
    /// use aif::AifDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = AifDecoder::new_with_options(ZCursor::new([0_u8; 0]), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> AifDecoder<T> {
        AifDecoder {
            header: AifHeader::default(),
            pixel_format: AifPixelFormat::RGB8,
            compression: AifCompression::None,
            decoded_headers: false,
            stream: ZReader::new(data),
            options
        }
    }

    /// Decode the header, storing needed information into
    /// the decoder instance
    ///
    /// Any invalid header field is an error here, before pixel data is touched.
    /// In strict mode the stored checksum must also match the file.
    pub fn decode_headers(&mut self) -> Result<(), AifErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let header_bytes = self.stream.read_fixed_bytes_or_error::<AIF_HEADER_SIZE>()?;
        let header = AifHeader::from_bytes(&header_bytes);

        header.ensure_valid()?;

        let (width, height) = (header.width as usize, header.height as usize);

        if width > self.options.get_max_width() {
            return Err(AifErrors::LargeDimensions(
                width,
                self.options.get_max_width()
            ));
        }
        if height > self.options.get_max_height() {
            return Err(AifErrors::LargeDimensions(
                height,
                self.options.get_max_height()
            ));
        }
        self.pixel_format = header
            .pixel_format()
            .ok_or(AifErrors::InvalidPixelFormat(header.pixel_format))?;
        self.compression = header
            .compression()
            .ok_or(AifErrors::InvalidCompression(header.compression))?;
        self.header = header;

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image pixel format: {:?}", self.pixel_format);
        trace!("Image compression: {:?}", self.compression);

        if header.pixel_data_offset as usize != AIF_HEADER_SIZE {
            trace!(
                "Pixel data offset {} ignored, pixels follow the header",
                header.pixel_data_offset
            );
        }

        let report = self.checksum()?;

        if !report.is_valid() {
            if self.options.get_strict_mode() {
                return Err(AifErrors::ChecksumMismatch(report.stored, report.computed));
            }
            warn!(
                "Checksum mismatch, stored {:04x} but calculated {:04x}",
                report.stored,
                report.computed
            );
        }
        self.decoded_headers = true;

        Ok(())
    }

    /// Read the whole input from its first byte, leaving the
    /// read position where it was
    fn read_whole_input(&mut self) -> Result<Vec<u8>, AifErrors> {
        let position = self.stream.position()?;
        self.stream.seek(ZSeekFrom::Start(0))?;

        let file = self.stream.remaining_bytes()?;

        self.stream.seek(ZSeekFrom::Start(position))?;

        Ok(file)
    }

    /// Compare the stored checksum against one computed over the whole input
    ///
    /// The read position is restored afterwards.
    pub fn checksum(&mut self) -> Result<ChecksumReport, AifErrors> {
        let file = self.read_whole_input()?;

        let header_bytes: &[u8; AIF_HEADER_SIZE] = file
            .get(..AIF_HEADER_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(AifErrors::UnexpectedEndOfData(AIF_HEADER_SIZE, file.len()))?;

        let stored = AifHeader::from_bytes(header_bytes).checksum;
        let computed = compute_checksum(&file, file.len())?;

        Ok(ChecksumReport { stored, computed })
    }

    /// Report on the file without requiring it to be valid
    ///
    /// Only a file too short to hold a header is an error, every other
    /// problem is reported through the returned flags.
    /// The read position is restored afterwards, so the image
    /// can still be decoded.
    pub fn inspect(&mut self) -> Result<AifInfo, AifErrors> {
        let file = self.read_whole_input()?;
        let file_size = file.len();

        let header_bytes: &[u8; AIF_HEADER_SIZE] = file
            .get(..AIF_HEADER_SIZE)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(AifErrors::UnexpectedEndOfData(AIF_HEADER_SIZE, file_size))?;

        let header = AifHeader::from_bytes(header_bytes);
        let computed = compute_checksum(&file, file_size)?;

        Ok(AifInfo {
            file_size,
            header,
            validation: header.validate(),
            checksum: ChecksumReport {
                stored: header.checksum,
                computed
            }
        })
    }

    /// Return the number of bytes required to hold a decoded image
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded or
    ///    the size overflows a `usize`
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            (self.header.width as usize)
                .checked_mul(self.header.height as usize)?
                .checked_mul(self.pixel_format.bytes_per_pixel())
        } else {
            None
        }
    }

    /// Decode the image, returning the
    /// uncompressed pixels or the error encountered during decoding
    pub fn decode(&mut self) -> Result<Vec<u8>, AifErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(AifErrors::Generic("Image dimensions overflow the output size"))?;

        let mut output = vec![0; size];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode the image together with the header fields
    /// needed to write it back
    pub fn decode_image(&mut self) -> Result<AifImage, AifErrors> {
        let pixels = self.decode()?;

        Ok(AifImage {
            width: self.header.width as usize,
            height: self.header.height as usize,
            pixel_format: self.pixel_format,
            compression: self.compression,
            pixel_data_offset: self.header.pixel_data_offset,
            pixels
        })
    }

    /// Decode the image and store the pixels
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the image
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), AifErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(AifErrors::Generic("Image dimensions overflow the output size"))?;

        if pixels.len() < size {
            return Err(AifErrors::TooSmallOutput(size, pixels.len()));
        }
        let pixels = &mut pixels[..size];

        match self.compression {
            AifCompression::None => self.stream.read_exact_bytes(pixels)?,
            AifCompression::Rle => self.decode_rle_rows(pixels)?
        }

        if !self.stream.eof()? {
            trace!("Bytes left after the last row, ignoring them");
        }
        trace!("Finished decoding image");

        Ok(())
    }

    fn decode_rle_rows(&mut self, pixels: &mut [u8]) -> Result<(), AifErrors> {
        let bpp = self.pixel_format.bytes_per_pixel();
        let row_bytes = self.header.width as usize * bpp;

        let mut record = Vec::with_capacity(usize::from(u16::MAX));

        for (row, out_row) in pixels.chunks_exact_mut(row_bytes).enumerate() {
            let record_len = usize::from(self.stream.get_u16_le_err()?);

            record.resize(record_len, 0);
            self.stream.read_exact_bytes(&mut record)?;

            let used = decompress_row(&record, out_row, bpp)
                .map_err(|reason| AifErrors::MalformedRle(row, reason))?;

            if used != record_len {
                if self.options.get_strict_mode() {
                    return Err(AifErrors::TrailingRowData(row, record_len - used));
                }
                warn!("Row {} has {} unused compressed bytes", row, record_len - used);
            }
        }
        Ok(())
    }

    /// Get the header as read from the file
    ///
    /// Returns `None` if the headers haven't been decoded
    pub const fn header(&self) -> Option<AifHeader> {
        if self.decoded_headers {
            Some(self.header)
        } else {
            None
        }
    }

    /// Per field validity of the decoded header
    pub fn validation(&self) -> Option<HeaderValidation> {
        self.header().map(|header| header.validate())
    }

    /// Get the image colorspace
    ///
    /// Returns `None` if the headers haven't been decoded
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.pixel_format.to_colorspace())
        } else {
            None
        }
    }

    pub const fn pixel_format(&self) -> Option<AifPixelFormat> {
        if self.decoded_headers {
            Some(self.pixel_format)
        } else {
            None
        }
    }

    pub const fn compression(&self) -> Option<AifCompression> {
        if self.decoded_headers {
            Some(self.compression)
        } else {
            None
        }
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.header.width as usize, self.header.height as usize))
        } else {
            None
        }
    }
}
