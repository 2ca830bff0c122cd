/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use aif_core::bytestream::{ZByteWriterTrait, ZWriter};
use aif_core::log::trace;
use aif_core::options::EncoderOptions;

use crate::checksum::store_checksum;
use crate::constants::AIF_HEADER_SIZE;
use crate::errors::AifEncodeErrors;
use crate::header::{AifCompression, AifHeader, AifPixelFormat};
use crate::rle::{compress_row, max_compressed_row_size};

/// An AIF encoder
///
/// The whole file, checksum included, is built in memory and
/// handed to the sink in a single write.
///
/// # Example
/// - Encode a 100 by 100 grayscale image
///
/// ```
/// use aif_core::colorspace::ColorSpace;
/// use aif_core::options::EncoderOptions;
/// use aif::{AifEncoder, AifEncodeErrors};
///
/// const W: usize = 100;
/// const H: usize = 100;
///
/// fn main() -> Result<(), AifEncodeErrors> {
///     let pixels = std::array::from_fn::<u8, { W * H }, _>(|i| (i % 256) as u8);
///     let encoder = AifEncoder::new(&pixels, EncoderOptions::new(W, H, ColorSpace::Luma));
///     let mut sink = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert_eq!(size, sink.len());
///     Ok(())
/// }
/// ```
pub struct AifEncoder<'a> {
    pixel_data:        &'a [u8],
    options:           EncoderOptions,
    compression:       AifCompression,
    pixel_data_offset: u32
}

impl<'a> AifEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// Run length compression is used unless changed with
    /// [`set_compression`](Self::set_compression)
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and colorspace
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> AifEncoder<'a> {
        AifEncoder {
            pixel_data: data,
            options,
            compression: AifCompression::Rle,
            pixel_data_offset: AIF_HEADER_SIZE as u32
        }
    }

    pub fn set_compression(&mut self, compression: AifCompression) -> &mut Self {
        self.compression = compression;
        self
    }

    /// Set the value written into the reserved pixel data offset field
    ///
    /// This does not move the pixel data.
    pub fn set_pixel_data_offset(&mut self, offset: u32) -> &mut Self {
        self.pixel_data_offset = offset;
        self
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    pub fn max_size(&self) -> usize {
        let bpp = self.options.get_colorspace().num_components();
        let row_size = match self.compression {
            AifCompression::None => self.options.get_width() * bpp,
            AifCompression::Rle => 2 + max_compressed_row_size(self.options.get_width(), bpp)
        };
        AIF_HEADER_SIZE + row_size * self.options.get_height()
    }

    fn encode_headers<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), AifEncodeErrors> {
        let options = &self.options;

        if options.get_width() == 0 || options.get_height() == 0 {
            return Err(AifEncodeErrors::InvalidDimensions(
                options.get_width(),
                options.get_height()
            ));
        }
        let width = u32::try_from(options.get_width())
            .map_err(|_| AifEncodeErrors::TooLargeDimensions(options.get_width()))?;
        let height = u32::try_from(options.get_height())
            .map_err(|_| AifEncodeErrors::TooLargeDimensions(options.get_height()))?;

        let expected_len = options
            .get_width()
            .checked_mul(options.get_height())
            .and_then(|x| x.checked_mul(options.get_colorspace().num_components()))
            .ok_or(AifEncodeErrors::TooLargeDimensions(options.get_width()))?;

        if self.pixel_data.len() != expected_len {
            return Err(AifEncodeErrors::InvalidLength(
                expected_len,
                self.pixel_data.len()
            ));
        }

        let mut header = AifHeader::new(
            width,
            height,
            AifPixelFormat::from_colorspace(options.get_colorspace()),
            self.compression
        );
        header.pixel_data_offset = self.pixel_data_offset;

        writer.write_const_bytes(&header.to_bytes())?;

        Ok(())
    }

    fn encode_rle_rows<T: ZByteWriterTrait>(
        &self, writer: &mut ZWriter<T>
    ) -> Result<(), AifEncodeErrors> {
        let bpp = self.options.get_colorspace().num_components();
        let row_bytes = self.options.get_width() * bpp;

        let mut scratch = Vec::with_capacity(max_compressed_row_size(self.options.get_width(), bpp));

        for (row_index, row) in self.pixel_data.chunks_exact(row_bytes).enumerate() {
            scratch.clear();
            let compressed_len = compress_row(row, bpp, &mut scratch);

            let record_len = u16::try_from(compressed_len)
                .map_err(|_| AifEncodeErrors::RowTooLarge(row_index, compressed_len))?;

            writer.write_u16_le_err(record_len)?;
            writer.write_all(&scratch)?;
        }
        Ok(())
    }

    /// Encode the image and write it into `sink`
    ///
    /// # Returns
    /// - Ok(size): Actual bytes written to the sink
    /// - Err: The error encountered during encoding, nothing was written to the sink
    pub fn encode<T: ZByteWriterTrait>(&self, sink: T) -> Result<usize, AifEncodeErrors> {
        let mut file = Vec::new();
        let mut stream = ZWriter::new(&mut file);

        self.encode_headers(&mut stream)?;
        stream.reserve(self.max_size())?;

        match self.compression {
            AifCompression::None => stream.write_all(self.pixel_data)?,
            AifCompression::Rle => self.encode_rle_rows(&mut stream)?
        }

        let checksum = store_checksum(&mut file)
            .map_err(|_| AifEncodeErrors::Generic("Encoded file shorter than its header"))?;

        trace!("Encoded {} bytes, checksum {:04x}", file.len(), checksum);

        let mut output = ZWriter::new(sink);
        output.reserve(file.len())?;
        output.write_all(&file)?;
        output.flush()?;

        Ok(output.bytes_written())
    }
}
