/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use aif_core::colorspace::ColorSpace;
use aif_core::options::EncoderOptions;

use crate::header::{AifCompression, AifPixelFormat};

/// A decoded AIF image
///
/// Pixels are stored row major, top row first, `width*height*bpp` bytes.
/// The compression and pixel data offset of the source file are kept so
/// that a rewrite of the image can carry them over.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AifImage {
    pub width:             usize,
    pub height:            usize,
    pub pixel_format:      AifPixelFormat,
    pub compression:       AifCompression,
    pub pixel_data_offset: u32,
    pub pixels:            Vec<u8>
}

impl AifImage {
    pub const fn colorspace(&self) -> ColorSpace {
        self.pixel_format.to_colorspace()
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Options describing this image to an encoder
    pub fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(self.width, self.height, self.colorspace())
    }
}
