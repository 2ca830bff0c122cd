/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::colorspace::ColorSpace;

/// Options shared by the encoders
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`: Image colorspace
    pub fn new(width: usize, height: usize, colorspace: ColorSpace) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace
        }
    }

    /// Get the width for which the image will be encoded in
    pub const fn get_width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn get_height(&self) -> usize {
        self.height
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn get_colorspace(&self) -> ColorSpace {
        self.colorspace
    }
}
