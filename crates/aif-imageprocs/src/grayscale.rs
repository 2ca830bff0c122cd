/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert between RGB and grayscale pixel formats
use aif::{AifImage, AifPixelFormat};
use aif_core::log::trace;

use crate::errors::ImageOperationsErrors;
use crate::traits::OperationsTrait;

/// Convert RGB triplets to luma
///
/// Uses `(299 * r + 587 * g + 114 * b) / 1000` with integer division
///
/// # Panics
/// If `output` has fewer than `rgb.len() / 3` elements
pub fn rgb_to_grayscale(rgb: &[u8], output: &mut [u8]) {
    for (pixel, out) in rgb.chunks_exact(3).zip(output.iter_mut()) {
        let r = u32::from(pixel[0]);
        let g = u32::from(pixel[1]);
        let b = u32::from(pixel[2]);

        *out = ((299 * r + 587 * g + 114 * b) / 1000) as u8;
    }
}

/// Expand luma values to RGB by replicating each value
pub fn grayscale_to_rgb(gray: &[u8], output: &mut [u8]) {
    for (value, out) in gray.iter().zip(output.chunks_exact_mut(3)) {
        out.fill(*value);
    }
}

/// Convert an image to a different pixel format
///
/// Converting to the format the image already has leaves the pixels untouched
pub struct ColorConvert {
    to: AifPixelFormat
}

impl ColorConvert {
    /// Create a new conversion to `to`
    pub fn new(to: AifPixelFormat) -> ColorConvert {
        ColorConvert { to }
    }
}

impl OperationsTrait for ColorConvert {
    fn get_name(&self) -> &'static str {
        "Color convert"
    }

    fn execute_impl(&self, image: &mut AifImage) -> Result<(), ImageOperationsErrors> {
        let from = image.pixel_format;

        if from == self.to {
            trace!("Image is already {}, nothing to convert", from.name());
            return Ok(());
        }
        let pixel_count = image.width * image.height;
        let mut output = vec![0; pixel_count * self.to.bytes_per_pixel()];

        match self.to {
            AifPixelFormat::GRAY8 => rgb_to_grayscale(&image.pixels, &mut output),
            AifPixelFormat::RGB8 => grayscale_to_rgb(&image.pixels, &mut output)
        }
        image.pixels = output;
        image.pixel_format = self.to;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aif::{AifCompression, AifImage, AifPixelFormat};
    use nanorand::{Rng, WyRand};

    use crate::grayscale::{grayscale_to_rgb, rgb_to_grayscale, ColorConvert};
    use crate::traits::OperationsTrait;

    fn image(pixel_format: AifPixelFormat, pixels: Vec<u8>) -> AifImage {
        AifImage {
            width: pixels.len() / pixel_format.bytes_per_pixel(),
            height: 1,
            pixel_format,
            compression: AifCompression::Rle,
            pixel_data_offset: 20,
            pixels
        }
    }

    #[test]
    fn luma_weights() {
        let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255, 10, 20, 30];
        let mut gray = [0; 5];
        rgb_to_grayscale(&rgb, &mut gray);
        // 18.1 truncates to 18
        assert_eq!(gray, [76, 149, 29, 255, 18]);
    }

    #[test]
    fn gray_round_trips_through_rgb() {
        let mut rand = WyRand::new_seed(11);
        let gray: Vec<u8> = (0..512).map(|_| rand.generate::<u8>()).collect();

        let mut rgb = vec![0; gray.len() * 3];
        grayscale_to_rgb(&gray, &mut rgb);

        let mut back = vec![0; gray.len()];
        rgb_to_grayscale(&rgb, &mut back);
        assert_eq!(back, gray);
    }

    #[test]
    fn convert_updates_format() {
        let mut img = image(AifPixelFormat::RGB8, vec![255, 0, 0, 0, 0, 255]);
        ColorConvert::new(AifPixelFormat::GRAY8)
            .execute(&mut img)
            .unwrap();

        assert_eq!(img.pixel_format, AifPixelFormat::GRAY8);
        assert_eq!(img.pixels, [76, 29]);

        ColorConvert::new(AifPixelFormat::RGB8)
            .execute(&mut img)
            .unwrap();
        assert_eq!(img.pixel_format, AifPixelFormat::RGB8);
        assert_eq!(img.pixels, [76, 76, 76, 29, 29, 29]);
    }

    #[test]
    fn same_format_is_a_copy() {
        let mut img = image(AifPixelFormat::GRAY8, vec![1, 2, 3]);
        ColorConvert::new(AifPixelFormat::GRAY8)
            .execute(&mut img)
            .unwrap();
        assert_eq!(img.pixels, [1, 2, 3]);
    }

    #[test]
    fn rejects_short_buffers() {
        let mut img = image(AifPixelFormat::RGB8, vec![1, 2, 3]);
        img.height = 2;
        assert!(ColorConvert::new(AifPixelFormat::GRAY8)
            .execute(&mut img)
            .is_err());
    }
}
