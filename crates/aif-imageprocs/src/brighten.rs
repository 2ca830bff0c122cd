/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by a percentage

use aif::{AifImage, AifPixelFormat};

use crate::errors::ImageOperationsErrors;
use crate::traits::OperationsTrait;

/// Scale each intensity by `amount` percent
///
/// `v + v * amount / 100` with integer division, clamped to `0..=255`
pub fn brighten_gray(pixels: &mut [u8], amount: i32) {
    pixels.iter_mut().for_each(|x| {
        let value = i32::from(*x);
        *x = (value + value * amount / 100).clamp(0, 255) as u8;
    });
}

/// Shift the lightness of a packed `0xRRGGBB` color by `amount` percent
///
/// Lightness is taken as the mean of the brightest and darkest
/// component. It is scaled by `1 + amount/100` and every component is
/// moved by the same offset, so that the chroma stays unchanged.
/// Components leaving `0..=255` saturate.
#[allow(clippy::cast_possible_wrap)]
pub fn brighten_rgb(color: u32, amount: i32) -> u32 {
    let components = [(color >> 16) & 0xff, (color >> 8) & 0xff, color & 0xff];

    let brightest = components.iter().copied().max().unwrap_or(0);
    let darkest = components.iter().copied().min().unwrap_or(0);

    let mut luminance = (f64::from(brightest + darkest) / 255.0) / 2.0;
    let chroma = f64::from(brightest - darkest) / 255.0 * 2.0;

    let constant = luminance - chroma / 2.0;

    luminance *= 1.0 + f64::from(amount) / 100.0;

    let adjusted = luminance - chroma / 2.0;

    components
        .iter()
        .map(|&c| {
            // truncates toward zero
            let new_val = (((f64::from(c) / 255.0) - constant) + adjusted) * 255.0;
            (new_val as i32).clamp(0, 255) as u32
        })
        .fold(0, |acc, c| (acc << 8) | c)
}

/// Brighten an image
///
/// Grayscale images use [`brighten_gray`], RGB images [`brighten_rgb`]
pub struct Brighten {
    amount: i32
}

impl Brighten {
    /// Create a new brighten operation
    ///
    /// # Arguments
    /// - amount: Percentage change, from -100 (black) to 100
    pub fn new(amount: i32) -> Brighten {
        Brighten { amount }
    }
}

impl OperationsTrait for Brighten {
    fn get_name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut AifImage) -> Result<(), ImageOperationsErrors> {
        if !(-100..=100).contains(&self.amount) {
            return Err(ImageOperationsErrors::InvalidParameter(
                "brighten amount",
                self.amount
            ));
        }
        match image.pixel_format {
            AifPixelFormat::GRAY8 => brighten_gray(&mut image.pixels, self.amount),
            AifPixelFormat::RGB8 => {
                for pixel in image.pixels.chunks_exact_mut(3) {
                    let color = (u32::from(pixel[0]) << 16)
                        | (u32::from(pixel[1]) << 8)
                        | u32::from(pixel[2]);

                    let [_, r, g, b] = brighten_rgb(color, self.amount).to_be_bytes();
                    pixel.copy_from_slice(&[r, g, b]);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use aif::{AifCompression, AifImage, AifPixelFormat};
    use nanorand::{Rng, WyRand};

    use crate::brighten::{brighten_gray, brighten_rgb, Brighten};
    use crate::errors::ImageOperationsErrors;
    use crate::traits::OperationsTrait;

    #[test]
    fn gray_scales_and_clamps() {
        let mut pixels = [0, 10, 99, 200, 255];
        brighten_gray(&mut pixels, 50);
        assert_eq!(pixels, [0, 15, 148, 255, 255]);

        let mut pixels = [0, 10, 99, 200, 255];
        brighten_gray(&mut pixels, -100);
        assert_eq!(pixels, [0; 5]);

        let mut pixels = [7, 99];
        brighten_gray(&mut pixels, -10);
        // 7 - 0, 99 - 9
        assert_eq!(pixels, [7, 90]);
    }

    #[test]
    fn rgb_gray_pixels_scale_like_lightness() {
        // no chroma, every component moves with the lightness
        assert_eq!(brighten_rgb(0x646464, 50), 0x969696);
        assert_eq!(brighten_rgb(0x646464, -100), 0x000000);
        assert_eq!(brighten_rgb(0xffffff, 10), 0xffffff);
    }

    #[test]
    fn rgb_keeps_component_spread() {
        // brightest 200, darkest 100
        let color = brighten_rgb(0xC864_96, 20);
        let [_, r, g, b] = color.to_be_bytes();

        assert!(r > 200 && g > 100 && b > 150);
        // every component moved by the same offset, give or take truncation
        let shifts = [i32::from(r) - 200, i32::from(g) - 100, i32::from(b) - 150];
        assert!(shifts.iter().all(|s| (s - shifts[0]).abs() <= 1));
    }

    #[test]
    fn zero_amount_is_identity() {
        let mut rand = WyRand::new_seed(3);

        for _ in 0..1000 {
            let color = rand.generate::<u32>() & 0x00ff_ffff;
            let result = brighten_rgb(color, 0);
            let diff = color
                .to_be_bytes()
                .iter()
                .zip(result.to_be_bytes().iter())
                .all(|(a, b)| a.abs_diff(*b) <= 1);
            assert!(diff, "{color:06x} became {result:06x}");
        }
    }

    #[test]
    fn rejects_out_of_range_amount() {
        let mut image = AifImage {
            width:             1,
            height:            1,
            pixel_format:      AifPixelFormat::RGB8,
            compression:       AifCompression::Rle,
            pixel_data_offset: 20,
            pixels:            vec![1, 2, 3]
        };
        assert!(matches!(
            Brighten::new(101).execute(&mut image),
            Err(ImageOperationsErrors::InvalidParameter(_, 101))
        ));
        assert!(Brighten::new(100).execute(&mut image).is_ok());
    }
}
