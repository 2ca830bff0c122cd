/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use aif::aif_core::colorspace::ColorSpace;
use aif::aif_core::options::EncoderOptions;
use aif::{AifCompression, AifEncoder};
use nanorand::{Rng, WyRand};

/// Generate pixels made of runs of random length
///
/// Runs are between 1 and `max_run` pixels long, so a `max_run` of 1
/// gives noise and larger values give images that compress well.
pub fn sample_pixels(width: usize, height: usize, colorspace: ColorSpace, max_run: usize) -> Vec<u8> {
    let components = colorspace.num_components();
    let mut rand = WyRand::new_seed(0xA1F);
    let mut pixels = Vec::with_capacity(width * height * components);

    while pixels.len() < width * height * components {
        let run = rand.generate_range(1..=max_run);
        let pixel: Vec<u8> = (0..components).map(|_| rand.generate::<u8>()).collect();

        for _ in 0..run {
            pixels.extend_from_slice(&pixel);
        }
    }
    pixels.truncate(width * height * components);
    pixels
}

/// Encode sample pixels into a complete file
pub fn sample_file(
    width: usize, height: usize, colorspace: ColorSpace, max_run: usize,
    compression: AifCompression
) -> Vec<u8> {
    let pixels = sample_pixels(width, height, colorspace, max_run);
    let mut encoder = AifEncoder::new(&pixels, EncoderOptions::new(width, height, colorspace));
    encoder.set_compression(compression);

    let mut file = Vec::with_capacity(encoder.max_size());
    encoder.encode(&mut file).unwrap();
    file
}
