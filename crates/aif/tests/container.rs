/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufReader, Cursor};

use aif::aif_core::bytestream::ZCursor;
use aif::aif_core::colorspace::ColorSpace;
use aif::aif_core::options::{DecoderOptions, EncoderOptions};
use aif::{compute_checksum, AifCompression, AifDecoder, AifEncoder, AifErrors, AifPixelFormat};
use nanorand::{Rng, WyRand};

fn encode(
    pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace,
    compression: AifCompression
) -> Vec<u8> {
    let mut encoder = AifEncoder::new(pixels, EncoderOptions::new(width, height, colorspace));
    encoder.set_compression(compression);

    let mut sink = vec![];
    encoder.encode(&mut sink).unwrap();
    sink
}

#[test]
fn random_images_round_trip() {
    let mut rand = WyRand::new_seed(7);

    for colorspace in [ColorSpace::RGB, ColorSpace::Luma] {
        for compression in [AifCompression::None, AifCompression::Rle] {
            let width = rand.generate_range(1_usize..=64);
            let height = rand.generate_range(1_usize..=64);
            // few distinct values so that runs appear
            let pixels: Vec<u8> = (0..width * height * colorspace.num_components())
                .map(|_| rand.generate::<u8>() % 3)
                .collect();

            let file = encode(&pixels, width, height, colorspace, compression);

            let mut decoder = AifDecoder::new(ZCursor::new(&file));
            let image = decoder.decode_image().unwrap();

            assert_eq!(image.pixels, pixels);
            assert_eq!(image.dimensions(), (width, height));
            assert_eq!(image.colorspace(), colorspace);
            assert_eq!(image.compression, compression);
        }
    }
}

#[test]
fn gray_run_scenario() {
    let file = encode(&[10, 10, 10, 50], 4, 1, ColorSpace::Luma, AifCompression::Rle);

    assert_eq!(&file[..4], b"AIF\0");
    assert_eq!(file[6], 2);
    assert_eq!(file[7], 1);
    assert_eq!(&file[20..], &[0x05, 0x00, 0x03, 0x0A, 0x00, 0x01, 0x32]);

    let pixels = AifDecoder::new(ZCursor::new(&file)).decode().unwrap();
    assert_eq!(pixels, [10, 10, 10, 50]);
}

#[test]
fn wrong_magic_fails_before_pixels() {
    let mut file = encode(&[1, 2, 3], 1, 1, ColorSpace::RGB, AifCompression::None);
    file[0] = b'X';
    // drop the pixels, a magic check that read them would fail differently
    file.truncate(20);

    let result = AifDecoder::new(ZCursor::new(&file)).decode();
    assert!(matches!(result, Err(AifErrors::InvalidMagic)));
}

#[test]
fn stored_checksum_matches_file() {
    let file = encode(&[9; 12], 2, 2, ColorSpace::RGB, AifCompression::Rle);
    let stored = u16::from_le_bytes([file[4], file[5]]);

    assert_eq!(compute_checksum(&file, file.len()).unwrap(), stored);

    let report = AifDecoder::new(ZCursor::new(&file)).checksum().unwrap();
    assert!(report.is_valid());
}

#[test]
fn truncated_files() {
    let raw = encode(&[1, 2, 3, 4], 2, 2, ColorSpace::Luma, AifCompression::None);
    let result = AifDecoder::new(ZCursor::new(&raw[..raw.len() - 1])).decode();
    assert!(matches!(result, Err(AifErrors::UnexpectedEndOfData(_, _))));

    let rle = encode(&[1, 2, 3, 4], 2, 2, ColorSpace::Luma, AifCompression::Rle);
    let result = AifDecoder::new(ZCursor::new(&rle[..rle.len() - 1])).decode();
    assert!(matches!(result, Err(AifErrors::UnexpectedEndOfData(_, _))));

    let result = AifDecoder::new(ZCursor::new(&rle[..10])).decode_headers();
    assert!(matches!(result, Err(AifErrors::UnexpectedEndOfData(20, 10))));
}

#[test]
fn std_readers_decode() {
    let file = encode(&[5; 6], 3, 2, ColorSpace::Luma, AifCompression::Rle);

    let mut decoder = AifDecoder::new(BufReader::new(Cursor::new(file.clone())));
    assert_eq!(decoder.decode().unwrap(), [5; 6]);
    assert_eq!(decoder.pixel_format(), Some(AifPixelFormat::GRAY8));

    let mut decoder = AifDecoder::new(Cursor::new(file));
    assert_eq!(decoder.decode().unwrap(), [5; 6]);
}

#[test]
fn strict_mode_rejects_tampered_pixels() {
    let mut file = encode(&[1, 2, 3, 4], 2, 2, ColorSpace::Luma, AifCompression::None);
    file[21] = 200;

    let options = DecoderOptions::default().set_strict_mode(true);
    let result = AifDecoder::new_with_options(ZCursor::new(&file), options).decode();
    assert!(matches!(result, Err(AifErrors::ChecksumMismatch(_, _))));

    let pixels = AifDecoder::new(ZCursor::new(&file)).decode().unwrap();
    assert_eq!(pixels, [1, 200, 3, 4]);
}
