/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Row based run length coding
//!
//! Every row is coded on its own as a sequence of blocks
//!
//! - Repeat block `[count][pixel]`, `count` in `1..=255`, the pixel is
//!   repeated `count` times
//! - Literal block `[0][count][pixel * count]`, `count` in `1..=255`,
//!   the pixels are copied as is
//!
//! Pixels are compared as whole `bpp` byte groups.

use alloc::vec::Vec;

use crate::constants::{MIN_REPEAT_RUN, RLE_LITERAL_TAG, RLE_MAX_BLOCK};
use crate::errors::RleError;

/// Largest number of bytes [`compress_row`] can emit for a row
/// of `width` pixels
///
/// Reached when no two neighbouring pixels are equal and every
/// literal block holds one pixel.
pub const fn max_compressed_row_size(width: usize, bpp: usize) -> usize {
    width * (bpp + 2)
}

/// Number of pixels equal to the one at `start`, itself included
fn measure_run(row: &[u8], bpp: usize, start: usize) -> usize {
    let pixel = &row[start * bpp..(start + 1) * bpp];

    row[start * bpp..]
        .chunks_exact(bpp)
        .take_while(|next| *next == pixel)
        .count()
}

fn write_repeat_blocks(pixel: &[u8], run: usize, out: &mut Vec<u8>) {
    let mut remaining = run;

    while remaining > 0 {
        let chunk = remaining.min(RLE_MAX_BLOCK);
        out.push(chunk as u8);
        out.extend_from_slice(pixel);
        remaining -= chunk;
    }
}

fn write_literal_blocks(pixels: &[u8], bpp: usize, out: &mut Vec<u8>) {
    for block in pixels.chunks(RLE_MAX_BLOCK * bpp) {
        out.push(RLE_LITERAL_TAG);
        out.push((block.len() / bpp) as u8);
        out.extend_from_slice(block);
    }
}

/// Compress one row of pixels, appending the blocks to `out`
///
/// A single greedy pass from left to right. Runs of two or more equal
/// pixels become repeat blocks, everything between runs is gathered into
/// literal blocks. Blocks longer than 255 pixels are split.
///
/// # Arguments
/// - `row`: Row pixels, `width*bpp` bytes
/// - `bpp`: Bytes per pixel
/// - `out`: Sink for the compressed bytes
///
/// # Returns
/// Number of bytes appended to `out`
pub fn compress_row(row: &[u8], bpp: usize, out: &mut Vec<u8>) -> usize {
    let start_len = out.len();
    let width = row.len() / bpp;
    let mut col = 0;

    while col < width {
        let run = measure_run(row, bpp, col);

        if run >= MIN_REPEAT_RUN {
            write_repeat_blocks(&row[col * bpp..(col + 1) * bpp], run, out);
            col += run;
            continue;
        }
        // gather literals until the next run or row end
        let literal_start = col;
        col += 1;

        while col < width && measure_run(row, bpp, col) < MIN_REPEAT_RUN {
            col += 1;
        }
        write_literal_blocks(&row[literal_start * bpp..col * bpp], bpp, out);
    }

    out.len() - start_len
}

/// Expand a repeat block whose count byte was already read
///
/// Returns the updated `(cp, op)` cursors
fn decode_repeat_block(
    compressed: &[u8], out_row: &mut [u8], bpp: usize, cp: usize, op: usize, count: u8
) -> Result<(usize, usize), RleError> {
    let pixel = compressed
        .get(cp..cp + bpp)
        .ok_or(RleError::TruncatedBlock)?;

    let required = usize::from(count) * bpp;
    let target = out_row
        .get_mut(op..op + required)
        .ok_or(RleError::OutputOverrun)?;

    for out_pixel in target.chunks_exact_mut(bpp) {
        out_pixel.copy_from_slice(pixel);
    }

    Ok((cp + bpp, op + required))
}

/// Copy a literal block, `cp` points at its count byte
///
/// Returns the updated `(cp, op)` cursors
fn decode_literal_block(
    compressed: &[u8], out_row: &mut [u8], bpp: usize, cp: usize, op: usize
) -> Result<(usize, usize), RleError> {
    let count = *compressed.get(cp).ok_or(RleError::TruncatedBlock)?;

    if count == 0 {
        return Err(RleError::ZeroLengthLiteral);
    }
    let cp = cp + 1;
    let needed = usize::from(count) * bpp;

    let payload = compressed
        .get(cp..cp + needed)
        .ok_or(RleError::TruncatedBlock)?;

    out_row
        .get_mut(op..op + needed)
        .ok_or(RleError::OutputOverrun)?
        .copy_from_slice(payload);

    Ok((cp + needed, op + needed))
}

/// Expand one compressed row into `out_row`
///
/// Decoding stops once the row is full or the compressed bytes run out,
/// the row must then be exactly full.
///
/// # Arguments
/// - `compressed`: The row record payload, without its length prefix
/// - `out_row`: Destination, exactly `width*bpp` bytes
/// - `bpp`: Bytes per pixel
///
/// # Returns
/// - `Ok(usize)`: Number of compressed bytes used. Can be less than
///   `compressed.len()` if the row filled up before the record ended.
/// - `Err(RleError)`: Why the row could not be expanded
pub fn decompress_row(compressed: &[u8], out_row: &mut [u8], bpp: usize) -> Result<usize, RleError> {
    let row_bytes = out_row.len();
    let mut cp = 0;
    let mut op = 0;

    while op < row_bytes && cp < compressed.len() {
        let tag = compressed[cp];
        cp += 1;

        (cp, op) = if tag != RLE_LITERAL_TAG {
            decode_repeat_block(compressed, out_row, bpp, cp, op, tag)?
        } else {
            decode_literal_block(compressed, out_row, bpp, cp, op)?
        };
    }

    if op != row_bytes {
        return Err(RleError::ShortRow(row_bytes, op));
    }
    Ok(cp)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::errors::RleError;
    use crate::rle::{compress_row, decompress_row, max_compressed_row_size};

    fn compress(row: &[u8], bpp: usize) -> Vec<u8> {
        let mut out = vec![];
        let written = compress_row(row, bpp, &mut out);
        assert_eq!(written, out.len());
        out
    }

    #[test]
    fn run_then_single_pixel() {
        let compressed = compress(&[10, 10, 10, 50], 1);
        assert_eq!(compressed, [0x03, 0x0A, 0x00, 0x01, 0x32]);

        let mut row = [0; 4];
        assert_eq!(decompress_row(&compressed, &mut row, 1), Ok(5));
        assert_eq!(row, [10, 10, 10, 50]);
    }

    #[test]
    fn isolated_pair_is_a_repeat_block() {
        let compressed = compress(&[1, 2, 2, 3], 1);
        assert_eq!(compressed, [0, 1, 1, 2, 2, 0, 1, 3]);
    }

    #[test]
    fn rgb_pixels_compare_as_a_whole() {
        // equal first components, different pixels
        let row = [5, 5, 5, 5, 5, 6, 7, 7, 7, 7, 7, 7];
        let compressed = compress(&row, 3);
        assert_eq!(compressed, [0, 2, 5, 5, 5, 5, 5, 6, 2, 7, 7, 7]);

        let mut out = [0; 12];
        decompress_row(&compressed, &mut out, 3).unwrap();
        assert_eq!(out, row);
    }

    #[test]
    fn long_run_is_split() {
        let row = vec![9_u8; 600];
        let compressed = compress(&row, 1);
        assert_eq!(compressed, [255, 9, 255, 9, 90, 9]);
    }

    #[test]
    fn long_literal_is_split() {
        let row: Vec<u8> = (0..300_u32).map(|x| (x % 251) as u8).collect();
        let compressed = compress(&row, 1);

        assert_eq!(&compressed[..2], &[0, 255]);
        assert_eq!(&compressed[257..259], &[0, 45]);
        assert_eq!(compressed.len(), 300 + 4);
    }

    #[test]
    fn worst_case_size() {
        let row = [1, 2, 3, 4, 5, 6];
        let compressed = compress(&row, 3);
        assert!(compressed.len() <= max_compressed_row_size(2, 3));
    }

    #[test]
    fn zero_length_literal_rejected() {
        let mut out = [0; 4];
        assert_eq!(
            decompress_row(&[0, 0, 1], &mut out, 1),
            Err(RleError::ZeroLengthLiteral)
        );
    }

    #[test]
    fn truncated_blocks_rejected() {
        let mut out = [0; 6];
        // repeat block missing its pixel bytes
        assert_eq!(
            decompress_row(&[2, 1, 1], &mut out, 3),
            Err(RleError::TruncatedBlock)
        );
        // literal block missing its count
        assert_eq!(
            decompress_row(&[0], &mut out, 3),
            Err(RleError::TruncatedBlock)
        );
        // literal payload too short
        assert_eq!(
            decompress_row(&[0, 2, 1, 1, 1], &mut out, 3),
            Err(RleError::TruncatedBlock)
        );
    }

    #[test]
    fn overruns_rejected() {
        let mut out = [0; 2];
        assert_eq!(
            decompress_row(&[3, 7], &mut out, 1),
            Err(RleError::OutputOverrun)
        );
        assert_eq!(
            decompress_row(&[0, 3, 1, 2, 3], &mut out, 1),
            Err(RleError::OutputOverrun)
        );
    }

    #[test]
    fn short_row_rejected() {
        let mut out = [0; 4];
        assert_eq!(
            decompress_row(&[2, 7], &mut out, 1),
            Err(RleError::ShortRow(4, 2))
        );
    }

    #[test]
    fn reports_unused_bytes() {
        let mut out = [0; 2];
        assert_eq!(decompress_row(&[2, 7, 1, 8], &mut out, 1), Ok(2));
    }
}
