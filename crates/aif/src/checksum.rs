/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whole file checksum
//!
//! Two running sums modulo 256, the second one summing the first.
//! The two bytes that store the checksum are read as zero so a file
//! can be checked without first clearing them.

use crate::constants::CHECKSUM_OFFSET;
use crate::errors::AifErrors;

/// Compute the checksum of the first `size` bytes of a file
///
/// Returns `(sum2 << 8) | sum1`.
pub fn compute_checksum(bytes: &[u8], size: usize) -> Result<u16, AifErrors> {
    let data = bytes
        .get(..size)
        .ok_or(AifErrors::UnexpectedEndOfData(size, bytes.len()))?;

    let (mut sum1, mut sum2) = (0_u8, 0_u8);

    for (pos, byte) in data.iter().enumerate() {
        let value = if pos == CHECKSUM_OFFSET || pos == CHECKSUM_OFFSET + 1 {
            0
        } else {
            *byte
        };
        sum1 = sum1.wrapping_add(value);
        sum2 = sum2.wrapping_add(sum1);
    }

    Ok((u16::from(sum2) << 8) | u16::from(sum1))
}

/// Compute the checksum of a complete file and write it into the header
///
/// Returns the stored value.
pub fn store_checksum(file: &mut [u8]) -> Result<u16, AifErrors> {
    if file.len() < CHECKSUM_OFFSET + 2 {
        return Err(AifErrors::UnexpectedEndOfData(
            CHECKSUM_OFFSET + 2,
            file.len()
        ));
    }
    let checksum = compute_checksum(file, file.len())?;
    file[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].copy_from_slice(&checksum.to_le_bytes());

    Ok(checksum)
}

/// Stored and recomputed checksum of a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChecksumReport {
    pub stored:   u16,
    pub computed: u16
}

impl ChecksumReport {
    pub const fn is_valid(&self) -> bool {
        self.stored == self.computed
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::checksum::{compute_checksum, store_checksum};

    #[test]
    fn sums_wrap_modulo_256() {
        // sum1 = 1+2+3 = 6, sum2 = 1+3+6 = 10 with bytes 4,5 absent
        assert_eq!(compute_checksum(&[1, 2, 3], 3).unwrap(), (10 << 8) | 6);

        let bytes = vec![0xff_u8; 4];
        // sum1: ff, fe, fd, fc  sum2: ff, fd, fa, f6
        assert_eq!(compute_checksum(&bytes, 4).unwrap(), 0xf6fc);
    }

    #[test]
    fn checksum_bytes_are_ignored() {
        let mut a = vec![7_u8; 12];
        let b = a.clone();
        a[4] = 0xAB;
        a[5] = 0xCD;
        assert_eq!(
            compute_checksum(&a, a.len()).unwrap(),
            compute_checksum(&b, b.len()).unwrap()
        );
    }

    #[test]
    fn stored_checksum_is_a_fixed_point() {
        let mut file: vec::Vec<u8> = (0..64_u8).collect();
        let stored = store_checksum(&mut file).unwrap();

        assert_eq!(u16::from_le_bytes([file[4], file[5]]), stored);
        assert_eq!(compute_checksum(&file, file.len()).unwrap(), stored);
    }

    #[test]
    fn size_larger_than_buffer_fails() {
        assert!(compute_checksum(&[1, 2], 3).is_err());
        assert!(store_checksum(&mut [0; 5]).is_err());
    }
}
