/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

/// Decoder options
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:   usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:  usize,
    /// Treat some warnings as errors
    ///
    /// When set to false, recoverable problems such as a checksum
    /// mismatch or leftover bytes in an encoded row are logged via the log crate.
    ///
    /// When set to true, these return an `Err`.
    ///
    /// - Default value: false
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Create the decoder options with the following characteristics
    ///
    /// - Checksum mismatches are reported but not fatal
    /// - Default dimension limits
    ///
    /// This is the same as `default`
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// This reduces the error tolerance level for the decoder, a stored checksum
    /// that does not match the file is rejected
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn chained_setters() {
        let options = DecoderOptions::default()
            .set_max_width(10)
            .set_max_height(20)
            .set_strict_mode(true);

        assert_eq!(options.get_max_width(), 10);
        assert_eq!(options.get_max_height(), 20);
        assert!(options.get_strict_mode());
        assert!(!DecoderOptions::new_cmd().get_strict_mode());
    }
}
