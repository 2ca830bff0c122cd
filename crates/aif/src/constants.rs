/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `AIF\0`
pub(crate) const AIF_MAGIC: [u8; 4] = *b"AIF\0";

/// Size of the fixed header, every field included
pub const AIF_HEADER_SIZE: usize = 20;

/// Byte offset of the little endian checksum
pub(crate) const CHECKSUM_OFFSET: usize = 4;

/// Number of bytes a run length block count can describe
pub(crate) const RLE_MAX_BLOCK: usize = 255;

/// Shortest run of identical pixels stored as a repeat block
pub(crate) const MIN_REPEAT_RUN: usize = 2;

/// Count byte that introduces a literal block
pub(crate) const RLE_LITERAL_TAG: u8 = 0;
