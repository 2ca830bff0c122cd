/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! AIF is a small lossless image container with optional row based run length compression.
//! It has the following format:
//! ```text
//! ╔════════╤═════════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                             ║
//! ╠════════╪═════════════════════════════════════════════════════════╣
//! ║ 4      │ "AIF\0" magic value                                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 2      │ 16-Bit LE checksum of the whole file                    ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 1      │ Pixel format, 1 = RGB8, 2 = GRAY8                       ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 1      │ Compression, 0 = none, 1 = run length                   ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (width)                      ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE unsigned integer (height)                     ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ 4      │ 32-Bit LE pixel data offset, reserved                   ║
//! ╟────────┼─────────────────────────────────────────────────────────╢
//! ║ ...    │ Raw rows, or `height` records of [u16 LE length][blocks]║
//! ╚════════╧═════════════════════════════════════════════════════════╝
//!```
//!
//! The checksum is two running sums modulo 256 over every byte of the file,
//! with the two checksum bytes read as zero.
//!
//! # Features
//! - Decoding and encoding
//! - `no_std`
//! - Fuzz tested
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use aif_core;
pub use checksum::*;
pub use constants::AIF_HEADER_SIZE;
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::*;
pub use image::*;

mod checksum;
mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
mod image;
pub mod rle;
