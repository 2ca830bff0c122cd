/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for AIF images
//!
//! Every routine implements [`OperationsTrait`](traits::OperationsTrait)
//! and works on a decoded [`AifImage`](aif::AifImage) in place.
//!
//! # Example
//! - Brighten an image by 20 percent
//! ```
//! use aif::{AifCompression, AifImage, AifPixelFormat};
//! use aif_imageprocs::brighten::Brighten;
//! use aif_imageprocs::traits::OperationsTrait;
//!
//! let mut image = AifImage {
//!     width: 2,
//!     height: 1,
//!     pixel_format: AifPixelFormat::GRAY8,
//!     compression: AifCompression::None,
//!     pixel_data_offset: 20,
//!     pixels: vec![100, 250]
//! };
//! Brighten::new(20).execute(&mut image).unwrap();
//! assert_eq!(image.pixels, [120, 255]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod brighten;
pub mod errors;
pub mod grayscale;
pub mod traits;
