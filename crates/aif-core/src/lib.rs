/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the AIF crates
//!
//! This crate provides the pieces the codec, the pixel
//! routines and the command line share.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace information shared by images
//! - Image decoder and encoder options
//! - Logging macros that compile down to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables readers for `std` types and `std::error::Error` impls.
//!
//!  - `log`: Routes the logging macros to the [`log`](https://docs.rs/log) crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
