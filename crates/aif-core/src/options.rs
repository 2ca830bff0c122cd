/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and Encoder options
//!
//! This module exposes the structs the AIF decoder and encoder
//! read their configuration from
pub use decoder::DecoderOptions;
pub use encoder::EncoderOptions;

mod decoder;
mod encoder;
