/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when running image operations
use std::fmt::{Debug, Display, Formatter};

pub enum ImageOperationsErrors {
    /// The pixel buffer does not match the image dimensions
    WrongPixelLength(usize, usize),
    /// An operation parameter is outside its allowed range
    InvalidParameter(&'static str, i32)
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageOperationsErrors::WrongPixelLength(expected, found) => {
                writeln!(
                    f,
                    "Image should have {expected} pixel bytes but has {found}"
                )
            }
            ImageOperationsErrors::InvalidParameter(name, value) => {
                writeln!(f, "Invalid value {value} for {name}")
            }
        }
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageOperationsErrors {}
