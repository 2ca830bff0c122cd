/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use aif::AifPixelFormat;
use clap::builder::PossibleValue;
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum IPixelFormat {
    RGB8,
    GRAY8
}

impl IPixelFormat {
    pub const fn to_pixel_format(self) -> AifPixelFormat {
        match self {
            IPixelFormat::RGB8 => AifPixelFormat::RGB8,
            IPixelFormat::GRAY8 => AifPixelFormat::GRAY8
        }
    }
}

impl ValueEnum for IPixelFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::RGB8, Self::GRAY8]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::RGB8 => PossibleValue::new("rgb8").alias("rgb"),
            Self::GRAY8 => PossibleValue::new("gray8").aliases(["gray", "grayscale"])
        })
    }
}
