/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors the command line tools can report
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use aif::{AifEncodeErrors, AifErrors};
use aif_imageprocs::errors::ImageOperationsErrors;

/// Reasons a command could not complete
pub enum CmdErrors {
    /// The arguments could not be parsed
    Args(clap::Error),
    /// The input file does not exist or cannot be opened for reading
    NotFound(PathBuf),
    /// Input and output refer to the same file
    SamePath(PathBuf),
    /// The input could not be decoded
    Decode(AifErrors),
    /// The image could not be encoded
    Encode(AifEncodeErrors),
    /// An image operation failed
    Operation(ImageOperationsErrors),
    /// The output file could not be written
    WriteFailure(std::io::Error),
    /// Some files of a batch could not be processed
    ///
    /// The argument is the number of failed files
    IncompleteBatch(usize),
    Io(std::io::Error)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CmdErrors::Args(err) => {
                writeln!(f, "{err}")
            }
            CmdErrors::NotFound(path) => {
                writeln!(f, "Input file {} does not exist or cannot be read", path.display())
            }
            CmdErrors::SamePath(path) => {
                writeln!(
                    f,
                    "Input and output are both {}, refusing to overwrite the input",
                    path.display()
                )
            }
            CmdErrors::Decode(err) => {
                writeln!(f, "Could not decode image: {err:?}")
            }
            CmdErrors::Encode(err) => {
                writeln!(f, "Could not encode image: {err:?}")
            }
            CmdErrors::Operation(err) => {
                writeln!(f, "Image operation failed: {err:?}")
            }
            CmdErrors::WriteFailure(err) => {
                writeln!(f, "Could not write output file: {err}")
            }
            CmdErrors::IncompleteBatch(count) => {
                writeln!(f, "{count} file(s) could not be read")
            }
            CmdErrors::Io(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for CmdErrors {}

impl From<AifErrors> for CmdErrors {
    fn from(value: AifErrors) -> Self {
        CmdErrors::Decode(value)
    }
}

impl From<AifEncodeErrors> for CmdErrors {
    fn from(value: AifEncodeErrors) -> Self {
        CmdErrors::Encode(value)
    }
}

impl From<ImageOperationsErrors> for CmdErrors {
    fn from(value: ImageOperationsErrors) -> Self {
        CmdErrors::Operation(value)
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::Io(value)
    }
}
