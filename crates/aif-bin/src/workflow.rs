/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use aif::{AifCompression, AifImage, AifInfo};
use aif_core::options::DecoderOptions;
use aif_imageprocs::brighten::Brighten;
use aif_imageprocs::errors::ImageOperationsErrors;
use aif_imageprocs::grayscale::ColorConvert;
use aif_imageprocs::traits::OperationsTrait;
use clap::ArgMatches;
use log::{error, info};

use crate::cmd_args::arg_parsers::IPixelFormat;
use crate::cmd_parsers::get_decoder_options;
use crate::errors::CmdErrors;
use crate::file_io::{encode_image, write_output, AifFile};

pub(crate) fn create_and_exec_workflow_from_cmd<W: Write>(
    args: &ArgMatches, out: &mut W
) -> Result<(), CmdErrors> {
    let options = get_decoder_options(args);

    match args.subcommand() {
        Some(("info", sub)) => print_info(sub, options, out),
        Some(("brighten", sub)) => {
            let amount = sub.get_one::<i32>("amount").copied().unwrap_or(0);
            info!("Brightening by {}%", amount);

            rewrite(sub, options, None, |image| {
                Brighten::new(amount).execute(image)
            })
        }
        Some(("convert-color", sub)) => {
            let format = sub
                .get_one::<IPixelFormat>("format")
                .copied()
                .unwrap_or(IPixelFormat::RGB8)
                .to_pixel_format();
            info!("Converting to {}", format.name());

            rewrite(sub, options, None, |image| {
                ColorConvert::new(format).execute(image)
            })
        }
        Some(("decompress", sub)) => {
            rewrite(sub, options, Some(AifCompression::None), |_| Ok(()))
        }
        Some(("compress", sub)) => {
            rewrite(sub, options, Some(AifCompression::Rle), |_| Ok(()))
        }
        _ => Ok(())
    }
}

fn in_out_paths(args: &ArgMatches) -> Result<(PathBuf, PathBuf), CmdErrors> {
    let (Some(in_file), Some(out_file)) = (
        args.get_one::<PathBuf>("in"),
        args.get_one::<PathBuf>("out")
    ) else {
        return Err(CmdErrors::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "missing input or output path"
        )));
    };
    verify_file_paths(in_file, out_file)?;

    Ok((in_file.clone(), out_file.clone()))
}

fn verify_file_paths(in_file: &Path, out_file: &Path) -> Result<(), CmdErrors> {
    if !in_file.exists() {
        return Err(CmdErrors::NotFound(in_file.to_path_buf()));
    }
    if in_file == out_file
        || (out_file.exists() && fs::canonicalize(in_file)? == fs::canonicalize(out_file)?)
    {
        return Err(CmdErrors::SamePath(in_file.to_path_buf()));
    }
    Ok(())
}

/// Decode `in`, transform the image and write it to `out`
///
/// The output is only created once the new file is fully encoded,
/// so a failing command leaves no output behind.
fn rewrite<F>(
    args: &ArgMatches, options: DecoderOptions, compression: Option<AifCompression>,
    transform: F
) -> Result<(), CmdErrors>
where
    F: FnOnce(&mut AifImage) -> Result<(), ImageOperationsErrors>
{
    let (in_file, out_file) = in_out_paths(args)?;

    let mut image = AifFile::new(in_file, options).into_image()?;

    transform(&mut image)?;

    if let Some(compression) = compression {
        image.compression = compression;
    }
    let contents = encode_image(&image)?;

    write_output(&out_file, &contents)
}

fn print_info<W: Write>(
    args: &ArgMatches, options: DecoderOptions, out: &mut W
) -> Result<(), CmdErrors> {
    let mut failures = 0;

    for in_file in args.get_many::<PathBuf>("files").into_iter().flatten() {
        match AifFile::new(in_file.clone(), options).inspect() {
            Ok(report) => write_report(out, in_file, &report)?,
            Err(err) => {
                error!("{}: {:?}", in_file.display(), err);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        return Err(CmdErrors::IncompleteBatch(failures));
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, name: &Path, report: &AifInfo) -> std::io::Result<()> {
    let header = &report.header;
    let validation = &report.validation;

    writeln!(out, "<{}>:", name.display())?;
    writeln!(out, "File-size: {} bytes", report.file_size)?;

    if !validation.magic {
        writeln!(out, "Invalid header magic.")?;
    }
    let [stored_lo, stored_hi] = report.checksum.stored.to_le_bytes();
    write!(out, "Checksum: {stored_hi:02x} {stored_lo:02x}")?;

    if !report.checksum.is_valid() {
        let [computed_lo, computed_hi] = report.checksum.computed.to_le_bytes();
        write!(out, " INVALID, calculated {computed_hi:02x} {computed_lo:02x}")?;
    }
    writeln!(out)?;

    match header.pixel_format() {
        Some(format) => writeln!(out, "Pixel format: {}", format.name())?,
        None => writeln!(out, "Pixel format: Invalid")?
    }
    match header.compression() {
        Some(compression) => writeln!(out, "Compression: {}", compression.name())?,
        None => writeln!(out, "Compression: Invalid")?
    }
    write_dimension(out, "Width", header.width, validation.width)?;
    write_dimension(out, "Height", header.height, validation.height)
}

fn write_dimension<W: Write>(out: &mut W, label: &str, value: u32, valid: bool) -> std::io::Result<()> {
    write!(out, "{label}: {value} px")?;

    if !valid {
        write!(out, " INVALID")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use aif::{AifCompression, AifHeader, AifInfo, AifPixelFormat, ChecksumReport};

    use crate::workflow::write_report;

    #[test]
    fn report_marks_invalid_fields() {
        let mut header = AifHeader::new(0, 3, AifPixelFormat::GRAY8, AifCompression::Rle);
        header.magic = *b"XIF\0";
        header.checksum = 0x1234;

        let info = AifInfo {
            file_size: 20,
            header,
            validation: header.validate(),
            checksum: ChecksumReport {
                stored:   0x1234,
                computed: 0x00ab
            }
        };
        let mut out = vec![];
        write_report(&mut out, Path::new("a.aif"), &info).unwrap();

        let expected = "<a.aif>:
File-size: 20 bytes
Invalid header magic.
Checksum: 12 34 INVALID, calculated 00 ab
Pixel format: 8-bit grayscale
Compression: run-length encoding compressed
Width: 0 px INVALID
Height: 3 px
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
