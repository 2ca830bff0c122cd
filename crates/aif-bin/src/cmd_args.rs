/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::IPixelFormat;
use crate::cmd_args::help_strings::{
    BRIGHTEN_HELP, COMPRESS_HELP, CONVERT_COLOR_HELP, DECOMPRESS_HELP, INFO_HELP, STRICT_HELP
};

pub mod arg_parsers;
pub mod help_strings;

fn in_out_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("in")
        .help("Input file to read data from")
        .value_parser(value_parser!(PathBuf))
        .required(true))
        .arg(Arg::new("out")
            .help("Output to write the data to")
            .value_parser(value_parser!(PathBuf))
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("aif-tools")
        .about("Inspect and rewrite AIF images")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("info")
            .about("Print header information of AIF files")
            .long_about(INFO_HELP)
            .arg(Arg::new("files")
                .help("Files to report on")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .num_args(1..)
                .required(true)))
        .subcommand(in_out_args(Command::new("brighten")
            .about("Brighten or darken an image")
            .long_about(BRIGHTEN_HELP)
            .arg(Arg::new("amount")
                .help("Percentage to change lightness by")
                .value_parser(value_parser!(i32).range(-100..=100))
                .allow_negative_numbers(true)
                .required(true))))
        .subcommand(in_out_args(Command::new("convert-color")
            .about("Change the pixel format of an image")
            .long_about(CONVERT_COLOR_HELP)
            .arg(Arg::new("format")
                .help("Pixel format of the output")
                .value_parser(value_parser!(IPixelFormat))
                .required(true))))
        .subcommand(in_out_args(Command::new("decompress")
            .about(DECOMPRESS_HELP)))
        .subcommand(in_out_args(Command::new("compress")
            .about("Rewrite an image with run-length encoded rows")
            .long_about(COMPRESS_HELP)))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat recoverable problems as errors")
            .long_help(STRICT_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of an image, larger images are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
