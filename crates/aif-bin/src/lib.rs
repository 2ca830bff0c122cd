/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::io::{stdout, Write};
use std::process::exit;

use log::error;

pub use crate::errors::CmdErrors;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let result = create_and_exec_workflow_from_cmd(&options, &mut stdout().lock());

    if let Err(reason) = result {
        error!("Could not complete workflow, reason {:?}", reason);
        exit(1);
    }
}

/// Run the tools with explicit arguments, writing reports to `out`
///
/// The first argument is the program name, as with [`std::env::args_os`].
/// No logger is installed.
///
/// # Errors
/// Whatever the chosen subcommand fails with, or
/// [`CmdErrors::Args`] when the arguments do not parse
pub fn run_from_args<I, T, W>(args: I, out: &mut W) -> Result<(), CmdErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write
{
    let options = cmd_args::create_cmd_args()
        .try_get_matches_from(args)
        .map_err(CmdErrors::Args)?;

    create_and_exec_workflow_from_cmd(&options, out)
}
