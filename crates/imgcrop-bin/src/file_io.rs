/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use clap::ArgMatches;
use imgcrop_bmp::{crop_file, crop_with_options};
use imgcrop_core::bytestream::ZStreamReader;
use imgcrop_core::region::Region;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CmdErrors;

/// Crop every input into its matching output
pub(crate) fn crop_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), CmdErrors> {
    let region = cmd_opts.region.ok_or(CmdErrors::NoRegion)?;

    let inputs: Vec<&OsStr> = args.get_raw("in").into_iter().flatten().collect();
    let outputs: Vec<&OsStr> = args.get_raw("out").into_iter().flatten().collect();

    crop_pairs(&inputs, &outputs, region, cmd_opts)
}

fn crop_pairs(
    inputs: &[&OsStr], outputs: &[&OsStr], region: Region, cmd_opts: &CmdOptions
) -> Result<(), CmdErrors> {
    if inputs.len() != outputs.len() {
        return Err(CmdErrors::InputOutputMismatch(inputs.len(), outputs.len()));
    }

    for (in_file, out_file) in inputs.iter().zip(outputs.iter()) {
        crop_one(Path::new(in_file), Path::new(out_file), region, cmd_opts)?;
    }
    Ok(())
}

fn crop_one(
    in_file: &Path, out_file: &Path, region: Region, cmd_opts: &CmdOptions
) -> Result<(), CmdErrors> {
    if in_file == out_file {
        return Err(CmdErrors::SameInputAndOutput(in_file.to_path_buf()));
    }

    if cmd_opts.stream {
        info!("Cropping {:?} into {:?}", in_file, out_file);
        debug!("Reading {:?} as a forward only stream", in_file);

        let source = ZStreamReader::new(BufReader::new(File::open(in_file)?));
        let destination = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(out_file)?;

        crop_with_options(
            source,
            BufWriter::new(destination),
            region,
            &cmd_opts.crop_options
        )?;
    } else {
        crop_file(in_file, out_file, region, &cmd_opts.crop_options)?;
    }
    Ok(())
}
