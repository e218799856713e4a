/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use imgcrop_bmp::parse_header;
use imgcrop_core::bytestream::{ZReader, ZStreamReader};
use imgcrop_core::options::CropOptions;
use log::warn;

use crate::errors::CmdErrors;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub(crate) fn probe_input_files(args: &ArgMatches) -> Result<(), CmdErrors> {
    // no size limits, only headers are read
    let options = CropOptions::default();

    for in_file in args.get_raw("in").into_iter().flatten() {
        let file = File::open(in_file)?;
        let size = file.metadata()?.len();

        let mut reader = ZReader::new(ZStreamReader::new(BufReader::new(file)));

        match parse_header(&mut reader, &options) {
            Ok(header) => {
                let metadata = Metadata::new(in_file.to_os_string(), size, &header);

                match serde_json::to_string_pretty(&metadata) {
                    Ok(json) => println!("{json}"),
                    Err(err) => warn!("Could not serialize {:?}, reason {}", in_file, err)
                }
            }
            Err(err) => warn!("Could not read headers of {:?}, reason {}", in_file, err)
        }
    }
    Ok(())
}
