/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::file_io::crop_files;
use crate::probe_files::probe_input_files;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = if parsed_opts.probe {
        probe_input_files(&options)
    } else {
        crop_files(&options, &parsed_opts)
    };

    if let Err(err) = result {
        println!();
        error!(" Could not crop image, reason {:?}", err);
        println!();
        exit(-1);
    }
}
