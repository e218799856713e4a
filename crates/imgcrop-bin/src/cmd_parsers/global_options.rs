/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use imgcrop_core::options::CropOptions;
use imgcrop_core::region::Region;
use log::{info, Level};

use crate::cmd_parsers::get_crop_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub crop_options: CropOptions,
    pub region:       Option<Region>,
    pub stream:       bool,
    pub probe:        bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            crop_options: CropOptions::default(),
            region:       None,
            stream:       false,
            probe:        false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.crop_options = get_crop_options(options);
    cmd_options.region = options.get_one::<Region>("region").copied();

    if let Some(region) = cmd_options.region {
        info!("Crop region: {}", region);
    }
    if options.value_source("stream") == Some(CommandLine) {
        info!("Reading inputs as forward only streams");
        cmd_options.stream = true;
    }
    if options.value_source("probe") == Some(CommandLine) {
        info!("Probing inputs");
        cmd_options.probe = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
