/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use imgcrop_core::options::CropOptions;

pub mod global_options;

pub fn get_crop_options(options: &ArgMatches) -> CropOptions {
    let mut crop_options = CropOptions::default();

    if let Some(max_width) = options.get_one::<usize>("max-width") {
        crop_options = crop_options.set_max_width(*max_width);
    }
    if let Some(max_height) = options.get_one::<usize>("max-height") {
        crop_options = crop_options.set_max_height(*max_height);
    }
    crop_options
}
