/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgcrop_core::region::Region;

/// Parse a `x0,y0,x1,y1` crop region
pub fn parse_region(value: &str) -> Result<Region, String> {
    value.parse::<Region>().map_err(String::from)
}
