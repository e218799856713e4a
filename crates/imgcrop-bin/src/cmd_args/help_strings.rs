/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static REGION_HELP: &str = "Region to crop, as x0,y0,x1,y1

Coordinates are in pixels with the origin at the top left corner of the image,
x1 and y1 are exclusive. Corners may be given in any order.

Parts of the region outside the image are dropped, a region
that ends up empty is an error.

The same region is cropped out of every input.";

pub static STREAM_HELP: &str = "Read inputs front to back without seeking

By default inputs are seeked over the rows and columns outside the region.
With this flag they are read and discarded instead, the way a pipe or socket
would be handled. Output is identical either way.";
