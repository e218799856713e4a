/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A streaming BMP cropper
//!
//! This crate cuts a rectangular region out of a BMP image and writes
//! it out as a new, standalone BMP image without ever decoding the
//! whole picture.
//!
//! The source is read in a single forward pass, rows above and below
//! the region and columns to its left and right are skipped by seeking
//! when the source supports it and by reading and dropping bytes when it
//! doesn't. Pixel bytes are copied verbatim, so the working set is a
//! couple of kilobytes no matter how large the image is.
//!
//! # Supported formats
//! - Uncompressed 8 bit paletted, 24 bit and 32 bit images
//! - `BITMAPINFOHEADER`, `BITMAPV4HEADER` and `BITMAPV5HEADER` DIB headers
//! - BITFIELDS images whose masks are the default RGB masks
//!
//! # Unsupported formats
//! - RLE compressed images
//! - Top-down images
//! - 32 bit images with an alpha channel (a V4 or V5 header)
//!
//! # Example
//! ```no_run
//! use imgcrop_bmp::crop;
//! use imgcrop_core::bytestream::ZCursor;
//! use imgcrop_core::region::Region;
//!
//! fn main() -> Result<(), imgcrop_bmp::BmpCropErrors> {
//!     let image = std::fs::read("big.bmp").unwrap();
//!     let mut out = vec![];
//!     crop(ZCursor::new(&image), &mut out, Region::new(10, 10, 110, 60))?;
//!     Ok(())
//! }
//! ```

pub use crate::common::{probe_bmp, row_stride, PaletteEntry};
pub use crate::crop::{crop, crop_file, crop_region, crop_with_options};
pub use crate::cropper::BmpCropper;
pub use crate::errors::BmpCropErrors;
pub use crate::header::{parse_header, BmpHeader};

mod common;
mod crop;
mod cropper;
mod errors;
mod header;
