/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The capability shared by all crop backends
use crate::bytestream::ZByteWriterTrait;
use crate::region::Region;

/// Something that can cut a region out of an image it holds
///
/// Implemented by format specific backends, the image source is owned
/// by the implementor, callers only say what to cut and where to put it.
pub trait Cropper {
    type Error;

    /// Crop `region` out of the image and write a complete,
    /// standalone image containing just that region into `sink`
    ///
    /// On error the contents of `sink` are unspecified.
    fn crop<W: ZByteWriterTrait>(&self, region: Region, sink: W) -> Result<(), Self::Error>;
}
