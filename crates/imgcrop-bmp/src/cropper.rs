/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::sync::{Mutex, PoisonError};

use imgcrop_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};
use imgcrop_core::cropper::Cropper;
use imgcrop_core::options::CropOptions;
use imgcrop_core::region::Region;
use log::trace;

use crate::crop::crop_region;
use crate::header::parse_header;
use crate::BmpCropErrors;

/// Whether the source has been read from yet
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SourceUse {
    /// Still at the position it was handed over in
    Fresh,
    /// At least one crop ran, position is somewhere past the header
    Consumed
}

struct CropperState<T: ZByteReaderTrait> {
    reader: ZReader<T>,
    usage:  SourceUse
}

impl<T: ZByteReaderTrait> CropperState<T> {
    /// Get the source ready for another crop
    fn prepare(&mut self) -> Result<(), BmpCropErrors> {
        match self.usage {
            SourceUse::Fresh => {
                self.usage = SourceUse::Consumed;
            }
            SourceUse::Consumed => {
                if !self.reader.is_seekable() {
                    return Err(BmpCropErrors::ReuseNotSupported);
                }
                trace!("Rewinding {} for another crop", self.reader.name());
                self.reader.rewind_to_start()?;
            }
        }
        Ok(())
    }
}

/// A BMP cropper that can cut several regions out of one source
///
/// Crops are serialized through an internal lock, so a single cropper
/// can be shared between threads.
///
/// The first crop reads the source from wherever it currently is. Later
/// crops seek back to the start of the source first, which requires the source
/// to be seekable, a forward only source can only be cropped once and further
/// attempts fail with [`BmpCropErrors::ReuseNotSupported`].
///
/// # Example
/// ```
/// use imgcrop_bmp::BmpCropper;
/// use imgcrop_core::bytestream::ZCursor;
/// use imgcrop_core::cropper::Cropper;
/// use imgcrop_core::region::Region;
///
/// fn tiles(image: &[u8]) -> Result<Vec<Vec<u8>>, imgcrop_bmp::BmpCropErrors> {
///     let cropper = BmpCropper::new(ZCursor::new(image));
///     let mut tiles = vec![];
///
///     for y in 0..2 {
///         let mut tile = vec![];
///         cropper.crop(Region::new(0, y * 16, 16, (y + 1) * 16), &mut tile)?;
///         tiles.push(tile);
///     }
///     Ok(tiles)
/// }
/// ```
pub struct BmpCropper<T: ZByteReaderTrait> {
    state:   Mutex<CropperState<T>>,
    options: CropOptions
}

impl<T: ZByteReaderTrait> BmpCropper<T> {
    /// Create a new cropper over `source` with default options
    pub fn new(source: T) -> BmpCropper<T> {
        BmpCropper::new_with_options(source, CropOptions::default())
    }

    /// Create a new cropper over `source` with specified options
    pub fn new_with_options(source: T, options: CropOptions) -> BmpCropper<T> {
        BmpCropper {
            state: Mutex::new(CropperState {
                reader: ZReader::new(source),
                usage:  SourceUse::Fresh
            }),
            options
        }
    }

    /// Destroy the cropper returning the source
    pub fn into_inner(self) -> T {
        let state = self
            .state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        state.reader.consume()
    }
}

impl<T: ZByteReaderTrait> Cropper for BmpCropper<T> {
    type Error = BmpCropErrors;

    fn crop<W: ZByteWriterTrait>(&self, region: Region, sink: W) -> Result<(), Self::Error> {
        // A panic mid crop leaves the source at an unknown position,
        // which the next crop resets anyway.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        state.prepare()?;

        let mut writer = ZWriter::new(sink);
        let header = parse_header(&mut state.reader, &self.options)?;

        crop_region(&mut state.reader, &header, region, &mut writer)
    }
}
