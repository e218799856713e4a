/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use imgcrop_core::bytestream::{ZByteReaderTrait, ZByteWriterTrait, ZReader, ZWriter};
use imgcrop_core::options::CropOptions;
use imgcrop_core::region::Region;
use log::{debug, info};

use crate::common::row_stride;
use crate::header::{parse_header, BmpHeader};
use crate::BmpCropErrors;

/// Rows of the output are padded with at most 3 bytes
const PADDING: [u8; 3] = [0; 3];

/// Stream `region` of the image described by `header` from `reader` into `sink`
///
/// `reader` must be positioned on the first pixel byte, i.e right after
/// [`parse_header`] returned `header`. A complete BMP image is written to `sink`,
/// the header bytes of the source with the file size, width and height
/// replaced, followed by the cropped rows.
///
/// The region is clamped to the image bounds first.
///
/// # Errors
/// - [`BmpCropErrors::Unsupported`] for top-down images and images with an alpha channel
/// - [`BmpCropErrors::EmptyRegion`] if nothing is left after clamping
/// - Any error from the source or the sink, after which the sink contents are unspecified
pub fn crop_region<T: ZByteReaderTrait, W: ZByteWriterTrait>(
    reader: &mut ZReader<T>, header: &BmpHeader, region: Region, sink: &mut ZWriter<W>
) -> Result<(), BmpCropErrors> {
    if header.is_top_down() {
        return Err(BmpCropErrors::Unsupported("Top-down images cannot be cropped"));
    }
    if header.allow_alpha() {
        return Err(BmpCropErrors::Unsupported(
            "32 bit images with an alpha mask cannot be cropped"
        ));
    }
    let bounds = Region::from_dimensions(header.width(), header.height());
    let region = bounds.intersect(&region);

    if region.is_empty() {
        return Err(BmpCropErrors::EmptyRegion);
    }
    // inside the image bounds, so none of these can be negative or exceed a usize
    let min_x = region.min_x() as usize;
    let max_y = region.max_y() as usize;
    let crop_width = region.width() as usize;
    let crop_height = region.height() as usize;

    let bytes_per_pixel = header.bytes_per_pixel();
    let in_stride = header.row_stride()?;
    let out_stride = row_stride(crop_width, usize::from(header.bits_per_pixel()))
        .ok_or(BmpCropErrors::OverFlowOccurred)?;

    let pixel_bytes = out_stride
        .checked_mul(crop_height)
        .ok_or(BmpCropErrors::OverFlowOccurred)?;
    let file_size = pixel_bytes
        .checked_add(header.header_bytes().len())
        .and_then(|size| u32::try_from(size).ok())
        .ok_or(BmpCropErrors::OverFlowOccurred)?;

    // width and height are no larger than the source's, which came from an i32
    let patched = header.patched_header_bytes(file_size, crop_width as u32, crop_height as u32);
    sink.write_all(&patched)?;

    // Rows are stored bottom-up, the first rows in the stream are the ones
    // below the region
    let skip_bytes = in_stride
        .checked_mul(header.height() - max_y)
        .ok_or(BmpCropErrors::OverFlowOccurred)?;

    let left = bytes_per_pixel * min_x;
    let mid = bytes_per_pixel * crop_width;
    // source padding is dropped with the columns on the right
    let right = in_stride - (left + mid);
    let padding = &PADDING[..out_stride - mid];

    debug!("Crop region: {}", region);
    debug!("Input row stride: {}, output row stride: {}", in_stride, out_stride);
    debug!(
        "Skipping {} bytes, then {} rows of {} left / {} kept / {} right bytes",
        skip_bytes, crop_height, left, mid, right
    );
    debug!(
        "Source {} is {}",
        reader.name(),
        if reader.is_seekable() { "seekable" } else { "forward only" }
    );

    reader.skip(skip_bytes)?;

    for _ in 0..crop_height {
        reader.skip(left)?;
        reader.copy_to(mid, sink)?;
        sink.write_all(padding)?;
        reader.skip(right)?;
    }
    sink.flush()?;

    debug!("Wrote {} bytes", sink.bytes_written());

    Ok(())
}

/// Crop `region` out of the BMP image in `source` into `sink`
///
/// Parses the header and streams the region in one pass, using
/// default options.
///
/// If `source` can seek, the rows and columns outside the region are
/// seeked over, otherwise they are read and dropped. Memory use is constant
/// either way.
///
/// Cropping time scales with the number of rows cropped more than with columns.
pub fn crop<T: ZByteReaderTrait, W: ZByteWriterTrait>(
    source: T, sink: W, region: Region
) -> Result<(), BmpCropErrors> {
    crop_with_options(source, sink, region, &CropOptions::default())
}

/// Crop `region` out of the BMP image in `source` into `sink`, with
/// the limits in `options`
///
/// See [`crop`]
pub fn crop_with_options<T: ZByteReaderTrait, W: ZByteWriterTrait>(
    source: T, sink: W, region: Region, options: &CropOptions
) -> Result<(), BmpCropErrors> {
    let mut reader = ZReader::new(source);
    let mut writer = ZWriter::new(sink);

    let header = parse_header(&mut reader, options)?;

    crop_region(&mut reader, &header, region, &mut writer)
}

/// Crop `region` of the BMP at `src_path` into a BMP at `dst_path`
///
/// The destination is created if missing and truncated otherwise. On error it
/// may hold a partial image.
pub fn crop_file<P: AsRef<Path>, Q: AsRef<Path>>(
    src_path: P, dst_path: Q, region: Region, options: &CropOptions
) -> Result<(), BmpCropErrors> {
    let src_path = src_path.as_ref();
    let dst_path = dst_path.as_ref();

    info!("Cropping {:?} into {:?}", src_path, dst_path);

    let source = BufReader::new(File::open(src_path)?);
    let destination = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dst_path)?;

    crop_with_options(source, BufWriter::new(destination), region, options)
}
