/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// A BMP file starts with a 14 byte file header
//
//   0..2   "BM"
//   2..6   file size
//   6..10  reserved
//  10..14  offset of the first pixel byte
//
// followed by a DIB header whose first 4 bytes give its own size. Only the
// Windows headers of 40 (v3), 108 (v4) and 124 (v5) bytes are accepted here,
// they share the layout of the first 40 bytes
//
//  18..22  width, signed
//  22..26  height, signed, negative for top-down images
//  26..28  planes
//  28..30  bits per pixel
//  30..34  compression
//  54..70  (v4/v5 only) red, green, blue and alpha masks
//
// An 8 bit image has a 256 entry BGR0 palette right after the DIB header,
// the other depths go straight to pixels.
//
// The whole run of bytes up to the pixel data is kept so that it can be
// written back out for the cropped image with only the size fields changed.

use imgcrop_core::bytestream::{ZByteReaderTrait, ZReader};
use imgcrop_core::options::CropOptions;
use log::{trace, warn};

use crate::common::{
    read_i32_le, read_u16_le, read_u32_le, row_stride, write_u32_le, PaletteEntry, BI_BITFIELDS,
    BI_RGB, DEFAULT_BITFIELDS, FILE_HEADER_LEN, FILE_SIZE_OFFSET, HEIGHT_OFFSET, INFO_HEADER_LEN,
    PALETTE_LEN, V4_INFO_HEADER_LEN, V5_INFO_HEADER_LEN, WIDTH_OFFSET
};
use crate::BmpCropErrors;

/// Geometry, pixel encoding and raw header bytes of a BMP image
///
/// Produced by [`parse_header`], it describes exactly one stream and
/// is consumed by the crop that follows.
#[derive(Clone, Debug)]
pub struct BmpHeader {
    width:            usize,
    height:           usize,
    bits_per_pixel:   u16,
    top_down:         bool,
    allow_alpha:      bool,
    info_header_size: u32,
    image_offset:     u32,
    header_bytes:     Vec<u8>,
    palette:          Vec<PaletteEntry>
}

impl BmpHeader {
    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }
    /// Image height in pixels, always positive, see
    /// [`is_top_down`](Self::is_top_down) for row order
    pub const fn height(&self) -> usize {
        self.height
    }
    /// One of 8, 24 or 32
    pub const fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }
    /// Whether the first stored row is the top of the image
    pub const fn is_top_down(&self) -> bool {
        self.top_down
    }
    /// True for 32 bit images whose header is larger than `BITMAPINFOHEADER`,
    /// those carry an alpha mask that should be honoured.
    ///
    /// 32 bit images with the legacy 40 byte header are treated as opaque.
    pub const fn allow_alpha(&self) -> bool {
        self.allow_alpha
    }
    /// Size of the DIB header, 40, 108 or 124
    pub const fn info_header_size(&self) -> u32 {
        self.info_header_size
    }
    /// Offset of the first pixel byte from the start of the file
    pub const fn image_offset(&self) -> u32 {
        self.image_offset
    }
    /// Raw file header, DIB header and palette, exactly
    /// [`image_offset`](Self::image_offset) bytes
    pub fn header_bytes(&self) -> &[u8] {
        &self.header_bytes
    }
    /// The color palette of 8 bit images, empty for other depths
    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    /// Bytes per stored row, padding included
    pub fn row_stride(&self) -> Result<usize, BmpCropErrors> {
        row_stride(self.width, usize::from(self.bits_per_pixel)).ok_or(BmpCropErrors::OverFlowOccurred)
    }

    /// A copy of the header bytes describing a `width` by `height`
    /// bottom-up image of `file_size` bytes
    pub(crate) fn patched_header_bytes(&self, file_size: u32, width: u32, height: u32) -> Vec<u8> {
        let mut bytes = self.header_bytes.clone();

        write_u32_le(&mut bytes, FILE_SIZE_OFFSET, file_size);
        write_u32_le(&mut bytes, WIDTH_OFFSET, width);
        write_u32_le(&mut bytes, HEIGHT_OFFSET, height);

        bytes
    }
}

/// Read and validate the headers of a BMP image
///
/// Exactly [`image_offset`](BmpHeader::image_offset) bytes are read, leaving
/// `reader` on the first pixel byte.
///
/// # Errors
/// - [`BmpCropErrors::InvalidMagicBytes`] if the stream doesn't start with `BM`
/// - [`BmpCropErrors::Unsupported`] and [`BmpCropErrors::UnsupportedOwned`] for DIB header sizes,
///   plane counts, compressions, bit depths or pixel offsets this crate doesn't handle
/// - [`BmpCropErrors::UnexpectedEndOfData`] if the stream ends inside the header
/// - [`BmpCropErrors::TooLargeDimensions`] if the image exceeds the limits in `options`
pub fn parse_header<T: ZByteReaderTrait>(
    reader: &mut ZReader<T>, options: &CropOptions
) -> Result<BmpHeader, BmpCropErrors> {
    let mut magic = [0_u8; 2];
    reader.read_exact_bytes(&mut magic)?;

    if &magic != b"BM" {
        return Err(BmpCropErrors::InvalidMagicBytes);
    }
    let mut file_header = [0_u8; FILE_HEADER_LEN + 4];
    file_header[..2].copy_from_slice(&magic);
    reader.read_exact_bytes(&mut file_header[2..])?;

    let image_offset = read_u32_le(&file_header, 10);
    let info_header_size = read_u32_le(&file_header, FILE_HEADER_LEN);

    if info_header_size != INFO_HEADER_LEN
        && info_header_size != V4_INFO_HEADER_LEN
        && info_header_size != V5_INFO_HEADER_LEN
    {
        return Err(BmpCropErrors::UnsupportedOwned(format!(
            "DIB header size {info_header_size}, only 40, 108 and 124 byte headers are supported"
        )));
    }
    let headers_end = FILE_HEADER_LEN + info_header_size as usize;

    let mut header_bytes = vec![0_u8; headers_end];
    header_bytes[..file_header.len()].copy_from_slice(&file_header);
    reader.read_exact_bytes(&mut header_bytes[file_header.len()..])?;

    let raw_width = read_i32_le(&header_bytes, WIDTH_OFFSET);
    let raw_height = read_i32_le(&header_bytes, HEIGHT_OFFSET);

    let top_down = raw_height < 0;
    let height = raw_height
        .checked_abs()
        .ok_or(BmpCropErrors::Unsupported("Image height out of range"))?;

    if raw_width < 0 {
        return Err(BmpCropErrors::Unsupported("Negative image width"));
    }
    let width = raw_width as usize;
    let height = height as usize;

    trace!("Width: {}", width);
    trace!("Height: {}", height);
    trace!("Top down: {}", top_down);

    let planes = read_u16_le(&header_bytes, 26);
    let bits_per_pixel = read_u16_le(&header_bytes, 28);
    let mut compression = read_u32_le(&header_bytes, 30);

    // BITFIELDS whose masks are exactly what no compression implies
    // is no compression
    if compression == BI_BITFIELDS
        && info_header_size > INFO_HEADER_LEN
        && DEFAULT_BITFIELDS
            .iter()
            .enumerate()
            .all(|(i, mask)| read_u32_le(&header_bytes, 54 + 4 * i) == *mask)
    {
        warn!("BITFIELDS compression with default masks, treating as uncompressed");
        compression = BI_RGB;
    }
    if planes != 1 {
        return Err(BmpCropErrors::UnsupportedOwned(format!(
            "{planes} color planes, only single plane images are supported"
        )));
    }
    if compression != BI_RGB {
        return Err(BmpCropErrors::UnsupportedOwned(format!(
            "Compression scheme {compression}, only uncompressed images are supported"
        )));
    }

    let expected_offset = match bits_per_pixel {
        8 => headers_end + PALETTE_LEN,
        24 | 32 => headers_end,
        _ => {
            return Err(BmpCropErrors::UnsupportedOwned(format!(
                "Depth {bits_per_pixel} unsupported"
            )));
        }
    };
    if image_offset as usize != expected_offset {
        return Err(BmpCropErrors::UnsupportedOwned(format!(
            "Pixel data offset {image_offset} for a {bits_per_pixel} bit image, expected {expected_offset}"
        )));
    }

    trace!("Bits per pixel: {}", bits_per_pixel);
    trace!("Pixel data offset: {}", image_offset);

    if width > options.get_max_width() {
        return Err(BmpCropErrors::TooLargeDimensions(
            "width",
            options.get_max_width(),
            width
        ));
    }
    if height > options.get_max_height() {
        return Err(BmpCropErrors::TooLargeDimensions(
            "height",
            options.get_max_height(),
            height
        ));
    }

    let mut palette = Vec::new();

    if bits_per_pixel == 8 {
        header_bytes.resize(expected_offset, 0);
        reader.read_exact_bytes(&mut header_bytes[headers_end..])?;

        // BMP palettes are stored in BGR order rather than RGB order.
        // Every 4th byte is padding.
        palette = header_bytes[headers_end..]
            .chunks_exact(4)
            .map(|entry| PaletteEntry {
                red:   entry[2],
                green: entry[1],
                blue:  entry[0],
                alpha: 255
            })
            .collect();
    }

    // Alpha in BMP is poorly documented and inconsistently used, the
    // masks of v4 and v5 headers are respected, images with the
    // legacy header have their alpha ignored.
    let allow_alpha = bits_per_pixel == 32 && info_header_size > INFO_HEADER_LEN;

    Ok(BmpHeader {
        width,
        height,
        bits_per_pixel,
        top_down,
        allow_alpha,
        info_header_size,
        image_offset,
        header_bytes,
        palette
    })
}
