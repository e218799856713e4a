/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the `BITMAPFILEHEADER`, always first in the file
pub(crate) const FILE_HEADER_LEN: usize = 14;
/// `BITMAPINFOHEADER`
pub(crate) const INFO_HEADER_LEN: u32 = 40;
/// `BITMAPV4HEADER`
pub(crate) const V4_INFO_HEADER_LEN: u32 = 108;
/// `BITMAPV5HEADER`
pub(crate) const V5_INFO_HEADER_LEN: u32 = 124;
/// 256 entries of BGR0
pub(crate) const PALETTE_LEN: usize = 256 * 4;

pub(crate) const BI_RGB: u32 = 0;
pub(crate) const BI_BITFIELDS: u32 = 3;

/// Red, green, blue and alpha masks equivalent to no compression
pub(crate) const DEFAULT_BITFIELDS: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];

/// Offsets of header fields rewritten for the cropped image
pub(crate) const FILE_SIZE_OFFSET: usize = 2;
pub(crate) const WIDTH_OFFSET: usize = 18;
pub(crate) const HEIGHT_OFFSET: usize = 22;

/// A single palette entry for bmp
///
/// Entries are stored as BGR0 in the file, this holds them
/// in RGBA order with an opaque alpha.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub struct PaletteEntry {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8,
    pub alpha: u8
}

/// Number of bytes in one stored row of a `width` pixel wide
/// image, including the padding to a multiple of 4 bytes.
///
/// Returns `None` if the size doesn't fit in a `usize`
///
/// ```
/// use imgcrop_bmp::row_stride;
/// assert_eq!(row_stride(8, 24), Some(24));
/// assert_eq!(row_stride(5, 24), Some(16));
/// assert_eq!(row_stride(3, 8), Some(4));
/// ```
pub fn row_stride(width: usize, bits_per_pixel: usize) -> Option<usize> {
    let bits = width.checked_mul(bits_per_pixel)?.checked_add(31)?;
    Some((bits / 32) * 4)
}

/// Probe some bytes to see
/// if they consist of a BMP image this crate can read the header of
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read sz
            if bytes.len() >= FILE_HEADER_LEN + 4 {
                let sz = read_u32_le(bytes, FILE_HEADER_LEN);

                return sz == INFO_HEADER_LEN || sz == V4_INFO_HEADER_LEN || sz == V5_INFO_HEADER_LEN;
            }
        }
    }
    false
}

// Callers guarantee the slice is long enough, every offset used is
// inside a buffer sized from the validated DIB header length.

#[inline]
pub(crate) fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
pub(crate) fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3]
    ])
}

#[inline]
pub(crate) fn read_i32_le(buf: &[u8], offset: usize) -> i32 {
    read_u32_le(buf, offset) as i32
}

#[inline]
pub(crate) fn write_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
