/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

//! Helpers to build BMP images byte by byte

use image::RgbImage;

pub const DEFAULT_MASKS: [u32; 4] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000];

/// Header fields of a test image
#[derive(Clone, Debug)]
pub struct BmpSpec {
    pub width:       i32,
    pub height:      i32,
    pub bpp:         u16,
    pub info_len:    u32,
    pub planes:      u16,
    pub compression: u32,
    pub masks:       [u32; 4],
    /// RGB palette written for 8 bit images
    pub palette:     Vec<[u8; 3]>
}

impl BmpSpec {
    pub fn new(width: i32, height: i32, bpp: u16) -> BmpSpec {
        BmpSpec {
            width,
            height,
            bpp,
            info_len: 40,
            planes: 1,
            compression: 0,
            masks: DEFAULT_MASKS,
            palette: (0..=255).map(|i| [i as u8, (255 - i) as u8, (i * 7) as u8]).collect()
        }
    }

    pub fn info_len(mut self, info_len: u32) -> BmpSpec {
        self.info_len = info_len;
        self
    }

    pub fn image_offset(&self) -> usize {
        let palette = if self.bpp == 8 { 1024 } else { 0 };
        14 + self.info_len as usize + palette
    }

    pub fn row_stride(&self) -> usize {
        ((self.width.unsigned_abs() as usize * self.bpp as usize + 31) / 32) * 4
    }

    pub fn pixel_bytes(&self) -> usize {
        self.row_stride() * self.height.unsigned_abs() as usize
    }
}

/// File header, DIB header and (for 8 bit images) palette of `spec`
pub fn header_bytes(spec: &BmpSpec) -> Vec<u8> {
    let offset = spec.image_offset();
    let mut out = Vec::with_capacity(offset);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&((offset + spec.pixel_bytes()) as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(offset as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&spec.info_len.to_le_bytes());
    out.extend_from_slice(&spec.width.to_le_bytes());
    out.extend_from_slice(&spec.height.to_le_bytes());
    out.extend_from_slice(&spec.planes.to_le_bytes());
    out.extend_from_slice(&spec.bpp.to_le_bytes());
    out.extend_from_slice(&spec.compression.to_le_bytes());
    out.extend_from_slice(&(spec.pixel_bytes() as u32).to_le_bytes());
    // 2835 pixels per meter, 72 DPI
    out.extend_from_slice(&2835_u32.to_le_bytes());
    out.extend_from_slice(&2835_u32.to_le_bytes());
    // colors used, important colors
    out.extend_from_slice(&[0; 8]);

    if spec.info_len > 40 {
        // V4/V5 masks followed by color space and the rest, zeroed
        for mask in spec.masks {
            out.extend_from_slice(&mask.to_le_bytes());
        }
        // LCS_sRGB
        out.extend_from_slice(b"BGRs");
        out.resize(14 + spec.info_len as usize, 0);
    }

    if spec.bpp == 8 {
        for entry in &spec.palette {
            out.extend_from_slice(&[entry[2], entry[1], entry[0], 0]);
        }
    }
    assert_eq!(out.len(), offset);
    out
}

/// Encode a bottom-up image, `pixel(x, y)` appends the stored bytes of
/// a pixel, `y = 0` being the top row
fn encode(spec: &BmpSpec, pixel: impl Fn(usize, usize, &mut Vec<u8>)) -> Vec<u8> {
    let width = spec.width.unsigned_abs() as usize;
    let height = spec.height.unsigned_abs() as usize;
    let stride = spec.row_stride();

    let mut out = header_bytes(spec);

    for row in 0..height {
        let y = if spec.height < 0 { row } else { height - 1 - row };
        let start = out.len();

        for x in 0..width {
            pixel(x, y, &mut out);
        }
        // rows are padded with junk to make sure nobody copies it
        out.resize(start + stride, 0xAB);
    }
    out
}

/// A 24 or 32 bit image
pub fn encode_rgb(spec: &BmpSpec, pixel: impl Fn(usize, usize) -> [u8; 3]) -> Vec<u8> {
    let bpp = spec.bpp;
    assert!(bpp == 24 || bpp == 32);

    encode(spec, |x, y, out| {
        let [r, g, b] = pixel(x, y);
        out.extend_from_slice(&[b, g, r]);
        if bpp == 32 {
            out.push(0);
        }
    })
}

/// An 8 bit paletted image
pub fn encode_indexed(spec: &BmpSpec, index: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    assert_eq!(spec.bpp, 8);
    encode(spec, |x, y, out| out.push(index(x, y)))
}

/// A deterministic but irregular color for a pixel
pub fn pattern(x: usize, y: usize) -> [u8; 3] {
    [
        (x * 13 + y * 7) as u8,
        (x * 3 + y * 29 + 11) as u8,
        (x ^ y) as u8
    ]
}

/// Decode with the `image` crate, as a second opinion
pub fn reference_decode(bytes: &[u8]) -> RgbImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Bmp)
        .expect("reference decoder rejected image")
        .to_rgb8()
}

pub fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

pub fn i32_at(bytes: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}
