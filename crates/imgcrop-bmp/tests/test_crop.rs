/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use imgcrop_bmp::{crop, crop_file, crop_region, parse_header, row_stride, BmpCropErrors};
use imgcrop_core::bytestream::{ZByteIoError, ZCursor, ZReader, ZStreamReader, ZWriter};
use imgcrop_core::options::CropOptions;
use imgcrop_core::region::Region;

mod common;

use common::{
    encode_indexed, encode_rgb, header_bytes, i32_at, pattern, reference_decode, u32_at, BmpSpec
};

fn crop_seekable(image: &[u8], region: Region) -> Result<Vec<u8>, BmpCropErrors> {
    let mut out = vec![];
    crop(ZCursor::new(image), &mut out, region)?;
    Ok(out)
}

fn crop_streaming(image: &[u8], region: Region) -> Result<Vec<u8>, BmpCropErrors> {
    let mut out = vec![];
    crop(ZStreamReader::new(image), &mut out, region)?;
    Ok(out)
}

#[test]
fn crop_single_red_pixel() {
    let spec = BmpSpec::new(8, 8, 24);
    let image = encode_rgb(&spec, |x, y| {
        if (x, y) == (4, 4) {
            [255, 0, 0]
        } else {
            [10, 20, 30]
        }
    });

    let out = crop_seekable(&image, Region::new(2, 2, 6, 6)).unwrap();
    let decoded = reference_decode(&out);

    assert_eq!(decoded.dimensions(), (4, 4));

    for (x, y, pixel) in decoded.enumerate_pixels() {
        if (x, y) == (2, 2) {
            assert_eq!(pixel.0, [255, 0, 0]);
        } else {
            assert_eq!(pixel.0, [10, 20, 30], "pixel ({x},{y})");
        }
    }
}

#[test]
fn zero_area_region_is_empty() {
    let image = encode_rgb(&BmpSpec::new(8, 8, 24), pattern);

    assert!(matches!(
        crop_seekable(&image, Region::new(0, 0, 0, 0)),
        Err(BmpCropErrors::EmptyRegion)
    ));
    assert!(matches!(
        crop_seekable(&image, Region::new(3, 0, 3, 8)),
        Err(BmpCropErrors::EmptyRegion)
    ));
}

#[test]
fn region_outside_image_is_empty() {
    let image = encode_rgb(&BmpSpec::new(8, 8, 24), pattern);

    for region in [
        Region::new(8, 0, 12, 4),
        Region::new(-5, -5, 0, 3),
        Region::new(2, 9, 4, 20)
    ] {
        assert!(
            matches!(crop_seekable(&image, region), Err(BmpCropErrors::EmptyRegion)),
            "region {region}"
        );
    }
}

#[test]
fn bad_magic_is_invalid_format() {
    let mut image = encode_rgb(&BmpSpec::new(8, 8, 24), pattern);
    image[0] = b'P';

    assert!(matches!(
        crop_seekable(&image, Region::new(0, 0, 4, 4)),
        Err(BmpCropErrors::InvalidMagicBytes)
    ));
    // even if there's barely anything after it
    assert!(matches!(
        crop_seekable(b"MB", Region::new(0, 0, 4, 4)),
        Err(BmpCropErrors::InvalidMagicBytes)
    ));
}

#[test]
fn partially_outside_region_is_clamped() {
    let spec = BmpSpec::new(10, 6, 24);
    let image = encode_rgb(&spec, pattern);

    let out = crop_seekable(&image, Region::new(7, -3, 15, 2)).unwrap();
    let decoded = reference_decode(&out);

    assert_eq!(decoded.dimensions(), (3, 2));
    for (x, y, pixel) in decoded.enumerate_pixels() {
        assert_eq!(pixel.0, pattern(7 + x as usize, y as usize));
    }
}

#[test]
fn dimensions_for_every_depth() {
    let region = Region::new(1, 2, 6, 5);

    for bpp in [8_u16, 24, 32] {
        // odd width so both source and output rows need padding
        let spec = BmpSpec::new(7, 9, bpp);
        let image = if bpp == 8 {
            encode_indexed(&spec, |x, y| (x * 9 + y) as u8)
        } else {
            encode_rgb(&spec, pattern)
        };
        let out = crop_seekable(&image, region).unwrap();

        assert_eq!(i32_at(&out, 18), 5, "width for {bpp} bpp");
        assert_eq!(i32_at(&out, 22), 3, "height for {bpp} bpp");

        let decoded = reference_decode(&out);
        assert_eq!(decoded.dimensions(), (5, 3), "{bpp} bpp");
    }
}

#[test]
fn output_sizes_and_padding() {
    let spec = BmpSpec::new(13, 11, 24);
    let image = encode_rgb(&spec, pattern);
    let region = Region::new(3, 4, 8, 10);

    let out = crop_seekable(&image, region).unwrap();

    let offset = spec.image_offset();
    let stride = row_stride(5, 24).unwrap();

    assert_eq!(stride, 16);
    assert_eq!(out.len(), offset + 6 * stride);
    assert_eq!(u32_at(&out, 2) as usize, out.len());
    assert_eq!(u32_at(&out, 10) as usize, offset);

    // untouched fields come through as is
    assert_eq!(&out[6..10], &image[6..10]);
    assert_eq!(&out[14..18], &image[14..18]);
    assert_eq!(&out[26..offset], &image[26..offset]);

    for row in out[offset..].chunks_exact(stride) {
        assert_eq!(&row[15..], &[0]);
    }
}

#[test]
fn rows_are_copied_verbatim() {
    let spec = BmpSpec::new(6, 5, 32);
    let image = encode_rgb(&spec, pattern);
    let out = crop_seekable(&image, Region::new(2, 1, 5, 3)).unwrap();

    let offset = spec.image_offset();
    let stride = spec.row_stride();

    // first stored output row is image row 2, the third stored input row
    let expected_first = &image[offset + 2 * stride + 2 * 4..][..12];
    let expected_second = &image[offset + 3 * stride + 2 * 4..][..12];

    assert_eq!(&out[offset..offset + 12], expected_first);
    assert_eq!(&out[offset + 12..offset + 24], expected_second);
}

#[test]
fn seekable_and_streaming_agree() {
    let regions = [
        Region::new(0, 0, 17, 9),
        Region::new(3, 2, 4, 3),
        Region::new(5, 0, 17, 1),
        Region::new(0, 8, 1, 9),
        Region::new(-10, 4, 9, 100)
    ];
    for bpp in [8_u16, 24, 32] {
        let spec = BmpSpec::new(17, 9, bpp);
        let image = if bpp == 8 {
            encode_indexed(&spec, |x, y| (x * 31 + y * 5) as u8)
        } else {
            encode_rgb(&spec, pattern)
        };

        for region in regions {
            let seekable = crop_seekable(&image, region).unwrap();
            let streaming = crop_streaming(&image, region).unwrap();

            assert_eq!(seekable, streaming, "{bpp} bpp, region {region}");
        }
    }
}

#[test]
fn output_parses_again() {
    for bpp in [8_u16, 24, 32] {
        let spec = BmpSpec::new(21, 14, bpp);
        let image = if bpp == 8 {
            encode_indexed(&spec, |x, y| (x + y) as u8)
        } else {
            encode_rgb(&spec, pattern)
        };

        let out = crop_seekable(&image, Region::new(4, 3, 15, 12)).unwrap();

        let mut reader = ZReader::new(ZCursor::new(&out));
        let header = parse_header(&mut reader, &CropOptions::default()).unwrap();

        assert_eq!((header.width(), header.height()), (11, 9));
        assert_eq!(header.bits_per_pixel(), bpp);
        assert!(!header.is_top_down());

        // cropping the crop to its full extent gives the same bytes
        let again = crop_seekable(&out, Region::new(0, 0, 11, 9)).unwrap();
        assert_eq!(again, out);
    }
}

#[test]
fn palette_is_preserved() {
    let spec = BmpSpec::new(9, 4, 8);
    let image = encode_indexed(&spec, |x, y| (x * 4 + y) as u8);

    let out = crop_seekable(&image, Region::new(1, 1, 8, 3)).unwrap();
    let offset = spec.image_offset();

    // raw palette bytes are identical
    assert_eq!(&out[54..offset], &image[54..offset]);

    let options = CropOptions::default();
    let input = parse_header(&mut ZReader::new(ZCursor::new(&image)), &options).unwrap();
    let output = parse_header(&mut ZReader::new(ZCursor::new(&out)), &options).unwrap();

    assert_eq!(input.palette(), output.palette());

    for (entry, rgb) in output.palette().iter().zip(&spec.palette) {
        assert_eq!([entry.red, entry.green, entry.blue], *rgb);
        assert_eq!(entry.alpha, 255);
    }

    let decoded = reference_decode(&out);
    for (x, y, pixel) in decoded.enumerate_pixels() {
        let index = (x as usize + 1) * 4 + (y as usize + 1);
        assert_eq!(pixel.0, spec.palette[index], "pixel ({x},{y})");
    }
}

#[test]
fn top_down_is_unsupported() {
    let spec = BmpSpec::new(8, -8, 24);
    let image = encode_rgb(&spec, pattern);

    assert!(matches!(
        crop_seekable(&image, Region::new(0, 0, 4, 4)),
        Err(BmpCropErrors::Unsupported(_))
    ));
}

#[test]
fn alpha_capable_header_is_unsupported() {
    let spec = BmpSpec::new(8, 8, 32).info_len(108);
    let image = encode_rgb(&spec, pattern);

    assert!(matches!(
        crop_seekable(&image, Region::new(0, 0, 4, 4)),
        Err(BmpCropErrors::Unsupported(_))
    ));
}

#[test]
fn v4_and_v5_headers_without_alpha() {
    for info_len in [108, 124] {
        let spec = BmpSpec::new(12, 7, 24).info_len(info_len);
        let image = encode_rgb(&spec, pattern);

        let out = crop_seekable(&image, Region::new(2, 2, 10, 5)).unwrap();
        assert_eq!(&out[14..18], &info_len.to_le_bytes());

        let decoded = reference_decode(&out);
        assert_eq!(decoded.dimensions(), (8, 3));

        for (x, y, pixel) in decoded.enumerate_pixels() {
            assert_eq!(pixel.0, pattern(x as usize + 2, y as usize + 2));
        }
    }
}

#[test]
fn truncated_pixels_are_unexpected_end() {
    let spec = BmpSpec::new(16, 16, 24);
    let image = encode_rgb(&spec, pattern);
    let truncated = &image[..spec.image_offset() + spec.row_stride() * 10];

    // the top rows are the last ones stored, and they are missing
    let region = Region::new(0, 0, 16, 4);

    assert!(matches!(
        crop_seekable(truncated, region),
        Err(BmpCropErrors::UnexpectedEndOfData(..))
    ));
    assert!(matches!(
        crop_streaming(truncated, region),
        Err(BmpCropErrors::UnexpectedEndOfData(..))
    ));
}

#[test]
fn truncated_header_is_unexpected_end() {
    let image = encode_rgb(&BmpSpec::new(16, 16, 24), pattern);

    for len in [2, 10, 30, 53] {
        assert!(
            matches!(
                crop_streaming(&image[..len], Region::new(0, 0, 1, 1)),
                Err(BmpCropErrors::UnexpectedEndOfData(..))
            ),
            "length {len}"
        );
    }
}

#[test]
fn enormous_header_without_pixels() {
    // the rows below the region alone take up almost 2^63 bytes
    let width = i32::MAX;
    let height: i32 = (1 << 30) + 1;

    let mut header = header_bytes(&BmpSpec::new(1, 1, 32));
    header[18..22].copy_from_slice(&width.to_le_bytes());
    header[22..26].copy_from_slice(&height.to_le_bytes());

    let region = Region::new(i64::from(width) - 1, 0, i64::from(width), 1);

    assert!(matches!(
        crop_seekable(&header, region),
        Err(BmpCropErrors::IoErrors(ZByteIoError::SeekError(_)))
    ));
    assert!(matches!(
        crop_streaming(&header, region),
        Err(BmpCropErrors::UnexpectedEndOfData(..))
    ));
}

#[test]
fn source_is_left_after_last_region_row() {
    let spec = BmpSpec::new(10, 10, 24);
    let image = encode_rgb(&spec, pattern);
    let options = CropOptions::default();

    let mut reader = ZReader::new(ZStreamReader::new(&image[..]));
    let header = parse_header(&mut reader, &options).unwrap();

    assert_eq!(reader.position().unwrap() as usize, header.image_offset() as usize);
    assert_eq!(header.header_bytes().len(), header.image_offset() as usize);

    let mut out = vec![];
    let mut writer = ZWriter::new(&mut out);
    crop_region(&mut reader, &header, Region::new(1, 2, 4, 7), &mut writer).unwrap();

    let stride = spec.row_stride();
    // 3 rows below the region are skipped, then 5 rows walked over
    let expected = spec.image_offset() + 3 * stride + 5 * stride;
    assert_eq!(reader.position().unwrap() as usize, expected);
    assert_eq!(writer.bytes_written(), spec.image_offset() + 5 * row_stride(3, 24).unwrap());
}

#[test]
fn crop_between_files() {
    let spec = BmpSpec::new(30, 20, 24);
    let image = encode_rgb(&spec, pattern);

    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("in.bmp");
    let dst = dir.path().join("out.bmp");

    std::fs::write(&src, &image).unwrap();
    // stale contents must not survive
    std::fs::write(&dst, vec![0xFF; 10_000]).unwrap();

    crop_file(&src, &dst, Region::new(5, 5, 25, 15), &CropOptions::default()).unwrap();

    let out = std::fs::read(&dst).unwrap();
    assert_eq!(out, crop_seekable(&image, Region::new(5, 5, 25, 15)).unwrap());

    assert!(matches!(
        crop_file(
            dir.path().join("missing.bmp"),
            &dst,
            Region::new(0, 0, 1, 1),
            &CropOptions::default()
        ),
        Err(BmpCropErrors::IoErrors(_))
    ));
}
