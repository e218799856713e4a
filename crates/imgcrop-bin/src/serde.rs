/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use imgcrop_bmp::BmpHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   OsString,
    size:   u64,
    header: &'a BmpHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, header: &BmpHeader) -> Metadata {
        Metadata { file, size, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("header", &Header(self.header))?;

        state.end()
    }
}

struct Header<'a>(&'a BmpHeader);

impl<'a> Serialize for Header<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let header = self.0;
        let mut state = serializer.serialize_struct("BmpHeader", 9)?;

        state.serialize_field("width", &header.width())?;
        state.serialize_field("height", &header.height())?;
        state.serialize_field("bits_per_pixel", &header.bits_per_pixel())?;
        state.serialize_field("row_stride", &header.row_stride().ok())?;
        state.serialize_field("top_down", &header.is_top_down())?;
        state.serialize_field("allow_alpha", &header.allow_alpha())?;
        state.serialize_field("info_header_size", &header.info_header_size())?;
        state.serialize_field("image_offset", &header.image_offset())?;
        state.serialize_field("palette_entries", &header.palette().len())?;

        state.end()
    }
}
