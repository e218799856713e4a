/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use imgcrop_core::bytestream::ZByteIoError;

/// BMP errors that can occur during cropping
#[non_exhaustive]
pub enum BmpCropErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// A recognised but unsupported feature
    Unsupported(&'static str),
    /// A recognised but unsupported feature, with details
    UnsupportedOwned(String),
    /// The source ended before all needed bytes were read
    ///
    /// requested, found
    UnexpectedEndOfData(usize, usize),
    /// The requested region does not overlap the image
    EmptyRegion,
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverFlowOccurred,
    /// A second crop was requested from a source that cannot
    /// go back to its start
    ReuseNotSupported,
    IoErrors(ZByteIoError)
}

impl Debug for BmpCropErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::Unsupported(message) => {
                writeln!(f, "Unsupported: {}", message)
            }
            Self::UnsupportedOwned(message) => {
                writeln!(f, "Unsupported: {}", message)
            }
            Self::UnexpectedEndOfData(expected, found) => {
                writeln!(
                    f,
                    "Unexpected end of data, expected {} bytes but found {}",
                    expected, found
                )
            }
            Self::EmptyRegion => {
                writeln!(f, "Crop region is empty or out of bounds")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::ReuseNotSupported => {
                writeln!(
                    f,
                    "Cropping again is not supported for sources that cannot seek"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpCropErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpCropErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<ZByteIoError> for BmpCropErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                BmpCropErrors::UnexpectedEndOfData(expected, found)
            }
            err => BmpCropErrors::IoErrors(err)
        }
    }
}

impl From<std::io::Error> for BmpCropErrors {
    fn from(value: std::io::Error) -> Self {
        BmpCropErrors::from(ZByteIoError::from(value))
    }
}
