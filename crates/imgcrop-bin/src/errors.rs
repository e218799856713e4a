/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use imgcrop_bmp::BmpCropErrors;

/// Errors reported by the command line front-end
pub enum CmdErrors {
    /// Cropping or reading an image failed
    CropErrors(BmpCropErrors),
    /// Cropping was requested without a region
    NoRegion,
    /// Number of inputs, number of outputs
    InputOutputMismatch(usize, usize),
    /// An input would be overwritten by its own output
    SameInputAndOutput(PathBuf)
}

impl Debug for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CropErrors(err) => {
                writeln!(f, "{:?}", err)
            }
            Self::NoRegion => {
                writeln!(f, "No crop region specified, use --region x0,y0,x1,y1")
            }
            Self::InputOutputMismatch(inputs, outputs) => {
                writeln!(
                    f,
                    "Each input needs exactly one output, got {inputs} inputs and {outputs} outputs"
                )
            }
            Self::SameInputAndOutput(path) => {
                writeln!(f, "Input and output are the same file {:?}", path)
            }
        }
    }
}

impl Display for CmdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for CmdErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CropErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<BmpCropErrors> for CmdErrors {
    fn from(value: BmpCropErrors) -> Self {
        CmdErrors::CropErrors(value)
    }
}

impl From<std::io::Error> for CmdErrors {
    fn from(value: std::io::Error) -> Self {
        CmdErrors::CropErrors(BmpCropErrors::from(value))
    }
}
