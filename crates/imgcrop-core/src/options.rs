/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cropper options
//!
//! This module exposes a struct for which all implemented
//! croppers get shared options
//!
//! All supported options are put into one `CropOptions` to allow for global configurations
//! options i.e the same `CropOptions` can be reused for all croppers

/// Crop options
///
/// Limits are checked against the dimensions declared in an image's header,
/// before any pixel is touched.
///
/// Cropping works in constant memory whatever the image size, so no limit is
/// set by default. Set one to refuse images from untrusted sources early.
#[derive(Debug, Copy, Clone)]
pub struct CropOptions {
    /// Maximum width for which croppers will
    /// not try to process images larger than
    /// the specified width.
    ///
    /// - Default value: `usize::MAX`
    max_width:  usize,
    /// Maximum height for which croppers will not
    /// try to process images larger than the
    /// specified height
    ///
    /// - Default value: `usize::MAX`
    max_height: usize
}

impl CropOptions {
    /// Get maximum width configured for which the cropper
    /// should not try to process images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the cropper should
    /// not try to process images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Set maximum width for which the cropper should not try
    /// processing images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: CropOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the cropper should not try
    /// processing images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: CropOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            max_width:  usize::MAX,
            max_height: usize::MAX
        }
    }
}
