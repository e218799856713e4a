/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rectangular regions of an image
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// An axis aligned rectangle in image pixel coordinates
///
/// `min` is inclusive and `max` exclusive, the origin is the top left
/// corner of the image with `y` growing downwards, regardless of how the
/// image stores its rows.
///
/// Coordinates are signed so that a region may hang off any edge of an image,
/// croppers clamp it with [`intersect`](Self::intersect) before use.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Region {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64
}

impl Region {
    /// Create a region spanning `(x0, y0)` to `(x1, y1)`
    ///
    /// The coordinates are swapped if needed so that the
    /// minimum is never greater than the maximum.
    ///
    /// ```
    /// use imgcrop_core::region::Region;
    /// let region = Region::new(6, 6, 2, 2);
    /// assert_eq!((region.min_x(), region.min_y()), (2, 2));
    /// assert_eq!((region.width(), region.height()), (4, 4));
    /// ```
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Region {
        Region {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1)
        }
    }

    /// The region covering a whole `width` by `height` image
    pub fn from_dimensions(width: usize, height: usize) -> Region {
        Region::new(0, 0, width as i64, height as i64)
    }

    pub const fn min_x(&self) -> i64 {
        self.min_x
    }
    pub const fn min_y(&self) -> i64 {
        self.min_y
    }
    pub const fn max_x(&self) -> i64 {
        self.max_x
    }
    pub const fn max_y(&self) -> i64 {
        self.max_y
    }

    pub const fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x)
    }

    pub const fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y)
    }

    /// True if the region contains no pixels
    pub const fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Return the largest region contained by both `self` and `other`
    ///
    /// If the two don't overlap the result is the empty region at the origin.
    ///
    /// ```
    /// use imgcrop_core::region::Region;
    /// let image = Region::from_dimensions(8, 8);
    ///
    /// assert_eq!(image.intersect(&Region::new(-4, 6, 2, 12)), Region::new(0, 6, 2, 8));
    /// assert!(image.intersect(&Region::new(8, 0, 10, 4)).is_empty());
    /// ```
    pub fn intersect(&self, other: &Region) -> Region {
        let region = Region {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y)
        };
        if region.is_empty() {
            return Region::default();
        }
        region
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl FromStr for Region {
    type Err = &'static str;

    /// Parse a region written as `x0,y0,x1,y1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = [0_i64; 4];
        let mut parts = s.split(',');

        for coord in coords.iter_mut() {
            let part = parts
                .next()
                .ok_or("Region needs four comma separated coordinates x0,y0,x1,y1")?;

            *coord = part
                .trim()
                .parse()
                .map_err(|_| "Region coordinates must be integers")?;
        }
        if parts.next().is_some() {
            return Err("Region needs four comma separated coordinates x0,y0,x1,y1");
        }
        Ok(Region::new(coords[0], coords[1], coords[2], coords[3]))
    }
}
