/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for reading and writing images in imgcrop
//!
//!
//! This exposes the traits and implementations for readers
//! and writers used by the croppers.

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};

/// The de-facto Input trait implemented for readers.
///
/// This provides the basic functions needed for heap free streaming
/// I/O for the croppers with easy support for extending it
/// to multiple implementations.
///
/// # Considerations
///
/// A source may or may not support random access, [`is_seekable`](Self::is_seekable)
/// reports which. Callers must not rely on [`z_seek`](Self::z_seek) for sources that
/// report `false`, such sources only accept a zero-length relative seek.
///
/// If you have an in memory buffer, prefer [`ZCursor`](crate::bytestream::ZCursor) over [`Cursor`](std::io::Cursor).
pub trait ZByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    ///  ## Errors
    ///  - [`ZByteIoError::NotEnoughBytes`] if the source ran dry before `buf` was filled.
    ///    The contents of `buf` are unspecified in that case
    ///  - Any other error from the underlying source
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError>;

    /// Read bytes into `buf` returning how many bytes you have read or an error if one occurred
    ///
    /// This doesn't guarantee that buf will be filled with bytes for such a guarantee see
    /// [`read_exact_bytes`](Self::read_exact_bytes)
    ///
    /// ## Returns
    ///  - `Ok(0)` - End of input (or an empty `buf`)
    ///  - `Ok(usize)` - Actual bytes read into the buffer
    ///  - `Err()` - The error encountered when reading bytes for which we couldn't recover
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError>;

    /// Seek into a new position from the buffer
    ///
    /// This is similar to the [seek](std::io::Seek::seek) function in the [Seek](std::io::Seek) trait
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError>;

    /// Whether [`z_seek`](Self::z_seek) moves the position without transferring data
    fn is_seekable(&self) -> bool;

    /// Return the current position of the inner cursor.
    ///
    /// This can be used to check the advancement of the cursor
    fn z_position(&mut self) -> Result<u64, ZByteIoError>;

    /// A human readable name of the source, used in log messages
    fn name(&self) -> &'static str;
}

impl<T: ZByteReaderTrait + ?Sized> ZByteReaderTrait for &mut T {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        (**self).read_exact_bytes(buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        (**self).read_bytes(buf)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        (**self).z_seek(from)
    }

    #[inline(always)]
    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        (**self).z_position()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The writer trait implemented for sinks receiving cropped images
///
/// Anything that implements [`std::io::Write`] can be used as a sink
pub trait ZByteWriterTrait {
    /// Write some bytes into the sink returning number of bytes written or
    /// an error if something bad happened
    ///
    /// An implementation is free to write less bytes that are in buf, so the bytes written
    /// cannot be guaranteed to be fully written
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ZByteIoError>;
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
}

impl<W: std::io::Write> ZByteWriterTrait for W {
    #[inline(always)]
    fn write_bytes(&mut self, buf: &[u8]) -> Result<usize, ZByteIoError> {
        self.write(buf).map_err(ZByteIoError::StdIoError)
    }

    #[inline(always)]
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.write_all(buf).map_err(ZByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        self.flush().map_err(ZByteIoError::StdIoError)
    }
}
