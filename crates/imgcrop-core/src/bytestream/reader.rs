/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

use log::trace;

use crate::bytestream::{ZByteReaderTrait, ZByteWriterTrait, ZWriter};

pub(crate) mod std_readers;
pub(crate) mod zcursor;

pub use std_readers::ZStreamReader;

/// Size of the scratch buffer used when moving bytes
/// from a source to a sink or into the void.
///
/// This is the only buffer the readers ever use, pixel data
/// flows through it in pieces no larger than this.
const CHUNK_SIZE: usize = 4096;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library.
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    Current(i64)
}

impl ZSeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            ZSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ZSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ZSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors raised by sources and sinks
pub enum ZByteIoError {
    /// An error reported by the underlying std reader or writer
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    /// The source ended early
    ///
    /// requested, read
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    /// The source could not perform the requested seek
    SeekError(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ZByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for ZByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZByteIoError::StdIoError(err) => Some(err),
            ZByteIoError::TryFromIntError(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// A reader over a byte source
///
/// The reader knows how to move forward over a source whether or not
/// it supports random access, seeking when it can and discarding when it
/// can't.
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying source of the bytes
    /// from which we were reading
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Whether skips on this reader are O(1) seeks
    #[inline(always)]
    pub fn is_seekable(&self) -> bool {
        self.inner.is_seekable()
    }

    /// Move `num` bytes forward in the source without looking at them.
    ///
    /// Seekable sources seek relative to the current position, other sources
    /// have the bytes read and thrown away.
    pub fn skip(&mut self, num: usize) -> Result<(), ZByteIoError> {
        // short circuit for zero
        // important since implementations like File will
        // cause a syscall on seek
        if num == 0 {
            return Ok(());
        }
        if self.inner.is_seekable() {
            let offset = i64::try_from(num)?;
            self.inner.z_seek(ZSeekFrom::Current(offset))?;
            return Ok(());
        }
        trace!("Discarding {} bytes from {}", num, self.inner.name());

        let mut scratch = [0_u8; CHUNK_SIZE];
        let mut remaining = num;

        while remaining > 0 {
            let size = remaining.min(CHUNK_SIZE);
            let bytes_read = self.inner.read_bytes(&mut scratch[..size])?;

            if bytes_read == 0 {
                return Err(ZByteIoError::NotEnoughBytes(num, num - remaining));
            }
            remaining -= bytes_read;
        }
        Ok(())
    }

    /// Copy exactly `num` bytes from the source into `sink`
    ///
    /// Bytes pass through a fixed size scratch buffer, so this never allocates.
    pub fn copy_to<W: ZByteWriterTrait>(
        &mut self, num: usize, sink: &mut ZWriter<W>
    ) -> Result<(), ZByteIoError> {
        let mut scratch = [0_u8; CHUNK_SIZE];
        let mut remaining = num;

        while remaining > 0 {
            let size = remaining.min(CHUNK_SIZE);
            let bytes_read = self.inner.read_bytes(&mut scratch[..size])?;

            if bytes_read == 0 {
                return Err(ZByteIoError::NotEnoughBytes(num, num - remaining));
            }
            sink.write_all(&scratch[..bytes_read])?;
            remaining -= bytes_read;
        }
        Ok(())
    }

    /// Go back to the first byte of the source
    ///
    /// Fails for sources that cannot seek.
    pub fn rewind_to_start(&mut self) -> Result<(), ZByteIoError> {
        if !self.inner.is_seekable() {
            return Err(ZByteIoError::SeekError(
                "Cannot rewind a source that does not support seeking"
            ));
        }
        self.inner.z_seek(ZSeekFrom::Start(0))?;
        Ok(())
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ZByteIoError> {
        self.inner.z_position()
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        self.inner.read_bytes(buf)
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }
}
