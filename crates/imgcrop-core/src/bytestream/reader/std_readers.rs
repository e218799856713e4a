/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek};

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};
use crate::bytestream::ZByteReaderTrait;

/// Fill `buf` from `reader`, reporting a short read as
/// [`ZByteIoError::NotEnoughBytes`] instead of an opaque `UnexpectedEof`
fn read_exact_from<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), ZByteIoError> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(ZByteIoError::NotEnoughBytes(buf.len(), filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ZByteIoError::StdIoError(e))
        }
    }
    Ok(())
}

fn read_from<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ZByteIoError::StdIoError(e))
        }
    }
}

impl<T> ZByteReaderTrait for std::io::Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        read_exact_from(self, buf)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        read_from(self, buf)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position())
    }

    fn name(&self) -> &'static str {
        "Cursor<T>"
    }
}

impl<T: Read + Seek> ZByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        read_exact_from(self, buf)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        read_from(self, buf)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        match from {
            // keeps the buffered bytes when the target is still inside the buffer
            ZSeekFrom::Current(offset) => {
                self.seek_relative(offset)?;
                self.stream_position().map_err(ZByteIoError::from)
            }
            _ => self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
        }
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        self.stream_position().map_err(ZByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "BufReader<T>"
    }
}

impl ZByteReaderTrait for File {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        read_exact_from(self, buf)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        read_from(self, buf)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        self.stream_position().map_err(ZByteIoError::from)
    }

    fn name(&self) -> &'static str {
        "File"
    }
}

/// A forward only source
///
/// Wraps any [`Read`] implementation, e.g. a pipe, a socket or a
/// decompressor, which can only hand out bytes in order.
///
/// Skipping bytes on such a source means reading and dropping them,
/// see [`ZReader::skip`](crate::bytestream::ZReader::skip).
///
/// It can also be used to force streaming behaviour on a source that
/// could otherwise seek.
pub struct ZStreamReader<R: Read> {
    inner:    R,
    position: u64
}

impl<R: Read> ZStreamReader<R> {
    pub fn new(inner: R) -> ZStreamReader<R> {
        ZStreamReader { inner, position: 0 }
    }

    /// Return the wrapped reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ZByteReaderTrait for ZStreamReader<R> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        match read_exact_from(&mut self.inner, buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(ZByteIoError::NotEnoughBytes(expected, found)) => {
                self.position += found as u64;
                Err(ZByteIoError::NotEnoughBytes(expected, found))
            }
            Err(e) => Err(e)
        }
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let bytes_read = read_from(&mut self.inner, buf)?;
        self.position += bytes_read as u64;
        Ok(bytes_read)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        match from {
            ZSeekFrom::Current(0) => Ok(self.position),
            ZSeekFrom::Start(pos) if pos == self.position => Ok(self.position),
            _ => Err(ZByteIoError::SeekError("Source is forward only and cannot seek"))
        }
    }

    fn is_seekable(&self) -> bool {
        false
    }

    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position)
    }

    fn name(&self) -> &'static str {
        "ZStreamReader<R>"
    }
}
