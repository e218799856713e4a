/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// An in memory, seekable source
///
/// Positions past the end are allowed, reads from there return no bytes.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }

    /// Return the wrapped buffer
    pub fn into_inner(self) -> T {
        self.stream
    }

    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let bytes_read = self.read_bytes(buf)?;
        if bytes_read != buf.len() {
            // not all bytes were read.
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), bytes_read));
        }
        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let len = self.len();
        let start = core::cmp::min(self.position, len);
        let end = core::cmp::min(self.position.saturating_add(buf.len()), len);

        let slice = &self.stream.as_ref()[start..end];
        buf[..slice.len()].copy_from_slice(slice);

        self.position = self.position.saturating_add(end - start);

        Ok(end - start)
    }

    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => usize::try_from(position)?,
            ZSeekFrom::End(position) => {
                let end = i64::try_from(self.len())?;
                let target = end
                    .checked_add(position)
                    .ok_or(ZByteIoError::SeekError("Seek position overflows"))?;
                usize::try_from(target)?
            }
            ZSeekFrom::Current(position) => {
                let current_position = i64::try_from(self.position)?;
                let target = current_position
                    .checked_add(position)
                    .ok_or(ZByteIoError::SeekError("Seek position overflows"))?;
                usize::try_from(target)?
            }
        };
        self.position = new_position;

        Ok(self.position as u64)
    }

    fn is_seekable(&self) -> bool {
        true
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }

    fn name(&self) -> &'static str {
        "ZCursor<T>"
    }
}
