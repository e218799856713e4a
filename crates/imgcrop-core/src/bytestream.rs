/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte sources and sinks
//!
//! Croppers never hold a whole image in memory, they pull bytes from a
//! [`ZByteReaderTrait`] source and push bytes into a [`ZByteWriterTrait`] sink.
//!
//! Sources come in two flavours
//! - seekable: [`ZCursor`], [`std::io::Cursor`], [`std::io::BufReader`] over a seekable reader and [`std::fs::File`]
//! - forward only: [`ZStreamReader`], which wraps any [`std::io::Read`]
//!
//! Skipping over bytes is O(1) for the former and a bounded read-and-discard for the latter,
//! [`ZReader::skip`] picks the right strategy.
pub use reader::zcursor::ZCursor;
pub use reader::{ZByteIoError, ZReader, ZSeekFrom, ZStreamReader};
pub use traits::{ZByteReaderTrait, ZByteWriterTrait};
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
