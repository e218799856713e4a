/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all croppers
//!
//! This crate provides a set of core routines shared
//! by the streaming croppers under the `imgcrop` umbrella
//!
//! It currently contains
//!
//! - A byte source abstraction that may or may not support seeking,
//!   with a reader that skips by seeking when it can and by discarding
//!   bytes when it can't
//! - A byte sink abstraction with a writer that counts what it wrote
//! - A rectangle type describing the region to crop
//! - Options shared by croppers
//! - The [`Cropper`](crate::cropper::Cropper) capability implemented by format backends
pub mod bytestream;
pub mod cropper;
pub mod options;
pub mod region;
