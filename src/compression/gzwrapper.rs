// mutfunc: Decoding and formatting mutfunc variant effect prediction matrices.
//
// Copyright 2025 Tommi Mäklin [tommi@maklin.fi].
//
// Copyrights in this project are retained by contributors. No copyright assignment
// is required to contribute to this project.
//
// Except as otherwise noted (below and/or in individual files), this
// project is licensed under the Apache License, Version 2.0
// <LICENSE-APACHE> or <http://www.apache.org/licenses/LICENSE-2.0> or
// the MIT license, <LICENSE-MIT> or <http://opensource.org/licenses/MIT>,
// at your option.
//
use std::io::Write;

use flate2::write::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone)]
pub struct EmptyStreamError;

impl std::fmt::Display for EmptyStreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "empty gzip stream")
    }
}

impl std::error::Error for EmptyStreamError {}

/// Gzip compress `bytes`.
pub fn deflate_bytes(
    bytes: &[u8],
) -> Result<Vec<u8>, E> {
    let mut deflated: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut encoder = GzEncoder::new(&mut deflated, Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()?;
    Ok(deflated)
}

/// Decompress a gzip stream.
///
/// Returns an error if `deflated` is empty, does not start with a gzip
/// header, or the stream is otherwise invalid.
///
pub fn inflate_bytes(
    deflated: &[u8],
) -> Result<Vec<u8>, E> {
    if deflated.is_empty() {
        return Err(Box::new(EmptyStreamError{}))
    }
    let mut inflated: Vec<u8> = Vec::new();
    let mut decoder = GzDecoder::new(&mut inflated);
    decoder.write_all(deflated)?;
    decoder.finish()?;
    Ok(inflated)
}
