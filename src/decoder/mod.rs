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

//! Decoder for compressed prediction matrices.
//!
//! Decoding a single substitution happens in three steps:
//!
//!   1. [decompress] inflates the compressed blob into a flat buffer.
//!   2. [extract] finds the bytes of the cell for a position and amino acid.
//!   3. [parse_record] decodes the cell into a [Record].
//!
//! [decode_cell] runs steps 2 and 3 and discards records where every field
//! is missing.
//!
//! None of the steps hold any state, so independent blobs can be decoded
//! concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use mutfunc::{Category, EnergyPrediction, Record};
//! use mutfunc::decoder::{decompress, extract, parse_record};
//! use mutfunc::encoder::MatrixEncoder;
//!
//! let mut encoder = MatrixEncoder::new(Category::ModeledStructure, 3).unwrap();
//! let record = Record::Energy(EnergyPrediction{ dg_wt: Some(-2.5), ddg: Some(1.5), ..Default::default() });
//! encoder.insert(2, 'W', &record).unwrap();
//! let blob = encoder.finish().unwrap();
//!
//! let matrix = decompress(&blob).unwrap();
//! assert_eq!(matrix.len(), 3 * 20 * 40);
//!
//! // Position 2 is the second row
//! let cell = extract(&matrix, &Category::ModeledStructure, 1, 'W').unwrap();
//! let got = parse_record(&Category::ModeledStructure, cell).unwrap();
//!
//! let expected = Record::Energy(EnergyPrediction{ dg_wt: Some(-2.5), dg_mt: Some(-1.0), ddg: Some(1.5), ..Default::default() });
//! assert_eq!(got, expected);
//!
//! // Reading past the last row returns None
//! assert!(extract(&matrix, &Category::ModeledStructure, 3, 'W').is_none());
//! ```
//!

pub mod energy;
pub mod fields;
pub mod motif;

use crate::Category;
use crate::Record;
use crate::aa::aa_index;
use crate::aa::N_AMINO_ACIDS;
use crate::compression::gzwrapper::inflate_bytes;

use crate::schema::schema;

use energy::read_energy;
use motif::read_motif;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The blob is not a valid gzip stream.
    CorruptBlob(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DecodeError::CorruptBlob(message) => write!(f, "corrupt matrix blob: {}", message),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Inflate a compressed matrix.
///
/// Returns [DecodeError::CorruptBlob] if `blob` is not a valid gzip stream.
///
pub fn decompress(
    blob: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    inflate_bytes(blob).map_err(|e| DecodeError::CorruptBlob(e.to_string()))
}

/// Byte offset of the cell at `position0` and amino-acid `column`.
///
/// Returns None if the offset does not fit in usize.
///
pub fn cell_offset(
    record_width: usize,
    position0: usize,
    column: usize,
) -> Option<usize> {
    let row = position0.checked_mul(N_AMINO_ACIDS)?.checked_mul(record_width)?;
    row.checked_add(column.checked_mul(record_width)?)
}

/// Bytes of the cell for the zero-based `position0` and substituted amino acid `aa`.
///
/// Returns None without computing an offset if `aa` is not one of the 20
/// canonical amino acids, and None if the cell would extend past the end
/// of `matrix`.
///
pub fn extract<'a>(
    matrix: &'a [u8],
    category: &Category,
    position0: usize,
    aa: char,
) -> Option<&'a [u8]> {
    let column = aa_index(aa)?;
    let record_width = category.record_width();

    let start = cell_offset(record_width, position0, column)?;
    let end = start.checked_add(record_width)?;
    if end > matrix.len() {
        log::trace!("{} cell {}:{} is outside the matrix of {} bytes", category, position0, aa, matrix.len());
        return None
    }

    Some(&matrix[start..end])
}

/// Decode the bytes of a single cell.
///
/// Missing values are stored with sentinels and decode to None. `dG_mt` is
/// derived from `dG_wt` and `ddG` for the stability categories.
///
/// Returns None if `bytes` is not exactly one record long.
///
pub fn parse_record(
    category: &Category,
    bytes: &[u8],
) -> Option<Record> {
    if bytes.len() != category.record_width() {
        return None
    }

    let record = match category {
        Category::Motif => Record::Motif(read_motif(bytes)),
        Category::Interaction | Category::ModeledStructure | Category::ExperimentalStructure => {
            let mut energy = read_energy(schema(category), bytes);
            energy.derive_dg_mt();
            Record::Energy(energy)
        },
    };

    Some(record)
}

/// Extract and decode the prediction for a substitution.
///
/// Returns None if there is no cell for the substitution or if every field
/// in the cell is missing.
///
pub fn decode_cell(
    matrix: &[u8],
    category: &Category,
    position0: usize,
    aa: char,
) -> Option<Record> {
    let row_width = N_AMINO_ACIDS * category.record_width();
    if matrix.len() % row_width != 0 {
        log::debug!("{} matrix of {} bytes is not a whole number of rows", category, matrix.len());
    }

    let bytes = extract(matrix, category, position0, aa)?;
    let record = parse_record(category, bytes)?;

    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}
