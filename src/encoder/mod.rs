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

//! Encoder for building compressed prediction matrices.
//!
//! [MatrixEncoder] holds an uncompressed matrix for one category where every
//! cell starts out empty. Predictions are written in with
//! [insert](MatrixEncoder::insert) or [extend](MatrixEncoder::extend) and
//! [finish](MatrixEncoder::finish) returns the gzip-compressed blob.
//!
//! ## Usage
//!
//! ```rust
//! use mutfunc::{Category, MotifPrediction, Record};
//! use mutfunc::decoder::{decode_cell, decompress};
//! use mutfunc::encoder::{Cell, MatrixEncoder};
//!
//! let cells = vec![
//!     Cell{ position: 1, aa: 'P', record: Record::Motif(MotifPrediction{ elm: Some("ELM000012".to_string()), lost: Some(1) }) },
//!     Cell{ position: 2, aa: 'A', record: Record::Motif(MotifPrediction{ elm: Some("ELM000012".to_string()), lost: Some(0) }) },
//! ];
//!
//! let mut encoder = MatrixEncoder::new(Category::Motif, 2).unwrap();
//! encoder.extend(cells.into_iter()).unwrap();
//! let blob = encoder.finish().unwrap();
//!
//! let matrix = decompress(&blob).unwrap();
//! let got = decode_cell(&matrix, &Category::Motif, 1, 'A').unwrap();
//!
//! assert_eq!(got, Record::Motif(MotifPrediction{ elm: Some("ELM000012".to_string()), lost: Some(0) }));
//! ```
//!

pub mod record;

use crate::Category;
use crate::Record;
use crate::aa::aa_index;
use crate::aa::N_AMINO_ACIDS;
use crate::compression::gzwrapper::deflate_bytes;
use crate::decoder::cell_offset;

use record::empty_record;
use record::encode_record;

type E = Box<dyn std::error::Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Position is 0 or past the last row of the matrix.
    PositionOutOfRange { position: usize, n_positions: usize },
    /// Not one of the 20 canonical amino acids.
    NonCanonicalAminoAcid(char),
    /// Value does not fit in its fixed-width field.
    ValueTooWide(String),
    /// Value collides with a missing value sentinel.
    ReservedValue(String),
    /// Record type cannot be stored in a matrix of this category.
    RecordMismatch(Category),
    /// A matrix with this many positions cannot be allocated.
    MatrixTooLarge(usize),
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EncodeError::PositionOutOfRange { position, n_positions } => write!(f, "position {} is outside 1..={}", position, n_positions),
            EncodeError::NonCanonicalAminoAcid(aa) => write!(f, "'{}' is not a canonical amino acid", aa),
            EncodeError::ValueTooWide(value) => write!(f, "value '{}' does not fit in its field", value),
            EncodeError::ReservedValue(value) => write!(f, "value '{}' is reserved for missing data", value),
            EncodeError::RecordMismatch(category) => write!(f, "record cannot be stored in a {} matrix", category),
            EncodeError::MatrixTooLarge(n_positions) => write!(f, "cannot allocate a matrix with {} positions", n_positions),
        }
    }
}

impl std::error::Error for EncodeError {}

/// A prediction at a one-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub position: usize,
    pub aa: char,
    pub record: Record,
}

pub struct MatrixEncoder {
    category: Category,
    n_positions: usize,
    matrix: Vec<u8>,
}

impl MatrixEncoder {
    /// Matrix with `n_positions` rows of empty cells.
    ///
    /// Terminates with [EncodeError::MatrixTooLarge] if the matrix size
    /// overflows usize or the allocation fails.
    ///
    pub fn new(
        category: Category,
        n_positions: usize,
    ) -> Result<Self, E> {
        let empty = empty_record(&category);
        let n_cells = n_positions.checked_mul(N_AMINO_ACIDS).ok_or(EncodeError::MatrixTooLarge(n_positions))?;
        let n_bytes = n_cells.checked_mul(empty.len()).ok_or(EncodeError::MatrixTooLarge(n_positions))?;

        let mut matrix: Vec<u8> = Vec::new();
        matrix.try_reserve_exact(n_bytes).map_err(|_| EncodeError::MatrixTooLarge(n_positions))?;
        (0..n_cells).for_each(|_| matrix.extend_from_slice(&empty));

        Ok(MatrixEncoder{ category, n_positions, matrix })
    }

    /// Uncompressed matrix contents.
    pub fn matrix(&self) -> &[u8] {
        &self.matrix
    }

    /// Write `record` at the one-based `position` and amino acid `aa`.
    ///
    /// Overwrites any earlier record at the same cell.
    ///
    pub fn insert(
        &mut self,
        position: usize,
        aa: char,
        record: &Record,
    ) -> Result<(), E> {
        if position == 0 || position > self.n_positions {
            return Err(Box::new(EncodeError::PositionOutOfRange{ position, n_positions: self.n_positions }))
        }
        let column = aa_index(aa).ok_or(EncodeError::NonCanonicalAminoAcid(aa))?;

        let bytes = encode_record(&self.category, record)?;
        let record_width = self.category.record_width();
        let start = cell_offset(record_width, position - 1, column).ok_or(EncodeError::PositionOutOfRange{ position, n_positions: self.n_positions })?;
        self.matrix[start..(start + record_width)].copy_from_slice(&bytes);

        Ok(())
    }

    /// Write every cell from `cells`.
    pub fn extend<I: Iterator<Item=Cell>>(
        &mut self,
        cells: I,
    ) -> Result<(), E> {
        for cell in cells {
            self.insert(cell.position, cell.aa, &cell.record)?;
        }
        Ok(())
    }

    /// Compress the matrix.
    pub fn finish(
        self,
    ) -> Result<Vec<u8>, E> {
        deflate_bytes(&self.matrix)
    }
}
