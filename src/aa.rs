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

//! Column index of the 20 canonical amino acids in a prediction matrix.

/// Number of columns in every matrix row.
pub const N_AMINO_ACIDS: usize = 20;

/// One-letter codes in matrix column order.
pub const AMINO_ACIDS: [char; N_AMINO_ACIDS] = [
    'A', 'D', 'C', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
];

/// Column of the substituted amino acid `aa`.
///
/// Accepts upper or lower case. Returns None for anything that is not one of
/// the 20 canonical amino acids, eg. `X`, `*`, or selenocysteine `U`.
///
pub fn aa_index(
    aa: char,
) -> Option<usize> {
    let upper = aa.to_ascii_uppercase();
    AMINO_ACIDS.iter().position(|x| *x == upper)
}
