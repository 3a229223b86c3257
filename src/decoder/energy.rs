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

use crate::EnergyPrediction;
use crate::decoder::fields::FieldReader;
use crate::schema::FieldKind;
use crate::schema::Schema;

/// Decode an interaction or structure stability record laid out as `layout`.
///
/// Interaction records start with the evidence code as a little-endian
/// u16. Both layouts then store `dG_wt`, `ddG`, `dG_wt_sd`, `dG_mt_sd` and
/// `ddG_sd` as 8-byte ASCII decimals.
///
/// `dg_mt` is left as None.
///
pub fn read_energy(
    layout: &Schema,
    bytes: &[u8],
) -> EnergyPrediction {
    let mut energy = EnergyPrediction::default();
    let mut reader = FieldReader::new(bytes);

    for field in layout.fields {
        match field.kind {
            FieldKind::Evidence => energy.evidence = reader.next_evidence(),
            FieldKind::Decimal => {
                let value = reader.next_decimal();
                if let Some(slot) = energy.decimal_mut(field.name) {
                    *slot = value;
                }
            },
            _ => {
                reader.next_field(field.kind);
            },
        }
    }

    energy
}
