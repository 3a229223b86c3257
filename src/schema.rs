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

//! Fixed-width record layouts for each [Category].
//!
//! Every cell in a prediction matrix is a record of a fixed width that
//! depends only on the category. The fields are stored back to back in the
//! order given by [Schema::fields]:
//!
//! | Category              | Width | Fields                                                 |
//! |-----------------------|-------|--------------------------------------------------------|
//! | Motif                 | 26    | elm (24, text), lost (2, u16)                          |
//! | Interaction           | 42    | evidence (2, u16), dG_wt, ddG, dG_wt_sd, dG_mt_sd, ddG_sd (8 each, decimal) |
//! | ModeledStructure      | 40    | dG_wt, ddG, dG_wt_sd, dG_mt_sd, ddG_sd (8 each, decimal) |
//! | ExperimentalStructure | 40    | dG_wt, ddG, dG_wt_sd, dG_mt_sd, ddG_sd (8 each, decimal) |
//!
//! Decimal fields are ASCII text, u16 fields are little-endian. Each field
//! kind has a sentinel that marks a missing value, see [FieldKind].
//!
//! `dG_mt` is not stored; it is derived from `dG_wt` and `ddG` when decoding.
//!

use crate::Category;

pub const ELM: &str = "elm";
pub const LOST: &str = "lost";
pub const EVIDENCE: &str = "evidence";
pub const DG_WT: &str = "dG_wt";
pub const DG_MT: &str = "dG_mt";
pub const DDG: &str = "ddG";
pub const DG_WT_SD: &str = "dG_wt_sd";
pub const DG_MT_SD: &str = "dG_mt_sd";
pub const DDG_SD: &str = "ddG_sd";

/// Width of the ASCII text field holding the ELM identifier.
pub const TEXT_WIDTH: usize = 24;
/// Width of an ASCII decimal field.
pub const DECIMAL_WIDTH: usize = 8;
/// Width of a little-endian u16 field.
pub const U16_WIDTH: usize = 2;

pub const TEXT_SENTINEL: &str = "undefined";
pub const DECIMAL_SENTINEL: &[u8; DECIMAL_WIDTH] = b"10000000";
pub const U16_SENTINEL: u16 = 0xFFFF;

/// Encoding of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Space padded ASCII text, missing if equal to [TEXT_SENTINEL].
    Text,
    /// 0/1 flag stored as u16, missing if [U16_SENTINEL].
    Flag,
    /// Evidence code stored as u16, missing if [U16_SENTINEL].
    Evidence,
    /// ASCII decimal, missing if the raw bytes equal [DECIMAL_SENTINEL].
    Decimal,
}

impl FieldKind {
    pub fn width(&self) -> usize {
        match self {
            FieldKind::Text => TEXT_WIDTH,
            FieldKind::Flag => U16_WIDTH,
            FieldKind::Evidence => U16_WIDTH,
            FieldKind::Decimal => DECIMAL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Record layout of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Bytes per matrix cell.
    pub record_width: usize,
    /// Stored fields in storage order.
    pub fields: &'static [FieldSpec],
    /// The field shown in compact output.
    pub compact_field: &'static str,
    /// Fields shown in extended output, including derived ones, in output order.
    pub extended_fields: &'static [&'static str],
}

const ENERGY_FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: DG_WT, kind: FieldKind::Decimal },
    FieldSpec { name: DDG, kind: FieldKind::Decimal },
    FieldSpec { name: DG_WT_SD, kind: FieldKind::Decimal },
    FieldSpec { name: DG_MT_SD, kind: FieldKind::Decimal },
    FieldSpec { name: DDG_SD, kind: FieldKind::Decimal },
];

const INTERACTION_FIELDS: [FieldSpec; 6] = [
    FieldSpec { name: EVIDENCE, kind: FieldKind::Evidence },
    ENERGY_FIELDS[0],
    ENERGY_FIELDS[1],
    ENERGY_FIELDS[2],
    ENERGY_FIELDS[3],
    ENERGY_FIELDS[4],
];

const MOTIF_FIELDS: [FieldSpec; 2] = [
    FieldSpec { name: ELM, kind: FieldKind::Text },
    FieldSpec { name: LOST, kind: FieldKind::Flag },
];

const MOTIF_OUTPUT: [&str; 2] = [ELM, LOST];
const INTERACTION_OUTPUT: [&str; 7] = [EVIDENCE, DG_WT, DG_MT, DDG, DG_WT_SD, DG_MT_SD, DDG_SD];
const ENERGY_OUTPUT: [&str; 6] = [DG_WT, DG_MT, DDG, DG_WT_SD, DG_MT_SD, DDG_SD];

pub static MOTIF: Schema = Schema { record_width: 26, fields: &MOTIF_FIELDS, compact_field: LOST, extended_fields: &MOTIF_OUTPUT };
pub static INTERACTION: Schema = Schema { record_width: 42, fields: &INTERACTION_FIELDS, compact_field: DDG, extended_fields: &INTERACTION_OUTPUT };
pub static MODELED_STRUCTURE: Schema = Schema { record_width: 40, fields: &ENERGY_FIELDS, compact_field: DDG, extended_fields: &ENERGY_OUTPUT };
pub static EXPERIMENTAL_STRUCTURE: Schema = Schema { record_width: 40, fields: &ENERGY_FIELDS, compact_field: DDG, extended_fields: &ENERGY_OUTPUT };

/// Layout of records in `category`.
pub fn schema(
    category: &Category,
) -> &'static Schema {
    match category {
        Category::Motif => &MOTIF,
        Category::Interaction => &INTERACTION,
        Category::ModeledStructure => &MODELED_STRUCTURE,
        Category::ExperimentalStructure => &EXPERIMENTAL_STRUCTURE,
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn record_width_is_sum_of_fields() {
        use super::schema;
        use crate::Category;

        for category in Category::all() {
            let layout = schema(&category);
            let sum: usize = layout.fields.iter().map(|field| field.kind.width()).sum();
            assert_eq!(sum, layout.record_width);
        }
    }

    #[test]
    fn record_widths() {
        use super::schema;
        use crate::Category;

        assert_eq!(schema(&Category::Motif).record_width, 26);
        assert_eq!(schema(&Category::Interaction).record_width, 42);
        assert_eq!(schema(&Category::ModeledStructure).record_width, 40);
        assert_eq!(schema(&Category::ExperimentalStructure).record_width, 40);
    }

    #[test]
    fn extended_fields_cover_stored_fields() {
        use super::schema;
        use crate::Category;

        for category in Category::all() {
            let layout = schema(&category);
            assert!(layout.extended_fields.contains(&layout.compact_field));
            for field in layout.fields {
                assert!(layout.extended_fields.contains(&field.name));
            }
        }
    }

    #[test]
    fn interaction_field_order() {
        use super::schema;
        use crate::Category;

        let got: Vec<&str> = schema(&Category::Interaction).fields.iter().map(|field| field.name).collect();
        let expected = vec!["evidence", "dG_wt", "ddG", "dG_wt_sd", "dG_mt_sd", "ddG_sd"];

        assert_eq!(got, expected);
    }
}
