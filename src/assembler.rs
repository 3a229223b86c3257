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

//! Selection of the fields to output for a decoded [Record].

use crate::Category;
use crate::Record;
use crate::Value;
use crate::schema::schema;
use crate::schema::EVIDENCE;

/// The selected fields of one category, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: Category,
    pub fields: Vec<(&'static str, Option<Value>)>,
}

/// Select the output fields of `record`.
///
/// Compact output keeps only the summary field of the category: `lost` for
/// motifs and `ddG` for the stability categories. Extended output keeps
/// every field, with `evidence` only included if it is known.
///
/// Returns None if every selected field is missing.
///
/// ## Usage
///
/// ```rust
/// use mutfunc::{Category, EnergyPrediction, Record, Value};
/// use mutfunc::assembler::assemble;
///
/// let record = Record::Energy(EnergyPrediction{ dg_wt: Some(1.0), dg_mt: Some(1.5), ddg: Some(0.5), ..Default::default() });
///
/// let compact = assemble(&Category::ModeledStructure, &record, false).unwrap();
/// assert_eq!(compact.fields, vec![("ddG", Some(Value::Float(0.5)))]);
///
/// let extended = assemble(&Category::ModeledStructure, &record, true).unwrap();
/// assert_eq!(extended.fields.len(), 6);
/// ```
///
pub fn assemble(
    category: &Category,
    record: &Record,
    extended: bool,
) -> Option<CategoryResult> {
    let fields: Vec<(&'static str, Option<Value>)> = output_fields(category, extended).into_iter()
        .map(|name| (name, record.value(name)))
        .filter(|(name, value)| *name != EVIDENCE || value.is_some())
        .collect();

    if fields.iter().all(|(_, value)| value.is_none()) {
        return None
    }

    Some(CategoryResult{ category: *category, fields })
}

/// Names of the fields [assemble] can output for `category`.
///
/// Includes `evidence` for [Category::Interaction] in extended output even
/// though it is left out of results where it is missing.
///
pub fn output_fields(
    category: &Category,
    extended: bool,
) -> Vec<&'static str> {
    let layout = schema(category);
    if extended {
        layout.extended_fields.to_vec()
    } else {
        vec![layout.compact_field]
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn output_fields_order() {
        use super::output_fields;
        use crate::Category;

        assert_eq!(output_fields(&Category::Motif, true), vec!["elm", "lost"]);
        assert_eq!(output_fields(&Category::Interaction, true), vec!["evidence", "dG_wt", "dG_mt", "ddG", "dG_wt_sd", "dG_mt_sd", "ddG_sd"]);
        assert_eq!(output_fields(&Category::ExperimentalStructure, true), vec!["dG_wt", "dG_mt", "ddG", "dG_wt_sd", "dG_mt_sd", "ddG_sd"]);
        assert_eq!(output_fields(&Category::Motif, false), vec!["lost"]);
        assert_eq!(output_fields(&Category::Interaction, false), vec!["ddG"]);
    }

    #[test]
    fn assemble_follows_output_fields() {
        use super::{assemble, output_fields};
        use crate::{Category, EnergyPrediction, Evidence, Record};

        let record = Record::Energy(EnergyPrediction{ evidence: Some(Evidence::Exp), ddg: Some(1.0), ..Default::default() });

        for extended in [false, true] {
            let got: Vec<&str> = assemble(&Category::Interaction, &record, extended).unwrap().fields.iter().map(|(name, _)| *name).collect();
            assert_eq!(got, output_fields(&Category::Interaction, extended));
        }
    }

    #[test]
    fn assemble_motif_compact() {
        use super::assemble;
        use crate::{Category, MotifPrediction, Record, Value};

        let record = Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) });

        let got = assemble(&Category::Motif, &record, false).unwrap();

        assert_eq!(got.category, Category::Motif);
        assert_eq!(got.fields, vec![("lost", Some(Value::Int(1)))]);
    }

    #[test]
    fn assemble_motif_extended() {
        use super::assemble;
        use crate::{Category, MotifPrediction, Record, Value};

        let record = Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: None });
        let expected = vec![("elm", Some(Value::Text("ELM000123".to_string()))), ("lost", None)];

        let got = assemble(&Category::Motif, &record, true).unwrap();

        assert_eq!(got.fields, expected);
    }

    #[test]
    fn assemble_interaction_extended_with_evidence() {
        use super::assemble;
        use crate::{Category, EnergyPrediction, Evidence, Record};

        let record = Record::Energy(EnergyPrediction{ evidence: Some(Evidence::Mdd), ddg: Some(0.5), ..Default::default() });

        let got = assemble(&Category::Interaction, &record, true).unwrap();
        let names: Vec<&str> = got.fields.iter().map(|(name, _)| *name).collect();

        assert_eq!(names, vec!["evidence", "dG_wt", "dG_mt", "ddG", "dG_wt_sd", "dG_mt_sd", "ddG_sd"]);
    }

    #[test]
    fn assemble_structure_extended_omits_evidence() {
        use super::assemble;
        use crate::{Category, EnergyPrediction, Record};

        let record = Record::Energy(EnergyPrediction{ dg_wt: Some(-1.0), ..Default::default() });

        let got = assemble(&Category::ExperimentalStructure, &record, true).unwrap();
        let names: Vec<&str> = got.fields.iter().map(|(name, _)| *name).collect();

        assert_eq!(names, vec!["dG_wt", "dG_mt", "ddG", "dG_wt_sd", "dG_mt_sd", "ddG_sd"]);
    }

    #[test]
    fn assemble_compact_missing_summary_is_dropped() {
        use super::assemble;
        use crate::{Category, EnergyPrediction, Record};

        // Only dG_wt is known, so the compact ddG field is missing.
        let record = Record::Energy(EnergyPrediction{ dg_wt: Some(-1.0), ..Default::default() });

        assert!(assemble(&Category::ModeledStructure, &record, false).is_none());
        assert!(assemble(&Category::ModeledStructure, &record, true).is_some());
    }
}
