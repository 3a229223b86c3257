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

//! mutfunc is a library and a command-line client for:
//!
//!   - Decoding precomputed [mutfunc](http://www.mutfunc.com) predictions
//!     for single amino-acid substitutions from compressed matrices.
//!   - Formatting the predictions for variant annotation output, either as
//!     nested structured data or as flat delimited strings.
//!   - Packing plain text predictions into compressed matrices.
//!
//! The following prediction categories are supported:
//!   - `motif`: loss of a linear motif (ELM) at the substituted position.
//!   - `int`: change in protein-protein interface stability.
//!   - `mod`: change in stability of a modelled structure.
//!   - `exp`: change in stability of an experimental structure.
//!
//! ## Usage
//!
//! ### Command line
//!
//! The mutfunc CLI supports the following subcommands:
//!   - `mutfunc annotate` look up the predictions for a substitution.
//!   - `mutfunc pack` compress plain text predictions into a matrix.
//!   - `mutfunc describe` print descriptions of the output fields.
//!
//! ### Rust API
//!
//! [decode_query] runs the whole pipeline on blobs that have already been
//! fetched, and [annotate_matrices] on matrices that were already
//! decompressed. The steps are also available separately:
//!
//!   - [decompress](decoder::decompress): inflates a compressed blob.
//!   - [extract](decoder::extract): returns the bytes of a single matrix cell.
//!   - [parse_record](decoder::parse_record): decodes a cell into a [Record].
//!   - [assemble](assembler::assemble): selects the fields to output.
//!   - [format](printer::format): renders the selected fields.
//!
//! [Mutfunc](plugin::Mutfunc) wraps the pipeline behind the
//! [Plugin](plugin::Plugin) interface used by variant annotation hosts, and
//! fetches the blobs from a [BlobStore](store::BlobStore).
//!
//! ## Matrix format
//!
//! A matrix holds the predictions of one category for every position of one
//! peptide. After gzip decompression the matrix is a flat buffer of
//! fixed-width records with one row per sequence position and one column per
//! canonical amino acid (see [aa]). The record for the zero-based position
//! `pos` and amino-acid column `col` starts at
//!
//! ```text
//! pos * 20 * record_width + col * record_width
//! ```
//!
//! The record layouts are documented in [schema].
//!

use crate::decoder::decode_cell;
use crate::decoder::decompress;
use crate::printer::Rendered;

use std::fmt;

use serde::Serialize;

pub mod aa;
pub mod assembler;
pub mod compression;
pub mod decoder;
pub mod encoder;
pub mod parser;
pub mod plugin;
pub mod printer;
pub mod schema;
pub mod store;

/// Prediction categories.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Linear motif disruption.
    Motif,
    /// Protein-protein interface stability.
    Interaction,
    /// Stability of a modelled structure.
    ModeledStructure,
    /// Stability of an experimental structure.
    ExperimentalStructure,
}

impl Category {
    /// All categories in output order.
    pub fn all() -> [Category; 4] {
        [
            Category::Motif,
            Category::Interaction,
            Category::ModeledStructure,
            Category::ExperimentalStructure,
        ]
    }

    /// Short key used in structured output, store paths and parameters.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Motif => "motif",
            Category::Interaction => "int",
            Category::ModeledStructure => "mod",
            Category::ExperimentalStructure => "exp",
        }
    }

    /// Key used in flat text output.
    pub fn output_key(&self) -> &'static str {
        match self {
            Category::Motif => "mutfunc_motif",
            Category::Interaction => "mutfunc_int",
            Category::ModeledStructure => "mutfunc_mod",
            Category::ExperimentalStructure => "mutfunc_exp",
        }
    }

    pub fn record_width(&self) -> usize {
        schema::schema(self).record_width
    }

    /// Human readable description used in output headers.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Motif => "mutfunc linear motif disruption",
            Category::Interaction => "mutfunc protein interaction stability",
            Category::ModeledStructure => "mutfunc modelled structure stability",
            Category::ExperimentalStructure => "mutfunc experimental structure stability",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motif" => Ok(Category::Motif),
            "int" => Ok(Category::Interaction),
            "mod" => Ok(Category::ModeledStructure),
            "exp" => Ok(Category::ExperimentalStructure),
            _ => Err(format!("'{}' is not a valid Category", s)),
        }
    }
}

/// Source of an interaction prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Experimental structure.
    Exp,
    /// Domain-domain model.
    Mdd,
    /// Homology model.
    Mdl,
}

impl Evidence {
    pub fn from_u16(val: u16) -> Option<Self> {
        match val {
            0 => Some(Evidence::Exp),
            1 => Some(Evidence::Mdd),
            2 => Some(Evidence::Mdl),
            _ => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            Evidence::Exp => 0,
            Evidence::Mdd => 1,
            Evidence::Mdl => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Evidence::Exp => "EXP",
            Evidence::Mdd => "MDD",
            Evidence::Mdl => "MDL",
        }
    }
}

impl std::str::FromStr for Evidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXP" | "0" => Ok(Evidence::Exp),
            "MDD" | "1" => Ok(Evidence::Mdd),
            "MDL" | "2" => Ok(Evidence::Mdl),
            _ => Err(format!("'{}' is not a valid Evidence", s)),
        }
    }
}

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(x) => write!(f, "{}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(x) => write!(f, "{}", x),
        }
    }
}

/// A decoded motif record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotifPrediction {
    /// Identifier of the affected ELM motif.
    pub elm: Option<String>,
    /// 1 if the substitution disrupts the motif, 0 otherwise.
    pub lost: Option<u16>,
}

/// A decoded interaction or structure stability record.
///
/// `evidence` is only stored for [Category::Interaction]. `dg_mt` is never
/// stored, it is filled in by the decoder from `dg_wt` and `ddg`.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyPrediction {
    pub evidence: Option<Evidence>,
    pub dg_wt: Option<f64>,
    pub dg_mt: Option<f64>,
    pub ddg: Option<f64>,
    pub dg_wt_sd: Option<f64>,
    pub dg_mt_sd: Option<f64>,
    pub ddg_sd: Option<f64>,
}

impl EnergyPrediction {
    /// Sets `dg_mt` to `dg_wt + ddg`, or None if either is missing.
    ///
    /// The sum is rounded to the number of decimals of the more precise
    /// operand.
    ///
    pub fn derive_dg_mt(&mut self) {
        self.dg_mt = match (self.dg_wt, self.ddg) {
            (Some(dg_wt), Some(ddg)) => {
                let scale = 10_f64.powi(n_decimals(dg_wt).max(n_decimals(ddg)));
                Some(((dg_wt + ddg) * scale).round() / scale)
            },
            _ => None,
        };
    }

    /// Value of the decimal field `name`.
    pub fn decimal(&self, name: &str) -> Option<f64> {
        match name {
            schema::DG_WT => self.dg_wt,
            schema::DG_MT => self.dg_mt,
            schema::DDG => self.ddg,
            schema::DG_WT_SD => self.dg_wt_sd,
            schema::DG_MT_SD => self.dg_mt_sd,
            schema::DDG_SD => self.ddg_sd,
            _ => None,
        }
    }

    /// Slot of the decimal field `name`, or None if there is no such field.
    pub fn decimal_mut(&mut self, name: &str) -> Option<&mut Option<f64>> {
        match name {
            schema::DG_WT => Some(&mut self.dg_wt),
            schema::DG_MT => Some(&mut self.dg_mt),
            schema::DDG => Some(&mut self.ddg),
            schema::DG_WT_SD => Some(&mut self.dg_wt_sd),
            schema::DG_MT_SD => Some(&mut self.dg_mt_sd),
            schema::DDG_SD => Some(&mut self.ddg_sd),
            _ => None,
        }
    }
}

// Decimal places in the shortest representation of `x`, at most the field width.
fn n_decimals(x: f64) -> i32 {
    let repr = x.to_string();
    let places = repr.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0);
    places.min(schema::DECIMAL_WIDTH) as i32
}

/// The prediction stored in a single matrix cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Motif(MotifPrediction),
    Energy(EnergyPrediction),
}

impl Record {
    /// True if every field is missing.
    pub fn is_empty(&self) -> bool {
        match self {
            Record::Motif(motif) => motif.elm.is_none() && motif.lost.is_none(),
            Record::Energy(energy) => {
                energy.evidence.is_none()
                    && [energy.dg_wt, energy.dg_mt, energy.ddg, energy.dg_wt_sd, energy.dg_mt_sd, energy.ddg_sd].iter().all(Option::is_none)
            },
        }
    }

    /// Value of the field `name` for output.
    ///
    /// Returns None if the field is missing or does not exist in this record.
    ///
    pub fn value(&self, name: &str) -> Option<Value> {
        match self {
            Record::Motif(motif) => match name {
                schema::ELM => motif.elm.clone().map(Value::Text),
                schema::LOST => motif.lost.map(|x| Value::Int(x as i64)),
                _ => None,
            },
            Record::Energy(energy) => match name {
                schema::EVIDENCE => energy.evidence.map(|x| Value::Text(x.as_str().to_string())),
                _ => energy.decimal(name).map(Value::Float),
            },
        }
    }
}

/// Supported output targets.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested mapping keyed by category.
    #[default]
    Json,
    /// One comma separated string per category.
    Text,
    /// One ampersand separated string per category, for VCF INFO fields.
    Vcf,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "vcf" => Ok(OutputFormat::Vcf),
            _ => Err(format!("'{}' is not a valid OutputFormat", s)),
        }
    }
}

/// Output settings consumed by [assemble](assembler::assemble) and [format](printer::format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Output every field instead of the single summary field.
    pub extended: bool,
    /// Render as a nested mapping instead of flat strings.
    pub structured: bool,
    /// Separator for flat strings.
    pub delimiter: char,
}

impl Options {
    pub fn new(
        extended: bool,
        format: &OutputFormat,
    ) -> Self {
        let (structured, delimiter) = match format {
            OutputFormat::Json => (true, ','),
            OutputFormat::Text => (false, ','),
            OutputFormat::Vcf => (false, '&'),
        };
        Options{ extended, structured, delimiter }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new(false, &OutputFormat::Text)
    }
}

/// Decode and format the predictions for one substitution.
///
/// `blobs` contains the compressed matrix of each requested category for the
/// peptide, `position` is the one-based position of the substitution and
/// `aa` the substituted amino acid.
///
/// A blob that fails to decompress is skipped without affecting the other
/// categories.
///
/// Returns None if none of the categories has a prediction for the
/// substitution.
///
/// ## Usage
///
/// ```rust
/// use mutfunc::{decode_query, Category, MotifPrediction, OutputFormat, Options, Record};
/// use mutfunc::encoder::MatrixEncoder;
/// use mutfunc::printer::Rendered;
///
/// // Build a motif matrix for a 10 residue peptide with a single prediction
/// let mut encoder = MatrixEncoder::new(Category::Motif, 10).unwrap();
/// let record = Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) });
/// encoder.insert(5, 'D', &record).unwrap();
/// let blob = encoder.finish().unwrap();
///
/// // Decode D at position 5 in compact text output
/// let options = Options::new(false, &OutputFormat::Text);
/// let got = decode_query(&[(Category::Motif, blob.as_slice())], 5, 'D', &options).unwrap();
///
/// match got {
///     Rendered::Flat(fields) => assert_eq!(fields["mutfunc_motif"], "1"),
///     _ => panic!("expected flat output"),
/// }
///
/// // Other substitutions at the same position have no prediction
/// assert!(decode_query(&[(Category::Motif, blob.as_slice())], 5, 'E', &options).is_none());
/// ```
///
pub fn decode_query(
    blobs: &[(Category, &[u8])],
    position: usize,
    aa: char,
    options: &Options,
) -> Option<Rendered> {
    let matrices: Vec<(Category, Vec<u8>)> = blobs.iter().filter_map(|(category, blob)| {
        match decompress(blob) {
            Ok(matrix) => Some((*category, matrix)),
            Err(e) => {
                log::warn!("Skipping {} predictions: {}", category, e);
                None
            },
        }
    }).collect();

    let matrices: Vec<(Category, &[u8])> = matrices.iter().map(|(category, matrix)| (*category, matrix.as_slice())).collect();
    annotate_matrices(&matrices, position, aa, options)
}

/// Same as [decode_query] for matrices that have already been decompressed.
pub fn annotate_matrices(
    matrices: &[(Category, &[u8])],
    position: usize,
    aa: char,
    options: &Options,
) -> Option<Rendered> {
    let position0 = position.checked_sub(1)?;

    let results: Vec<assembler::CategoryResult> = matrices.iter().filter_map(|(category, matrix)| {
        let record = decode_cell(matrix, category, position0, aa)?;
        assembler::assemble(category, &record, options.extended)
    }).collect();

    printer::format(&results, options)
}

// Tests
#[cfg(test)]
mod tests {

    fn motif_blob() -> Vec<u8> {
        use crate::encoder::MatrixEncoder;
        use crate::{Category, MotifPrediction, Record};

        let mut encoder = MatrixEncoder::new(Category::Motif, 8).unwrap();
        let record = Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) });
        encoder.insert(5, 'D', &record).unwrap();
        encoder.finish().unwrap()
    }

    fn interaction_blob() -> Vec<u8> {
        use crate::encoder::MatrixEncoder;
        use crate::{Category, EnergyPrediction, Evidence, Record};

        let mut encoder = MatrixEncoder::new(Category::Interaction, 8).unwrap();
        let record = Record::Energy(EnergyPrediction{ evidence: Some(Evidence::Exp), dg_wt: Some(1.20), ddg: Some(0.80), ..Default::default() });
        encoder.insert(5, 'D', &record).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn decode_query_motif_compact_text() {
        use super::decode_query;
        use crate::printer::Rendered;
        use crate::{Category, Options, OutputFormat};

        use indexmap::IndexMap;

        let blob = motif_blob();
        let options = Options::new(false, &OutputFormat::Text);

        let mut expected: IndexMap<String, String> = IndexMap::new();
        expected.insert("mutfunc_motif".to_string(), "1".to_string());

        let got = decode_query(&[(Category::Motif, blob.as_slice())], 5, 'D', &options).unwrap();

        assert_eq!(got, Rendered::Flat(expected));
    }

    #[test]
    fn decode_query_motif_extended_json() {
        use super::decode_query;
        use crate::{Category, Options, OutputFormat};

        let blob = motif_blob();
        let options = Options::new(true, &OutputFormat::Json);

        let got = decode_query(&[(Category::Motif, blob.as_slice())], 5, 'D', &options).unwrap();
        let expected = r#"{"motif":{"elm":"ELM000123","lost":1}}"#;

        assert_eq!(got.to_json().unwrap(), expected);
    }

    #[test]
    fn decode_query_interaction_extended() {
        use super::decode_query;
        use crate::printer::Rendered;
        use crate::{Category, Options, OutputFormat, Value};

        let blob = interaction_blob();
        let options = Options::new(true, &OutputFormat::Json);

        let got = decode_query(&[(Category::Interaction, blob.as_slice())], 5, 'D', &options).unwrap();

        let Rendered::Structured(categories) = got else { panic!("expected structured output") };
        let fields = &categories["int"];

        assert_eq!(fields["evidence"], Some(Value::Text("EXP".to_string())));
        assert_eq!(fields["dG_wt"], Some(Value::Float(1.2)));
        assert_eq!(fields["dG_mt"], Some(Value::Float(2.0)));
        assert_eq!(fields["ddG"], Some(Value::Float(0.8)));
        assert_eq!(fields["dG_wt_sd"], None);
        assert_eq!(fields["dG_mt_sd"], None);
        assert_eq!(fields["ddG_sd"], None);
    }

    #[test]
    fn decode_query_keeps_categories_separate() {
        use super::decode_query;
        use crate::printer::Rendered;
        use crate::{Category, Options, OutputFormat};

        let motif = motif_blob();
        let interaction = interaction_blob();
        let options = Options::new(false, &OutputFormat::Text);

        let got = decode_query(&[(Category::Motif, motif.as_slice()), (Category::Interaction, interaction.as_slice())], 5, 'D', &options).unwrap();

        let Rendered::Flat(fields) = got else { panic!("expected flat output") };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["mutfunc_motif"], "1");
        assert_eq!(fields["mutfunc_int"], "0.8");
    }

    #[test]
    fn decode_query_non_canonical_aa_is_empty() {
        use super::decode_query;
        use crate::{Category, Options, OutputFormat};

        let motif = motif_blob();
        let interaction = interaction_blob();
        let options = Options::new(true, &OutputFormat::Json);

        let got = decode_query(&[(Category::Motif, motif.as_slice()), (Category::Interaction, interaction.as_slice())], 5, 'X', &options);

        assert!(got.is_none());
    }

    #[test]
    fn decode_query_position_zero_is_empty() {
        use super::decode_query;
        use crate::{Category, Options};

        let motif = motif_blob();

        let got = decode_query(&[(Category::Motif, motif.as_slice())], 0, 'D', &Options::default());

        assert!(got.is_none());
    }

    #[test]
    fn decode_query_position_past_end_is_empty() {
        use super::decode_query;
        use crate::{Category, Options};

        let motif = motif_blob();

        let got = decode_query(&[(Category::Motif, motif.as_slice())], 9, 'D', &Options::default());

        assert!(got.is_none());
    }

    #[test]
    fn decode_query_corrupt_blob_is_isolated() {
        use super::decode_query;
        use crate::printer::Rendered;
        use crate::{Category, Options};

        let motif = motif_blob();
        let corrupt: Vec<u8> = b"definitely not gzip".to_vec();

        let got = decode_query(&[(Category::Interaction, corrupt.as_slice()), (Category::Motif, motif.as_slice())], 5, 'D', &Options::default()).unwrap();

        let Rendered::Flat(fields) = got else { panic!("expected flat output") };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["mutfunc_motif"], "1");
    }

    #[test]
    fn category_from_str() {
        use crate::Category;

        assert_eq!("motif".parse::<Category>(), Ok(Category::Motif));
        assert_eq!("int".parse::<Category>(), Ok(Category::Interaction));
        assert_eq!("mod".parse::<Category>(), Ok(Category::ModeledStructure));
        assert_eq!("exp".parse::<Category>(), Ok(Category::ExperimentalStructure));
        assert!("structure".parse::<Category>().is_err());
    }

    #[test]
    fn options_from_format() {
        use crate::{Options, OutputFormat};

        assert_eq!(Options::new(true, &OutputFormat::Json), Options{ extended: true, structured: true, delimiter: ',' });
        assert_eq!(Options::new(false, &OutputFormat::Text), Options{ extended: false, structured: false, delimiter: ',' });
        assert_eq!(Options::new(false, &OutputFormat::Vcf), Options{ extended: false, structured: false, delimiter: '&' });
    }

    #[test]
    fn derive_dg_mt() {
        use crate::EnergyPrediction;

        let mut both = EnergyPrediction{ dg_wt: Some(1.50), ddg: Some(0.25), ..Default::default() };
        both.derive_dg_mt();
        assert_eq!(both.dg_mt, Some(1.75));

        let mut missing = EnergyPrediction{ dg_wt: Some(1.50), ddg: None, dg_mt: Some(3.0), ..Default::default() };
        missing.derive_dg_mt();
        assert_eq!(missing.dg_mt, None);
    }

    #[test]
    fn derive_dg_mt_rounds_to_operand_precision() {
        use crate::EnergyPrediction;

        let mut energy = EnergyPrediction{ dg_wt: Some(0.1), ddg: Some(0.2), ..Default::default() };
        energy.derive_dg_mt();
        assert_eq!(energy.dg_mt, Some(0.3));

        let mut energy = EnergyPrediction{ dg_wt: Some(-1.25), ddg: Some(0.5), ..Default::default() };
        energy.derive_dg_mt();
        assert_eq!(energy.dg_mt, Some(-0.75));
    }

    #[test]
    fn decode_query_dg_mt_without_float_noise() {
        use super::decode_query;
        use crate::encoder::MatrixEncoder;
        use crate::{Category, EnergyPrediction, Options, OutputFormat, Record};

        let mut encoder = MatrixEncoder::new(Category::ModeledStructure, 3).unwrap();
        let record = Record::Energy(EnergyPrediction{ dg_wt: Some(0.1), ddg: Some(0.2), ..Default::default() });
        encoder.insert(2, 'L', &record).unwrap();
        let blob = encoder.finish().unwrap();

        let text = decode_query(&[(Category::ModeledStructure, blob.as_slice())], 2, 'L', &Options::new(true, &OutputFormat::Text)).unwrap();
        let json = decode_query(&[(Category::ModeledStructure, blob.as_slice())], 2, 'L', &Options::new(true, &OutputFormat::Json)).unwrap();

        assert_eq!(text.to_text(), "mutfunc_mod=0.1,0.3,0.2,,,\n");
        assert_eq!(json.to_json().unwrap(), r#"{"mod":{"dG_wt":0.1,"dG_mt":0.3,"ddG":0.2,"dG_wt_sd":null,"dG_mt_sd":null,"ddG_sd":null}}"#);
    }

    #[test]
    fn record_value_by_name() {
        use crate::{EnergyPrediction, Evidence, MotifPrediction, Record, Value};

        let motif = Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(0) });
        let energy = Record::Energy(EnergyPrediction{ evidence: Some(Evidence::Mdd), ddg_sd: Some(0.5), ..Default::default() });

        assert_eq!(motif.value("elm"), Some(Value::Text("ELM000123".to_string())));
        assert_eq!(motif.value("lost"), Some(Value::Int(0)));
        assert_eq!(motif.value("ddG"), None);
        assert_eq!(energy.value("evidence"), Some(Value::Text("MDD".to_string())));
        assert_eq!(energy.value("ddG_sd"), Some(Value::Float(0.5)));
        assert_eq!(energy.value("dG_wt"), None);
        assert_eq!(energy.value("elm"), None);
    }

    #[test]
    fn value_display() {
        use crate::Value;

        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Int(1).to_string(), "1");
        assert_eq!(Value::Text("EXP".to_string()).to_string(), "EXP");
    }
}
