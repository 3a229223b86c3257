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

//! Parser for plain text predictions.
//!
//! Input is tab-separated with one cell per line:
//!
//! ```text
//! position<TAB>aa<TAB>field...
//! ```
//!
//! Positions are one-based. The fields follow the storage order of the
//! category:
//!
//!   - `motif`: `elm`, `lost`.
//!   - `int`: `evidence`, `dG_wt`, `ddG`, `dG_wt_sd`, `dG_mt_sd`, `ddG_sd`.
//!   - `mod` and `exp`: `dG_wt`, `ddG`, `dG_wt_sd`, `dG_mt_sd`, `ddG_sd`.
//!
//! Empty fields, `.` and `NA` are missing values. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use mutfunc::{Category, MotifPrediction, Record};
//! use mutfunc::parser::Parser;
//!
//! let mut input = Cursor::new(b"# position\taa\telm\tlost\n12\tP\tELM000012\t1\n13\tG\t.\t0\n".to_vec());
//! let cells: Vec<_> = Parser::new(&mut input, Category::Motif).collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(cells.len(), 2);
//! assert_eq!(cells[0].position, 12);
//! assert_eq!(cells[1].record, Record::Motif(MotifPrediction{ elm: None, lost: Some(0) }));
//! ```
//!

use crate::Category;
use crate::EnergyPrediction;
use crate::Evidence;
use crate::MotifPrediction;
use crate::Record;
use crate::encoder::Cell;
use crate::schema::schema;
use crate::schema::FieldKind;

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

type E = Box<dyn std::error::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// One-based line number in the input.
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

fn is_missing(field: &str) -> bool {
    field.is_empty() || field == "." || field == "NA"
}

fn parse_optional<T: std::str::FromStr>(
    field: &str,
    name: &str,
) -> Result<Option<T>, String> {
    if is_missing(field) {
        return Ok(None)
    }
    field.parse::<T>().map(Some).map_err(|_| format!("'{}' is not a valid value for {}", field, name))
}

// Fields are given in the storage order of the category layout.
fn parse_fields(
    fields: &[&str],
    category: &Category,
) -> Result<Record, String> {
    let layout = schema(category);

    let mut record = match category {
        Category::Motif => Record::Motif(MotifPrediction::default()),
        _ => Record::Energy(EnergyPrediction::default()),
    };

    for (field, value) in layout.fields.iter().zip(fields.iter()) {
        match (&mut record, field.kind) {
            (Record::Motif(motif), FieldKind::Text) => {
                motif.elm = if is_missing(value) { None } else { Some(value.to_string()) };
            },
            (Record::Motif(motif), FieldKind::Flag) => motif.lost = parse_optional::<u16>(value, field.name)?,
            (Record::Energy(energy), FieldKind::Evidence) => energy.evidence = parse_optional::<Evidence>(value, field.name)?,
            (Record::Energy(energy), FieldKind::Decimal) => {
                let parsed = parse_optional::<f64>(value, field.name)?;
                if let Some(slot) = energy.decimal_mut(field.name) {
                    *slot = parsed;
                }
            },
            _ => return Err(format!("{} records have no {} field", category, field.name)),
        }
    }

    Ok(record)
}

/// Parse a single line of plain text predictions.
///
/// Returns None for blank lines and comments.
///
/// Trailing missing fields can be left out.
///
pub fn parse_line(
    line: &str,
    category: &Category,
) -> Result<Option<Cell>, String> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None)
    }

    let mut records = line.split('\t');

    let position_str = records.next().unwrap_or_default();
    let position = position_str.trim().parse::<usize>().map_err(|_| format!("'{}' is not a valid position", position_str))?;
    if position == 0 {
        return Err("positions are one-based".to_string())
    }

    let aa_str = records.next().ok_or("missing amino acid")?.trim();
    let mut aa_chars = aa_str.chars();
    let aa = match (aa_chars.next(), aa_chars.next()) {
        (Some(aa), None) => aa,
        _ => return Err(format!("'{}' is not a single amino acid", aa_str)),
    };

    let n_fields = schema(category).fields.len();
    let mut fields: Vec<&str> = records.map(|x| x.trim()).collect();
    if fields.len() > n_fields {
        return Err(format!("expected at most {} fields for {}, got {}", n_fields, category, fields.len()))
    }
    fields.resize(n_fields, "");

    let record = parse_fields(&fields, category)?;

    Ok(Some(Cell{ position, aa, record }))
}

/// Reads [Cell]s for one category from plain text.
pub struct Parser<'a, R: Read> {
    reader: BufReader<&'a mut R>,
    category: Category,
    line_number: usize,
}

impl<'a, R: Read> Parser<'a, R> {
    pub fn new(
        conn: &'a mut R,
        category: Category,
    ) -> Self {
        Parser{ reader: BufReader::new(conn), category, line_number: 0 }
    }
}

impl<R: Read> Iterator for Parser<'_, R> {
    type Item = Result<Cell, E>;

    fn next(
        &mut self,
    ) -> Option<Result<Cell, E>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self.line_number += 1,
                Err(e) => return Some(Err(Box::new(e))),
            }

            match parse_line(&line, &self.category) {
                Ok(Some(cell)) => return Some(Ok(cell)),
                Ok(None) => continue,
                Err(message) => return Some(Err(Box::new(ParseError{ line: self.line_number, message }))),
            }
        }
    }
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn parse_line_motif() {
        use super::parse_line;
        use crate::encoder::Cell;
        use crate::{Category, MotifPrediction, Record};

        let expected = Cell{ position: 5, aa: 'D', record: Record::Motif(MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) }) };

        let got = parse_line("5\tD\tELM000123\t1\n", &Category::Motif).unwrap().unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn parse_line_interaction() {
        use super::parse_line;
        use crate::encoder::Cell;
        use crate::{Category, EnergyPrediction, Evidence, Record};

        let expected = Cell{ position: 101, aa: 'w', record: Record::Energy(EnergyPrediction{
            evidence: Some(Evidence::Mdl),
            dg_wt: Some(-1.5),
            ddg: Some(2.25),
            ddg_sd: Some(0.1),
            ..Default::default()
        }) };

        let got = parse_line("101\tw\tMDL\t-1.5\t2.25\tNA\t.\t0.1", &Category::Interaction).unwrap().unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn parse_line_structure_trailing_fields_missing() {
        use super::parse_line;
        use crate::encoder::Cell;
        use crate::{Category, EnergyPrediction, Record};

        let expected = Cell{ position: 2, aa: 'K', record: Record::Energy(EnergyPrediction{ dg_wt: Some(0.5), ddg: Some(-0.75), ..Default::default() }) };

        let got = parse_line("2\tK\t0.5\t-0.75\r\n", &Category::ModeledStructure).unwrap().unwrap();

        assert_eq!(got, expected);
    }

    #[test]
    fn parse_line_skips_comments_and_blanks() {
        use super::parse_line;
        use crate::Category;

        assert_eq!(parse_line("# position\taa\telm\tlost", &Category::Motif), Ok(None));
        assert_eq!(parse_line("\n", &Category::Motif), Ok(None));
    }

    #[test]
    fn parse_line_errors() {
        use super::parse_line;
        use crate::Category;

        assert!(parse_line("0\tA\tELM000001\t1", &Category::Motif).is_err());
        assert!(parse_line("one\tA\tELM000001\t1", &Category::Motif).is_err());
        assert!(parse_line("1\tAG\tELM000001\t1", &Category::Motif).is_err());
        assert!(parse_line("1", &Category::Motif).is_err());
        assert!(parse_line("1\tA\tELM000001\tyes", &Category::Motif).is_err());
        assert!(parse_line("1\tA\tELM000001\t1\textra", &Category::Motif).is_err());
        assert!(parse_line("1\tA\tXYZ\t1.0", &Category::Interaction).is_err());
    }

    #[test]
    fn parser_reports_line_number() {
        use std::io::Cursor;
        use super::Parser;
        use crate::Category;

        let mut input = Cursor::new(b"# header\n1\tA\t1.0\t0.5\n2\tA\tbad\n".to_vec());
        let mut parser = Parser::new(&mut input, Category::ExperimentalStructure);

        assert!(parser.next().unwrap().is_ok());
        let err = parser.next().unwrap().unwrap_err();
        assert!(err.to_string().starts_with("line 3:"));
        assert!(parser.next().is_none());
    }

    #[test]
    fn parser_output_encodes() {
        use std::io::Cursor;
        use super::Parser;
        use crate::encoder::MatrixEncoder;
        use crate::decoder::{decode_cell, decompress};
        use crate::{Category, EnergyPrediction, Record};

        let mut input = Cursor::new(b"1\tA\t1.0\t0.5\n3\tY\t-2.0\t1.0\t0.2\n".to_vec());
        let mut encoder = MatrixEncoder::new(Category::ExperimentalStructure, 3).unwrap();
        let cells = Parser::new(&mut input, Category::ExperimentalStructure).collect::<Result<Vec<_>, _>>().unwrap();
        encoder.extend(cells.into_iter()).unwrap();
        let matrix = decompress(&encoder.finish().unwrap()).unwrap();

        let expected = Record::Energy(EnergyPrediction{ dg_wt: Some(-2.0), dg_mt: Some(-1.0), ddg: Some(1.0), dg_wt_sd: Some(0.2), ..Default::default() });
        let got = decode_cell(&matrix, &Category::ExperimentalStructure, 2, 'Y').unwrap();

        assert_eq!(got, expected);
    }
}
