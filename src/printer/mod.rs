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

//! Printer for rendering assembled predictions in the requested [Options].
//!
//! Structured output is a nested mapping from category key to field name to
//! value, with missing values as explicit nulls. Flat output is a mapping
//! from the output key of each category to its selected values joined by
//! the delimiter, with missing values as empty strings.
//!
//! Category order follows the order of the input results, and field order
//! follows [assemble](crate::assembler::assemble).
//!
//! ## Usage
//!
//! ```rust
//! use mutfunc::{Category, Options, OutputFormat, Value};
//! use mutfunc::assembler::CategoryResult;
//! use mutfunc::printer::format;
//!
//! let results = vec![
//!     CategoryResult{ category: Category::Motif, fields: vec![("elm", Some(Value::Text("ELM000123".to_string()))), ("lost", Some(Value::Int(1)))] },
//!     CategoryResult{ category: Category::ExperimentalStructure, fields: vec![("dG_wt", Some(Value::Float(1.2))), ("dG_mt", None)] },
//! ];
//!
//! // VCF output joins fields with '&'
//! let vcf = format(&results, &Options::new(true, &OutputFormat::Vcf)).unwrap();
//! assert_eq!(vcf.to_text(), "mutfunc_motif=ELM000123&1\nmutfunc_exp=1.2&\n");
//!
//! // JSON output keeps the missing field as null
//! let json = format(&results, &Options::new(true, &OutputFormat::Json)).unwrap();
//! assert_eq!(json.to_json().unwrap(), r#"{"motif":{"elm":"ELM000123","lost":1},"exp":{"dG_wt":1.2,"dG_mt":null}}"#);
//! ```
//!

pub mod flat;
pub mod structured;

use crate::Options;
use crate::Value;
use crate::assembler::CategoryResult;

use flat::format_flat;
use structured::format_structured;

use indexmap::IndexMap;
use serde::Serialize;

type E = Box<dyn std::error::Error>;

/// Rendered annotation for one substitution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    /// Category key to field name to value.
    Structured(IndexMap<String, IndexMap<String, Option<Value>>>),
    /// Output key to delimited values.
    Flat(IndexMap<String, String>),
}

impl Rendered {
    /// Serialize as a single line of JSON.
    pub fn to_json(&self) -> Result<String, E> {
        Ok(serde_json::to_string(self)?)
    }

    /// One `key=value` line per category.
    ///
    /// Structured output is written with the value of each category as
    /// JSON.
    ///
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self {
            Rendered::Flat(fields) => {
                fields.iter().for_each(|(key, value)| {
                    out.push_str(&format!("{}={}\n", key, value));
                });
            },
            Rendered::Structured(categories) => {
                categories.iter().for_each(|(key, fields)| {
                    let value = serde_json::to_string(fields).unwrap_or_default();
                    out.push_str(&format!("{}={}\n", key, value));
                });
            },
        }
        out
    }
}

/// Render the results of all categories for one substitution.
///
/// Returns None if `results` is empty.
///
pub fn format(
    results: &[CategoryResult],
    options: &Options,
) -> Option<Rendered> {
    if results.is_empty() {
        return None
    }

    let rendered = if options.structured {
        Rendered::Structured(format_structured(results))
    } else {
        Rendered::Flat(format_flat(results, options.delimiter))
    };

    Some(rendered)
}
