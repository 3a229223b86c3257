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

use crate::assembler::CategoryResult;

use indexmap::IndexMap;

/// Join the values of each category with `delimiter`.
///
/// Missing values are written as empty strings so that the position of
/// each field is kept.
///
pub fn format_flat(
    results: &[CategoryResult],
    delimiter: char,
) -> IndexMap<String, String> {
    let mut out: IndexMap<String, String> = IndexMap::with_capacity(results.len());
    let separator = delimiter.to_string();
    results.iter().for_each(|result| {
        let values: Vec<String> = result.fields.iter().map(|(_, value)| {
            value.as_ref().map(|x| x.to_string()).unwrap_or_default()
        }).collect();
        out.insert(result.category.output_key().to_string(), values.join(&separator));
    });
    out
}
