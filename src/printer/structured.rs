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

use crate::Value;
use crate::assembler::CategoryResult;

use indexmap::IndexMap;

/// Nest the fields of each category under its key.
pub fn format_structured(
    results: &[CategoryResult],
) -> IndexMap<String, IndexMap<String, Option<Value>>> {
    results.iter().map(|result| {
        let fields: IndexMap<String, Option<Value>> = result.fields.iter().map(|(name, value)| {
            (name.to_string(), value.clone())
        }).collect();
        (result.category.key().to_string(), fields)
    }).collect()
}
