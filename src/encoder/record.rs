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

//! Fixed-width encoding of a single [Record].

use crate::Category;
use crate::Evidence;
use crate::Record;
use crate::encoder::EncodeError;
use crate::schema::schema;
use crate::schema::FieldKind;
use crate::schema::DECIMAL_SENTINEL;
use crate::schema::DECIMAL_WIDTH;
use crate::schema::TEXT_SENTINEL;
use crate::schema::TEXT_WIDTH;
use crate::schema::U16_SENTINEL;

type E = Box<dyn std::error::Error>;

/// Encode an optional decimal as 8 bytes of right-aligned ASCII.
pub fn encode_decimal(
    value: Option<f64>,
) -> Result<[u8; DECIMAL_WIDTH], E> {
    let Some(value) = value else {
        return Ok(*DECIMAL_SENTINEL)
    };

    let formatted = format!("{:>8}", value);
    if !value.is_finite() || formatted.len() != DECIMAL_WIDTH || formatted.as_bytes() == DECIMAL_SENTINEL {
        return Err(Box::new(EncodeError::ValueTooWide(value.to_string())))
    }

    let mut bytes = [b' '; DECIMAL_WIDTH];
    bytes.copy_from_slice(formatted.as_bytes());
    Ok(bytes)
}

/// Encode an optional u16 in little-endian order.
pub fn encode_u16(
    value: Option<u16>,
) -> Result<[u8; 2], E> {
    match value {
        Some(U16_SENTINEL) => Err(Box::new(EncodeError::ReservedValue(U16_SENTINEL.to_string()))),
        Some(x) => Ok(x.to_le_bytes()),
        None => Ok(U16_SENTINEL.to_le_bytes()),
    }
}

/// Encode optional ASCII text padded with spaces to 24 bytes.
pub fn encode_text(
    value: Option<&str>,
) -> Result<[u8; TEXT_WIDTH], E> {
    let text = match value {
        Some(TEXT_SENTINEL) => return Err(Box::new(EncodeError::ReservedValue(TEXT_SENTINEL.to_string()))),
        Some(x) => x,
        None => TEXT_SENTINEL,
    };

    if !text.is_ascii() || text.len() > TEXT_WIDTH {
        return Err(Box::new(EncodeError::ValueTooWide(text.to_string())))
    }

    let mut bytes = [b' '; TEXT_WIDTH];
    bytes[0..text.len()].copy_from_slice(text.as_bytes());
    Ok(bytes)
}

/// Encode `record` as one cell of a `category` matrix.
///
/// Fields are written in the storage order of the category layout and
/// missing fields are written as their sentinels. `dg_mt` is not stored.
///
/// Terminates with an [EncodeError] if the record type does not match
/// `category`, if a value does not fit in its field, or if an evidence code
/// is given for a category that does not store one.
///
pub fn encode_record(
    category: &Category,
    record: &Record,
) -> Result<Vec<u8>, E> {
    let layout = schema(category);

    if let Record::Energy(energy) = record {
        let stores_evidence = layout.fields.iter().any(|field| field.kind == FieldKind::Evidence);
        if energy.evidence.is_some() && !stores_evidence {
            return Err(Box::new(EncodeError::RecordMismatch(*category)))
        }
    }

    let mut bytes: Vec<u8> = Vec::with_capacity(layout.record_width);
    for field in layout.fields {
        match (field.kind, record) {
            (FieldKind::Text, Record::Motif(motif)) => bytes.extend_from_slice(&encode_text(motif.elm.as_deref())?),
            (FieldKind::Flag, Record::Motif(motif)) => bytes.extend_from_slice(&encode_u16(motif.lost)?),
            (FieldKind::Evidence, Record::Energy(energy)) => bytes.extend_from_slice(&encode_u16(energy.evidence.as_ref().map(Evidence::to_u16))?),
            (FieldKind::Decimal, Record::Energy(energy)) => bytes.extend_from_slice(&encode_decimal(energy.decimal(field.name))?),
            _ => return Err(Box::new(EncodeError::RecordMismatch(*category))),
        }
    }

    debug_assert_eq!(bytes.len(), layout.record_width);
    Ok(bytes)
}

fn empty_field(
    kind: FieldKind,
) -> Vec<u8> {
    match kind {
        FieldKind::Text => format!("{:<24}", TEXT_SENTINEL).into_bytes(),
        FieldKind::Flag | FieldKind::Evidence => U16_SENTINEL.to_le_bytes().to_vec(),
        FieldKind::Decimal => DECIMAL_SENTINEL.to_vec(),
    }
}

/// A cell where every field is missing.
pub fn empty_record(
    category: &Category,
) -> Vec<u8> {
    schema(category).fields.iter().flat_map(|field| empty_field(field.kind)).collect()
}
