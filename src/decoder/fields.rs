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

//! Decoders for the field types shared by all record layouts.

use crate::Evidence;
use crate::schema::FieldKind;
use crate::schema::DECIMAL_SENTINEL;
use crate::schema::TEXT_SENTINEL;
use crate::schema::U16_SENTINEL;

use bstr::ByteSlice;

/// Decode an 8-byte ASCII decimal.
///
/// Returns None for the `10000000` sentinel. Values that are not valid
/// decimals, and the non-finite values `nan` and `inf`, are also treated
/// as missing.
///
pub fn decode_decimal(
    field: &[u8],
) -> Option<f64> {
    if field == DECIMAL_SENTINEL {
        return None
    }

    let trimmed = field.trim_with(|c| c.is_whitespace() || c == '\0');
    match trimmed.to_str().ok().and_then(|x| x.parse::<f64>().ok()) {
        Some(value) if value.is_finite() => Some(value),
        Some(_) => {
            log::debug!("Non-finite decimal field {:?}", field.as_bstr());
            None
        },
        None => {
            log::debug!("Unparseable decimal field {:?}", field.as_bstr());
            None
        },
    }
}

/// Decode a 2-byte little-endian u16.
///
/// Returns None for the `0xFFFF` sentinel or if `field` is not 2 bytes.
///
pub fn decode_u16(
    field: &[u8],
) -> Option<u16> {
    let bytes: [u8; 2] = field.try_into().ok()?;
    let value = u16::from_le_bytes(bytes);
    if value == U16_SENTINEL {
        None
    } else {
        Some(value)
    }
}

/// Decode a space or NUL padded ASCII text field.
///
/// Returns None for the `undefined` sentinel and for blank fields.
///
pub fn decode_text(
    field: &[u8],
) -> Option<String> {
    let trimmed = field.trim_end_with(|c| c == ' ' || c == '\0');
    if trimmed.is_empty() || trimmed == TEXT_SENTINEL.as_bytes() {
        None
    } else {
        Some(trimmed.to_str_lossy().into_owned())
    }
}

/// Decode an evidence code.
pub fn decode_evidence(
    field: &[u8],
) -> Option<Evidence> {
    let code = decode_u16(field)?;
    let evidence = Evidence::from_u16(code);
    if evidence.is_none() {
        log::debug!("Unknown evidence code {}", code);
    }
    evidence
}

/// Reads consecutive fields from the bytes of one record.
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(
        bytes: &'a [u8],
    ) -> Self {
        FieldReader{ bytes, pos: 0 }
    }

    /// Consume the next field of type `kind`.
    ///
    /// Returns an empty slice if the record is too short, which every
    /// decoder above reads as missing.
    ///
    pub fn next_field(
        &mut self,
        kind: FieldKind,
    ) -> &'a [u8] {
        let start = self.pos.min(self.bytes.len());
        let end = (start + kind.width()).min(self.bytes.len());
        self.pos = start + kind.width();
        &self.bytes[start..end]
    }

    pub fn next_text(&mut self) -> Option<String> {
        decode_text(self.next_field(FieldKind::Text))
    }

    pub fn next_flag(&mut self) -> Option<u16> {
        decode_u16(self.next_field(FieldKind::Flag))
    }

    pub fn next_evidence(&mut self) -> Option<Evidence> {
        decode_evidence(self.next_field(FieldKind::Evidence))
    }

    pub fn next_decimal(&mut self) -> Option<f64> {
        let field = self.next_field(FieldKind::Decimal);
        if field.is_empty() {
            return None
        }
        decode_decimal(field)
    }
}
