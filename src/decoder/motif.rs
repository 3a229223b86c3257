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
use crate::MotifPrediction;
use crate::decoder::fields::FieldReader;
use crate::schema::FieldKind;
use crate::schema::MOTIF;

/// Decode a 26-byte motif record.
///
/// The record contains the ELM identifier as 24 bytes of padded ASCII
/// followed by the `lost` flag as a little-endian u16.
///
pub fn read_motif(
    bytes: &[u8],
) -> MotifPrediction {
    let mut motif = MotifPrediction::default();
    let mut reader = FieldReader::new(bytes);

    for field in MOTIF.fields {
        match field.kind {
            FieldKind::Text => motif.elm = reader.next_text(),
            FieldKind::Flag => motif.lost = reader.next_flag(),
            _ => {
                reader.next_field(field.kind);
            },
        }
    }

    motif
}

// Tests
#[cfg(test)]
mod tests {

    #[test]
    fn read_motif_lost() {
        use super::read_motif;
        use crate::MotifPrediction;

        let mut data: Vec<u8> = b"ELM000123               ".to_vec();
        data.append(&mut vec![1, 0]);
        let expected = MotifPrediction{ elm: Some("ELM000123".to_string()), lost: Some(1) };

        let got = read_motif(&data);

        assert_eq!(got, expected);
    }

    #[test]
    fn read_motif_retained() {
        use super::read_motif;
        use crate::MotifPrediction;

        let mut data: Vec<u8> = b"ELM000456               ".to_vec();
        data.append(&mut vec![0, 0]);
        let expected = MotifPrediction{ elm: Some("ELM000456".to_string()), lost: Some(0) };

        let got = read_motif(&data);

        assert_eq!(got, expected);
    }

    #[test]
    fn read_motif_sentinels() {
        use super::read_motif;
        use crate::MotifPrediction;

        let mut data: Vec<u8> = b"undefined               ".to_vec();
        data.append(&mut vec![0xff, 0xff]);

        let got = read_motif(&data);

        assert_eq!(got, MotifPrediction{ elm: None, lost: None });
    }

    #[test]
    fn read_motif_missing_elm_only() {
        use super::read_motif;
        use crate::MotifPrediction;

        let mut data: Vec<u8> = b"undefined               ".to_vec();
        data.append(&mut vec![1, 0]);

        let got = read_motif(&data);

        assert_eq!(got, MotifPrediction{ elm: None, lost: Some(1) });
    }
}
