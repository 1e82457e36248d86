//! Common test helpers shared across the integration suites.

#![allow(dead_code)]

use marcfield::{Field, Leader, Record};

/// Field terminator
pub const FT: u8 = 0x1E;
/// Subfield delimiter
pub const SD: u8 = 0x1F;
/// Record terminator
pub const RT: u8 = 0x1D;

/// Leader for a bibliographic monograph (Books).
pub fn book_leader() -> Leader {
    Leader::from_text("00000nam a2200000 a 4500")
}

/// A small, realistic Books record.
pub fn create_book_record() -> Record {
    Record::builder(book_leader())
        .control_field_str("001", "ocm00012345")
        .control_field_str("005", "19940223151047.0")
        .control_field_str("008", "920219s1993    caua   j      000 0 eng d")
        .field(
            Field::builder("020".to_string(), ' ', ' ')
                .subfield_str('a', "0152038655")
                .build(),
        )
        .field(
            Field::builder("100".to_string(), '1', ' ')
                .subfield_str('a', "Rees, Celia.")
                .build(),
        )
        .field(
            Field::builder("245".to_string(), '1', '0')
                .subfield_str('a', "Witch child /")
                .subfield_str('c', "Celia Rees.")
                .build(),
        )
        .field(
            Field::builder("650".to_string(), ' ', '0')
                .subfield_str('a', "Witchcraft")
                .subfield_str('v', "Fiction.")
                .build(),
        )
        .build()
}

/// A record with the given control number and title.
pub fn create_titled_record(id: &str, title: &str) -> Record {
    Record::builder(book_leader())
        .control_field_str("001", id)
        .field(
            Field::builder("245".to_string(), '0', '0')
                .subfield_str('a', title)
                .build(),
        )
        .build()
}

/// Assemble raw record bytes from (tag, field bytes) pairs.
///
/// Field bytes are taken as given, terminators included, so a caller can
/// build records a well-behaved encoder would never produce.
pub fn assemble(fields: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut directory = Vec::new();
    let mut data = Vec::new();
    for (tag, bytes) in fields {
        directory.extend_from_slice(tag.as_bytes());
        directory.extend_from_slice(format!("{:04}{:05}", bytes.len(), data.len()).as_bytes());
        data.extend_from_slice(bytes);
    }
    directory.push(FT);

    let base = 24 + directory.len();
    let length = base + data.len() + 1;
    let mut out = format!("{length:05}nam a22{base:05} a 4500").into_bytes();
    out.extend_from_slice(&directory);
    out.extend_from_slice(&data);
    out.push(RT);
    out
}

/// Control field bytes with terminator.
pub fn control_bytes(text: &str) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(FT);
    bytes
}

/// Data field bytes with indicators, delimited subfields and terminator.
pub fn data_bytes(indicators: &str, subfields: &[(char, &str)]) -> Vec<u8> {
    let mut bytes = indicators.as_bytes().to_vec();
    for (code, text) in subfields {
        bytes.push(SD);
        bytes.extend_from_slice(code.to_string().as_bytes());
        bytes.extend_from_slice(text.as_bytes());
    }
    bytes.push(FT);
    bytes
}
