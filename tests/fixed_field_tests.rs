//! Tests for 006/007/008 decoding through the record API

mod common;

use common::create_book_record;
use marcfield::fixed_field::{decode_007, Cf008Layout};
use marcfield::{Leader, MaterialType, Record, RecordFormat};

fn labels<'a>(desc: &'a marcfield::Cf008Desc, label: &str) -> Vec<&'a str> {
    desc.get(label)
        .map(|values| values.iter().map(|v| v.label.as_str()).collect())
        .unwrap_or_default()
}

#[test]
fn test_cataloging_source_unknown() {
    let record = Record::builder(Leader::from_text("00000nam a2200000 a 4500"))
        .control_field_str("008", "920219s1993    caua   j      000 0 eng u")
        .build();

    let desc = record.describe_008();
    let source = &desc["Cataloging source"];
    assert_eq!(source.len(), 1);
    assert_eq!(source[0].code, "u");
    assert_eq!(source[0].label, "Unknown");
    assert_eq!(source[0].offset, 39);
}

#[test]
fn test_books_008_through_record() {
    let desc = create_book_record().describe_008();
    assert_eq!(labels(&desc, "Type of date/Publication status"), vec!["Single known date/probable date"]);
    assert_eq!(labels(&desc, "Target audience"), vec!["Juvenile"]);
    assert_eq!(desc["Illustrations"].len(), 4);
    assert_eq!(desc["Illustrations"][0].label, "Illustrations");
    assert_eq!(desc["Language"][0].code, "eng");
}

#[test]
fn test_sound_recording_007_under_both_formats() {
    let text = "sd fsngnnmmned";
    for format in [RecordFormat::Bibliography, RecordFormat::Holdings] {
        let desc = decode_007(format, text);
        let category = &desc["(00/01) Category of material"];
        assert_eq!(category.code, "s");
        assert_eq!(category.label, "Sound recording");
        assert_eq!(desc["(01/01) Specific material designation"].label, "Sound disc");
    }
}

#[test]
fn test_describe_007_per_occurrence() {
    let record = create_book_record()
        .into_builder()
        .control_field_str("007", "ta")
        .control_field_str("007", "cr")
        .build();
    let described = record.describe_007();
    assert_eq!(described.len(), 2);
    assert_eq!(described[0]["(00/01) Category of material"].label, "Text");
    assert_eq!(described[1]["(00/01) Category of material"].label, "Electronic resource");
}

#[test]
fn test_continuing_resource_006_is_merged_into_books() {
    let record = create_book_record()
        .into_builder()
        // Frequency 'm' at 006/01 (008/18).
        .control_field_str("006", "sm rr p      0   0")
        // A map 006 on a book is ignored.
        .control_field_str("006", "e      a   b     ")
        .build();

    let desc = record.describe_008();
    assert_eq!(labels(&desc, "Frequency"), vec!["Monthly"]);
    assert!(!desc.contains_key("Relief"));
}

#[test]
fn test_authority_record_has_no_007_but_has_008() {
    let record = Record::builder(Leader::from_text("00000nz  a2200000n  4500"))
        .control_field_str("007", "ta")
        .control_field_str("008", "860211n| acannaabn          |a aaa      ")
        .build();
    assert_eq!(record.format(), RecordFormat::Authority);
    assert!(record.describe_007()[0].is_empty());
    assert!(!record.describe_008().is_empty());
}

#[test]
fn test_unknown_format_describes_nothing() {
    let record = Record::builder(Leader::from_text("00000n!  a2200000   4500"))
        .control_field_str("008", "920219s1993    caua   j      000 0 eng d")
        .build();
    assert_eq!(record.format(), RecordFormat::Unknown);
    assert!(record.describe_008().is_empty());
    assert_eq!(Cf008Layout::select(RecordFormat::Unknown, None), None);
}

#[test]
fn test_serial_leader_selects_continuing_resources() {
    let record = Record::new(Leader::from_text("00000nas a2200000 a 4500"));
    assert_eq!(record.material_type(), Some(MaterialType::ContinuingResources));
}
