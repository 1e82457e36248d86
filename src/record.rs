//! MARC record structures.
//!
//! This module provides the record value types:
//! - [`Record`]: leader plus variable fields, in directory order
//! - [`VariableField`]: either a [`ControlField`] or a data [`Field`]
//! - [`ControlField`]: tagged text without indicators (tags 001-009)
//! - [`Field`]: data field with two indicators and [`Subfield`]s
//!
//! A `Record` is immutable once built. Records come from decoding, from
//! MARCXML, or from a [`RecordBuilder`]; [`Record::into_builder`] turns a
//! record back into a builder to derive a changed copy.
//!
//! Control fields such as 006 and 007 repeat, and a directory may interleave
//! control and data fields, so fields are kept in one ordered vector rather
//! than keyed by tag. Encoding writes them back in the same order.
//!
//! # Examples
//!
//! ```
//! use marcfield::{Field, Leader, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .control_field_str("001", "12345")
//!     .field(
//!         Field::builder("245".to_string(), '1', '0')
//!             .subfield_str('a', "Title")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_control_field("001"), Some("12345"));
//! assert_eq!(record.get_field("245").and_then(|f| f.get_subfield('a')), Some("Title"));
//! ```

use crate::directory::DirectoryEntry;
use crate::encoding::FieldEncoding;
use crate::fixed_field::{self, Cf007Desc, Cf008Desc, MaterialType};
use crate::leader::{Leader, RecordFormat};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    leader: Leader,
    fields: Vec<VariableField>,
    encoding: FieldEncoding,
}

/// One directory-addressed field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableField {
    /// Control field (001-009)
    Control(ControlField),
    /// Data field (010+)
    Data(Field),
}

/// A control field: tag plus text, no indicators or subfields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlField {
    /// Field tag (3 characters, starting with "00")
    pub tag: String,
    /// Field text
    pub value: String,
}

/// A data field in a MARC record (fields 010 and higher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create a record with the given leader and no fields
    #[must_use]
    pub fn new(leader: Leader) -> Self {
        Record {
            leader,
            fields: Vec::new(),
            encoding: FieldEncoding::Utf8,
        }
    }

    /// Create a builder for fluently constructing MARC records
    #[must_use]
    pub fn builder(leader: Leader) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Turn this record into a builder holding all of its fields
    #[must_use]
    pub fn into_builder(self) -> RecordBuilder {
        RecordBuilder { record: self }
    }

    /// Record leader (24 bytes)
    #[must_use]
    pub fn leader(&self) -> &Leader {
        &self.leader
    }

    /// How field bytes map to text
    #[must_use]
    pub fn encoding(&self) -> FieldEncoding {
        self.encoding
    }

    /// Iterate over every field in directory order
    pub fn variable_fields(&self) -> impl Iterator<Item = &VariableField> {
        self.fields.iter()
    }

    /// Number of fields, which is also the number of directory entries
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over all control fields in directory order
    pub fn control_fields(&self) -> impl Iterator<Item = &ControlField> {
        self.fields.iter().filter_map(|field| match field {
            VariableField::Control(control) => Some(control),
            VariableField::Data(_) => None,
        })
    }

    /// Get the first control field value with the given tag
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields()
            .find(|cf| cf.tag == tag)
            .map(|cf| cf.value.as_str())
    }

    /// Iterate over every control field value with the given tag
    pub fn control_fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> {
        self.control_fields()
            .filter(move |cf| cf.tag == tag)
            .map(|cf| cf.value.as_str())
    }

    /// Iterate over all control fields as (tag, value) pairs
    pub fn control_fields_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.control_fields()
            .map(|cf| (cf.tag.as_str(), cf.value.as_str()))
    }

    /// Get first data field with a given tag
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields().find(|f| f.tag == tag)
    }

    /// Iterate over all data fields in directory order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter_map(|field| match field {
            VariableField::Data(data) => Some(data),
            VariableField::Control(_) => None,
        })
    }

    /// Iterate over data fields matching a specific tag
    ///
    /// # Examples
    ///
    /// ```ignore
    /// for field in record.fields_by_tag("650") {
    ///     if let Some(subject) = field.get_subfield('a') {
    ///         println!("Subject: {}", subject);
    ///     }
    /// }
    /// ```
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> {
        self.fields().filter(move |f| f.tag == tag)
    }

    /// Record format selected by leader/06
    #[must_use]
    pub fn format(&self) -> RecordFormat {
        self.leader.format()
    }

    /// Bibliographic material type from leader/06-07; `None` for other formats
    #[must_use]
    pub fn material_type(&self) -> Option<MaterialType> {
        match self.format() {
            RecordFormat::Bibliography => MaterialType::from_leader(
                self.leader.record_type,
                self.leader.bibliographic_level,
            ),
            _ => None,
        }
    }

    /// Directory entries this record encodes to, in field order, offsets
    /// accumulated from zero.
    #[must_use]
    pub fn directory(&self) -> Vec<DirectoryEntry> {
        let mut start = 0;
        self.fields
            .iter()
            .map(|field| {
                let length = field.encoded_len(self.encoding);
                let entry = DirectoryEntry::new(field.tag(), length, start);
                start += length;
                entry
            })
            .collect()
    }

    /// Decoded 008, merged with every 006 that matches the record's material
    #[must_use]
    pub fn describe_008(&self) -> Cf008Desc {
        fixed_field::describe_008(self)
    }

    /// Decoded 007 fields, one map per occurrence
    #[must_use]
    pub fn describe_007(&self) -> Vec<Cf007Desc> {
        fixed_field::describe_007(self)
    }
}

impl VariableField {
    /// Field tag
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            VariableField::Control(control) => &control.tag,
            VariableField::Data(data) => &data.tag,
        }
    }

    /// Encoded size in bytes under `encoding`, field terminator included
    #[must_use]
    pub fn encoded_len(&self, encoding: FieldEncoding) -> usize {
        match self {
            VariableField::Control(control) => control.encoded_len(encoding),
            VariableField::Data(data) => data.encoded_len(encoding),
        }
    }
}

impl ControlField {
    /// Create a control field
    #[must_use]
    pub fn new(tag: String, value: String) -> Self {
        ControlField { tag, value }
    }

    /// Encoded size in bytes, field terminator included
    #[must_use]
    pub fn encoded_len(&self, encoding: FieldEncoding) -> usize {
        encoding.encoded_len(&self.value) + 1
    }
}

/// Builder for fluently constructing MARC records
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Replace the leader
    #[must_use]
    pub fn leader(mut self, leader: Leader) -> Self {
        self.record.leader = leader;
        self
    }

    /// Set how field text maps to bytes on encode
    #[must_use]
    pub fn encoding(mut self, encoding: FieldEncoding) -> Self {
        self.record.encoding = encoding;
        self
    }

    /// Append a control field to the record being built
    #[must_use]
    pub fn control_field(mut self, tag: String, value: String) -> Self {
        self.push_control_field(tag, value);
        self
    }

    /// Append a control field using string slices
    #[must_use]
    pub fn control_field_str(self, tag: &str, value: &str) -> Self {
        self.control_field(tag.to_string(), value.to_string())
    }

    /// Append a data field to the record being built
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.push_field(field);
        self
    }

    /// Append a control field in place
    pub fn push_control_field(&mut self, tag: String, value: String) {
        self.record
            .fields
            .push(VariableField::Control(ControlField::new(tag, value)));
    }

    /// Append a data field in place
    pub fn push_field(&mut self, field: Field) {
        self.record.fields.push(VariableField::Data(field));
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    #[must_use]
    pub fn builder(tag: String, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get all values for a subfield code
    #[must_use]
    pub fn get_subfield_values(&self, code: char) -> Vec<&str> {
        self.subfields_by_code(code).collect()
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields_by_code(code).next()
    }

    /// Iterate over all subfields
    pub fn subfields(&self) -> impl Iterator<Item = &Subfield> {
        self.subfields.iter()
    }

    /// Iterate over subfields with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Encoded size in bytes: indicators, delimited subfields and terminator
    #[must_use]
    pub fn encoded_len(&self, encoding: FieldEncoding) -> usize {
        let indicators = encoding.char_len(self.indicator1) + encoding.char_len(self.indicator2);
        let subfields: usize = self
            .subfields
            .iter()
            .map(|sf| 1 + encoding.char_len(sf.code) + encoding.encoded_len(&sf.value))
            .sum();
        indicators + subfields + 1
    }
}

/// Builder for fluently constructing data fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::builder(Leader::default())
            .control_field_str("001", "ocm123")
            .control_field_str("007", "ta")
            .control_field_str("007", "cr")
            .field(
                Field::builder("245".to_string(), '1', '0')
                    .subfield_str('a', "Title")
                    .subfield_str('b', "subtitle")
                    .subfield_str('a', "Again")
                    .build(),
            )
            .field(Field::builder("650".to_string(), ' ', '0').subfield_str('a', "One").build())
            .field(Field::builder("650".to_string(), ' ', '0').subfield_str('a', "Two").build())
            .build()
    }

    #[test]
    fn test_repeated_control_fields_are_kept() {
        let record = sample();
        let values: Vec<&str> = record.control_fields_by_tag("007").collect();
        assert_eq!(values, vec!["ta", "cr"]);
        assert_eq!(record.get_control_field("007"), Some("ta"));
        assert_eq!(record.get_control_field("008"), None);
    }

    #[test]
    fn test_get_control_field_with_short_lived_tag() {
        let record = sample();
        let value = {
            let tag = String::from("001");
            record.get_control_field(&tag)
        };
        assert_eq!(value, Some("ocm123"));
    }

    #[test]
    fn test_field_accessors() {
        let record = sample();
        let field = record.get_field("245").unwrap();
        assert_eq!(field.get_subfield('a'), Some("Title"));
        assert_eq!(field.get_subfield_values('a'), vec!["Title", "Again"]);
        assert_eq!(field.get_subfield('z'), None);
        assert_eq!(record.fields_by_tag("650").count(), 2);
        assert_eq!(record.fields().count(), 3);
        assert_eq!(record.control_fields().count(), 3);
        assert_eq!(record.field_count(), 6);
    }

    #[test]
    fn test_directory_offsets_accumulate() {
        let record = sample();
        let directory = record.directory();
        assert_eq!(directory.len(), record.field_count());
        assert_eq!(directory[0], DirectoryEntry::new("001", 7, 0));
        assert_eq!(directory[1], DirectoryEntry::new("007", 3, 7));
        assert_eq!(directory[2], DirectoryEntry::new("007", 3, 10));
        // 2 indicators + "\x1FaTitle" + "\x1Fbsubtitle" + "\x1FaAgain" + terminator
        assert_eq!(directory[3], DirectoryEntry::new("245", 2 + 7 + 10 + 7 + 1, 13));
    }

    #[test]
    fn test_directory_keeps_interleaved_order() {
        let record = Record::builder(Leader::default())
            .field(Field::builder("245".to_string(), '0', '0').subfield_str('a', "T").build())
            .control_field_str("001", "123")
            .build();
        let tags: Vec<String> = record.directory().into_iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec!["245", "001"]);
    }

    #[test]
    fn test_single_byte_lengths_count_characters() {
        let record = Record::builder(Leader::default())
            .encoding(FieldEncoding::SingleByte)
            .control_field_str("001", "Café")
            .build();
        assert_eq!(record.directory()[0].length, 5);
    }

    #[test]
    fn test_material_type_only_for_bibliographic() {
        let record = sample();
        assert_eq!(record.material_type(), Some(MaterialType::Books));

        let mut leader = record.leader().clone();
        leader.record_type = 'z';
        let record = record.into_builder().leader(leader).build();
        assert_eq!(record.format(), RecordFormat::Authority);
        assert_eq!(record.material_type(), None);
    }
}
