//! MARCXML serialization and deserialization of MARC records.
//!
//! This module provides conversion between MARC records and standard MARCXML format,
//! as defined by the Library of Congress (<https://www.loc.gov/standards/marcxml/>).
//!
//! `tag`, `ind1`, `ind2` and `code` are serialized as XML attributes, and text
//! is escaped by the XML layer. A standalone `<record>` carries the
//! `xmlns="http://www.loc.gov/MARC21/slim"` declaration; in collection mode the
//! declaration sits on the `<collection>` wrapper instead.
//!
//! Decoding accepts a `<collection>` or a standalone `<record>`, with the
//! MARCXML namespace as default or prefixed (`<marc:record>`). Text is kept
//! exactly as written, surrounding whitespace included, so fixed-position
//! fields survive. The structured [`Leader`] is always rebuilt from the leader
//! text; its length and base address are recomputed on binary encode.
//!
//! # Examples
//!
//! ```
//! use marcfield::{marcxml, Field, Leader, Record};
//!
//! let mut field = Field::new("245".to_string(), '1', '0');
//! field.add_subfield('a', "Fish & chips".to_string());
//! let record = Record::builder(Leader::default()).field(field).build();
//!
//! let xml = marcxml::record_to_marcxml(&record)?;
//! assert!(xml.contains("Fish &amp; chips"));
//!
//! let restored = marcxml::marcxml_to_record(&xml)?;
//! assert!(restored.fields().eq(record.fields()));
//! # Ok::<(), marcfield::MarcError>(())
//! ```

use crate::error::{MarcError, Result};
use crate::leader::Leader;
use crate::record::{Field, Record, RecordBuilder};
use quick_xml::events::{BytesStart, Event};
use quick_xml::se::to_string as xml_to_string;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// MARCXML namespace URI
pub const MARCXML_NS: &str = "http://www.loc.gov/MARC21/slim";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const COLLECTION_FOOTER: &str = "</collection>\n";

/// MARCXML record element
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "record")]
pub struct MarcxmlRecord {
    /// Leader text
    pub leader: String,
    /// Control fields
    #[serde(default)]
    pub controlfield: Vec<MarcxmlControlField>,
    /// Data fields
    #[serde(default)]
    pub datafield: Vec<MarcxmlDataField>,
}

/// MARCXML control field element
#[derive(Debug, Serialize, Deserialize)]
pub struct MarcxmlControlField {
    /// Field tag
    #[serde(rename = "@tag")]
    pub tag: String,
    /// Field text
    #[serde(rename = "$value")]
    pub value: String,
}

/// MARCXML data field element
#[derive(Debug, Serialize, Deserialize)]
pub struct MarcxmlDataField {
    /// Field tag
    #[serde(rename = "@tag")]
    pub tag: String,
    /// First indicator
    #[serde(rename = "@ind1")]
    pub ind1: String,
    /// Second indicator
    #[serde(rename = "@ind2")]
    pub ind2: String,
    /// Subfields
    #[serde(default)]
    pub subfield: Vec<MarcxmlSubfield>,
}

/// MARCXML subfield element
#[derive(Debug, Serialize, Deserialize)]
pub struct MarcxmlSubfield {
    /// Subfield code
    #[serde(rename = "@code")]
    pub code: String,
    /// Subfield text
    #[serde(rename = "$value")]
    pub value: String,
}

impl From<&Record> for MarcxmlRecord {
    fn from(record: &Record) -> Self {
        MarcxmlRecord {
            leader: record.leader().to_text(),
            controlfield: record
                .control_fields()
                .map(|cf| MarcxmlControlField {
                    tag: cf.tag.clone(),
                    value: cf.value.clone(),
                })
                .collect(),
            datafield: record
                .fields()
                .map(|field| MarcxmlDataField {
                    tag: field.tag.clone(),
                    ind1: field.indicator1.to_string(),
                    ind2: field.indicator2.to_string(),
                    subfield: field
                        .subfields
                        .iter()
                        .map(|sf| MarcxmlSubfield {
                            code: sf.code.to_string(),
                            value: sf.value.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serialization: Record → MARCXML
// ---------------------------------------------------------------------------

/// Serialize one record as a bare `<record>` element, without namespace.
///
/// # Errors
///
/// Returns [`MarcError::XmlError`] if serialization fails.
pub fn record_element(record: &Record) -> Result<String> {
    xml_to_string(&MarcxmlRecord::from(record))
        .map_err(|e| MarcError::XmlError(format!("Failed to serialize to MARCXML: {e}")))
}

/// Serialize a record to a standalone MARCXML document.
///
/// # Errors
///
/// Returns [`MarcError::XmlError`] if serialization fails.
pub fn record_to_marcxml(record: &Record) -> Result<String> {
    let body = record_element(record)?;
    let body = body.replacen("<record>", &format!("<record xmlns=\"{MARCXML_NS}\">"), 1);
    Ok(format!("{XML_DECLARATION}{body}"))
}

/// Serialize records to a MARCXML `<collection>` document.
///
/// # Errors
///
/// Returns [`MarcError::XmlError`] if serialization fails.
pub fn records_to_marcxml(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = MarcXmlWriter::new(&mut buffer);
    for record in records {
        writer.write_record(record)?;
    }
    writer.finish()?;
    String::from_utf8(buffer)
        .map_err(|e| MarcError::XmlError(format!("Serialized MARCXML is not UTF-8: {e}")))
}

/// Streaming writer for a MARCXML collection.
///
/// The collection header is written with the first record (or by
/// [`finish`](MarcXmlWriter::finish) for an empty collection), and the footer
/// by `finish`.
#[derive(Debug)]
pub struct MarcXmlWriter<W: Write> {
    writer: W,
    started: bool,
    finished: bool,
    records_written: usize,
}

impl<W: Write> MarcXmlWriter<W> {
    /// Create a writer over `writer`.
    pub fn new(writer: W) -> Self {
        MarcXmlWriter {
            writer,
            started: false,
            finished: false,
            records_written: 0,
        }
    }

    /// Write one `<record>` element.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer is finished, serialization fails or the
    /// write fails.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.finished {
            return Err(MarcError::XmlError(
                "Cannot write to a finished writer".to_string(),
            ));
        }
        let element = record_element(record)?;
        self.start()?;
        self.writer.write_all(element.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Close the collection and flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.start()?;
        self.writer.write_all(COLLECTION_FOOTER.as_bytes())?;
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Number of records written so far
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn start(&mut self) -> Result<()> {
        if !self.started {
            write!(
                self.writer,
                "{XML_DECLARATION}\n<collection xmlns=\"{MARCXML_NS}\">\n"
            )?;
            self.started = true;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Deserialization: MARCXML → Record
// ---------------------------------------------------------------------------

/// Parse a MARCXML document holding exactly one record.
///
/// A collection is accepted; its first record is returned.
///
/// # Errors
///
/// Returns [`MarcError::XmlError`] for malformed XML or a document without a
/// record, and [`MarcError::InvalidField`] for a field missing its tag or code.
pub fn marcxml_to_record(xml: &str) -> Result<Record> {
    marcxml_to_records(xml)?
        .into_iter()
        .next()
        .ok_or_else(|| MarcError::XmlError("No <record> element found".to_string()))
}

/// Parse every record of a MARCXML collection or standalone record.
///
/// # Errors
///
/// See [`marcxml_to_record`].
pub fn marcxml_to_records(xml: &str) -> Result<Vec<Record>> {
    let mut reader = Reader::from_str(xml);
    let mut parser = Parser::default();
    loop {
        let event = reader
            .read_event()
            .map_err(|e| xml_error(reader.buffer_position(), e))?;
        match event {
            Event::Start(e) => parser.open(&e)?,
            Event::Empty(e) => {
                parser.open(&e)?;
                parser.close(e.local_name().as_ref());
            },
            Event::End(e) => parser.close(e.local_name().as_ref()),
            Event::Text(e) => {
                if parser.wants_text() {
                    let text = e
                        .unescape()
                        .map_err(|err| xml_error(reader.buffer_position(), err))?;
                    parser.text.push_str(&text);
                }
            },
            Event::CData(e) => {
                if parser.wants_text() {
                    parser.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    Ok(parser.records)
}

/// Read every record from a MARCXML source.
///
/// # Errors
///
/// Returns [`MarcError::IoError`] if reading fails or the source is not UTF-8,
/// and otherwise see [`marcxml_to_record`].
pub fn read_records<R: Read>(mut source: R) -> Result<Vec<Record>> {
    let mut xml = String::new();
    source.read_to_string(&mut xml)?;
    marcxml_to_records(&xml)
}

/// Where text content currently goes.
#[derive(Debug, Default)]
enum Slot {
    #[default]
    Ignored,
    Leader,
    Control(String),
    Subfield(char),
}

/// Event-driven builder for the records of one document.
#[derive(Debug, Default)]
struct Parser {
    records: Vec<Record>,
    current: Option<RecordBuilder>,
    field: Option<Field>,
    leader: Option<String>,
    slot: Slot,
    text: String,
}

impl Parser {
    fn wants_text(&self) -> bool {
        !matches!(self.slot, Slot::Ignored)
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        match e.local_name().as_ref() {
            b"record" => {
                self.current = Some(Record::builder(Leader::from_text("")));
                self.leader = None;
            },
            b"leader" => self.begin(Slot::Leader),
            b"controlfield" => {
                let tag = required(e, "tag", "controlfield")?;
                self.begin(Slot::Control(tag));
            },
            b"datafield" => {
                let tag = required(e, "tag", "datafield")?;
                let ind1 = indicator(e, "ind1")?;
                let ind2 = indicator(e, "ind2")?;
                self.field = Some(Field::new(tag, ind1, ind2));
            },
            b"subfield" => {
                let code = required(e, "code", "subfield")?
                    .chars()
                    .next()
                    .ok_or_else(|| MarcError::InvalidField("Missing subfield code".to_string()))?;
                self.begin(Slot::Subfield(code));
            },
            _ => {},
        }
        Ok(())
    }

    fn begin(&mut self, slot: Slot) {
        self.slot = slot;
        self.text.clear();
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"leader" | b"controlfield" | b"subfield" => self.finish_text(),
            b"datafield" => {
                if let (Some(record), Some(field)) = (self.current.as_mut(), self.field.take()) {
                    record.push_field(field);
                }
            },
            b"record" => {
                if let Some(record) = self.current.take() {
                    let leader = Leader::from_text(self.leader.as_deref().unwrap_or_default());
                    self.records.push(record.leader(leader).build());
                }
            },
            _ => {},
        }
    }

    fn finish_text(&mut self) {
        let text = std::mem::take(&mut self.text);
        match std::mem::take(&mut self.slot) {
            Slot::Leader => self.leader = Some(text),
            Slot::Control(tag) => {
                if let Some(record) = self.current.as_mut() {
                    record.push_control_field(tag, text);
                }
            },
            Slot::Subfield(code) => {
                if let Some(field) = self.field.as_mut() {
                    field.add_subfield(code, text);
                }
            },
            Slot::Ignored => {},
        }
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| MarcError::XmlError(format!("Bad attribute: {err}")))?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| MarcError::XmlError(format!("Bad attribute value: {err}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required(e: &BytesStart<'_>, name: &str, element: &str) -> Result<String> {
    attribute(e, name)?
        .ok_or_else(|| MarcError::InvalidField(format!("<{element}> without {name} attribute")))
}

fn indicator(e: &BytesStart<'_>, name: &str) -> Result<char> {
    Ok(attribute(e, name)?
        .and_then(|value| value.chars().next())
        .unwrap_or(' '))
}

fn xml_error(position: usize, err: impl std::fmt::Display) -> MarcError {
    MarcError::XmlError(format!("Failed to parse MARCXML at byte {position}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::builder(Leader::from_text("01142cam  2200301 a 4500"))
            .control_field_str("001", "12345")
            .control_field_str("008", "920219s1990    mau           001 0 eng  ")
            .field(
                Field::builder("245".to_string(), '1', '0')
                    .subfield_str('a', "Test title")
                    .subfield_str('c', " spaced ")
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_record_to_marcxml_output_format() {
        let xml = record_to_marcxml(&sample()).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(&format!("<record xmlns=\"{MARCXML_NS}\">")));
        assert!(xml.contains("<leader>01142cam  2200301 a 4500</leader>"));
        assert!(xml.contains("<controlfield tag=\"001\">12345</controlfield>"));
        assert!(xml.contains("<datafield tag=\"245\" ind1=\"1\" ind2=\"0\">"));
        assert!(xml.contains("<subfield code=\"a\">Test title</subfield>"));
    }

    #[test]
    fn test_roundtrip_keeps_whitespace() {
        let record = sample();
        let restored = marcxml_to_record(&record_to_marcxml(&record).unwrap()).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let xml = r#"<record><leader>00000nam a2200000   4500</leader>
            <datafield tag="245" ind1="0" ind2="0">
                <subfield code="a">Salt &amp; pepper &lt;2nd ed.&gt;</subfield>
            </datafield></record>"#;
        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(
            record.get_field("245").unwrap().get_subfield('a'),
            Some("Salt & pepper <2nd ed.>")
        );
    }

    #[test]
    fn test_parse_marcxml_with_prefix_namespace() {
        let xml = r#"<marc:record xmlns:marc="http://www.loc.gov/MARC21/slim">
            <marc:leader>01234nam a2200289 a 4500</marc:leader>
            <marc:controlfield tag="001">88888</marc:controlfield>
            <marc:datafield tag="245" ind1="1" ind2="0">
                <marc:subfield code="a">Prefixed title</marc:subfield>
            </marc:datafield>
        </marc:record>"#;

        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(record.get_control_field("001"), Some("88888"));
        assert_eq!(
            record.get_field("245").unwrap().get_subfield('a'),
            Some("Prefixed title")
        );
    }

    #[test]
    fn test_parse_collection() {
        let xml = r#"<collection xmlns="http://www.loc.gov/MARC21/slim">
            <record>
                <leader>01234nam a2200289 a 4500</leader>
                <controlfield tag="001">rec1</controlfield>
            </record>
            <record>
                <leader>01234nz  a2200289n  4500</leader>
                <controlfield tag="001">rec2</controlfield>
            </record>
        </collection>"#;

        let records = marcxml_to_records(xml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_control_field("001"), Some("rec1"));
        assert_eq!(records[1].get_control_field("001"), Some("rec2"));
        assert_eq!(records[1].format(), crate::leader::RecordFormat::Authority);
    }

    #[test]
    fn test_leader_is_rederived() {
        let xml = r#"<record><leader>     cas a22     2a 4500</leader></record>"#;
        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(record.leader().record_type, 'a');
        assert_eq!(
            record.leader().bibliographic_level().unwrap().label,
            "Serial"
        );
        assert_eq!(
            record.material_type(),
            Some(crate::fixed_field::MaterialType::ContinuingResources)
        );
    }

    #[test]
    fn test_empty_elements() {
        let xml = r#"<record><leader>00000nam a2200000   4500</leader>
            <controlfield tag="003"/>
            <datafield tag="500" ind1=" " ind2=" "><subfield code="a"/></datafield>
        </record>"#;
        let record = marcxml_to_record(xml).unwrap();
        assert_eq!(record.get_control_field("003"), Some(""));
        assert_eq!(record.get_field("500").unwrap().get_subfield('a'), Some(""));
    }

    #[test]
    fn test_missing_code_is_an_error() {
        let xml = r#"<record><leader>00000nam a2200000   4500</leader>
            <datafield tag="500" ind1=" " ind2=" "><subfield>x</subfield></datafield>
        </record>"#;
        assert!(matches!(
            marcxml_to_record(xml),
            Err(MarcError::InvalidField(_))
        ));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let err = marcxml_to_records("<record><leader>x</record>").unwrap_err();
        assert!(matches!(err, MarcError::XmlError(_)), "got: {err}");
    }

    #[test]
    fn test_no_record_is_an_error() {
        assert!(marcxml_to_record("<collection/>").is_err());
    }

    #[test]
    fn test_collection_writer() {
        let xml = records_to_marcxml(&[sample(), sample()]).unwrap();
        assert!(xml.starts_with(&format!(
            "{XML_DECLARATION}\n<collection xmlns=\"{MARCXML_NS}\">\n<record>"
        )));
        assert!(xml.ends_with(COLLECTION_FOOTER));
        assert_eq!(marcxml_to_records(&xml).unwrap().len(), 2);

        let empty = records_to_marcxml(&[]).unwrap();
        assert!(marcxml_to_records(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_read_records_from_reader() {
        let xml = records_to_marcxml(&[sample()]).unwrap();
        let records = read_records(xml.as_bytes()).unwrap();
        assert_eq!(records, vec![sample()]);
    }
}
