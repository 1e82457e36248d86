//! Reading MARC records from binary streams.
//!
//! This module provides [`MarcReader`] for reading ISO 2709 formatted MARC records
//! from any source that implements [`std::io::Read`], and [`parse_record`] for
//! decoding a record already held in memory.
//!
//! Reading happens in two steps. [`MarcReader::read_raw`] frames one record
//! from the stream using its 5-digit length prefix; [`parse_record`] decodes
//! the framed bytes into a [`Record`]. A failure in the second step leaves the
//! stream on the next record boundary.
//!
//! # Examples
//!
//! Reading records from a file:
//!
//! ```no_run
//! use marcfield::MarcReader;
//! use std::fs::File;
//!
//! let file = File::open("records.mrc")?;
//! let mut reader = MarcReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     println!("Record type: {}", record.leader().record_type);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::directory::{
    parse_directory, DirectoryEntry, FIELD_TERMINATOR, RECORD_TERMINATOR, SUBFIELD_DELIMITER,
};
use crate::encoding::FieldEncoding;
use crate::error::{MarcError, PartialFieldWarning, Result};
use crate::leader::{Leader, LEADER_LEN};
use crate::record::{ControlField, Field, Record, VariableField};
use crate::recovery::RecoveryMode;
use log::{debug, trace, warn};
use std::io::{ErrorKind, Read};

/// Width of the record length prefix.
const LENGTH_PREFIX_LEN: usize = 5;

/// The bytes of one framed record, length prefix through record terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    bytes: Vec<u8>,
}

impl RawRecord {
    /// The record bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the record bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Record length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a framed record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the record
    ///
    /// # Errors
    ///
    /// See [`parse_record`].
    pub fn decode(&self) -> Result<Record> {
        parse_record(&self.bytes)
    }
}

/// Reader for ISO 2709 binary MARC format.
///
/// `MarcReader` reads one MARC record at a time from any source implementing [`std::io::Read`].
///
/// # Examples
///
/// ```
/// use marcfield::MarcReader;
/// use std::io::Cursor;
///
/// let mut reader = MarcReader::new(Cursor::new(Vec::new()));
///
/// match reader.read_record() {
///     Ok(Some(record)) => println!("Record type: {}", record.leader().record_type),
///     Ok(None) => println!("End of file"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
#[derive(Debug)]
pub struct MarcReader<R: Read> {
    reader: R,
    recovery_mode: RecoveryMode,
    records_read: usize,
    records_skipped: usize,
}

impl<R: Read> MarcReader<R> {
    /// Create a new MARC reader.
    pub fn new(reader: R) -> Self {
        MarcReader {
            reader,
            recovery_mode: RecoveryMode::Strict,
            records_read: 0,
            records_skipped: 0,
        }
    }

    /// Set the recovery mode for handling malformed records.
    ///
    /// # Examples
    ///
    /// ```
    /// use marcfield::{MarcReader, RecoveryMode};
    /// use std::io::Cursor;
    ///
    /// let reader = MarcReader::new(Cursor::new(Vec::new()))
    ///     .with_recovery_mode(RecoveryMode::Skip);
    /// assert_eq!(reader.recovery_mode(), RecoveryMode::Skip);
    /// ```
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// The active recovery mode
    #[must_use]
    pub fn recovery_mode(&self) -> RecoveryMode {
        self.recovery_mode
    }

    /// Number of records successfully decoded so far
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of records dropped under [`RecoveryMode::Skip`]
    #[must_use]
    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }

    /// Frame the next record without decoding it.
    ///
    /// Returns `Ok(None)` when the stream ends cleanly on a record boundary.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidRecord`] if the length prefix is not five
    /// digits, declares a record no longer than the leader, the stream ends
    /// inside the record, or the last byte is not the record terminator.
    /// I/O failures are returned as [`MarcError::IoError`].
    pub fn read_raw(&mut self) -> Result<Option<RawRecord>> {
        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        let filled = read_until_full(&mut self.reader, &mut prefix)?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < LENGTH_PREFIX_LEN {
            return Err(MarcError::InvalidRecord(format!(
                "Stream ended inside length prefix after {filled} bytes"
            )));
        }

        let length = parse_length_prefix(&prefix)?;
        if length <= LEADER_LEN {
            return Err(MarcError::InvalidRecord(format!(
                "Record length {length} too short (must exceed the {LEADER_LEN}-byte leader)"
            )));
        }

        let mut bytes = vec![0u8; length];
        bytes[..LENGTH_PREFIX_LEN].copy_from_slice(&prefix);
        match self.reader.read_exact(&mut bytes[LENGTH_PREFIX_LEN..]) {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(MarcError::InvalidRecord(format!(
                    "Truncated record: stream ended before {length} bytes"
                )));
            },
            Err(e) => return Err(MarcError::IoError(e)),
        }

        if bytes.last() != Some(&RECORD_TERMINATOR) {
            return Err(MarcError::InvalidRecord(format!(
                "Record of length {length} does not end with a record terminator"
            )));
        }

        debug!("framed record of {length} bytes");
        Ok(Some(RawRecord { bytes }))
    }

    /// Read a single MARC record.
    ///
    /// Returns `Ok(Some(record))` if a record was successfully read, `Ok(None)` if EOF
    /// was reached, or `Err` if a parsing error occurred. Under
    /// [`RecoveryMode::Skip`], records failing with a record-local error are
    /// logged and passed over.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The stream framing is broken (always fatal)
    /// - The record structure is invalid and the recovery mode is strict
    /// - An I/O error occurs
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        loop {
            let Some(raw) = self.read_raw()? else {
                return Ok(None);
            };
            match raw.decode() {
                Ok(record) => {
                    self.records_read += 1;
                    return Ok(Some(record));
                },
                Err(e) if e.is_record_local() && self.recovery_mode.skips_bad_records() => {
                    self.records_skipped += 1;
                    warn!(
                        "skipping record {} after {} good: {e}",
                        self.records_read + self.records_skipped,
                        self.records_read
                    );
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Iterate over the remaining records.
    ///
    /// The iterator yields `Err` at most once; iteration ends after any error
    /// that reaches it.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }
}

/// Iterator over the records of a [`MarcReader`].
#[derive(Debug)]
pub struct Records<'a, R: Read> {
    reader: &'a mut MarcReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(e) => {
                self.done = true;
                Some(Err(e))
            },
        }
    }
}

/// Decode one framed record.
///
/// A control field whose directory slice does not end in a field terminator
/// is kept as sliced and reported once, through `log::warn!`, after the whole
/// record is decoded. Use [`parse_record_with_warnings`] to receive the
/// report instead.
///
/// # Errors
///
/// See [`parse_record_with_warnings`].
pub fn parse_record(raw: &[u8]) -> Result<Record> {
    let (record, warning) = parse_record_with_warnings(raw)?;
    if let Some(warning) = warning {
        warn!("{warning}");
    }
    Ok(record)
}

/// Decode one framed record, returning any partial-field report.
///
/// Field text is decoded as UTF-8 when the whole record allows it, and
/// byte-for-byte otherwise (see [`FieldEncoding`]), so re-encoding the result
/// reproduces `raw` exactly for any well-formed record.
///
/// # Errors
///
/// - [`MarcError::InvalidRecord`] if `raw` is not longer than the leader
/// - [`MarcError::InvalidLeader`] if the leader is malformed or disagrees with
///   the record length
/// - [`MarcError::InvalidDirectory`] for a malformed directory or an entry
///   pointing outside the record
/// - [`MarcError::InvalidField`] for a data field without its terminator
pub fn parse_record_with_warnings(raw: &[u8]) -> Result<(Record, Option<PartialFieldWarning>)> {
    if raw.len() <= LEADER_LEN {
        return Err(MarcError::InvalidRecord(format!(
            "Record length {} too short",
            raw.len()
        )));
    }

    let leader = Leader::from_bytes(&raw[..LEADER_LEN])?;
    leader.validate_for_reading(raw.len())?;

    let base = leader.data_base_address as usize;
    let directory = parse_directory(&raw[LEADER_LEN..base])?;
    trace!("directory holds {} entries", directory.len());

    let data = &raw[base..];
    let (encoding, fields, partial) = match decode_fields(&directory, data, FieldEncoding::Utf8)? {
        Some((fields, partial)) => (FieldEncoding::Utf8, fields, partial),
        None => {
            debug!("field bytes are not UTF-8; keeping them byte for byte");
            let decoded = decode_fields(&directory, data, FieldEncoding::SingleByte)?;
            let (fields, partial) = decoded.unwrap_or_default();
            (FieldEncoding::SingleByte, fields, partial)
        },
    };

    let mut builder = Record::builder(leader).encoding(encoding);
    for field in fields {
        match field {
            VariableField::Control(control) => builder.push_control_field(control.tag, control.value),
            VariableField::Data(data_field) => builder.push_field(data_field),
        }
    }

    let warning = (!partial.is_empty()).then_some(PartialFieldWarning { tags: partial });
    Ok((builder.build(), warning))
}

/// Decoded fields in directory order plus the tags of salvaged control fields.
type DecodedFields = (Vec<VariableField>, Vec<String>);

/// Decode every field under `encoding`.
///
/// Returns `Ok(None)` when some text is not valid in `encoding`; structural
/// errors are reported whatever the encoding.
fn decode_fields(
    directory: &[DirectoryEntry],
    data: &[u8],
    encoding: FieldEncoding,
) -> Result<Option<DecodedFields>> {
    let mut fields = Vec::with_capacity(directory.len());
    let mut partial = Vec::new();

    for entry in directory {
        let slice = data.get(entry.start..entry.end()).ok_or_else(|| {
            MarcError::InvalidDirectory(format!(
                "Field {} at offset {} with length {} runs past the end of the record",
                entry.tag, entry.start, entry.length
            ))
        })?;

        if entry.is_control() {
            let text = match slice.split_last() {
                Some((&FIELD_TERMINATOR, body)) => body,
                _ => {
                    partial.push(entry.tag.clone());
                    slice
                },
            };
            let Some(value) = encoding.decode(text) else {
                return Ok(None);
            };
            fields.push(VariableField::Control(ControlField::new(entry.tag.clone(), value)));
        } else {
            let Some(field) = parse_data_field(&entry.tag, slice, encoding)? else {
                return Ok(None);
            };
            fields.push(VariableField::Data(field));
        }
    }
    Ok(Some((fields, partial)))
}

/// Parse a data field from its directory slice, terminator included.
///
/// Returns `Ok(None)` when the content is not valid in `encoding`.
fn parse_data_field(tag: &str, slice: &[u8], encoding: FieldEncoding) -> Result<Option<Field>> {
    let Some((&FIELD_TERMINATOR, body)) = slice.split_last() else {
        return Err(MarcError::InvalidField(format!(
            "Field {tag} is missing its field terminator"
        )));
    };

    let indicator = |index: usize| match body.get(index) {
        Some(&byte) => encoding.decode_byte(byte),
        None => Some(' '),
    };
    let (Some(indicator1), Some(indicator2)) = (indicator(0), indicator(1)) else {
        return Ok(None);
    };
    let mut field = Field::new(tag.to_string(), indicator1, indicator2);

    let subfield_data = body.get(2..).unwrap_or_default();
    for segment in subfield_data.split(|&b| b == SUBFIELD_DELIMITER) {
        if segment.is_empty() {
            continue;
        }
        let Some(text) = encoding.decode(segment) else {
            return Ok(None);
        };
        let mut chars = text.chars();
        if let Some(code) = chars.next() {
            field.add_subfield(code, chars.as_str().to_string());
        }
    }
    Ok(Some(field))
}

/// Read into `buf` until it is full or the stream ends; returns bytes read.
fn read_until_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {},
            Err(e) => return Err(MarcError::IoError(e)),
        }
    }
    Ok(filled)
}

fn parse_length_prefix(prefix: &[u8; LENGTH_PREFIX_LEN]) -> Result<usize> {
    prefix.iter().try_fold(0usize, |acc, &byte| {
        if byte.is_ascii_digit() {
            Ok(acc * 10 + usize::from(byte - b'0'))
        } else {
            Err(MarcError::InvalidRecord(format!(
                "Invalid record length prefix {:?}",
                String::from_utf8_lossy(prefix)
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::encode_record;
    use std::io::Cursor;

    /// Assemble a record from (tag, field bytes) pairs, terminators included.
    fn assemble(leader_tail: &[u8; 19], fields: &[(&str, Vec<u8>)]) -> Vec<u8> {
        let mut directory = Vec::new();
        let mut data = Vec::new();
        for (tag, bytes) in fields {
            directory.extend_from_slice(tag.as_bytes());
            directory.extend_from_slice(format!("{:04}{:05}", bytes.len(), data.len()).as_bytes());
            data.extend_from_slice(bytes);
        }
        directory.push(FIELD_TERMINATOR);

        let base = LEADER_LEN + directory.len();
        let length = base + data.len() + 1;
        let mut out = format!("{length:05}").into_bytes();
        out.extend_from_slice(&leader_tail[..7]);
        out.extend_from_slice(format!("{base:05}").as_bytes());
        out.extend_from_slice(&leader_tail[12..]);
        out.extend_from_slice(&directory);
        out.extend_from_slice(&data);
        out.push(RECORD_TERMINATOR);
        out
    }

    const TAIL: &[u8; 19] = b"nam a22?????   4500";

    fn control(text: &str) -> Vec<u8> {
        let mut v = text.as_bytes().to_vec();
        v.push(FIELD_TERMINATOR);
        v
    }

    fn data_field(ind: &str, subfields: &[(char, &str)]) -> Vec<u8> {
        let mut v = ind.as_bytes().to_vec();
        for (code, text) in subfields {
            v.push(SUBFIELD_DELIMITER);
            v.extend_from_slice(code.to_string().as_bytes());
            v.extend_from_slice(text.as_bytes());
        }
        v.push(FIELD_TERMINATOR);
        v
    }

    fn simple_record() -> Vec<u8> {
        assemble(
            TAIL,
            &[
                ("001", control("12345")),
                ("245", data_field("10", &[('a', "Test title"), ('c', "Someone")])),
            ],
        )
    }

    #[test]
    fn test_read_simple_record() {
        let mut reader = MarcReader::new(Cursor::new(simple_record()));
        let record = reader.read_record().unwrap().unwrap();

        assert_eq!(record.leader().record_type, 'a');
        assert_eq!(record.get_control_field("001"), Some("12345"));
        let field = record.get_field("245").unwrap();
        assert_eq!(field.indicator1, '1');
        assert_eq!(field.indicator2, '0');
        assert_eq!(field.get_subfield('a'), Some("Test title"));
        assert_eq!(field.get_subfield('c'), Some("Someone"));
        assert_eq!(reader.records_read(), 1);
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn test_eof_returns_none() {
        let mut reader = MarcReader::new(Cursor::new(Vec::new()));
        assert!(reader.read_raw().unwrap().is_none());
    }

    #[test]
    fn test_length_prefix_too_short() {
        let mut reader = MarcReader::new(Cursor::new(b"00010nam a2200000".to_vec()));
        let err = reader.read_raw().unwrap_err();
        assert!(matches!(err, MarcError::InvalidRecord(_)));
        assert!(err.to_string().contains("too short"), "got: {err}");
    }

    #[test]
    fn test_non_digit_length_prefix() {
        let mut reader = MarcReader::new(Cursor::new(b"0x100nam".to_vec()));
        let err = reader.read_raw().unwrap_err();
        assert!(err.to_string().contains("length prefix"), "got: {err}");
    }

    #[test]
    fn test_partial_prefix_is_an_error() {
        let mut reader = MarcReader::new(Cursor::new(b"001".to_vec()));
        assert!(reader.read_raw().is_err());
    }

    #[test]
    fn test_truncated_record() {
        let mut bytes = simple_record();
        bytes.truncate(bytes.len() - 3);
        let mut reader = MarcReader::new(Cursor::new(bytes));
        let err = reader.read_raw().unwrap_err();
        assert!(err.to_string().contains("Truncated"), "got: {err}");
    }

    #[test]
    fn test_missing_record_terminator() {
        let mut bytes = simple_record();
        let last = bytes.len() - 1;
        bytes[last] = b'X';
        let mut reader = MarcReader::new(Cursor::new(bytes));
        let err = reader.read_raw().unwrap_err();
        assert!(err.to_string().contains("record terminator"), "got: {err}");
    }

    #[test]
    fn test_control_field_without_terminator_is_kept() {
        // 005 has no terminator; its slice still ends where 008 begins.
        let bytes = assemble(
            TAIL,
            &[
                ("005", b"19940223151047.0".to_vec()),
                ("008", control("940223s1993    xx            000 0 eng d")),
            ],
        );
        let (record, warning) = parse_record_with_warnings(&bytes).unwrap();
        assert_eq!(record.get_control_field("005"), Some("19940223151047.0"));
        assert_eq!(warning.unwrap().tags, vec!["005".to_string()]);
    }

    #[test]
    fn test_data_field_without_terminator_is_fatal() {
        let mut field = data_field("10", &[('a', "Title")]);
        field.pop();
        let bytes = assemble(TAIL, &[("245", field)]);
        let err = parse_record(&bytes).unwrap_err();
        assert!(matches!(err, MarcError::InvalidField(_)));
    }

    #[test]
    fn test_missing_indicators_default_to_blank() {
        let bytes = assemble(TAIL, &[("500", vec![FIELD_TERMINATOR])]);
        let record = parse_record(&bytes).unwrap();
        let field = record.get_field("500").unwrap();
        assert_eq!((field.indicator1, field.indicator2), (' ', ' '));
        assert!(field.subfields.is_empty());
    }

    #[test]
    fn test_empty_subfield_segments_are_dropped() {
        let mut field = b"  ".to_vec();
        field.extend_from_slice(&[SUBFIELD_DELIMITER, SUBFIELD_DELIMITER, b'a']);
        field.extend_from_slice(b"Text");
        field.push(FIELD_TERMINATOR);
        let bytes = assemble(TAIL, &[("500", field)]);
        let record = parse_record(&bytes).unwrap();
        let field = record.get_field("500").unwrap();
        assert_eq!(field.subfields.len(), 1);
        assert_eq!(field.get_subfield('a'), Some("Text"));
    }

    #[test]
    fn test_non_utf8_subfield_reencodes_byte_for_byte() {
        let mut field = b"10".to_vec();
        field.push(SUBFIELD_DELIMITER);
        field.extend_from_slice(b"aCaf\xE2e");
        field.push(FIELD_TERMINATOR);
        let bytes = assemble(TAIL, &[("001", control("12345")), ("245", field)]);

        let record = parse_record(&bytes).unwrap();
        assert_eq!(record.encoding(), FieldEncoding::SingleByte);
        assert_eq!(record.get_control_field("001"), Some("12345"));
        assert_eq!(record.get_field("245").unwrap().get_subfield('a'), Some("Cafâe"));
        assert_eq!(encode_record(&record).unwrap(), bytes);
    }

    #[test]
    fn test_non_ascii_indicator_falls_back_to_single_byte() {
        let mut field = vec![0xE9, b'0', SUBFIELD_DELIMITER, b'a'];
        field.extend_from_slice(b"Title");
        field.push(FIELD_TERMINATOR);
        let bytes = assemble(TAIL, &[("245", field)]);

        let record = parse_record(&bytes).unwrap();
        assert_eq!(record.encoding(), FieldEncoding::SingleByte);
        assert_eq!(record.get_field("245").unwrap().indicator1, 'é');
        assert_eq!(encode_record(&record).unwrap(), bytes);
    }

    #[test]
    fn test_utf8_record_stays_utf8() {
        let bytes = assemble(TAIL, &[("245", data_field("00", &[('a', "Café")]))]);
        let record = parse_record(&bytes).unwrap();
        assert_eq!(record.encoding(), FieldEncoding::Utf8);
        assert_eq!(record.get_field("245").unwrap().get_subfield('a'), Some("Café"));
        assert_eq!(encode_record(&record).unwrap(), bytes);
    }

    #[test]
    fn test_directory_order_survives_reencoding() {
        let bytes = assemble(
            TAIL,
            &[
                ("245", data_field("00", &[('a', "Title")])),
                ("001", control("123")),
            ],
        );
        assert_eq!(&bytes[LEADER_LEN..LEADER_LEN + 24], b"245001000000001000400010");

        let record = parse_record(&bytes).unwrap();
        let tags: Vec<&str> = record.variable_fields().map(VariableField::tag).collect();
        assert_eq!(tags, ["245", "001"]);
        assert_eq!(encode_record(&record).unwrap(), bytes);
    }

    #[test]
    fn test_entry_past_end_of_record() {
        let mut bytes = simple_record();
        // Bump the 245 entry offset far past the data area.
        let entry = LEADER_LEN + 12 + 7;
        bytes[entry..entry + 5].copy_from_slice(b"09000");
        let err = parse_record(&bytes).unwrap_err();
        assert!(matches!(err, MarcError::InvalidDirectory(_)), "got: {err}");
    }

    #[test]
    fn test_non_digit_directory_entry() {
        let mut bytes = simple_record();
        bytes[LEADER_LEN + 4] = b'x';
        let err = parse_record(&bytes).unwrap_err();
        assert!(matches!(err, MarcError::InvalidDirectory(_)), "got: {err}");
    }

    #[test]
    fn test_skip_mode_passes_over_bad_records() {
        let mut bad = simple_record();
        bad[LEADER_LEN + 4] = b'x';
        let mut stream = bad.clone();
        stream.extend_from_slice(&simple_record());

        let mut strict = MarcReader::new(Cursor::new(stream.clone()));
        let results: Vec<_> = strict.records().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());

        let mut lenient =
            MarcReader::new(Cursor::new(stream)).with_recovery_mode(RecoveryMode::Skip);
        let records: Vec<_> = lenient.records().collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(lenient.records_skipped(), 1);
        assert_eq!(lenient.records_read(), 1);
    }

    #[test]
    fn test_skip_mode_still_stops_on_framing_errors() {
        let mut stream = simple_record();
        stream.extend_from_slice(b"00010");
        let mut reader = MarcReader::new(Cursor::new(stream)).with_recovery_mode(RecoveryMode::Skip);
        let results: Vec<_> = reader.records().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
