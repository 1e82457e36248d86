//! MARC record leader parsing and manipulation.
//!
//! The MARC leader is a 24-byte fixed-length field at the start of every MARC record.
//! It contains metadata describing the record's structure, content type, and encoding.
//!
//! # Structure
//!
//! - Positions 0-4: Record length (5 digits)
//! - Position 5: Record status
//! - Position 6: Type of record, which selects the [`RecordFormat`]
//! - Position 7: Bibliographic level (bibliographic records only)
//! - Position 8: Type of control (bibliographic records only)
//! - Position 9: Character coding scheme (space = MARC-8, a = UCS/Unicode)
//! - Position 10: Indicator count (usually 2)
//! - Position 11: Subfield code count (usually 2)
//! - Positions 12-16: Base address of data (5 digits)
//! - Positions 17-19: Encoding level, cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")
//!
//! Several positions mean different things in different formats. The
//! format-scoped accessors ([`Leader::bibliographic_level`] and friends)
//! return `None` when the record's format is not the one they describe.

use crate::error::{MarcError, Result};
use crate::fixed_field::{code_lookup, CodeTable, CodeValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the leader in bytes.
pub const LEADER_LEN: usize = 24;

/// Record format family, derived from leader position 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordFormat {
    /// Bibliographic data (language material, music, maps, ...)
    Bibliography,
    /// Holdings data (u, v, x, y)
    Holdings,
    /// Authority data (z)
    Authority,
    /// Classification data (w)
    Classification,
    /// Community information (q)
    Community,
    /// Any other type code
    Unknown,
}

impl RecordFormat {
    /// Map a leader/06 type-of-record code to its format family.
    #[must_use]
    pub fn from_record_type(code: char) -> Self {
        match code {
            'a' | 'c' | 'd' | 'e' | 'f' | 'g' | 'i' | 'j' | 'k' | 'm' | 'o' | 'p' | 'r' | 't' => {
                RecordFormat::Bibliography
            },
            'u' | 'v' | 'x' | 'y' => RecordFormat::Holdings,
            'z' => RecordFormat::Authority,
            'w' => RecordFormat::Classification,
            'q' => RecordFormat::Community,
            _ => RecordFormat::Unknown,
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bibliography => write!(f, "Bibliography"),
            Self::Holdings => write!(f, "Holdings"),
            Self::Authority => write!(f, "Authority"),
            Self::Classification => write!(f, "Classification"),
            Self::Community => write!(f, "Community Information"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// MARC Leader - 24 bytes at the start of every MARC record.
///
/// Contains metadata about the record structure and content.
/// All MARC records must begin with exactly 24 bytes of leader information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Record length (5 digits) - positions 0-4
    pub record_length: u32,
    /// Record status (1 char) - position 5
    pub record_status: char,
    /// Type of record (1 char) - position 6
    pub record_type: char,
    /// Bibliographic level (1 char) - position 7
    pub bibliographic_level: char,
    /// Type of control record (1 char) - position 8
    pub control_record_type: char,
    /// Character coding scheme (1 char) - position 9
    pub character_coding: char,
    /// Indicator count - position 10 (usually '2'), kept as written
    pub indicator_count: char,
    /// Subfield code count - position 11 (usually '2'), kept as written
    pub subfield_code_count: char,
    /// Base address of data (5 digits) - positions 12-16
    pub data_base_address: u32,
    /// Encoding level (1 char) - position 17
    pub encoding_level: char,
    /// Cataloging form (1 char) - position 18
    pub cataloging_form: char,
    /// Multipart resource record level (1 char) - position 19
    pub multipart_level: char,
    /// Entry map (4 chars) - positions 20-23
    pub reserved: String,
}

impl Leader {
    /// Parse a leader from 24 bytes
    ///
    /// Only the record length and base address must be digits. Every other
    /// position is kept as the byte it holds, one character per byte, so
    /// [`as_bytes`](Leader::as_bytes) gives the same 24 bytes back.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are too short or a length position
    /// holds something other than ASCII digits.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < LEADER_LEN {
            return Err(MarcError::InvalidLeader(format!(
                "Leader must be at least {LEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let at = |index: usize| char::from(bytes[index]);
        Ok(Leader {
            record_length: parse_digits(&bytes[0..5])?,
            record_status: at(5),
            record_type: at(6),
            bibliographic_level: at(7),
            control_record_type: at(8),
            character_coding: at(9),
            indicator_count: at(10),
            subfield_code_count: at(11),
            data_base_address: parse_digits(&bytes[12..17])?,
            encoding_level: at(17),
            cataloging_form: at(18),
            multipart_level: at(19),
            reserved: bytes[20..24].iter().copied().map(char::from).collect(),
        })
    }

    /// Build a leader from MARCXML `<leader>` text.
    ///
    /// MARCXML producers frequently blank out or zero the length and base
    /// address, since neither means anything outside the binary framing. Those
    /// positions are parsed when they hold digits and read as zero otherwise;
    /// the writer recomputes both. Short text is padded with spaces, except
    /// the indicator and subfield code counts, which default to `2`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let given: Vec<char> = text.chars().take(LEADER_LEN).collect();
        let at = |index: usize, fallback: char| given.get(index).copied().unwrap_or(fallback);
        let number = |range: std::ops::Range<usize>| {
            range
                .map(|index| at(index, ' ').to_digit(10))
                .try_fold(0u32, |acc, digit| digit.map(|d| acc * 10 + d))
                .unwrap_or(0)
        };

        Leader {
            record_length: number(0..5),
            record_status: at(5, ' '),
            record_type: at(6, ' '),
            bibliographic_level: at(7, ' '),
            control_record_type: at(8, ' '),
            character_coding: at(9, ' '),
            indicator_count: at(10, '2'),
            subfield_code_count: at(11, '2'),
            data_base_address: number(12..17),
            encoding_level: at(17, ' '),
            cataloging_form: at(18, ' '),
            multipart_level: at(19, ' '),
            reserved: (20..24).map(|index| at(index, ' ')).collect(),
        }
    }

    /// Check the leader against the raw record it was sliced from.
    ///
    /// The declared length must equal the actual record length and the base
    /// address must fall between the end of the leader and the end of the record.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated constraint.
    pub fn validate_for_reading(&self, raw_len: usize) -> Result<()> {
        if self.record_length as usize != raw_len {
            return Err(MarcError::InvalidLeader(format!(
                "Declared record length {} does not match actual length {raw_len}",
                self.record_length
            )));
        }
        let base = self.data_base_address as usize;
        if base <= LEADER_LEN || base > raw_len {
            return Err(MarcError::InvalidLeader(format!(
                "Base address of data {base} outside record of length {raw_len}"
            )));
        }
        Ok(())
    }

    /// Serialize leader to 24-byte array
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths do not fit five digits, a position
    /// holds a character above U+00FF, or the entry map is not exactly four
    /// characters.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        if self.record_length > 99_999 || self.data_base_address > 99_999 {
            return Err(MarcError::InvalidLeader(format!(
                "Record length {} or base address {} exceeds 5 digits",
                self.record_length, self.data_base_address
            )));
        }
        if self.reserved.chars().count() != 4 {
            return Err(MarcError::InvalidLeader(format!(
                "Entry map must be 4 characters, got {:?}",
                self.reserved
            )));
        }

        let mut bytes = Vec::with_capacity(LEADER_LEN);
        bytes.extend_from_slice(format!("{:05}", self.record_length).as_bytes());
        for c in [
            self.record_status,
            self.record_type,
            self.bibliographic_level,
            self.control_record_type,
            self.character_coding,
            self.indicator_count,
            self.subfield_code_count,
        ] {
            push_byte(&mut bytes, c)?;
        }
        bytes.extend_from_slice(format!("{:05}", self.data_base_address).as_bytes());
        for c in [self.encoding_level, self.cataloging_form, self.multipart_level] {
            push_byte(&mut bytes, c)?;
        }
        for c in self.reserved.chars() {
            push_byte(&mut bytes, c)?;
        }
        Ok(bytes)
    }

    /// The 24 leader positions as text.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "{:05}{}{}{}{}{}{}{}{:05}{}{}{}{}",
            self.record_length % 100_000,
            self.record_status,
            self.record_type,
            self.bibliographic_level,
            self.control_record_type,
            self.character_coding,
            self.indicator_count,
            self.subfield_code_count,
            self.data_base_address % 100_000,
            self.encoding_level,
            self.cataloging_form,
            self.multipart_level,
            self.reserved
        )
    }

    /// Record format family selected by position 6.
    #[must_use]
    pub fn format(&self) -> RecordFormat {
        RecordFormat::from_record_type(self.record_type)
    }

    /// Record status (05), labelled with the table of this record's format.
    #[must_use]
    pub fn record_status(&self) -> CodeValue {
        let table = match self.format() {
            RecordFormat::Bibliography => BIB_RECORD_STATUS,
            RecordFormat::Authority => AUTH_RECORD_STATUS,
            RecordFormat::Classification => CLASS_RECORD_STATUS,
            RecordFormat::Holdings | RecordFormat::Community | RecordFormat::Unknown => {
                SHORT_RECORD_STATUS
            },
        };
        code_value(table, self.record_status, 5)
    }

    /// Type of record (06).
    #[must_use]
    pub fn record_type(&self) -> CodeValue {
        code_value(RECORD_TYPE, self.record_type, 6)
    }

    /// Bibliographic level (07); bibliographic records only.
    #[must_use]
    pub fn bibliographic_level(&self) -> Option<CodeValue> {
        self.scoped(RecordFormat::Bibliography, BIB_LEVEL, self.bibliographic_level, 7)
    }

    /// Type of control (08); bibliographic records only.
    #[must_use]
    pub fn control_type(&self) -> Option<CodeValue> {
        self.scoped(RecordFormat::Bibliography, CONTROL_TYPE, self.control_record_type, 8)
    }

    /// Character coding scheme (09); defined for every format.
    #[must_use]
    pub fn character_coding_scheme(&self) -> CodeValue {
        code_value(CHARACTER_CODING, self.character_coding, 9)
    }

    /// Encoding level (17), using the table of this record's format.
    ///
    /// Returns `None` for records of unknown format.
    #[must_use]
    pub fn encoding_level(&self) -> Option<CodeValue> {
        let table = match self.format() {
            RecordFormat::Bibliography => BIB_ENCODING_LEVEL,
            RecordFormat::Holdings => HOLDINGS_ENCODING_LEVEL,
            RecordFormat::Authority | RecordFormat::Classification | RecordFormat::Community => {
                COMPLETENESS_ENCODING_LEVEL
            },
            RecordFormat::Unknown => return None,
        };
        Some(code_value(table, self.encoding_level, 17))
    }

    /// Descriptive cataloging form (18); bibliographic records only.
    #[must_use]
    pub fn cataloging_form(&self) -> Option<CodeValue> {
        self.scoped(RecordFormat::Bibliography, CATALOGING_FORM, self.cataloging_form, 18)
    }

    /// Multipart resource record level (19); bibliographic records only.
    #[must_use]
    pub fn multipart_level(&self) -> Option<CodeValue> {
        self.scoped(RecordFormat::Bibliography, MULTIPART_LEVEL, self.multipart_level, 19)
    }

    fn scoped(
        &self,
        format: RecordFormat,
        table: CodeTable,
        code: char,
        offset: usize,
    ) -> Option<CodeValue> {
        (self.format() == format).then(|| code_value(table, code, offset))
    }
}

/// A new Unicode bibliographic monograph; lengths are filled in on encode.
impl Default for Leader {
    fn default() -> Self {
        Leader {
            record_length: 0,
            record_status: 'n',
            record_type: 'a',
            bibliographic_level: 'm',
            control_record_type: ' ',
            character_coding: 'a',
            indicator_count: '2',
            subfield_code_count: '2',
            data_base_address: 0,
            encoding_level: ' ',
            cataloging_form: 'a',
            multipart_level: ' ',
            reserved: "4500".to_string(),
        }
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

fn code_value(table: CodeTable, code: char, offset: usize) -> CodeValue {
    let code = code.to_string();
    CodeValue {
        label: code_lookup(table, &code).to_string(),
        code,
        offset,
        width: 1,
    }
}

/// Leader positions hold one byte each.
fn push_byte(bytes: &mut Vec<u8>, c: char) -> Result<()> {
    let byte = u8::try_from(c).map_err(|_| {
        MarcError::InvalidLeader(format!("Leader position holds {c:?}, which is not a single byte"))
    })?;
    bytes.push(byte);
    Ok(())
}

/// Parse 5-digit ASCII number from bytes
fn parse_digits(bytes: &[u8]) -> Result<u32> {
    if bytes.len() != 5 {
        return Err(MarcError::InvalidLeader(format!(
            "Expected 5-digit field, got {} bytes",
            bytes.len()
        )));
    }

    let mut value = 0u32;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(MarcError::InvalidLeader(format!(
                "Invalid numeric field: '{}'",
                String::from_utf8_lossy(bytes)
            )));
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Ok(value)
}

const BIB_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
    ("p", "Increase in encoding level from prepublication"),
];

const AUTH_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
    ("o", "Obsolete"),
    ("s", "Deleted; heading split into two or more headings"),
    ("x", "Deleted; heading replaced by another heading"),
];

const CLASS_RECORD_STATUS: CodeTable = &[
    ("a", "Increase in encoding level"),
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
];

const SHORT_RECORD_STATUS: CodeTable = &[
    ("c", "Corrected or revised"),
    ("d", "Deleted"),
    ("n", "New"),
];

const RECORD_TYPE: CodeTable = &[
    ("a", "Language material"),
    ("c", "Notated music"),
    ("d", "Manuscript notated music"),
    ("e", "Cartographic material"),
    ("f", "Manuscript cartographic material"),
    ("g", "Projected medium"),
    ("i", "Nonmusical sound recording"),
    ("j", "Musical sound recording"),
    ("k", "Two-dimensional nonprojectable graphic"),
    ("m", "Computer file"),
    ("o", "Kit"),
    ("p", "Mixed materials"),
    ("q", "Community information"),
    ("r", "Three-dimensional artifact or naturally occurring object"),
    ("t", "Manuscript language material"),
    ("u", "Unknown holdings"),
    ("v", "Multipart item holdings"),
    ("w", "Classification data"),
    ("x", "Single-part item holdings"),
    ("y", "Serial item holdings"),
    ("z", "Authority data"),
];

const BIB_LEVEL: CodeTable = &[
    ("a", "Monographic component part"),
    ("b", "Serial component part"),
    ("c", "Collection"),
    ("d", "Subunit"),
    ("i", "Integrating resource"),
    ("m", "Monograph/Item"),
    ("s", "Serial"),
];

const CONTROL_TYPE: CodeTable = &[(" ", "No specified type"), ("a", "Archival")];

const CHARACTER_CODING: CodeTable = &[(" ", "MARC-8"), ("a", "UCS/Unicode")];

const BIB_ENCODING_LEVEL: CodeTable = &[
    (" ", "Full level"),
    ("1", "Full level, material not examined"),
    ("2", "Less-than-full level, material not examined"),
    ("3", "Abbreviated level"),
    ("4", "Core level"),
    ("5", "Partial (preliminary) level"),
    ("7", "Minimal level"),
    ("8", "Prepublication level"),
    ("u", "Unknown"),
    ("z", "Not applicable"),
];

const HOLDINGS_ENCODING_LEVEL: CodeTable = &[
    ("1", "Holdings level 1"),
    ("2", "Holdings level 2"),
    ("3", "Holdings level 3"),
    ("4", "Holdings level 4"),
    ("5", "Holdings level 4 with piece designation"),
    ("m", "Mixed level"),
    ("u", "Unknown"),
    ("z", "Other level"),
];

const COMPLETENESS_ENCODING_LEVEL: CodeTable = &[
    ("n", "Complete authority record"),
    ("o", "Incomplete authority record"),
];

const CATALOGING_FORM: CodeTable = &[
    (" ", "Non-ISBD"),
    ("a", "AACR 2"),
    ("c", "ISBD punctuation omitted"),
    ("i", "ISBD punctuation included"),
    ("n", "Non-ISBD punctuation omitted"),
    ("u", "Unknown"),
];

const MULTIPART_LEVEL: CodeTable = &[
    (" ", "Not specified or not applicable"),
    ("a", "Set"),
    ("b", "Part with independent title"),
    ("c", "Part with dependent title"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_from_bytes() {
        let bytes = b"01234567890120123456DUMMY";
        let leader = Leader::from_bytes(bytes).unwrap();

        assert_eq!(leader.record_length, 1234);
        assert_eq!(leader.record_status, '5');
        assert_eq!(leader.record_type, '6');
        assert_eq!(leader.bibliographic_level, '7');
        assert_eq!(leader.control_record_type, '8');
        assert_eq!(leader.character_coding, '9');
        assert_eq!(leader.indicator_count, '0');
        assert_eq!(leader.subfield_code_count, '1');
        assert_eq!(leader.data_base_address, 20123);
        assert_eq!(leader.encoding_level, '4');
        assert_eq!(leader.cataloging_form, '5');
        assert_eq!(leader.multipart_level, '6');
        assert_eq!(leader.reserved, "DUMM");
    }

    #[test]
    fn test_leader_roundtrip_bytes() {
        let text = b"02048cam a2200256 i 4500";
        let leader = Leader::from_bytes(text).unwrap();
        assert_eq!(leader.as_bytes().unwrap(), text.to_vec());
        assert_eq!(leader.to_string(), "02048cam a2200256 i 4500");
    }

    #[test]
    fn test_leader_too_short() {
        let result = Leader::from_bytes(b"0123456789012");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_digit_counts_are_kept() {
        let bytes = b"00050nam aX 00037 i 4500";
        let leader = Leader::from_bytes(bytes).unwrap();
        assert_eq!(leader.indicator_count, 'X');
        assert_eq!(leader.subfield_code_count, ' ');
        assert_eq!(leader.as_bytes().unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_non_ascii_positions_round_trip() {
        let bytes = b"00050n\xE1m a\x81200037 i 45\xFF0";
        let leader = Leader::from_bytes(bytes).unwrap();
        assert_eq!(leader.record_type, '\u{e1}');
        assert_eq!(leader.as_bytes().unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_wide_character_cannot_be_written() {
        let mut leader = Leader::default();
        leader.record_status = '漢';
        assert!(matches!(leader.as_bytes(), Err(MarcError::InvalidLeader(_))));
        assert!(leader.to_text().starts_with("00000漢"));
    }

    #[test]
    fn test_leader_non_digit_length() {
        let err = Leader::from_bytes(b"0a234nam a2200025 i 4500").unwrap_err();
        assert!(err.to_string().contains("Invalid numeric field"), "got: {err}");
    }

    #[test]
    fn test_record_format_table() {
        for code in "acdefgijkmoprt".chars() {
            assert_eq!(RecordFormat::from_record_type(code), RecordFormat::Bibliography);
        }
        for code in "uvxy".chars() {
            assert_eq!(RecordFormat::from_record_type(code), RecordFormat::Holdings);
        }
        assert_eq!(RecordFormat::from_record_type('z'), RecordFormat::Authority);
        assert_eq!(RecordFormat::from_record_type('w'), RecordFormat::Classification);
        assert_eq!(RecordFormat::from_record_type('q'), RecordFormat::Community);
        assert_eq!(RecordFormat::from_record_type('b'), RecordFormat::Unknown);
        assert_eq!(RecordFormat::from_record_type(' '), RecordFormat::Unknown);
    }

    #[test]
    fn test_bibliographic_accessors() {
        let leader = Leader::from_bytes(b"01142cam a2200301 a 4500").unwrap();
        assert_eq!(leader.format(), RecordFormat::Bibliography);
        assert_eq!(leader.record_status().label, "Corrected or revised");
        assert_eq!(leader.record_type().label, "Language material");
        let level = leader.bibliographic_level().unwrap();
        assert_eq!(level.code, "m");
        assert_eq!(level.label, "Monograph/Item");
        assert_eq!(level.offset, 7);
        assert_eq!(leader.control_type().unwrap().label, "No specified type");
        assert_eq!(leader.character_coding_scheme().label, "UCS/Unicode");
        assert_eq!(leader.encoding_level().unwrap().label, "Full level");
        assert_eq!(leader.cataloging_form().unwrap().label, "AACR 2");
        assert_eq!(
            leader.multipart_level().unwrap().label,
            "Not specified or not applicable"
        );
    }

    #[test]
    fn test_format_scoped_accessors_absent_for_other_formats() {
        let authority = Leader::from_bytes(b"00512nz  a2200169n  4500").unwrap();
        assert_eq!(authority.format(), RecordFormat::Authority);
        assert!(authority.bibliographic_level().is_none());
        assert!(authority.control_type().is_none());
        assert!(authority.cataloging_form().is_none());
        assert!(authority.multipart_level().is_none());
        assert_eq!(
            authority.encoding_level().unwrap().label,
            "Complete authority record"
        );

        let holdings = Leader::from_bytes(b"00300cy  a22000973  4500").unwrap();
        assert_eq!(holdings.format(), RecordFormat::Holdings);
        assert!(holdings.bibliographic_level().is_none());
        assert_eq!(holdings.encoding_level().unwrap().label, "Holdings level 3");

        let unknown = Leader::from_bytes(b"00300nb  a2200097   4500").unwrap();
        assert!(unknown.encoding_level().is_none());
    }

    #[test]
    fn test_unmapped_code_has_empty_label() {
        let leader = Leader::from_bytes(b"01142Qam a2200301 a 4500").unwrap();
        let status = leader.record_status();
        assert_eq!(status.code, "Q");
        assert_eq!(status.label, "");
    }

    #[test]
    fn test_from_text_tolerates_blank_lengths() {
        let leader = Leader::from_text("     nam a22     uu 4500");
        assert_eq!(leader.record_length, 0);
        assert_eq!(leader.data_base_address, 0);
        assert_eq!(leader.record_type, 'a');
        assert_eq!(leader.encoding_level, 'u');
        assert_eq!(leader.bibliographic_level().unwrap().label, "Monograph/Item");
    }

    #[test]
    fn test_from_text_pads_short_input() {
        let leader = Leader::from_text("00100nam");
        assert_eq!(leader.record_length, 100);
        assert_eq!(leader.indicator_count, '2');
        assert_eq!(leader.reserved, "    ");
    }

    #[test]
    fn test_validate_for_reading() {
        let leader = Leader::from_bytes(b"00050nam a2200037 i 4500").unwrap();
        assert!(leader.validate_for_reading(50).is_ok());

        let err = leader.validate_for_reading(49).unwrap_err().to_string();
        assert!(err.contains("does not match"), "got: {err}");

        let small_base = Leader::from_bytes(b"00050nam a2200010 i 4500").unwrap();
        let err = small_base.validate_for_reading(50).unwrap_err().to_string();
        assert!(err.contains("Base address"), "got: {err}");
    }

    #[test]
    fn test_as_bytes_rejects_overflow() {
        let mut leader = Leader::from_bytes(b"00050nam a2200037 i 4500").unwrap();
        leader.record_length = 100_000;
        assert!(leader.as_bytes().is_err());
    }
}
