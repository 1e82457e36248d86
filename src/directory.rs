//! The ISO 2709 field directory.
//!
//! The directory follows the leader: one 12-byte entry per field (3-byte tag,
//! 4-digit length, 5-digit start offset relative to the base address of data),
//! closed by a field terminator.

use crate::encoding::FieldEncoding;
use crate::error::{MarcError, Result};
use memchr::memchr;

/// Field terminator (end of every field and of the directory)
pub const FIELD_TERMINATOR: u8 = 0x1E;
/// Subfield delimiter inside a data field
pub const SUBFIELD_DELIMITER: u8 = 0x1F;
/// Record terminator
pub const RECORD_TERMINATOR: u8 = 0x1D;
/// Largest record the 5-digit length prefix can describe
pub const MAX_RECORD_LEN: usize = 99_999;
/// Largest field the 4-digit entry length can describe
pub const MAX_FIELD_LEN: usize = 9_999;
/// Size of one directory entry in bytes
pub const ENTRY_LEN: usize = 12;

/// One directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Field tag (3 characters)
    pub tag: String,
    /// Field length in bytes, terminator included
    pub length: usize,
    /// Start offset relative to the base address of data
    pub start: usize,
}

impl DirectoryEntry {
    /// Create an entry
    #[must_use]
    pub fn new(tag: impl Into<String>, length: usize, start: usize) -> Self {
        DirectoryEntry {
            tag: tag.into(),
            length,
            start,
        }
    }

    /// Control fields have tags starting with "00".
    #[must_use]
    pub fn is_control(&self) -> bool {
        is_control_tag(&self.tag)
    }

    /// Offset one past the last byte of the field, relative to the base address.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Append the 12-byte encoding of this entry to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidField`] if the length does not fit four
    /// digits, and [`MarcError::InvalidDirectory`] if the tag is not three
    /// single-byte characters or the offset does not fit five digits.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        let mut tag = Vec::with_capacity(3);
        let encoded = FieldEncoding::SingleByte.encode_into(&self.tag, &mut tag);
        if encoded.is_err() || tag.len() != 3 {
            return Err(MarcError::InvalidDirectory(format!(
                "Tag must be 3 single-byte characters, got {:?}",
                self.tag
            )));
        }
        if self.length > MAX_FIELD_LEN {
            return Err(MarcError::InvalidField(format!(
                "Field {} is {} bytes, more than {MAX_FIELD_LEN}",
                self.tag, self.length
            )));
        }
        if self.start > MAX_RECORD_LEN {
            return Err(MarcError::InvalidDirectory(format!(
                "Field {} starts at {}, beyond {MAX_RECORD_LEN}",
                self.tag, self.start
            )));
        }
        out.extend_from_slice(&tag);
        out.extend_from_slice(format!("{:04}{:05}", self.length, self.start).as_bytes());
        Ok(())
    }
}

/// Returns true for control-field tags ("001" to "009", plus "000").
#[must_use]
pub fn is_control_tag(tag: &str) -> bool {
    tag.starts_with("00")
}

/// Parse the directory region of a record.
///
/// `bytes` runs from the end of the leader to the base address of data. The
/// directory ends at the first field terminator inside it; what precedes the
/// terminator must be a whole number of entries.
///
/// # Errors
///
/// Returns [`MarcError::InvalidDirectory`] if the terminator is missing, the
/// region is not a multiple of [`ENTRY_LEN`], or a length or offset holds a
/// non-digit byte.
pub fn parse_directory(bytes: &[u8]) -> Result<Vec<DirectoryEntry>> {
    let end = memchr(FIELD_TERMINATOR, bytes).ok_or_else(|| {
        MarcError::InvalidDirectory("Directory has no field terminator".to_string())
    })?;
    let body = &bytes[..end];
    if body.len() % ENTRY_LEN != 0 {
        return Err(MarcError::InvalidDirectory(format!(
            "Directory length {} is not a multiple of {ENTRY_LEN}",
            body.len()
        )));
    }

    body.chunks_exact(ENTRY_LEN)
        .enumerate()
        .map(|(index, chunk)| parse_entry(index, chunk))
        .collect()
}

/// Encode entries followed by the directory terminator.
///
/// # Errors
///
/// Propagates the first entry that cannot be encoded.
pub fn encode_directory(entries: &[DirectoryEntry]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(entries.len() * ENTRY_LEN + 1);
    for entry in entries {
        entry.encode_into(&mut out)?;
    }
    out.push(FIELD_TERMINATOR);
    Ok(out)
}

fn parse_entry(index: usize, chunk: &[u8]) -> Result<DirectoryEntry> {
    // Tags are almost always ASCII digits; any other bytes still round-trip.
    let tag = FieldEncoding::SingleByte.decode(&chunk[0..3]).unwrap_or_default();
    let length = parse_number(&chunk[3..7])
        .ok_or_else(|| bad_digits(index, &tag, "length", &chunk[3..7]))?;
    let start = parse_number(&chunk[7..12])
        .ok_or_else(|| bad_digits(index, &tag, "offset", &chunk[7..12]))?;
    Ok(DirectoryEntry { tag, length, start })
}

fn parse_number(digits: &[u8]) -> Option<usize> {
    digits.iter().try_fold(0usize, |acc, &byte| {
        byte.is_ascii_digit()
            .then(|| acc * 10 + usize::from(byte - b'0'))
    })
}

fn bad_digits(index: usize, tag: &str, what: &str, digits: &[u8]) -> MarcError {
    MarcError::InvalidDirectory(format!(
        "Entry {index} ({tag}): non-digit {what} {:?}",
        String::from_utf8_lossy(digits)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory_entries() {
        let bytes = b"001001300000245002700013\x1E";
        let entries = parse_directory(bytes).unwrap();
        assert_eq!(
            entries,
            vec![
                DirectoryEntry::new("001", 13, 0),
                DirectoryEntry::new("245", 27, 13),
            ]
        );
        assert!(entries[0].is_control());
        assert!(!entries[1].is_control());
        assert_eq!(entries[1].end(), 40);
    }

    #[test]
    fn test_parse_empty_directory() {
        assert!(parse_directory(b"\x1E").unwrap().is_empty());
    }

    #[test]
    fn test_non_digit_length_is_rejected() {
        let err = parse_directory(b"24500x700013\x1E").unwrap_err();
        assert!(matches!(err, MarcError::InvalidDirectory(_)));
        assert!(err.to_string().contains("length"), "got: {err}");
    }

    #[test]
    fn test_non_digit_offset_is_rejected() {
        let err = parse_directory(b"2450027000 3\x1E").unwrap_err();
        assert!(err.to_string().contains("offset"), "got: {err}");
    }

    #[test]
    fn test_partial_entry_is_rejected() {
        let err = parse_directory(b"24500270001\x1E").unwrap_err();
        assert!(err.to_string().contains("multiple"), "got: {err}");
    }

    #[test]
    fn test_missing_terminator_is_rejected() {
        assert!(parse_directory(b"245002700013").is_err());
    }

    #[test]
    fn test_encode_directory() {
        let entries = vec![
            DirectoryEntry::new("001", 13, 0),
            DirectoryEntry::new("245", 27, 13),
        ];
        let bytes = encode_directory(&entries).unwrap();
        assert_eq!(bytes, b"001001300000245002700013\x1E".to_vec());
    }

    #[test]
    fn test_encode_rejects_oversized_field() {
        let entry = DirectoryEntry::new("500", 10_000, 0);
        let err = entry.encode_into(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, MarcError::InvalidField(_)));
    }

    #[test]
    fn test_non_ascii_tag_bytes_round_trip() {
        let entries = parse_directory(b"2\xE95000400000\x1E").unwrap();
        assert_eq!(entries[0].tag.chars().count(), 3);
        let bytes = encode_directory(&entries).unwrap();
        assert_eq!(bytes, b"2\xE95000400000\x1E".to_vec());
    }

    #[test]
    fn test_encode_rejects_long_tag() {
        let entry = DirectoryEntry::new("2450", 4, 0);
        let err = entry.encode_into(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, MarcError::InvalidDirectory(_)));
    }
}
