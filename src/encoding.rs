//! Byte-preserving text decoding of field content.
//!
//! Field bytes are exposed as text, but a decoded record must re-encode to the
//! exact bytes it came from. Leader/09 claims UTF-8 or MARC-8, and real files
//! routinely contradict it, so the claim is not trusted:
//!
//! - **UTF-8** is used when every field decodes as strict UTF-8 and every
//!   indicator is ASCII.
//! - **Single-byte** is used otherwise. Each byte becomes exactly one
//!   character through the windows-1252 table, which maps all 256 byte values,
//!   so the original bytes come back unchanged on encode.
//!
//! No transcoding happens in either case: MARC-8 content is kept as its raw
//! bytes, shown through the single-byte table.

use crate::error::{MarcError, Result};
use encoding_rs::WINDOWS_1252;
use serde::{Deserialize, Serialize};

/// How a record's field bytes map to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldEncoding {
    /// Strict UTF-8 (default for records built in code or read from XML)
    #[default]
    Utf8,
    /// One character per byte, recovering the original bytes exactly
    SingleByte,
}

impl FieldEncoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    ///
    /// Single-byte decoding never fails.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            FieldEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            FieldEncoding::SingleByte => {
                let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
                Some(text.into_owned())
            },
        }
    }

    /// Decode one indicator byte.
    ///
    /// Under UTF-8 only ASCII bytes stand alone as a character.
    #[must_use]
    pub fn decode_byte(self, byte: u8) -> Option<char> {
        match self {
            FieldEncoding::Utf8 => byte.is_ascii().then_some(byte as char),
            FieldEncoding::SingleByte => self.decode(&[byte]).and_then(|text| text.chars().next()),
        }
    }

    /// Append the encoded form of `text` to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::InvalidField`] if a single-byte record holds a
    /// character with no byte in the table.
    pub fn encode_into(self, text: &str, out: &mut Vec<u8>) -> Result<()> {
        match self {
            FieldEncoding::Utf8 => out.extend_from_slice(text.as_bytes()),
            FieldEncoding::SingleByte => {
                let (bytes, _, unmappable) = WINDOWS_1252.encode(text);
                if unmappable {
                    return Err(MarcError::InvalidField(format!(
                        "Text {text:?} has characters outside the single-byte table"
                    )));
                }
                out.extend_from_slice(&bytes);
            },
        }
        Ok(())
    }

    /// Append the encoded form of one character to `out`.
    ///
    /// # Errors
    ///
    /// See [`encode_into`](FieldEncoding::encode_into).
    pub fn encode_char_into(self, c: char, out: &mut Vec<u8>) -> Result<()> {
        let mut buf = [0u8; 4];
        self.encode_into(c.encode_utf8(&mut buf), out)
    }

    /// Encoded size of `text` in bytes.
    #[must_use]
    pub fn encoded_len(self, text: &str) -> usize {
        match self {
            FieldEncoding::Utf8 => text.len(),
            FieldEncoding::SingleByte => text.chars().count(),
        }
    }

    /// Encoded size of one character in bytes.
    #[must_use]
    pub fn char_len(self, c: char) -> usize {
        match self {
            FieldEncoding::Utf8 => c.len_utf8(),
            FieldEncoding::SingleByte => 1,
        }
    }
}
