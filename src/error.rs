//! Error types for MARC operations.
//!
//! This module provides the [`MarcError`] type for all codec operations,
//! the [`Result`] convenience type, and the non-fatal [`PartialFieldWarning`]
//! raised when control fields are salvaged without their terminator.

use thiserror::Error;

/// Error type for all MARC library operations.
///
/// Structural variants abort decoding of a single record only. A reader
/// positioned on a stream stays usable after a record-level failure, because
/// the framer has already consumed that record's bytes.
#[derive(Error, Debug)]
pub enum MarcError {
    /// Framing failure: bad length prefix, out-of-bounds length, short read
    /// or missing record terminator.
    #[error("Invalid MARC record: {0}")]
    InvalidRecord(String),

    /// Error indicating an invalid leader (24-byte header).
    #[error("Invalid leader: {0}")]
    InvalidLeader(String),

    /// Error inside the field directory.
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),

    /// Error indicating an invalid field structure.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// MARCXML could not be parsed or produced.
    #[error("XML error: {0}")]
    XmlError(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MarcError {
    /// Returns true for errors raised after a record's bytes were fully framed.
    ///
    /// These errors leave the underlying stream on the next record boundary,
    /// so a caller may skip the record and keep reading.
    #[must_use]
    pub fn is_record_local(&self) -> bool {
        matches!(
            self,
            MarcError::InvalidLeader(_) | MarcError::InvalidDirectory(_) | MarcError::InvalidField(_)
        )
    }
}

/// Control fields whose directory slice did not end in a field terminator.
///
/// The text of each listed field was kept as-is. This happens on records where
/// the directory entries of two adjacent control fields overlap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("control field(s) {} missing field terminator; text kept as sliced", .tags.join(", "))]
pub struct PartialFieldWarning {
    /// Tags of the affected control fields, in directory order.
    pub tags: Vec<String>,
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_field_warning_lists_tags() {
        let warning = PartialFieldWarning {
            tags: vec!["005".to_string(), "008".to_string()],
        };
        let message = warning.to_string();
        assert!(message.contains("005, 008"), "got: {message}");
    }

    #[test]
    fn test_record_local_classification() {
        assert!(MarcError::InvalidField("x".to_string()).is_record_local());
        assert!(MarcError::InvalidDirectory("x".to_string()).is_record_local());
        assert!(!MarcError::InvalidRecord("x".to_string()).is_record_local());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(!MarcError::from(io).is_record_local());
    }
}
