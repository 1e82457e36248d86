//! Stream policy for records that fail to decode.
//!
//! Framing failures (bad length prefix, short read, missing record
//! terminator) and I/O errors leave the stream at an unknown position and
//! always end iteration. Failures raised after a record's bytes were framed
//! ([`MarcError::is_record_local`](crate::MarcError::is_record_local)) leave
//! the stream on the next record boundary; the recovery mode decides whether
//! those end iteration too.

/// Strategy for handling records that fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Return the first error and stop (default)
    #[default]
    Strict,
    /// Log record-local errors, drop the record and keep reading
    Skip,
}

impl RecoveryMode {
    /// Whether a record-local failure should be skipped under this mode.
    #[must_use]
    pub fn skips_bad_records(self) -> bool {
        matches!(self, RecoveryMode::Skip)
    }
}
