//! Writing MARC records to binary format.
//!
//! [`encode_record`] serializes one [`Record`] to ISO 2709 bytes, and
//! [`MarcWriter`] streams records to any destination implementing
//! [`std::io::Write`].
//!
//! Fields are written in the order the record holds them, so a decoded record
//! re-encodes with its original directory order. The directory, the record length and the base address of data are always
//! recomputed; whatever the leader held for them is ignored.
//!
//! # Examples
//!
//! ```
//! use marcfield::{Field, Leader, MarcWriter, Record};
//!
//! let mut field = Field::new("245".to_string(), '1', '0');
//! field.add_subfield('a', "Title".to_string());
//! let record = Record::builder(Leader::default()).field(field).build();
//!
//! let mut buffer = Vec::new();
//! let mut writer = MarcWriter::new(&mut buffer);
//! writer.write_record(&record)?;
//! writer.finish()?;
//! assert_eq!(buffer.last(), Some(&0x1D));
//! # Ok::<(), marcfield::MarcError>(())
//! ```

use crate::directory::{
    encode_directory, DirectoryEntry, ENTRY_LEN, FIELD_TERMINATOR, MAX_RECORD_LEN, RECORD_TERMINATOR,
    SUBFIELD_DELIMITER,
};
use crate::encoding::FieldEncoding;
use crate::error::{MarcError, Result};
use crate::leader::LEADER_LEN;
use crate::record::{Field, Record, VariableField};
use std::io::Write;

/// Encode a record to ISO 2709 bytes.
///
/// Fields are written in the record's order, with text encoded in the
/// record's [`FieldEncoding`].
///
/// # Errors
///
/// Returns [`MarcError::InvalidField`] if a field is longer than 9999 bytes or
/// holds text the record's encoding cannot represent,
/// [`MarcError::InvalidRecord`] if the record would exceed 99999 bytes, and
/// [`MarcError::InvalidLeader`] if a leader position cannot be written.
pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    let encoding = record.encoding();
    let mut body = Vec::new();
    let mut entries = Vec::with_capacity(record.field_count());
    for field in record.variable_fields() {
        let start = body.len();
        match field {
            VariableField::Control(control) => {
                encoding.encode_into(&control.value, &mut body)?;
                body.push(FIELD_TERMINATOR);
            },
            VariableField::Data(data) => encode_data_field(data, encoding, &mut body)?,
        }
        entries.push(DirectoryEntry::new(field.tag(), body.len() - start, start));
    }

    let base_address = LEADER_LEN + entries.len() * ENTRY_LEN + 1;
    let record_length = base_address + body.len() + 1;
    if record_length > MAX_RECORD_LEN {
        return Err(MarcError::InvalidRecord(format!(
            "Record length {record_length} exceeds {MAX_RECORD_LEN} bytes"
        )));
    }
    let directory = encode_directory(&entries)?;

    let mut leader = record.leader().clone();
    leader.record_length = u32::try_from(record_length).map_err(|_| {
        MarcError::InvalidRecord(format!("Record length {record_length} out of range"))
    })?;
    leader.data_base_address = u32::try_from(base_address).map_err(|_| {
        MarcError::InvalidRecord(format!("Base address {base_address} out of range"))
    })?;

    let mut out = Vec::with_capacity(record_length);
    out.extend_from_slice(&leader.as_bytes()?);
    out.extend_from_slice(&directory);
    out.extend_from_slice(&body);
    out.push(RECORD_TERMINATOR);
    Ok(out)
}

fn encode_data_field(field: &Field, encoding: FieldEncoding, out: &mut Vec<u8>) -> Result<()> {
    encoding.encode_char_into(field.indicator1, out)?;
    encoding.encode_char_into(field.indicator2, out)?;
    for subfield in &field.subfields {
        out.push(SUBFIELD_DELIMITER);
        encoding.encode_char_into(subfield.code, out)?;
        encoding.encode_into(&subfield.value, out)?;
    }
    out.push(FIELD_TERMINATOR);
    Ok(())
}

/// Writer for ISO 2709 binary MARC format.
#[derive(Debug)]
pub struct MarcWriter<W: Write> {
    writer: W,
    records_written: usize,
    finished: bool,
}

impl<W: Write> MarcWriter<W> {
    /// Create a new MARC writer.
    pub fn new(writer: W) -> Self {
        MarcWriter {
            writer,
            records_written: 0,
            finished: false,
        }
    }

    /// Encode and write one record.
    ///
    /// A record that fails to encode writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer is finished, the record cannot be
    /// encoded (see [`encode_record`]), or the write fails.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.finished {
            return Err(MarcError::InvalidRecord(
                "Cannot write to a finished writer".to_string(),
            ));
        }
        let bytes = encode_record(record)?;
        self.writer.write_all(&bytes)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush the destination and refuse further writes.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(&mut self) -> Result<()> {
        if !self.finished {
            self.writer.flush()?;
            self.finished = true;
        }
        Ok(())
    }

    /// Number of records written so far
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
