//! Line-oriented text rendering of a record.
//!
//! ```text
//! LDR 00066nam a2200049 a 4500
//! 001     12345
//! 245 10 _aTitle
//!        _bSubtitle
//! ```
//!
//! The tag and indicators are printed on the first subfield line of a data
//! field only; continuation lines are padded to the same width.

use crate::record::{Field, Record};
use std::fmt::{self, Write};

/// Width of the `"<tag> <i1><i2> "` prefix.
const PREFIX_WIDTH: usize = 7;

/// Render `record` as text, one line per leader, control field and subfield.
#[must_use]
pub fn to_pretty_string(record: &Record) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_pretty(&mut out, record);
    out
}

/// Write the text rendering of `record` to `out`.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_pretty<W: Write>(out: &mut W, record: &Record) -> fmt::Result {
    writeln!(out, "LDR {}", record.leader())?;
    for (tag, value) in record.control_fields_iter() {
        writeln!(out, "{tag}     {value}")?;
    }
    for field in record.fields() {
        write_field(out, field)?;
    }
    Ok(())
}

fn write_field<W: Write>(out: &mut W, field: &Field) -> fmt::Result {
    if field.subfields.is_empty() {
        return writeln!(out, "{} {}{}", field.tag, field.indicator1, field.indicator2);
    }
    for (index, subfield) in field.subfields.iter().enumerate() {
        if index == 0 {
            write!(out, "{} {}{} ", field.tag, field.indicator1, field.indicator2)?;
        } else {
            write!(out, "{:PREFIX_WIDTH$}", "")?;
        }
        writeln!(out, "_{}{}", subfield.code, subfield.value)?;
    }
    Ok(())
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pretty(f, self)
    }
}
