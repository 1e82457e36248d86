//! Parallel MARC record decoding using Rayon.
//!
//! Framing a stream is inherently sequential: each record's length prefix
//! says where the next one starts. Decoding is not, since every framed record
//! is independent. [`parse_batch_parallel`] frames an in-memory buffer on the
//! calling thread and then decodes the framed records on Rayon's work-stealing
//! pool, respecting `RAYON_NUM_THREADS`.
//!
//! # Examples
//!
//! ```
//! use marcfield::parallel::parse_batch_parallel;
//! use marcfield::{encode_record, Leader, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .control_field_str("001", "12345")
//!     .build();
//! let mut buffer = encode_record(&record)?;
//! buffer.extend(encode_record(&record)?);
//!
//! let results = parse_batch_parallel(&buffer)?;
//! assert_eq!(results.len(), 2);
//! assert!(results.iter().all(Result::is_ok));
//! # Ok::<(), marcfield::MarcError>(())
//! ```

use crate::error::Result;
use crate::reader::{MarcReader, RawRecord};
use crate::record::Record;
use log::debug;
use rayon::prelude::*;
use std::io::Cursor;

/// Frame every record in `buffer`, then decode them in parallel.
///
/// The outer `Result` fails only on a framing or I/O error, since the
/// position of later records is unknown after one. Each inner `Result` is the
/// outcome of decoding one record, in stream order.
///
/// # Errors
///
/// Returns the first framing error of the buffer (see
/// [`MarcReader::read_raw`]).
pub fn parse_batch_parallel(buffer: &[u8]) -> Result<Vec<Result<Record>>> {
    let raw = frame_all(buffer)?;
    debug!("decoding batch of {} records in parallel", raw.len());
    Ok(raw.par_iter().map(RawRecord::decode).collect())
}

/// Frame every record in `buffer` without decoding.
///
/// # Errors
///
/// Returns the first framing error of the buffer.
pub fn frame_all(buffer: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = MarcReader::new(Cursor::new(buffer));
    let mut raw = Vec::new();
    while let Some(record) = reader.read_raw()? {
        raw.push(record);
    }
    Ok(raw)
}
