#![warn(missing_docs)]

//! # marcfield: MARC 21 codec and fixed-field decoder
//!
//! A library for reading, writing and describing MARC 21 records in the
//! ISO 2709 binary interchange format, with MARCXML and line-oriented text
//! projections and decoding of the coded control fields 006, 007 and 008.
//!
//! ## Quick Start
//!
//! ### Reading MARC Records
//!
//! ```no_run
//! use marcfield::MarcReader;
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("records.mrc")?;
//! let mut reader = MarcReader::new(file);
//!
//! while let Some(record) = reader.read_record()? {
//!     if let Some(title) = record.get_field("245").and_then(|f| f.get_subfield('a')) {
//!         println!("Title: {}", title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Creating and Writing MARC Records
//!
//! ```
//! use marcfield::{Field, Leader, MarcWriter, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut field = Field::new("245".to_string(), '1', '0');
//! field.add_subfield('a', "Test Title".to_string());
//!
//! let record = Record::builder(Leader::default())
//!     .control_field("001".to_string(), "12345".to_string())
//!     .field(field)
//!     .build();
//!
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = MarcWriter::new(&mut buffer);
//!     writer.write_record(&record)?;
//! }
//! assert_eq!(&buffer[..5], b"00071");
//! # Ok(())
//! # }
//! ```
//!
//! ### Describing Coded Control Fields
//!
//! ```
//! use marcfield::{Leader, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .control_field_str("008", "920219s1993    caua   j      000 0 eng d")
//!     .build();
//!
//! let desc = record.describe_008();
//! assert_eq!(desc["Target audience"][0].label, "Juvenile");
//! ```
//!
//! ## Modules
//!
//! - [`record`]: Record value types (`Record`, `ControlField`, `Field`, `Subfield`)
//! - [`encoding`]: Byte-preserving decoding of field text
//! - [`reader`]: Framing and decoding ISO 2709 streams
//! - [`writer`]: Encoding records to ISO 2709
//! - [`leader`]: The 24-byte leader and its coded positions
//! - [`directory`]: Directory entries and format constants
//! - [`marcxml`]: MARCXML serialization and parsing
//! - [`pretty`]: Line-oriented text rendering
//! - [`fixed_field`]: 006/007/008 decoding
//! - [`parallel`]: Parallel decoding of in-memory batches
//! - [`recovery`]: Stream policy for malformed records
//! - [`error`]: Error types and result type

pub mod directory;
pub mod encoding;
pub mod error;
pub mod fixed_field;
pub mod leader;
pub mod marcxml;
pub mod parallel;
pub mod pretty;
pub mod reader;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod recovery;
pub mod writer;

pub use directory::DirectoryEntry;
pub use encoding::FieldEncoding;
pub use error::{MarcError, PartialFieldWarning, Result};
pub use fixed_field::{
    Category007, Cf007Desc, Cf008Desc, Cf008Layout, CodeValue, MaterialType,
};
pub use leader::{Leader, RecordFormat};
pub use marcxml::MarcXmlWriter;
pub use reader::{parse_record, parse_record_with_warnings, MarcReader, RawRecord, Records};
pub use record::{
    ControlField, Field, FieldBuilder, Record, RecordBuilder, Subfield, VariableField,
};
pub use recovery::RecoveryMode;
pub use writer::{encode_record, MarcWriter};
