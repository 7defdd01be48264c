//! Record framing.
//!
//! Responsibilities:
//! - Decode the 8-byte big-endian record header
//! - Delimit exactly `content_length * 2` payload bytes after it
//!
//! Non-responsibilities:
//! - Interpreting the payload (see `shapes`)
//! - Deciding when to stop reading (see `stream`)

pub mod types;
pub mod decode;

pub use types::{RecordError, RecordFrame, RecordHeader, RecordView};
pub use decode::{decode_record, parse_record_header, read_record};
