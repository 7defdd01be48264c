use std::io;

use serde::Serialize;
use thiserror::Error;

use bytes::Bytes;

use crate::constants::RECORD_HEADER_LEN;
use crate::utils::words_to_bytes;

/// Record header (fixed size, both fields big-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordHeader {
    /// Starts at 1.
    pub record_number: i32,
    /// Payload length in 16-bit words. Each record contributes
    /// `4 + content_length` words to the file length.
    pub content_length: i32,
}

impl RecordHeader {
    pub const LEN: usize = RECORD_HEADER_LEN;

    pub fn record_number(&self) -> i32 {
        self.record_number
    }

    pub fn content_length(&self) -> i32 {
        self.content_length
    }

    pub fn content_length_bytes(&self) -> i64 {
        words_to_bytes(self.content_length)
    }
}

/// A record read from a stream: header plus owned payload bytes.
#[derive(Debug, Clone)]
pub struct RecordFrame {
    pub header: RecordHeader,
    /// File offset of the record header.
    pub offset: u64,
    pub payload: Bytes,
}

impl RecordFrame {
    /// Bytes this record occupies in the file (header + payload).
    pub fn wire_len(&self) -> u64 {
        (RecordHeader::LEN + self.payload.len()) as u64
    }

    /// File offset just past this record.
    pub fn end_offset(&self) -> u64 {
        self.offset + self.wire_len()
    }
}

/// Borrowed view of a record inside an in-memory buffer.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub header: RecordHeader,
    pub payload: &'a [u8],
}

impl RecordView<'_> {
    pub fn wire_len(&self) -> usize {
        RecordHeader::LEN + self.payload.len()
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("truncated record at offset {offset}: need {need} bytes, have {have}")]
    Truncated { offset: u64, need: usize, have: usize },

    #[error("record {record_number} has negative content length {content_length}")]
    NegativeContentLength { record_number: i32, content_length: i32 },

    #[error("record {record_number} declares {bytes} payload bytes, limit is {max}")]
    ContentTooLarge { record_number: i32, bytes: usize, max: usize },

    #[error("I/O error reading record at offset {offset}: {source}")]
    Io { offset: u64, source: io::Error },
}
