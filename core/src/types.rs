use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{
    headers::HeaderError,
    records::RecordError,
    shapes::{shape_type_name_or_code, ShapeError},
};

/// Boxed error returned by a record consumer.
pub type ConsumerError = Box<dyn StdError + Send + Sync + 'static>;

/// Coarse classification of a [`ShapefileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The source could not be opened or read.
    UnreadableSource,
    /// Fewer bytes than a structure or declared length requires.
    TruncatedData,
    /// A shape tag outside {Null, Point, Polygon}.
    UnsupportedShapeType,
    /// Structurally impossible values (negative counts, failed validation, ...).
    Malformed,
    /// The record consumer rejected a record.
    Consumer,
}

/// Unified error for a read session.
/// - Layer errors convert with `From` so `?` works across decode steps.
/// - Truncation and unsupported tags are lifted to their own variants so
///   callers can match them without digging into layer errors.
#[derive(Debug, Error)]
pub enum ShapefileError {
    #[error("cannot open shapefile {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(io::Error),

    #[error("truncated data at offset {offset}: need {need} bytes, have {have}")]
    Truncated { offset: u64, need: usize, have: usize },

    #[error("unsupported shape type {} in record {record_number}", shape_type_name_or_code(*.raw))]
    UnsupportedShapeType { record_number: i32, raw: i32 },

    #[error("header error: {0}")]
    Header(HeaderError),

    #[error("record error: {0}")]
    Record(RecordError),

    #[error("shape error in record {record_number}: {source}")]
    Shape { record_number: i32, source: ShapeError },

    #[error("consumer rejected record {record_number}: {source}")]
    Consumer { record_number: i32, source: ConsumerError },
}

impl ShapefileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShapefileError::Open { .. } => ErrorCategory::UnreadableSource,
            ShapefileError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                ErrorCategory::TruncatedData
            }
            ShapefileError::Io(_) => ErrorCategory::UnreadableSource,
            ShapefileError::Truncated { .. } => ErrorCategory::TruncatedData,
            ShapefileError::UnsupportedShapeType { .. } => ErrorCategory::UnsupportedShapeType,
            ShapefileError::Header(HeaderError::BufferTooShort { .. }) => ErrorCategory::TruncatedData,
            ShapefileError::Header(_) => ErrorCategory::Malformed,
            ShapefileError::Record(RecordError::Io { .. }) => ErrorCategory::UnreadableSource,
            ShapefileError::Record(_) => ErrorCategory::Malformed,
            ShapefileError::Shape { .. } => ErrorCategory::Malformed,
            ShapefileError::Consumer { .. } => ErrorCategory::Consumer,
        }
    }

    pub fn is_consumer(&self) -> bool {
        self.category() == ErrorCategory::Consumer
    }

    /// Attach a record number to a shape decode failure. `offset` is the
    /// file offset of the record payload.
    pub(crate) fn from_shape(record_number: i32, offset: u64, e: ShapeError) -> Self {
        match e {
            ShapeError::Truncated { need, have } => ShapefileError::Truncated { offset, need, have },
            ShapeError::UnsupportedShapeType { raw } => {
                ShapefileError::UnsupportedShapeType { record_number, raw }
            }
            other => ShapefileError::Shape { record_number, source: other },
        }
    }
}

impl From<io::Error> for ShapefileError {
    fn from(e: io::Error) -> Self {
        ShapefileError::Io(e)
    }
}

impl From<HeaderError> for ShapefileError {
    fn from(e: HeaderError) -> Self {
        ShapefileError::Header(e)
    }
}

impl From<RecordError> for ShapefileError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::Truncated { offset, need, have } => {
                ShapefileError::Truncated { offset, need, have }
            }
            other => ShapefileError::Record(other),
        }
    }
}
