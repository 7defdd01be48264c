//! headers/types.rs
//! Main file header struct and its error type.
//!
//! Notes:
//! - The header is 100 bytes, fixed length, with big-endian and little-endian
//!   fields side by side (see `decode.rs` for the offset table).
//! - The decoder never rejects a header on content. `validate()` is opt-in for
//!   callers who want the file code and version checked.

use num_enum::TryFromPrimitive;
use serde::Serialize;
use thiserror::Error;

use crate::constants::{FILE_CODE, FILE_VERSION, MAIN_HEADER_LEN};
use crate::geometry::BoundingBox;
use crate::shapes::ShapeType;
use crate::utils::words_to_bytes;

/// Decoded main file header. One per file, immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MainFileHeader {
    pub file_code: i32,        // 9994 for a shapefile
    pub file_length: i32,      // whole file, in 16-bit words
    pub version: i32,          // 1000
    pub shape_type: i32,       // declared dominant type, advisory
    pub bbox: BoundingBox,     // x/y extents
    pub z_min: f64,
    pub z_max: f64,
    pub m_min: f64,
    pub m_max: f64,
}

impl MainFileHeader {
    pub const LEN: usize = MAIN_HEADER_LEN;

    pub fn file_code(&self) -> i32 {
        self.file_code
    }

    pub fn file_length(&self) -> i32 {
        self.file_length
    }

    /// Total file size in bytes as declared by the header.
    pub fn file_length_bytes(&self) -> i64 {
        words_to_bytes(self.file_length)
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn shape_type(&self) -> i32 {
        self.shape_type
    }

    /// Typed view of the declared shape type; `None` for codes outside the
    /// ESRI catalog. Records carry their own tag and may differ.
    pub fn declared_shape_type(&self) -> Option<ShapeType> {
        ShapeType::try_from_primitive(self.shape_type).ok()
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn x_min(&self) -> f64 {
        self.bbox.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.bbox.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.bbox.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.bbox.y_max
    }

    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    pub fn m_min(&self) -> f64 {
        self.m_min
    }

    pub fn m_max(&self) -> f64 {
        self.m_max
    }

    /// Check the two fixed identification fields.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.file_code != FILE_CODE {
            return Err(HeaderError::InvalidFileCode {
                have: self.file_code,
                need: FILE_CODE,
            });
        }
        if self.version != FILE_VERSION {
            return Err(HeaderError::InvalidVersion {
                have: self.version,
                need: FILE_VERSION,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    #[error("invalid file code: expected {need}, got {have}")]
    InvalidFileCode { have: i32, need: i32 },

    #[error("invalid version: expected {need}, got {have}")]
    InvalidVersion { have: i32, need: i32 },
}
