//! config.rs
//! Reader options.
//!
//! Defaults reproduce the plain decoder: no header validation and no payload
//! limit beyond what a record header can express. Embedding applications can
//! load the struct from any serde format; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_CONTENT_BYTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Reject files whose file code or version differ from 9994 / 1000.
    pub validate_header: bool,

    /// Upper bound on a single record payload in bytes.
    pub max_record_bytes: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            validate_header: false,
            max_record_bytes: MAX_CONTENT_BYTES,
        }
    }
}

impl ReadOptions {
    pub fn strict() -> Self {
        Self { validate_header: true, ..Default::default() }
    }

    pub fn with_max_record_bytes(mut self, max: usize) -> Self {
        self.max_record_bytes = max;
        self
    }
}
