//! telemetry/counters.rs
//! Mutable counters filled in while a reader walks the file.
//!
//! Converted into an immutable `TelemetrySnapshot` when the session ends.

use std::ops::AddAssign;

use serde::Serialize;

use crate::shapes::Shape;

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReadCounters {
    pub records_null: u64,
    pub records_point: u64,
    pub records_polygon: u64,
    pub bytes_header: u64,
    pub bytes_record_headers: u64,
    pub bytes_payload: u64,
}

impl ReadCounters {
    /// Record the main file header.
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
    }

    /// Record one decoded record.
    pub fn add_record(&mut self, shape: &Shape, record_header_len: usize, payload_len: usize) {
        match shape {
            Shape::Null => self.records_null += 1,
            Shape::Point(_) => self.records_point += 1,
            Shape::Polygon(_) => self.records_polygon += 1,
        }
        self.bytes_record_headers += record_header_len as u64;
        self.bytes_payload += payload_len as u64;
    }

    pub fn records_total(&self) -> u64 {
        self.records_null + self.records_point + self.records_polygon
    }

    pub fn bytes_total(&self) -> u64 {
        self.bytes_header + self.bytes_record_headers + self.bytes_payload
    }

    pub fn merge(&mut self, other: &ReadCounters) {
        self.records_null += other.records_null;
        self.records_point += other.records_point;
        self.records_polygon += other.records_polygon;
        self.bytes_header += other.bytes_header;
        self.bytes_record_headers += other.bytes_record_headers;
        self.bytes_payload += other.bytes_payload;
    }
}

impl AddAssign for ReadCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
