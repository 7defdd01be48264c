//! telemetry/snapshot.rs
//! Immutable end-of-session summary.

use std::time::Duration;

use serde::Serialize;

use crate::headers::MainFileHeader;
use crate::telemetry::counters::ReadCounters;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySnapshot {
    pub header: MainFileHeader,
    pub counters: ReadCounters,
    pub elapsed: Duration,
    pub throughput_bytes_per_sec: f64,
}

impl TelemetrySnapshot {
    pub fn from(header: MainFileHeader, counters: &ReadCounters, elapsed: Duration) -> Self {
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_total() as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            header,
            counters: counters.clone(),
            elapsed,
            throughput_bytes_per_sec: throughput,
        }
    }

    pub fn records(&self) -> u64 {
        self.counters.records_total()
    }

    /// True when every byte the header declares was consumed.
    pub fn consumed_declared_length(&self) -> bool {
        self.counters.bytes_total() as i64 >= self.header.file_length_bytes()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
