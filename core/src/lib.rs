//! shapefile-core
//!
//! Pure Rust decoder for ESRI shapefile main files (.shp).
//! Decodes the main header, frames records and rebuilds Null, Point and
//! Polygon shapes. No writing, no .shx/.dbf.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

// Format layers, leaf first
pub mod geometry;
pub mod shapes;
pub mod records;
pub mod headers;
pub mod telemetry;

// Stream layer
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::ReadOptions;
    pub use crate::geometry::{BoundingBox, Point};
    pub use crate::headers::MainFileHeader;
    pub use crate::records::RecordHeader;
    pub use crate::shapes::{Polygon, Shape, ShapeType};
    pub use crate::stream::{for_each_record, read_main_file_header, InputSource, ShapefileReader};
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::{ErrorCategory, ShapefileError};
}
