//! Shape payloads.
//!
//! Responsibilities:
//! - Name every ESRI shape type code
//! - Decode Null, Point and Polygon payloads from a byte span
//! - Rebuild polygon rings from the parts array
//!
//! Non-responsibilities:
//! - Record framing
//! - IO

pub mod types;
pub mod decode;

pub use types::{shape_type_name_or_code, Polygon, Shape, ShapeError, ShapeType};
pub use decode::{decode_point, decode_polygon, decode_shape, peek_shape_type};
