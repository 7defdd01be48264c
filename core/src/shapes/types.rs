//! shapes/types.rs
//! Shape type registry, the `Shape` sum type and polygon geometry.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use thiserror::Error;

use crate::geometry::{BoundingBox, Point};

/// ESRI shape type codes (little-endian i32 tag at byte 0 of every payload).
///
/// The whole catalog is listed so unsupported codes can be named in errors;
/// only `NullShape`, `Point` and `Polygon` are decoded.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize)]
pub enum ShapeType {
    NullShape   = 0,
    Point       = 1,
    PolyLine    = 3,
    Polygon     = 5,
    MultiPoint  = 8,
    PointZ      = 11,
    PolyLineZ   = 13,
    PolygonZ    = 15,
    MultiPointZ = 18,
    PointM      = 21,
    PolyLineM   = 23,
    PolygonM    = 25,
    MultiPointM = 28,
    MultiPatch  = 31,
}

impl ShapeType {
    /// Whether `decode_shape` has a decoder for this type.
    pub const fn is_supported(self) -> bool {
        matches!(self, ShapeType::NullShape | ShapeType::Point | ShapeType::Polygon)
    }

    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, *self as i32)
    }
}

/// Render a raw tag as `Name (code)` when it is a catalog entry, else the number.
pub fn shape_type_name_or_code(raw: i32) -> String {
    match ShapeType::try_from_primitive(raw) {
        Ok(t) => t.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One decoded record payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// Placeholder with no geometry.
    Null,
    Point(Point),
    Polygon(Polygon),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Null => ShapeType::NullShape,
            Shape::Point(_) => ShapeType::Point,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Shape::Null)
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Shape::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

/// A polygon: one or more rings stored end to end in a flat point array.
///
/// `parts[i]` is the index of the first point of ring `i`. There is no
/// delimiter between rings in `points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    bbox: BoundingBox,
    parts: Vec<i32>,
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(bbox: BoundingBox, parts: Vec<i32>, points: Vec<Point>) -> Self {
        Self { bbox, parts, points }
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Number of rings.
    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// Total number of points across all rings.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn parts(&self) -> &[i32] {
        &self.parts
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Index range of ring `index` in `points`, unchecked against the array.
    fn ring_bounds(&self, index: usize) -> (i64, i64) {
        let start = self.parts[index] as i64;
        let end = match self.parts.get(index + 1) {
            Some(&next) => next as i64,
            None => self.points.len() as i64,
        };
        (start, end)
    }

    /// Points of ring `index`, or `None` if the index is out of range or the
    /// part indices do not describe a valid slice.
    pub fn ring(&self, index: usize) -> Option<&[Point]> {
        if index >= self.parts.len() {
            return None;
        }
        let (start, end) = self.ring_bounds(index);
        if start < 0 || start > end || end > self.points.len() as i64 {
            return None;
        }
        Some(&self.points[start as usize..end as usize])
    }

    /// All rings in order.
    pub fn rings(&self) -> Result<Vec<&[Point]>, ShapeError> {
        (0..self.parts.len())
            .map(|i| {
                self.ring(i).ok_or_else(|| {
                    let (start, end) = self.ring_bounds(i);
                    ShapeError::InvalidRing {
                        index: i,
                        start,
                        end,
                        num_points: self.points.len(),
                    }
                })
            })
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("truncated shape payload: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("unsupported shape type: {}", shape_type_name_or_code(*.raw))]
    UnsupportedShapeType { raw: i32 },

    #[error("negative {field}: {value}")]
    NegativeCount { field: &'static str, value: i32 },

    #[error("ring {index} spans points {start}..{end} outside 0..{num_points}")]
    InvalidRing {
        index: usize,
        start: i64,
        end: i64,
        num_points: usize,
    },
}
