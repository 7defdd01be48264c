//! geometry.rs
//! Fixed-size geometry values shared by headers and shapes.

use std::hash::{Hash, Hasher};

use byteorder::LittleEndian;
use serde::{Deserialize, Serialize};

use crate::utils::read_f64_at;

/// A pair of double-precision coordinates in the order X, Y.
///
/// Equality and hashing compare the IEEE-754 bit patterns, so `Eq` and `Hash`
/// agree with each other: `0.0` and `-0.0` are different points and a NaN
/// coordinate equals the same NaN.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

/// Axis-aligned bounding box in the order Xmin, Ymin, Xmax, Ymax.
///
/// Min <= max is not enforced: the values are whatever the file declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// Encoded size: four little-endian doubles.
    pub const LEN: usize = 32;

    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    /// Read four little-endian doubles starting at `off`.
    /// Caller guarantees `buf.len() >= off + LEN`.
    pub(crate) fn read_le(buf: &[u8], off: usize) -> Self {
        Self {
            x_min: read_f64_at::<LittleEndian>(buf, off),
            y_min: read_f64_at::<LittleEndian>(buf, off + 8),
            x_max: read_f64_at::<LittleEndian>(buf, off + 16),
            y_max: read_f64_at::<LittleEndian>(buf, off + 24),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when both axes satisfy min <= max. Informational only.
    pub fn is_ordered(&self) -> bool {
        self.x_min <= self.x_max && self.y_min <= self.y_max
    }
}
