//! shapes/decode.rs
//!
//! Shape payload decoding. Every payload starts with a little-endian i32 tag;
//! the rest of the layout depends on the tag:
//!
//! ```text
//! Null     [ tag (4) ]
//! Point    [ tag (4) ][ x f64 (8) ][ y f64 (8) ]
//! Polygon  [ tag (4) ][ box 4 x f64 (32) ][ numParts i32 ][ numPoints i32 ]
//!          [ parts numParts x i32 ][ points numPoints x (f64, f64) ]
//! ```
//!
//! All fields are little-endian. Trailing bytes past what the tag needs are
//! ignored.

use byteorder::{ByteOrder, LittleEndian};
use num_enum::TryFromPrimitive;

use crate::constants::shape_offsets as off;
use crate::geometry::{BoundingBox, Point};
use crate::shapes::types::{Polygon, Shape, ShapeError, ShapeType};
use crate::utils::{read_f64_at, read_i32_at};

/// Read the leading shape type tag without decoding the rest.
#[inline]
pub fn peek_shape_type(buf: &[u8]) -> Result<i32, ShapeError> {
    ensure_len(buf, off::SHAPE_TYPE + 4)?;
    Ok(read_i32_at::<LittleEndian>(buf, off::SHAPE_TYPE))
}

/// Decode one shape payload, dispatching on its tag.
pub fn decode_shape(buf: &[u8]) -> Result<Shape, ShapeError> {
    let raw = peek_shape_type(buf)?;

    match ShapeType::try_from_primitive(raw) {
        Ok(ShapeType::NullShape) => Ok(Shape::Null),
        Ok(ShapeType::Point) => decode_point(buf).map(Shape::Point),
        Ok(ShapeType::Polygon) => decode_polygon(buf).map(Shape::Polygon),
        _ => Err(ShapeError::UnsupportedShapeType { raw }),
    }
}

/// Decode a point payload. The tag is assumed to be checked by the caller.
pub fn decode_point(buf: &[u8]) -> Result<Point, ShapeError> {
    ensure_len(buf, off::POINT_LEN)?;
    Ok(Point::at(
        read_f64_at::<LittleEndian>(buf, off::POINT_X),
        read_f64_at::<LittleEndian>(buf, off::POINT_Y),
    ))
}

/// Decode a polygon payload. The tag is assumed to be checked by the caller.
///
/// The points array starts at `44 + 4 * numParts`; there is no length field
/// between parts and points.
pub fn decode_polygon(buf: &[u8]) -> Result<Polygon, ShapeError> {
    ensure_len(buf, off::POLYGON_PARTS)?;

    let bbox = BoundingBox::read_le(buf, off::POLYGON_BOX);
    let num_parts = read_count(buf, off::POLYGON_NUM_PARTS, "numParts")?;
    let num_points = read_count(buf, off::POLYGON_NUM_POINTS, "numPoints")?;

    // Full size is known before anything is allocated.
    let parts_len = num_parts as u64 * 4;
    let points_len = num_points as u64 * 16;
    let need = off::POLYGON_PARTS as u64 + parts_len + points_len;
    if (buf.len() as u64) < need {
        return Err(ShapeError::Truncated {
            need: usize::try_from(need).unwrap_or(usize::MAX),
            have: buf.len(),
        });
    }

    let parts_start = off::POLYGON_PARTS;
    let points_start = parts_start + parts_len as usize;
    let points_end = points_start + points_len as usize;

    let mut parts = vec![0i32; num_parts];
    LittleEndian::read_i32_into(&buf[parts_start..points_start], &mut parts);

    let mut coords = vec![0f64; num_points * 2];
    LittleEndian::read_f64_into(&buf[points_start..points_end], &mut coords);
    let points = coords
        .chunks_exact(2)
        .map(|xy| Point::at(xy[0], xy[1]))
        .collect();

    Ok(Polygon::new(bbox, parts, points))
}

#[inline]
fn ensure_len(buf: &[u8], need: usize) -> Result<(), ShapeError> {
    if buf.len() < need {
        return Err(ShapeError::Truncated { need, have: buf.len() });
    }
    Ok(())
}

#[inline]
fn read_count(buf: &[u8], at: usize, field: &'static str) -> Result<usize, ShapeError> {
    let value = read_i32_at::<LittleEndian>(buf, at);
    usize::try_from(value).map_err(|_| ShapeError::NegativeCount { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_truncated() {
        assert_eq!(
            decode_shape(&[]),
            Err(ShapeError::Truncated { need: 4, have: 0 })
        );
    }

    #[test]
    fn short_point_is_truncated() {
        let mut buf = 1i32.to_le_bytes().to_vec();
        buf.extend_from_slice(&3.0f64.to_le_bytes());
        assert_eq!(
            decode_shape(&buf),
            Err(ShapeError::Truncated { need: 20, have: 12 })
        );
    }

    #[test]
    fn negative_part_count_is_rejected() {
        let mut buf = vec![0u8; 44];
        buf[0..4].copy_from_slice(&5i32.to_le_bytes());
        buf[36..40].copy_from_slice(&(-1i32).to_le_bytes());
        assert_eq!(
            decode_shape(&buf),
            Err(ShapeError::NegativeCount { field: "numParts", value: -1 })
        );
    }

    #[test]
    fn huge_point_count_fails_before_allocating() {
        let mut buf = vec![0u8; 44];
        buf[0..4].copy_from_slice(&5i32.to_le_bytes());
        buf[40..44].copy_from_slice(&i32::MAX.to_le_bytes());
        assert!(matches!(
            decode_shape(&buf),
            Err(ShapeError::Truncated { have: 44, .. })
        ));
    }
}
