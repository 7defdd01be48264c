//! headers/decode.rs
//!
//! Main file header decoding.
//!
//! Layout (offsets from the start of the file):
//!
//! ```text
//! [ 0..4   ] file code      i32  big
//! [ 4..24  ] unused         5 x i32
//! [ 24..28 ] file length    i32  big     (16-bit words)
//! [ 28..32 ] version        i32  little
//! [ 32..36 ] shape type     i32  little
//! [ 36..68 ] Xmin Ymin Xmax Ymax  f64 little
//! [ 68..100] Zmin Zmax Mmin Mmax  f64 little
//! ```

use byteorder::{BigEndian, LittleEndian};

use crate::constants::header_offsets as off;
use crate::geometry::BoundingBox;
use crate::headers::types::{HeaderError, MainFileHeader};
use crate::utils::{read_f64_at, read_i32_at};

/// Decode the 100-byte main file header.
///
/// Only the first 100 bytes are looked at; a longer buffer is fine.
/// Field contents are not validated, see [`MainFileHeader::validate`].
#[inline]
pub fn decode_main_header(buf: &[u8]) -> Result<MainFileHeader, HeaderError> {
    if buf.len() < MainFileHeader::LEN {
        return Err(HeaderError::BufferTooShort {
            have: buf.len(),
            need: MainFileHeader::LEN,
        });
    }

    Ok(MainFileHeader {
        file_code: read_i32_at::<BigEndian>(buf, off::FILE_CODE),
        file_length: read_i32_at::<BigEndian>(buf, off::FILE_LENGTH),
        version: read_i32_at::<LittleEndian>(buf, off::VERSION),
        shape_type: read_i32_at::<LittleEndian>(buf, off::SHAPE_TYPE),
        bbox: BoundingBox::read_le(buf, off::X_MIN),
        z_min: read_f64_at::<LittleEndian>(buf, off::Z_MIN),
        z_max: read_f64_at::<LittleEndian>(buf, off::Z_MAX),
        m_min: read_f64_at::<LittleEndian>(buf, off::M_MIN),
        m_max: read_f64_at::<LittleEndian>(buf, off::M_MAX),
    })
}
