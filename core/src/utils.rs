//! utils.rs
//!
//! Per-field byte-order readers.
//!
//! The shapefile layout mixes big- and little-endian fields inside one
//! structure, so the order is a type parameter on every read instead of a
//! buffer-wide setting. Callers check the buffer length first; these helpers
//! index directly.

use std::io::{self, Read};

use byteorder::ByteOrder;

#[inline]
pub fn read_i32_at<B: ByteOrder>(buf: &[u8], off: usize) -> i32 {
    B::read_i32(&buf[off..off + 4])
}

#[inline]
pub fn read_f64_at<B: ByteOrder>(buf: &[u8], off: usize) -> f64 {
    B::read_f64(&buf[off..off + 8])
}

/// Convert a 16-bit word count into a byte count.
#[inline]
pub fn words_to_bytes(words: i32) -> i64 {
    words as i64 * crate::constants::BYTES_PER_WORD
}

/// Fill `buf` from `r`, stopping early only at EOF. Returns the byte count,
/// so a short read can be reported with how much was actually there.
pub fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;
    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(off)
}
