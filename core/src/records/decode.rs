use std::io::Read;

use byteorder::BigEndian;
use bytes::Bytes;

use crate::records::types::{RecordError, RecordFrame, RecordHeader, RecordView};
use crate::utils::{read_full, read_i32_at};

/// Payload buffers grow from this size as data arrives, so a garbage
/// content length cannot force a huge allocation up front.
const INITIAL_PAYLOAD_CAPACITY: usize = 64 * 1024;

/// Decode the 8-byte record header.
#[inline]
pub fn parse_record_header(wire: &[u8]) -> Result<RecordHeader, RecordError> {
    if wire.len() < RecordHeader::LEN {
        return Err(RecordError::Truncated {
            offset: 0,
            need: RecordHeader::LEN,
            have: wire.len(),
        });
    }

    Ok(RecordHeader {
        record_number: read_i32_at::<BigEndian>(wire, 0),
        content_length: read_i32_at::<BigEndian>(wire, 4),
    })
}

/// Decode a single record from bytes.
///
/// `wire` must start at a record header and hold at least the declared
/// payload; anything after it is left for the caller.
pub fn decode_record(wire: &[u8]) -> Result<RecordView<'_>, RecordError> {
    let header = parse_record_header(wire)?;
    let len = payload_len(&header, usize::MAX)?;

    let available = wire.len() - RecordHeader::LEN;
    if available < len {
        return Err(RecordError::Truncated {
            offset: RecordHeader::LEN as u64,
            need: len,
            have: available,
        });
    }

    Ok(RecordView {
        header,
        payload: &wire[RecordHeader::LEN..RecordHeader::LEN + len],
    })
}

/// Read the next record from a stream positioned at a record header.
///
/// `offset` is the number of file bytes consumed before this record; it is
/// only used for error context and `RecordFrame::end_offset`.
pub fn read_record<R: Read>(
    r: &mut R,
    offset: u64,
    max_payload: usize,
) -> Result<RecordFrame, RecordError> {
    let mut hdr_buf = [0u8; RecordHeader::LEN];
    let got = read_full(r, &mut hdr_buf).map_err(|source| RecordError::Io { offset, source })?;
    if got < RecordHeader::LEN {
        return Err(RecordError::Truncated { offset, need: RecordHeader::LEN, have: got });
    }

    let header = parse_record_header(&hdr_buf)?;
    let len = payload_len(&header, max_payload)?;

    let payload_offset = offset + RecordHeader::LEN as u64;
    let mut payload = Vec::with_capacity(len.min(INITIAL_PAYLOAD_CAPACITY));
    r.by_ref()
        .take(len as u64)
        .read_to_end(&mut payload)
        .map_err(|source| RecordError::Io { offset: payload_offset, source })?;

    if payload.len() < len {
        return Err(RecordError::Truncated {
            offset: payload_offset,
            need: len,
            have: payload.len(),
        });
    }

    Ok(RecordFrame {
        header,
        offset,
        payload: Bytes::from(payload),
    })
}

fn payload_len(header: &RecordHeader, max: usize) -> Result<usize, RecordError> {
    let bytes = usize::try_from(header.content_length_bytes()).map_err(|_| {
        RecordError::NegativeContentLength {
            record_number: header.record_number,
            content_length: header.content_length,
        }
    })?;
    if bytes > max {
        return Err(RecordError::ContentTooLarge {
            record_number: header.record_number,
            bytes,
            max,
        });
    }
    Ok(bytes)
}
