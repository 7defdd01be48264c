//! Test-only shapefile encoder. Writes the same fields at the same offsets
//! and byte orders the decoder reads.
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

pub const FILE_CODE: i32 = 9994;
pub const VERSION: i32 = 1000;

#[derive(Debug, Clone, Copy)]
pub struct HeaderFields {
    pub file_code: i32,
    pub file_length: i32,
    pub version: i32,
    pub shape_type: i32,
    pub bbox: [f64; 4],
    pub zm: [f64; 4],
}

impl HeaderFields {
    pub fn new(file_length: i32, shape_type: i32) -> Self {
        Self {
            file_code: FILE_CODE,
            file_length,
            version: VERSION,
            shape_type,
            bbox: [0.0; 4],
            zm: [0.0; 4],
        }
    }
}

pub fn encode_header(h: &HeaderFields) -> Vec<u8> {
    let mut out = Vec::with_capacity(100);
    out.write_i32::<BigEndian>(h.file_code).unwrap();
    for _ in 0..5 {
        out.write_i32::<BigEndian>(0).unwrap();
    }
    out.write_i32::<BigEndian>(h.file_length).unwrap();
    out.write_i32::<LittleEndian>(h.version).unwrap();
    out.write_i32::<LittleEndian>(h.shape_type).unwrap();
    for v in h.bbox.iter().chain(h.zm.iter()) {
        out.write_f64::<LittleEndian>(*v).unwrap();
    }
    assert_eq!(out.len(), 100);
    out
}

pub fn encode_record_header(record_number: i32, content_length_words: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    out.write_i32::<BigEndian>(record_number).unwrap();
    out.write_i32::<BigEndian>(content_length_words).unwrap();
    out
}

pub fn null_payload() -> Vec<u8> {
    let mut out = Vec::new();
    out.write_i32::<LittleEndian>(0).unwrap();
    out
}

pub fn point_payload(x: f64, y: f64) -> Vec<u8> {
    let mut out = Vec::with_capacity(20);
    out.write_i32::<LittleEndian>(1).unwrap();
    out.write_f64::<LittleEndian>(x).unwrap();
    out.write_f64::<LittleEndian>(y).unwrap();
    out
}

pub fn polygon_payload(bbox: [f64; 4], parts: &[i32], points: &[(f64, f64)]) -> Vec<u8> {
    let mut out = Vec::new();
    out.write_i32::<LittleEndian>(5).unwrap();
    for v in bbox {
        out.write_f64::<LittleEndian>(v).unwrap();
    }
    out.write_i32::<LittleEndian>(parts.len() as i32).unwrap();
    out.write_i32::<LittleEndian>(points.len() as i32).unwrap();
    for p in parts {
        out.write_i32::<LittleEndian>(*p).unwrap();
    }
    for (x, y) in points {
        out.write_f64::<LittleEndian>(*x).unwrap();
        out.write_f64::<LittleEndian>(*y).unwrap();
    }
    out
}

/// The closed diamond ring used across tests.
pub fn diamond() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (2.0, 2.0), (4.0, 0.0), (2.0, -2.0), (0.0, 0.0)]
}

/// Record header + payload, numbered as given.
pub fn encode_record(record_number: i32, payload: &[u8]) -> Vec<u8> {
    assert_eq!(payload.len() % 2, 0, "payload must be whole 16-bit words");
    let mut out = encode_record_header(record_number, (payload.len() / 2) as i32);
    out.extend_from_slice(payload);
    out
}

/// A complete file whose header declares exactly the bytes written.
pub fn encode_file(shape_type: i32, payloads: &[Vec<u8>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (i, p) in payloads.iter().enumerate() {
        body.extend_from_slice(&encode_record(i as i32 + 1, p));
    }
    let total = 100 + body.len();
    let mut out = encode_header(&HeaderFields::new((total / 2) as i32, shape_type));
    out.extend_from_slice(&body);
    out
}
