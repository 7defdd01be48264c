//! constants.rs
//! Fixed values of the ESRI shapefile main file (.shp) layout.

/// File code stored big-endian at byte 0 of every shapefile.
pub const FILE_CODE: i32 = 9994;

/// Format version stored little-endian at byte 28.
pub const FILE_VERSION: i32 = 1000;

/// Main file header size in bytes.
pub const MAIN_HEADER_LEN: usize = 100;

/// Record header size in bytes (record number + content length).
pub const RECORD_HEADER_LEN: usize = 8;

/// Length fields in the file are counted in 16-bit words.
pub const BYTES_PER_WORD: i64 = 2;

/// Largest payload a record header can declare: `i32::MAX` words.
pub const MAX_CONTENT_BYTES: usize = i32::MAX as usize * 2;

/// Byte offsets inside the main file header.
pub mod header_offsets {
    pub const FILE_CODE: usize = 0;
    pub const FILE_LENGTH: usize = 24;
    pub const VERSION: usize = 28;
    pub const SHAPE_TYPE: usize = 32;
    pub const X_MIN: usize = 36;
    pub const Y_MIN: usize = 44;
    pub const X_MAX: usize = 52;
    pub const Y_MAX: usize = 60;
    pub const Z_MIN: usize = 68;
    pub const Z_MAX: usize = 76;
    pub const M_MIN: usize = 84;
    pub const M_MAX: usize = 92;
}

/// Byte offsets inside a shape payload.
pub mod shape_offsets {
    pub const SHAPE_TYPE: usize = 0;

    pub const POINT_X: usize = 4;
    pub const POINT_Y: usize = 12;
    pub const POINT_LEN: usize = 20;

    pub const POLYGON_BOX: usize = 4;
    pub const POLYGON_NUM_PARTS: usize = 36;
    pub const POLYGON_NUM_POINTS: usize = 40;
    pub const POLYGON_PARTS: usize = 44;
}
