//! stream/io.rs
//! Normalised input for read sessions.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::PathBuf;

use crate::types::ShapefileError;

/// Canonical input abstraction.
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

impl InputSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        InputSource::File(path.into())
    }
}

impl From<PathBuf> for InputSource {
    fn from(p: PathBuf) -> Self {
        InputSource::File(p)
    }
}

impl From<&std::path::Path> for InputSource {
    fn from(p: &std::path::Path) -> Self {
        InputSource::File(p.to_path_buf())
    }
}

impl From<&str> for InputSource {
    fn from(p: &str) -> Self {
        InputSource::File(PathBuf::from(p))
    }
}

impl From<Vec<u8>> for InputSource {
    fn from(b: Vec<u8>) -> Self {
        InputSource::Memory(b)
    }
}

/// Normalise an input source into a boxed reader.
///
/// Files are opened buffered; a failed open reports the path.
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, ShapefileError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(path) => match File::open(&path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(source) => return Err(ShapefileError::Open { path, source }),
        },
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}
