//! headers/mod.rs
//! Main file header of a shapefile.
//!
//! - Fixed 100-byte header at the start of every .shp file.
//! - Declares the total file length, which drives record iteration.
//! - The declared shape type is advisory; each record carries its own tag.

pub mod types;
pub mod decode;

pub use types::*;
pub use decode::*;
