//! stream: one-pass reading of a whole shapefile.
//!
//! Two ways to consume records:
//! - pull: iterate a [`ShapefileReader`]
//! - push: [`for_each_record`] with a consumer callback
//!
//! Both read one record at a time; nothing is accumulated in memory.

pub mod io;
pub mod reader;

pub use io::{open_input, InputSource};

pub use reader::{
    drive,
    for_each_record,
    for_each_record_with_options,
    read_header,
    read_main_file_header,
    ShapefileReader,
};
