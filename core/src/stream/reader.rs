//! stream/reader.rs
//!
//! Sequential shapefile reader.
//!
//! ```text
//! +------------------+
//! | Main File Header |  100 bytes
//! +---------------+--+------------------+
//! | Record Header | Record Contents     |  repeated until the declared
//! +---------------+---------------------+  file length is consumed
//! ```
//!
//! The header's file length is authoritative: the reader stops as soon as the
//! consumed byte count reaches it and never looks at bytes beyond it.

use std::io::Read;
use std::iter::FusedIterator;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::config::ReadOptions;
use crate::constants::{FILE_CODE, MAIN_HEADER_LEN};
use crate::headers::{decode_main_header, HeaderError, MainFileHeader};
use crate::records::{read_record, RecordHeader};
use crate::shapes::{decode_shape, Shape};
use crate::stream::io::{open_input, InputSource};
use crate::telemetry::{ReadCounters, TelemetrySnapshot};
use crate::types::{ConsumerError, ShapefileError};
use crate::utils::read_full;

/// Read and decode the main file header from the start of `r`.
pub fn read_header<R: Read>(r: &mut R) -> Result<MainFileHeader, ShapefileError> {
    let mut buf = [0u8; MAIN_HEADER_LEN];
    let got = read_full(r, &mut buf)?;
    if got < MAIN_HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: got, need: MAIN_HEADER_LEN }.into());
    }
    Ok(decode_main_header(&buf)?)
}

/// One pass over a shapefile.
///
/// Yields `(RecordHeader, Shape)` pairs in file order. The sequence is lazy,
/// finite and not restartable; after the first error it yields nothing more.
#[derive(Debug)]
pub struct ShapefileReader<R: Read> {
    inner: R,
    header: MainFileHeader,
    options: ReadOptions,
    offset: u64,
    counters: ReadCounters,
    done: bool,
}

impl<R: Read> ShapefileReader<R> {
    /// Consume the main file header and position at the first record.
    pub fn new(reader: R) -> Result<Self, ShapefileError> {
        Self::with_options(reader, ReadOptions::default())
    }

    pub fn with_options(mut reader: R, options: ReadOptions) -> Result<Self, ShapefileError> {
        let header = read_header(&mut reader)?;

        if options.validate_header {
            header.validate()?;
        } else if header.file_code != FILE_CODE {
            warn!(file_code = header.file_code, "unexpected shapefile file code");
        }
        if header.file_length_bytes() < MAIN_HEADER_LEN as i64 {
            warn!(
                file_length_bytes = header.file_length_bytes(),
                "declared file length is shorter than the main header"
            );
        }
        debug!(
            file_length_bytes = header.file_length_bytes(),
            version = header.version,
            shape_type = header.shape_type,
            "decoded main file header"
        );

        let mut counters = ReadCounters::default();
        counters.add_header(MAIN_HEADER_LEN);

        Ok(Self {
            inner: reader,
            header,
            options,
            offset: MAIN_HEADER_LEN as u64,
            counters,
            done: false,
        })
    }

    pub fn header(&self) -> &MainFileHeader {
        &self.header
    }

    /// File bytes consumed so far (main header included).
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn counters(&self) -> &ReadCounters {
        &self.counters
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn has_more(&self) -> bool {
        (self.offset as i64) < self.header.file_length_bytes()
    }

    /// Decode the next record, or `Ok(None)` once the declared length is used up.
    pub fn next_record(&mut self) -> Result<Option<(RecordHeader, Shape)>, ShapefileError> {
        if self.done {
            return Ok(None);
        }
        let result = self.read_next();
        if !matches!(result, Ok(Some(_))) {
            self.done = true;
        }
        result
    }

    fn read_next(&mut self) -> Result<Option<(RecordHeader, Shape)>, ShapefileError> {
        // Checked before every read: a header-only file yields no records.
        if !self.has_more() {
            debug!(offset = self.offset, records = self.counters.records_total(), "end of records");
            return Ok(None);
        }

        let frame = read_record(&mut self.inner, self.offset, self.options.max_record_bytes)?;
        let header = frame.header;

        let payload_offset = frame.offset + RecordHeader::LEN as u64;
        let shape = decode_shape(&frame.payload)
            .map_err(|e| ShapefileError::from_shape(header.record_number, payload_offset, e))?;

        trace!(
            record_number = header.record_number,
            offset = frame.offset,
            content_bytes = frame.payload.len(),
            shape_type = %shape.shape_type(),
            "decoded record"
        );

        self.counters
            .add_record(&shape, RecordHeader::LEN, frame.payload.len());
        self.offset = frame.end_offset();

        Ok(Some((header, shape)))
    }
}

impl ShapefileReader<Box<dyn Read + Send>> {
    /// Open any input source and read its header.
    pub fn open(src: impl Into<InputSource>) -> Result<Self, ShapefileError> {
        Self::open_with_options(src, ReadOptions::default())
    }

    pub fn open_with_options(
        src: impl Into<InputSource>,
        options: ReadOptions,
    ) -> Result<Self, ShapefileError> {
        let reader = open_input(src.into())?;
        Self::with_options(reader, options)
    }
}

impl<R: Read> Iterator for ShapefileReader<R> {
    type Item = Result<(RecordHeader, Shape), ShapefileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

impl<R: Read> FusedIterator for ShapefileReader<R> {}

/// Read only the main file header; no records are scanned.
pub fn read_main_file_header(src: impl Into<InputSource>) -> Result<MainFileHeader, ShapefileError> {
    let mut reader = open_input(src.into())?;
    read_header(&mut reader)
}

/// Push every record of a shapefile into `consumer`, in file order.
///
/// A consumer error stops the scan and is returned as
/// [`ShapefileError::Consumer`], distinct from I/O and decode failures.
/// Records delivered before a failure stay delivered.
pub fn for_each_record<F, E>(
    src: impl Into<InputSource>,
    consumer: F,
) -> Result<TelemetrySnapshot, ShapefileError>
where
    F: FnMut(RecordHeader, Shape) -> Result<(), E>,
    E: Into<ConsumerError>,
{
    for_each_record_with_options(src, ReadOptions::default(), consumer)
}

pub fn for_each_record_with_options<F, E>(
    src: impl Into<InputSource>,
    options: ReadOptions,
    consumer: F,
) -> Result<TelemetrySnapshot, ShapefileError>
where
    F: FnMut(RecordHeader, Shape) -> Result<(), E>,
    E: Into<ConsumerError>,
{
    let reader = ShapefileReader::open_with_options(src, options)?;
    drive(reader, consumer)
}

/// Run `consumer` over an already-open reader.
pub fn drive<R, F, E>(
    mut reader: ShapefileReader<R>,
    mut consumer: F,
) -> Result<TelemetrySnapshot, ShapefileError>
where
    R: Read,
    F: FnMut(RecordHeader, Shape) -> Result<(), E>,
    E: Into<ConsumerError>,
{
    let start = Instant::now();
    while let Some((header, shape)) = reader.next_record()? {
        let record_number = header.record_number;
        consumer(header, shape).map_err(|e| ShapefileError::Consumer {
            record_number,
            source: e.into(),
        })?;
    }

    let snapshot = TelemetrySnapshot::from(*reader.header(), reader.counters(), start.elapsed());
    debug!(
        records = snapshot.records(),
        bytes = snapshot.counters.bytes_total(),
        elapsed_ms = snapshot.elapsed.as_millis() as u64,
        "shapefile scan complete"
    );
    Ok(snapshot)
}
