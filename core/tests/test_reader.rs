// End-to-end reading: termination, consumer contract, error categories,
// file sources.

mod common;

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::io::{Cursor, Write};

    use super::common::{
        diamond, encode_file, encode_header, encode_record, null_payload, point_payload,
        polygon_payload, HeaderFields,
    };
    use shapefile_core::config::ReadOptions;
    use shapefile_core::geometry::Point;
    use shapefile_core::headers::HeaderError;
    use shapefile_core::shapes::{Shape, ShapeType};
    use shapefile_core::stream::{
        for_each_record, for_each_record_with_options, read_main_file_header, InputSource,
        ShapefileReader,
    };
    use shapefile_core::types::{ErrorCategory, ShapefileError};

    fn mixed_file() -> Vec<u8> {
        encode_file(
            5,
            &[
                polygon_payload([0.0, -2.0, 4.0, 2.0], &[0], &diamond()),
                null_payload(),
                point_payload(1.5, -1.5),
            ],
        )
    }

// # Termination

    #[test]
    fn header_only_file_yields_no_records() {
        let bytes = encode_header(&HeaderFields::new(50, 1));
        let mut reader = ShapefileReader::new(Cursor::new(bytes)).unwrap();
        assert!(reader.next().is_none());
        assert_eq!(reader.offset(), 100);
    }

    #[test]
    fn exactly_one_record_is_delivered() {
        let payload = point_payload(3.0, 4.0);
        let total = 100 + 8 + payload.len();
        let mut bytes = encode_header(&HeaderFields::new((total / 2) as i32, 1));
        bytes.extend_from_slice(&encode_record(1, &payload));
        // bytes past the declared length must never be read
        bytes.extend_from_slice(&encode_record(2, &[0xFF; 4]));

        let mut seen = Vec::new();
        for_each_record(bytes, |h, s| {
            seen.push((h.record_number, s));
            Ok::<(), Infallible>(())
        })
        .unwrap();

        assert_eq!(seen, vec![(1, Shape::Point(Point::at(3.0, 4.0)))]);
    }

    #[test]
    fn declared_length_shorter_than_header_reads_nothing() {
        let mut bytes = encode_header(&HeaderFields::new(10, 1));
        bytes.extend_from_slice(&encode_record(1, &point_payload(0.0, 0.0)));
        let reader = ShapefileReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn mixed_types_are_dispatched_per_record() {
        let reader = ShapefileReader::new(Cursor::new(mixed_file())).unwrap();
        assert_eq!(reader.header().declared_shape_type(), Some(ShapeType::Polygon));

        let records: Vec<_> = reader.map(|r| r.unwrap()).collect();
        let types: Vec<_> = records.iter().map(|(_, s)| s.shape_type()).collect();
        assert_eq!(types, vec![ShapeType::Polygon, ShapeType::NullShape, ShapeType::Point]);

        let numbers: Vec<_> = records.iter().map(|(h, _)| h.record_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn offset_advances_by_header_and_payload() {
        let mut reader = ShapefileReader::new(Cursor::new(mixed_file())).unwrap();
        reader.next().unwrap().unwrap();
        assert_eq!(reader.offset(), 100 + 8 + 128);
        reader.next().unwrap().unwrap();
        assert_eq!(reader.offset(), 100 + 8 + 128 + 8 + 4);
    }

// # Errors

    #[test]
    fn truncated_record_stops_iteration() {
        let mut bytes = mixed_file();
        bytes.truncate(bytes.len() - 6);

        let mut reader = ShapefileReader::new(Cursor::new(bytes)).unwrap();
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TruncatedData);
        assert!(reader.next().is_none());
    }

    #[test]
    fn truncated_record_is_not_delivered() {
        let mut bytes = mixed_file();
        bytes.truncate(bytes.len() - 6);

        let mut delivered = 0;
        let err = for_each_record(bytes, |_, _| {
            delivered += 1;
            Ok::<(), Infallible>(())
        })
        .unwrap_err();
        assert_eq!(delivered, 2);
        assert!(matches!(err, ShapefileError::Truncated { offset: 256, .. }));
    }

    #[test]
    fn short_file_header_is_truncated() {
        let err = ShapefileReader::new(Cursor::new(vec![0u8; 40])).unwrap_err();
        assert!(matches!(
            err,
            ShapefileError::Header(HeaderError::BufferTooShort { have: 40, need: 100 })
        ));
        assert_eq!(err.category(), ErrorCategory::TruncatedData);
    }

    #[test]
    fn short_polygon_reports_payload_offset() {
        // numPoints = 3 but no point data follows the fixed fields
        let mut polygon = 5i32.to_le_bytes().to_vec();
        polygon.extend_from_slice(&[0u8; 36]);
        polygon.extend_from_slice(&3i32.to_le_bytes());
        let bytes = encode_file(5, &[polygon]);

        let mut reader = ShapefileReader::new(Cursor::new(bytes)).unwrap();
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            ShapefileError::Truncated { offset: 108, need: 92, have: 44 }
        ));
        assert_eq!(err.category(), ErrorCategory::TruncatedData);
        assert!(reader.next().is_none());
    }

    #[test]
    fn unsupported_shape_aborts_session() {
        let mut polyline = 3i32.to_le_bytes().to_vec();
        polyline.extend_from_slice(&[0u8; 40]);
        let bytes = encode_file(1, &[point_payload(0.0, 0.0), polyline, point_payload(1.0, 1.0)]);

        let mut delivered = 0;
        let err = for_each_record(bytes, |_, _| {
            delivered += 1;
            Ok::<(), Infallible>(())
        })
        .unwrap_err();

        assert_eq!(delivered, 1);
        assert!(matches!(
            err,
            ShapefileError::UnsupportedShapeType { record_number: 2, raw: 3 }
        ));
        assert_eq!(err.category(), ErrorCategory::UnsupportedShapeType);
        assert_eq!(
            err.to_string(),
            "unsupported shape type PolyLine (3) in record 2"
        );
    }

    #[test]
    fn consumer_failure_is_distinct() {
        let err = for_each_record(mixed_file(), |h, _| {
            if h.record_number == 2 {
                Err("record rejected")
            } else {
                Ok(())
            }
        })
        .unwrap_err();

        assert!(err.is_consumer());
        match err {
            ShapefileError::Consumer { record_number, source } => {
                assert_eq!(record_number, 2);
                assert_eq!(source.to_string(), "record rejected");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_options_reject_bad_file_code() {
        let mut fields = HeaderFields::new(50, 1);
        fields.file_code = 42;
        let bytes = encode_header(&fields);

        // default options pass it through
        assert!(ShapefileReader::new(Cursor::new(bytes.clone())).is_ok());

        let err = for_each_record_with_options(bytes, ReadOptions::strict(), |_, _| {
            Ok::<(), Infallible>(())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ShapefileError::Header(HeaderError::InvalidFileCode { have: 42, need: 9994 })
        ));
        assert_eq!(err.category(), ErrorCategory::Malformed);
    }

    #[test]
    fn record_limit_from_options() {
        let opts = ReadOptions::default().with_max_record_bytes(64);
        let err = ShapefileReader::open_with_options(mixed_file(), opts)
            .unwrap()
            .next()
            .unwrap()
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Malformed);
    }

// # Sources

    #[test]
    fn reads_from_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&mixed_file()).unwrap();
        file.flush().unwrap();

        let header = read_main_file_header(file.path()).unwrap();
        assert_eq!(header.file_length_bytes(), mixed_file().len() as i64);

        let snapshot = for_each_record(file.path(), |_, _| Ok::<(), Infallible>(())).unwrap();
        assert_eq!(snapshot.records(), 3);
    }

    #[test]
    fn missing_path_is_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.shp");

        let err = read_main_file_header(path.as_path()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnreadableSource);
        match err {
            ShapefileError::Open { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn boxed_reader_source() {
        let src = InputSource::Reader(Box::new(Cursor::new(mixed_file())));
        let reader = ShapefileReader::open(src).unwrap();
        assert_eq!(reader.filter_map(Result::ok).count(), 3);
    }

    #[test]
    fn header_only_entry_point_ignores_records() {
        let mut bytes = encode_header(&HeaderFields::new(1000, 5));
        bytes.extend_from_slice(&[0xFF; 3]);
        let header = read_main_file_header(bytes).unwrap();
        assert_eq!(header.shape_type(), 5);
        assert_eq!(header.file_length_bytes(), 2000);
    }
}
