use super::*;
use std::io::{Cursor, Write};

mod common {
    use super::*;

    pub(super) fn source(text: &str) -> JsonLinesSource<Cursor<Vec<u8>>> {
        JsonLinesSource::new(Cursor::new(text.as_bytes().to_vec()), &SourceConfig::default())
    }

    pub(super) fn ts(s: &str) -> Timestamp {
        parse_timestamp(s, &SourceConfig::default().timestamp_format).unwrap()
    }
}

mod parse {
    use super::common::{source, ts};
    use super::*;

    #[test]
    fn test_reads_records_in_file_order() {
        let text = concat!(
            r#"{"id":6,"user":"tom","timestamp":"03/01/2019 12:30:00","upvotes":4,"content":"no thanks"}"#,
            "\n",
            r#"{"id":5,"user":"emily","timestamp":"03/01/2019 12:15:00","upvotes":1,"content":"ok"}"#,
            "\n",
        );

        let records: Vec<FeedRecord> = source(text).collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 6);
        assert_eq!(records[0].user.as_str(), "tom");
        assert_eq!(records[0].timestamp, ts("03/01/2019 12:30:00"));
        assert_eq!(records[0].upvotes, 4);
        assert_eq!(records[0].content, "no thanks");
        assert_eq!(records[1].id, 5);
    }

    #[test]
    fn test_skips_blank_lines() {
        let text = concat!(
            "\n   \n",
            r#"{"id":1,"user":"hob","timestamp":"01/01/2019 08:00:00","upvotes":0,"content":""}"#,
            "\n\n",
        );

        let records: Vec<FeedRecord> = source(text).collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content, "");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(source("").count(), 0);
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = SourceConfig {
            timestamp_format: "%Y-%m-%dT%H:%M:%S".to_string(),
        };
        let text =
            r#"{"id":1,"user":"hob","timestamp":"2019-01-03T12:00:00","upvotes":2,"content":"x"}"#;

        let mut src = JsonLinesSource::new(Cursor::new(text), &config);
        let record = src.next().unwrap().unwrap();

        assert_eq!(record.timestamp, ts("03/01/2019 12:00:00"));
        assert!(src.next().is_none());
    }
}

mod errors {
    use super::common::source;
    use super::*;

    #[test]
    fn test_malformed_json_reports_line() {
        let text = concat!(
            r#"{"id":1,"user":"hob","timestamp":"01/01/2019 08:00:00","upvotes":0,"content":"a"}"#,
            "\n",
            "{not json}\n",
        );

        let results: Vec<_> = source(text).collect();

        assert!(results[0].is_ok());
        match &results[1] {
            Err(SourceError::Malformed { line, .. }) => assert_eq!(*line, 2),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_reports_line_and_keeps_counting() {
        let first =
            r#"{"id":1,"user":"hob","timestamp":"01/01/2019 08:00:00","upvotes":0,"content":"a"}"#;
        let mut bytes = first.as_bytes().to_vec();
        bytes.extend_from_slice(b"\n\xff\xfe bad\n{not json}\n");
        let src = JsonLinesSource::new(Cursor::new(bytes), &SourceConfig::default());

        let results: Vec<_> = src.collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(SourceError::Read { line, source }) => {
                assert_eq!(*line, 2);
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected Read, got {other:?}"),
        }
        assert!(matches!(
            results[2],
            Err(SourceError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let text = r#"{"id":1,"user":"hob","timestamp":"01/01/2019 08:00:00","content":"a"}"#;

        let err = source(text).next().unwrap().unwrap_err();
        assert!(matches!(err, SourceError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_bad_timestamp_reports_value() {
        let text = r#"{"id":1,"user":"hob","timestamp":"yesterday","upvotes":0,"content":"a"}"#;

        match source(text).next().unwrap() {
            Err(SourceError::InvalidTimestamp { line, value, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_user_rejected() {
        let text = r#"{"id":1,"user":"","timestamp":"01/01/2019 08:00:00","upvotes":0,"content":"a"}"#;

        let err = source(text).next().unwrap().unwrap_err();
        assert!(matches!(err, SourceError::InvalidUser { line: 1 }));
    }
}

mod open {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.jsonl");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{"id":3,"user":"emily","timestamp":"02/01/2019 09:00:00","upvotes":7,"content":"hi"}}"#
        )
        .unwrap();

        let records: Vec<FeedRecord> = JsonLinesSource::open(&path, &SourceConfig::default())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 3);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.jsonl");

        let result = JsonLinesSource::open(&path, &SourceConfig::default());

        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
