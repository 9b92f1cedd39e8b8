//! File loading and shape detection through the public API.

use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;
use tsel_table::{load, parse, FormatError, MockStdin, Source, TableFormat};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_fixed_width_file() {
    let file = write_temp("NAME  AGE  STATUS\nAlice 30   Pending\nBob   45   Done\n");
    let table = load(&Source::from(file.path()), &MockStdin::terminal()).unwrap();

    assert_eq!(table.format(), TableFormat::FixedWidth);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].cell(1), "30");
    assert_eq!(table.rows()[1].cell(1), "45");
    assert_eq!(table.raw_lines()[1], "Bob   45   Done");
}

#[test]
fn load_csv_file_with_crlf() {
    let file = write_temp("a,b\r\n1,2\r\n3,4\r\n");
    let table = load(&Source::from(file.path()), &MockStdin::terminal()).unwrap();

    assert_eq!(table.format(), TableFormat::Delimited);
    assert_eq!(table.rows()[0].cells(), &["1", "2"]);
    assert_eq!(table.rows()[1].cells(), &["3", "4"]);
}

#[test]
fn load_prefers_file_over_stdin() {
    let file = write_temp("x,y\n1,2\n");
    let stdin = MockStdin::piped("other\nvalue\n");
    let table = load(&Source::from(file.path()), &stdin).unwrap();
    assert_eq!(table.schema().names().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn empty_file_is_rejected() {
    let file = write_temp("");
    let err = load(&Source::from(file.path()), &MockStdin::terminal()).unwrap_err();
    assert!(matches!(err, FormatError::Empty));
}

#[test]
fn container_listing_shape() {
    let lines = [
        "CONTAINER ID   IMAGE     STATUS",
        "abc123         nginx     Up 2 hours",
        "def456         redis     Exited (0) 3 days ago",
    ];
    let table = parse(&lines).unwrap();

    assert_eq!(
        table.schema().names().collect::<Vec<_>>(),
        vec!["CONTAINER ID", "IMAGE", "STATUS"]
    );
    assert_eq!(table.rows()[0].cells(), &["abc123", "nginx", "Up 2 hours"]);
    assert_eq!(table.rows()[1].cell(2), "Exited (0) 3 days ago");
}

fn header_token() -> impl Strategy<Value = String> {
    "[A-Z][A-Z_]{0,7}"
}

proptest! {
    #[test]
    fn spans_are_contiguous_and_cover_the_header(
        tokens in prop::collection::btree_set(header_token(), 2..6),
        gaps in prop::collection::vec(2usize..5, 6),
    ) {
        let tokens: Vec<String> = tokens.into_iter().collect();
        let mut header = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                header.push_str(&" ".repeat(gaps[i]));
            }
            header.push_str(token);
        }

        let table = parse(&[header.as_str()]).unwrap();
        let columns = table.schema().columns();

        prop_assert_eq!(columns.len(), tokens.len());
        prop_assert_eq!(columns[0].start, 0);
        for pair in columns.windows(2) {
            prop_assert_eq!(pair[0].stop, pair[1].start);
            prop_assert!(pair[0].start < pair[0].stop);
        }
        prop_assert!(columns[columns.len() - 1].stop >= header.chars().count());
    }

    #[test]
    fn every_row_has_schema_width(
        body in prop::collection::vec("[a-z0-9 ,]{0,30}", 0..10),
    ) {
        let mut lines = vec!["ONE  TWO  THREE".to_string()];
        lines.extend(body);
        let table = parse(&lines).unwrap();
        for row in table.rows() {
            prop_assert_eq!(row.len(), 3);
        }
        prop_assert_eq!(table.rows().len(), table.raw_lines().len());
    }
}
