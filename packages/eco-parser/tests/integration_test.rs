//! End-to-end extraction tests against legislation.gov.uk style fixtures.

use std::fs;
use std::path::Path;

use eco_parser::{extract, EcoParserError, Row};
use pretty_assertions::assert_eq;

const SCHEDULE_WITH_TABLE: &str =
    "http://www.legislation.gov.uk/uksi/2017/1067/schedule/1/made/data.xml";
const SCHEDULE_WITHOUT_TABLE: &str =
    "http://www.legislation.gov.uk/uksi/2017/477/schedule/1/made/data.xml";
const ARTICLE_WITHOUT_TABLE: &str =
    "http://www.legislation.gov.uk/uksi/2017/1270/article/3/made/data.xml";
const TABLE_WITHOUT_HEADER: &str =
    "http://www.legislation.gov.uk/uksi/2015/1873/schedule/1/made/data.xml";
const ONE_ROW_TABLE_VALID: &str =
    "http://www.legislation.gov.uk/uksi/2016/1140/schedule/1/made/data.xml";
const ONE_ROW_TABLE_INVALID: &str =
    "http://www.legislation.gov.uk/uksi/2016/657/schedule/1/made/data.xml";
const UNKNOWN_TABLE_FORMAT: &str =
    "http://www.legislation.gov.uk/uksi/no-example-of-this/schedule/1/made/data.xml";

/// Load fixture file content.
fn load_fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn ward_table() -> Vec<Row> {
    vec![
        Row::from(["(1) Name of borough ward", "(2) Number of councillors"]),
        Row::from(["Crummock & Derwent Valley", "1"]),
        Row::from(["St John’s", "3"]),
        Row::from(["Warnell", "1"]),
        Row::from(["Westward Ho!", "2"]),
        Row::from(["Audley & Queen’s Park", "2"]),
    ]
}

fn ward_names() -> Vec<Row> {
    vec![
        Row::single("Crummock & Derwent Valley"),
        Row::single("St John’s"),
        Row::single("Warnell"),
        Row::single("Westward Ho!"),
        Row::single("Audley & Queen’s Park"),
    ]
}

#[test]
fn test_schedule_with_table() {
    let rows = extract(SCHEDULE_WITH_TABLE, &load_fixture("schedule_with_table.xml")).unwrap();
    assert_eq!(rows, ward_table());
}

#[test]
fn test_schedule_without_table() {
    let rows = extract(
        SCHEDULE_WITHOUT_TABLE,
        &load_fixture("schedule_without_table.xml"),
    )
    .unwrap();
    assert_eq!(rows, ward_names());
}

#[test]
fn test_article_without_table() {
    let rows = extract(
        ARTICLE_WITHOUT_TABLE,
        &load_fixture("article_without_table.xml"),
    )
    .unwrap();

    let mut expected = vec![
        Row::single("The existing wards of the borough of Foo Town are abolished"),
        Row::single("The borough of Foo Town is divided into 5 wards as follows—"),
    ];
    expected.extend(ward_names());
    expected.push(Row::single(
        "Each ward comprises the area identified on the map by reference to the name of the ward",
    ));
    expected.push(Row::single("Three councillors are to be elected for each ward"));

    assert_eq!(rows, expected);
}

#[test]
fn test_header_row_repeated_in_body_is_skipped() {
    let rows = extract(ONE_ROW_TABLE_VALID, &load_fixture("one_row_table_valid.xml")).unwrap();
    assert_eq!(rows, ward_table());
}

#[test]
fn test_duplicated_thead_fails() {
    let err = extract(
        ONE_ROW_TABLE_INVALID,
        &load_fixture("one_row_table_invalid.xml"),
    )
    .unwrap_err();

    match err {
        EcoParserError::AmbiguousOrMissingElement { tag, found } => {
            assert_eq!(tag, "xhtml:thead");
            assert_eq!(found, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_table_without_header_fails() {
    let err = extract(
        TABLE_WITHOUT_HEADER,
        &load_fixture("table_without_header.xml"),
    )
    .unwrap_err();

    assert!(err.is_missing());
    assert_eq!(
        err.to_string(),
        "Expected exactly one <xhtml:thead> element, found 0"
    );
}

#[test]
fn test_unknown_table_format_fails() {
    let err = extract(
        UNKNOWN_TABLE_FORMAT,
        &load_fixture("unknown_table_format.xml"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        EcoParserError::AmbiguousOrMissingElement { ref tag, found: 0 } if tag == "leg:ScheduleBody"
    ));
}

#[test]
fn test_no_parser_found() {
    let err = extract("foo.bar/baz", &load_fixture("schedule_with_table.xml")).unwrap_err();
    assert!(matches!(err, EcoParserError::UnroutableDocument(ref id) if id == "foo.bar/baz"));
}

#[test]
fn test_ragged_rows_keep_their_arity() {
    let rows = extract(SCHEDULE_WITH_TABLE, &load_fixture("table_ragged_rows.xml")).unwrap();

    let arities: Vec<usize> = rows.iter().map(Row::arity).collect();
    assert_eq!(arities, vec![2, 2, 3, 1]);
    assert_eq!(rows[2], Row::from(["St John’s", "3", "see note"]));
}

#[test]
fn test_table_row_count_and_arity() {
    let rows = extract(SCHEDULE_WITH_TABLE, &load_fixture("schedule_with_table.xml")).unwrap();

    // 5 body rows plus the header
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.arity() == 2));
}

#[test]
fn test_narrative_rows_are_normalized() {
    for (url, fixture) in [
        (SCHEDULE_WITHOUT_TABLE, "schedule_without_table.xml"),
        (ARTICLE_WITHOUT_TABLE, "article_without_table.xml"),
    ] {
        let rows = extract(url, &load_fixture(fixture)).unwrap();
        for row in &rows {
            assert_eq!(row.arity(), 1);
            let cell = &row[0];
            assert_eq!(cell.trim(), cell);
            assert!(!cell.contains("  "), "repeated whitespace in {cell:?}");
            assert!(!cell.ends_with([',', '.', ';']), "trailing punctuation in {cell:?}");
        }
    }
}

#[test]
fn test_schedule_url_never_walks_article_path() {
    // An article document fetched under a schedule URL fails on the
    // schedule walk instead of silently reading the article body
    let err = extract(
        SCHEDULE_WITHOUT_TABLE,
        &load_fixture("article_without_table.xml"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        EcoParserError::AmbiguousOrMissingElement { ref tag, found: 0 } if tag == "leg:Schedules"
    ));
}

#[test]
fn test_article_url_never_walks_schedule_path() {
    let err = extract(
        ARTICLE_WITHOUT_TABLE,
        &load_fixture("schedule_with_table.xml"),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        EcoParserError::AmbiguousOrMissingElement { ref tag, found: 0 } if tag == "leg:Body"
    ));
}

#[test]
fn test_extract_is_idempotent() {
    let raw = load_fixture("schedule_with_table.xml");
    let first = extract(SCHEDULE_WITH_TABLE, &raw).unwrap();
    let second = extract(SCHEDULE_WITH_TABLE, &raw).unwrap();
    assert_eq!(first, second);

    let raw = load_fixture("article_without_table.xml");
    let first = extract(ARTICLE_WITHOUT_TABLE, &raw).unwrap();
    let second = extract(ARTICLE_WITHOUT_TABLE, &raw).unwrap();
    assert_eq!(first, second);
}
