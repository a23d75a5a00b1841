use csvview::{
    CsvView, DataBag, EncodeError, Field, FormatConfig, Row, RowSet, encode, resolve,
};
use serde_json::json;

fn rows(value: serde_json::Value) -> RowSet {
    match value {
        serde_json::Value::Array(items) => RowSet::from(items),
        _ => panic!("rows must be a JSON array"),
    }
}

#[test]
fn test_plain_rows_with_defaults() {
    let out = encode(&FormatConfig::default(), &rows(json!([["a", "b"], ["c", "d"]]))).unwrap();
    assert_eq!(out, "a,b\nc,d\n");
}

#[test]
fn test_bare_scalars_are_normalized() {
    let input = rows(json!(["Jan", "Feb"])).normalize();
    assert!(input.iter().all(|row| matches!(row, Row::Fields(f) if f.len() == 1)));

    let out = encode(&FormatConfig::default(), &input).unwrap();
    assert_eq!(out, "Jan\nFeb\n");
}

#[test]
fn test_tab_separated_output() {
    let config = FormatConfig::default().with_sep_char('\t');
    let out = encode(&config, &rows(json!([["x", "y"]]))).unwrap();
    assert_eq!(out, "x\ty\n");
}

#[test]
fn test_separator_inside_field_is_quoted() {
    let out = encode(&FormatConfig::default(), &rows(json!([["a,b"]]))).unwrap();
    assert_eq!(out, "\"a,b\"\n");
}

#[test]
fn test_empty_row_set_is_empty_text() {
    let out = encode(&FormatConfig::default(), &RowSet::new()).unwrap();
    assert_eq!(out, "");
}

#[test]
fn test_bag_scan_concatenates_collections() {
    let mut bag = DataBag::new();
    bag.insert("first", json!([["a"], ["b"], ["c"]]));
    bag.insert("title", json!("Quarterly report"));
    bag.insert("second", json!(["d", "e"]));

    let resolved = resolve(bag);
    assert_eq!(resolved.len(), 3 + 2);

    let out = encode(&FormatConfig::default(), &resolved).unwrap();
    assert_eq!(out, "a\nb\nc\nd\ne\n");
}

#[test]
fn test_explicit_rows_take_precedence_over_scan() {
    let mut bag = DataBag::new();
    bag.insert("extra", json!([["ignored"]]));
    bag.insert("data", json!([["kept", 1]]));

    let out = CsvView::default().render_bag(bag).unwrap();
    assert_eq!(out, "kept,1\n");
}

#[test]
fn test_mixed_shapes_in_one_row_set() {
    let mut input = RowSet::new();
    input.push(vec![Field::from("name"), Field::from("count")]);
    input.push(Row::Scalar(Field::from("orphan")));
    input.push(vec![Field::from("widgets, large"), Field::from(12i64)]);
    input.push(vec![Field::Empty, Field::from(None::<i64>)]);

    let out = encode(&FormatConfig::default(), &input).unwrap();
    assert_eq!(out, "name,count\norphan\n\"widgets, large\",12\n,\n");
}

#[test]
fn test_semicolon_and_crlf_like_spreadsheet_exports() {
    let config = FormatConfig::default().with_sep_char(';').with_eol("\r\n");
    let out = encode(&config, &rows(json!([["1,5", "a;b"], ["x", "y"]]))).unwrap();
    assert_eq!(out, "1,5;\"a;b\"\r\nx;y\r\n");
}

#[test]
fn test_backslash_escaping() {
    let config = FormatConfig::default().with_escape_char('\\');
    let out = encode(&config, &rows(json!([["say \"hi\"", "plain"]]))).unwrap();
    assert_eq!(out, "\"say \\\"hi\\\"\",plain\n");
}

#[test]
fn test_failure_reports_position_and_returns_nothing() {
    let input = rows(json!([["a", "b"], ["c", ["nested"]]]));
    let result = encode(&FormatConfig::default(), &input);
    assert_eq!(
        result,
        Err(EncodeError::UnencodableField {
            row_index: 1,
            field_index: 1
        })
    );
}
