mod common;

use common::{names, sample_catalog, SAMPLE_CSV};
use letterdraw::catalog::{parse, split_line};
use letterdraw::selector::{candidates, Letter, SelectionRequest};
use rstest::rstest;

#[test]
fn test_parses_sample_in_order() {
    let cat = sample_catalog();
    assert_eq!(cat.len(), 10);
    assert_eq!(cat.headers().len(), 7);
    assert_eq!(cat.headers()[0], "name");
    assert_eq!(names(&cat.records()[..3]), vec!["Apple", "Amethyst", "Ancient Fruit"]);
    assert_eq!(cat.dropped(), 0);
}

#[test]
fn test_quoted_comma_survives() {
    let cat = sample_catalog();
    let xenon = &cat.records()[6];
    assert_eq!(xenon.get("name"), Some("Xenon, Raw"));
    assert_eq!(xenon.get("local_image_path"), Some("xenon.png"));
}

#[test]
fn test_every_record_has_header_width() {
    let raw = "a,b,c\n1,2,3\n1,2\n1,2,3,4\n\"1,2\",3,4\n";
    let cat = parse(raw);
    assert_eq!(cat.len(), 2);
    assert_eq!(cat.dropped(), 2);
    for r in cat.records() {
        assert_eq!(r.len(), 3);
    }
}

#[rstest]
#[case("name\nA\n\nB\n", 2)]
#[case("name\nA\n   \nB", 2)]
#[case("name\nA\n\t\n", 1)]
#[case("name\n\n\n", 0)]
#[case("name\r\nA\r\n\r\nB\r\n", 2)]
fn test_blank_lines_produce_nothing(#[case] raw: &str, #[case] expected: usize) {
    assert_eq!(parse(raw).len(), expected);
}

#[test]
fn test_header_tokens_are_trimmed() {
    let cat = parse(" name , wiki_url \r\nApple , https://wiki/Apple \r\n");
    assert_eq!(cat.headers(), &["name".to_string(), "wiki_url".to_string()]);
    let apple = &cat.records()[0];
    assert_eq!(apple.get("name"), Some("Apple"));
    assert_eq!(apple.get("wiki_url"), Some("https://wiki/Apple"));
}

#[test]
fn test_header_is_not_quote_aware() {
    // The header is split on every comma, quotes included.
    let cat = parse("\"a,b\",c\n1,2,3\n");
    assert_eq!(cat.headers().len(), 3);
    assert_eq!(cat.len(), 1);
}

#[rstest]
#[case("a,b,c", &["a", "b", "c"])]
#[case(" a , b ,c ", &["a", "b", "c"])]
#[case("\"a,b\",c", &["a,b", "c"])]
#[case("x\"y\"z,w", &["xyz", "w"])]
#[case("\"\",", &["", ""])]
#[case("\"never closed,still,inside", &["never closed,still,inside"])]
#[case("", &[""])]
fn test_split_line(#[case] line: &str, #[case] expected: &[&str]) {
    assert_eq!(split_line(line), expected);
}

#[test]
fn test_parse_is_repeatable() {
    assert_eq!(parse(SAMPLE_CSV).records(), parse(SAMPLE_CSV).records());
}

#[test]
fn test_leading_bom_is_dropped() {
    let cat = parse("\u{feff}name,Mineral\nApple,no\n");
    assert_eq!(cat.headers()[0], "name");
    assert_eq!(cat.records()[0].get("name"), Some("Apple"));

    let request = SelectionRequest::new(Letter::try_from('A').unwrap());
    assert_eq!(candidates(cat.records(), &request).len(), 1);
}

#[test]
fn test_empty_input() {
    let cat = parse("");
    assert!(cat.is_empty());
}

#[test]
fn test_record_serializes_in_header_order() {
    let cat = parse("name,wiki_url,mineral\nQuartz,https://wiki/Quartz,yes\n");
    let json = serde_json::to_string(&cat.records()[0]).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Quartz","wiki_url":"https://wiki/Quartz","mineral":"yes"}"#
    );
}
