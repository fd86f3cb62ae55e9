//! Header conversion: `#`..`######` map to sizes 6..1.

use mdbb_babel::convert;
use rstest::rstest;

#[rstest]
#[case("# Header 1", "[size=6][b]Header 1[/b][/size]")]
#[case("## Header 2", "[size=5][b]Header 2[/b][/size]")]
#[case("### Header 3", "[size=4][b]Header 3[/b][/size]")]
#[case("#### Header 4", "[size=3][b]Header 4[/b][/size]")]
#[case("##### Header 5", "[size=2][b]Header 5[/b][/size]")]
#[case("###### Header 6", "[size=1][b]Header 6[/b][/size]")]
fn test_header_levels(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[test]
fn test_every_level_maps_to_inverse_size() {
    for level in 1..=6 {
        let markdown = format!("{} text", "#".repeat(level));
        let expected = format!("[size={}][b]text[/b][/size]", 7 - level);
        assert_eq!(convert(&markdown), expected, "level {level}");
    }
}

#[test]
fn test_seven_markers_are_plain_text() {
    assert_eq!(convert("####### Too deep"), "####### Too deep");
}

#[test]
fn test_marker_without_space_is_plain_text() {
    assert_eq!(convert("#hashtag"), "#hashtag");
}

#[test]
fn test_marker_with_only_a_space() {
    assert_eq!(convert("# "), "#");
    assert_eq!(convert("## \ntext"), "## \ntext");
}

#[test]
fn test_whitespace_only_header_is_kept() {
    assert_eq!(convert("#  "), "[size=6][b] [/b][/size]");
    assert_eq!(convert("text\n##  \nmore"), "text\n[size=5][b] [/b][/size]\nmore");
}

#[test]
fn test_literal_empty_header_markup_is_dropped() {
    assert_eq!(convert("[size=3][b][/b][/size]\nbody"), "body");
}
