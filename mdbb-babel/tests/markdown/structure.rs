//! Line-level structure: unordered and ordered lists, quotes, horizontal rules.

use mdbb_babel::convert;
use rstest::rstest;

#[rstest]
#[case("* Item 1", "[*] Item 1")]
#[case("- Item 1", "[*] Item 1")]
#[case("+ Item 1", "[*] Item 1")]
#[case("* Item with **bold**", "[*] Item with [b]bold[/b]")]
#[case("- Item with *italic*", "[*] Item with [i]italic[/i]")]
fn test_unordered_lists(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[rstest]
#[case(
    "1. First item\n2. Second item",
    "[list=1]\n[*] First item\n[*] Second item\n[/list]"
)]
#[case(
    "1. Item one\n2. Item two\n3. Item three",
    "[list=1]\n[*] Item one\n[*] Item two\n[*] Item three\n[/list]"
)]
fn test_ordered_lists(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[test]
fn test_ordered_list_between_paragraphs() {
    assert_eq!(
        convert("Steps:\n3. **Mix**\n7. Bake\nDone."),
        "Steps:\n[list=1]\n[*] [b]Mix[/b]\n[*] Bake\n[/list]\nDone."
    );
}

#[test]
fn test_ordered_list_stops_at_code_block() {
    assert_eq!(
        convert("1. one\n```\n2. two\n```"),
        "[list=1]\n[*] one\n[/list]\n[code]2. two[/code]"
    );
}

#[rstest]
#[case("> This is a quote", "[quote]This is a quote[/quote]")]
#[case("> Quote with **bold**", "[quote]Quote with [b]bold[/b][/quote]")]
fn test_quotes(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[test]
fn test_consecutive_quotes_merge() {
    assert_eq!(
        convert("> line one\n> line two\n> line three"),
        "[quote]line one\nline two\nline three[/quote]"
    );
}

#[test]
fn test_separated_quotes_stay_apart() {
    assert_eq!(
        convert("> one\n\n> two"),
        "[quote]one[/quote]\n\n[quote]two[/quote]"
    );
}

#[rstest]
#[case("---", "[hr]")]
#[case("***", "[hr]")]
#[case("___", "[hr]")]
#[case("----", "[hr]")]
fn test_horizontal_rules(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}
