//! Bold, italic, bold+italic and strikethrough.

use mdbb_babel::convert;
use rstest::rstest;

#[rstest]
#[case("**bold**", "[b]bold[/b]")]
#[case("__bold__", "[b]bold[/b]")]
#[case("This is **bold** text", "This is [b]bold[/b] text")]
#[case(
    "Multiple **bold** and **more bold**",
    "Multiple [b]bold[/b] and [b]more bold[/b]"
)]
fn test_bold(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[rstest]
#[case("*italic*", "[i]italic[/i]")]
#[case("_italic_", "[i]italic[/i]")]
#[case("This is *italic* text", "This is [i]italic[/i] text")]
#[case(
    "Multiple *italic* and *more italic*",
    "Multiple [i]italic[/i] and [i]more italic[/i]"
)]
fn test_italic(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[rstest]
#[case("***bold italic***", "[b][i]bold italic[/i][/b]")]
#[case("___bold italic___", "[b][i]bold italic[/i][/b]")]
#[case("**bold** and *italic*", "[b]bold[/b] and [i]italic[/i]")]
#[case(
    "***combo*** with **bold** and *italic*",
    "[b][i]combo[/i][/b] with [b]bold[/b] and [i]italic[/i]"
)]
fn test_bold_italic(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[rstest]
#[case("~~strikethrough~~", "[s]strikethrough[/s]")]
#[case("This is ~~deleted~~ text", "This is [s]deleted[/s] text")]
fn test_strikethrough(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(convert(markdown), expected);
}

#[test]
fn test_bold_output_is_stable() {
    let once = convert("**bold**");
    assert_eq!(once, "[b]bold[/b]");
    assert_eq!(convert(&once), once);
}

#[test]
fn test_unbalanced_markers_pass_through() {
    assert_eq!(convert("**"), "**");
    assert_eq!(convert("*"), "*");
    assert_eq!(convert("**open only"), "**open only");
    assert_eq!(convert("*a**b*"), "*a**b*");
}
