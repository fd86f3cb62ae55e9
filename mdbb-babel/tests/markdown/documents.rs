//! Whole documents.

use crate::common::load_fixture;
use insta::assert_snapshot;
use mdbb_babel::convert;

#[test]
fn test_kitchensink() {
    let markdown = load_fixture("kitchensink.md");
    assert_snapshot!(convert(&markdown), @r#"
    [size=6][b]Main Title[/b][/size]

    This is a [b]complex[/b] document with [i]various[/i] formatting.

    [size=5][b]Code Example[/b][/size]

    Here's some [code]inline code[/code] and a code block:

    [code]def hello():
        return "Hello, World!"[/code]

    [size=5][b]Lists and Links[/b][/size]

    [*] Visit [url=https://google.com]Google[/url]
    [*] Check out [b]bold[/b] text
    [*] Some [i]italic[/i] formatting

    [list=1]
    [*] First step
    [*] Second step with [s]old[/s] new text
    [/list]

    [size=4][b]Quotes[/b][/size]

    [quote]This is an important quote
    with multiple lines[/quote]

    [hr]

    [img]https://example.com/logo_small.png[/img]

    That's all!
    "#);
}

#[test]
fn test_file_style_document() {
    assert_eq!(
        convert("# Test\n\nThis is **bold** text."),
        "[size=6][b]Test[/b][/size]\n\nThis is [b]bold[/b] text."
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let markdown = load_fixture("kitchensink.md");
    assert_eq!(convert(&markdown), convert(&markdown));
}
