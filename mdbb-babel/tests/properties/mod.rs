//! Property tests over arbitrary input.

use mdbb_babel::convert;
use proptest::prelude::*;

fn markdownish() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("# ".to_string()),
            Just("> ".to_string()),
            Just("- ".to_string()),
            Just("1. ".to_string()),
            Just("```".to_string()),
            Just("\n".to_string()),
            Just("*".to_string()),
            Just("_".to_string()),
            Just("~~".to_string()),
            Just("`".to_string()),
            Just("[a](b)".to_string()),
            Just("![i](u)".to_string()),
            "[a-z ]{1,8}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn conversion_is_deterministic(markdown in markdownish()) {
        prop_assert_eq!(convert(&markdown), convert(&markdown));
    }

    #[test]
    fn arbitrary_text_never_panics(markdown in "\\PC*") {
        let _ = convert(&markdown);
    }

    #[test]
    fn output_is_trimmed(markdown in markdownish()) {
        let output = convert(&markdown);
        prop_assert_eq!(output.trim(), output.as_str());
    }

    #[test]
    fn code_spans_are_inert(body in "[a-z*_~#>()\\[\\]!]{1,20}") {
        let markdown = format!("x `{body}` y");
        prop_assert_eq!(convert(&markdown), format!("x [code]{body}[/code] y"));
    }

    #[test]
    fn plain_words_pass_through(text in "[a-zA-Z][a-zA-Z ,.]{0,40}[a-zA-Z.]") {
        prop_assert_eq!(convert(&text), text);
    }
}
