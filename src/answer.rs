//! Extraction of the final numeric token from free text.
//!
//! GSM8K gold answers end in a `#### 42` line, and chain-of-thought model
//! output conventionally places the final answer last, so the last numeral
//! in the text is taken as the answer.

use std::sync::OnceLock;

use regex::Regex;

static NUMERAL: OnceLock<Regex> = OnceLock::new();

fn numeral_regex() -> &'static Regex {
    NUMERAL.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d*\.\d+|\d+)").expect("numeral regex compiles")
    })
}

/// Returns the last integer or decimal numeral in `text` (optional leading
/// sign, e.g. `-12`, `3.14`, `42`), or `None` if the text contains none.
///
/// The numeral is returned as the matched substring, not normalized to a
/// numeric type: `"42"` and `"42.0"` are distinct answers. Thousands
/// separators are not handled (`"1,000"` parses as `"000"`).
pub fn parse_answer(text: &str) -> Option<String> {
    numeral_regex()
        .find_iter(text)
        .last()
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "answer_tests.rs"]
mod tests;
