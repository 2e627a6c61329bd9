//! Text clean-up applied by request layers before scoring.
//!
//! The scoring engine compares surface strings as-is; these helpers strip
//! sentence punctuation and lowercase the text so that "Fox." and "fox"
//! count as the same token.

use std::sync::LazyLock;

use regex_lite::Regex;

static PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[?,!.;]+").expect("valid punctuation pattern"));

/// Deletes runs of `? , ! . ;`, trims and lowercases.
///
/// Used for query-string input: `"Hello, world!"` → `"hello world"`.
pub fn normalize_query_text(text: &str) -> String {
	PUNCTUATION.replace_all(text, "").trim().to_lowercase()
}

/// Replaces runs of `? , ! . ;` with a single space, trims and lowercases.
///
/// Used for JSON bodies, where sentences are often glued together:
/// `"End.Start"` → `"end start"`.
pub fn normalize_body_text(text: &str) -> String {
	PUNCTUATION.replace_all(text, " ").trim().to_lowercase()
}
