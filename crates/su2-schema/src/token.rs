//! Value tokenizer
//!
//! Splits the right-hand side of a config line into raw value tokens.
//! Delimiters are discarded and runs of delimiters collapse, so
//! `( 1.0, 2.0 )`, `1.0 2.0` and `{1.0:2.0}` all yield `["1.0", "2.0"]`.

/// Characters that separate value tokens
pub const DELIMITERS: &[char] = &[
    ' ', '(', ')', '[', ']', '{', '}', ':', ',', '\t', '\n', '\u{0B}', '\u{0C}', '\r',
];

/// Canonical text of an empty sequence or zero compound value
pub const NONE: &str = "NONE";

/// Leading character of a comment line
pub const COMMENT: char = '%';

/// Split value text into tokens
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// True if the token list is exactly the `NONE` sentinel
#[inline]
#[must_use]
pub fn is_sentinel(tokens: &[String]) -> bool {
    matches!(tokens, [only] if only == NONE)
}

/// True if `text` survives the format as a single token
///
/// A string written as a bare value must come back from the tokenizer as
/// itself. Empty strings, strings with delimiters and anything that would
/// confuse the line splitter or comment detection do not.
#[must_use]
pub fn is_single_token(text: &str) -> bool {
    !text.is_empty()
        && !text.contains(DELIMITERS)
        && !text.contains('=')
        && !text.starts_with(COMMENT)
}
