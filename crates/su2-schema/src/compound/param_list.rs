//! Freeform parameter blob

use super::CompoundValue;
use crate::error::CompoundError;
use crate::token::{is_sentinel, tokenize};

/// Freeform parameter list stored as its tokens joined by single spaces
///
/// Used for options whose structure the solver interprets itself, such as
/// design variable parameters or fixed inlet profiles. Any token list is
/// accepted; delimiters are not preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    text: String,
}

impl ParamList {
    /// Build from tokens
    ///
    /// A token list that is exactly `NONE` gives the empty list.
    #[must_use]
    pub fn from_tokens(tokens: &[String]) -> Self {
        if is_sentinel(tokens) {
            return Self::default();
        }
        Self {
            text: tokens.join(" "),
        }
    }

    /// Build from free text, splitting it with the value tokenizer
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    /// Space-joined token text, empty for the zero value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Individual tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|token| !token.is_empty())
    }
}

impl CompoundValue for ParamList {
    fn is_zero(&self) -> bool {
        self.text.is_empty()
    }

    fn render_tokens(&self) -> String {
        self.text.clone()
    }

    fn parse_tokens(tokens: &[String]) -> Result<Self, CompoundError> {
        Ok(Self::from_tokens(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_tokens_with_single_spaces() {
        let list = ParamList::from_text("( 1, 0.5 ); ( 2, 0.25 )");
        assert_eq!(list.as_str(), "1 0.5 ; 2 0.25");
        assert_eq!(list.render(), "1 0.5 ; 2 0.25");
        assert_eq!(list.tokens().count(), 5);
    }

    #[test]
    fn empty_renders_none() {
        assert_eq!(ParamList::default().render(), "NONE");
        assert_eq!(ParamList::from_text("NONE"), ParamList::default());
        assert_eq!(ParamList::from_text("   "), ParamList::default());
    }

    #[test]
    fn parse_reads_back_render() {
        let list = ParamList::from_text("inlet 300 1e5 1 0 0");
        let back = ParamList::parse(&tokenize(&list.render())).unwrap();
        assert_eq!(back, list);
    }
}
