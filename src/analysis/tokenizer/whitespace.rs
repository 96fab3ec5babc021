//! Whitespace tokenizer implementation.

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::TokenizerInput;
use crate::error::Result;

/// A tokenizer that splits text on Unicode whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer {
    input: TokenizerInput,
}

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer::default()
    }

    /// Find the next maximal run of non-whitespace at or after `from`.
    fn find_term(text: &str, from: usize) -> Option<(usize, usize)> {
        let start = from + text[from..].find(|c: char| !c.is_whitespace())?;
        let end = text[start..]
            .find(char::is_whitespace)
            .map_or(text.len(), |len| start + len);
        Some((start, end))
    }
}

impl TokenStream for WhitespaceTokenizer {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        self.input.next_term(attrs, Self::find_term)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        self.input.close();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexisError;

    fn terms(text: &str) -> Vec<(String, usize, usize)> {
        let mut tokenizer = WhitespaceTokenizer::new();
        let mut attrs = AttributeSet::new();
        tokenizer.reset(text).unwrap();
        let mut out = Vec::new();
        while tokenizer.increment_token(&mut attrs).unwrap() {
            out.push((attrs.term.clone(), attrs.start_offset, attrs.end_offset));
        }
        out
    }

    #[test]
    fn test_whitespace_tokenizer() {
        let tokens = terms("hello  world\ttest");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], ("hello".to_string(), 0, 5));
        assert_eq!(tokens[1], ("world".to_string(), 7, 12));
        assert_eq!(tokens[2], ("test".to_string(), 13, 17));
    }

    #[test]
    fn test_repeated_words_get_their_own_offsets() {
        let tokens = terms("to be or not to be");
        assert_eq!(tokens[4], ("to".to_string(), 13, 15));
        assert_eq!(tokens[5], ("be".to_string(), 16, 18));
    }

    #[test]
    fn test_multibyte_offsets_are_bytes() {
        let tokens = terms(" café\u{3000}naïve ");
        assert_eq!(tokens[0], ("café".to_string(), 1, 6));
        // U+3000 ideographic space is three bytes.
        assert_eq!(tokens[1], ("naïve".to_string(), 9, 15));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(terms("").is_empty());
        assert!(terms(" \n\t ").is_empty());
    }

    #[test]
    fn test_pull_before_reset() {
        let mut tokenizer = WhitespaceTokenizer::new();
        let mut attrs = AttributeSet::new();
        assert!(matches!(
            tokenizer.increment_token(&mut attrs),
            Err(LexisError::NotReset)
        ));
    }

    #[test]
    fn test_reuse_after_reset() {
        let mut tokenizer = WhitespaceTokenizer::new();
        let mut attrs = AttributeSet::new();

        tokenizer.reset("first input").unwrap();
        assert!(tokenizer.increment_token(&mut attrs).unwrap());
        tokenizer.end(&mut attrs).unwrap();

        tokenizer.reset("second").unwrap();
        assert!(tokenizer.increment_token(&mut attrs).unwrap());
        assert_eq!(attrs.term, "second");
        assert_eq!(attrs.start_offset, 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
