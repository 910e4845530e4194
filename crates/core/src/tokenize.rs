//! Word tokenization.
//!
//! A token is a run of ASCII letters and digits, optionally continued by
//! further runs joined with an apostrophe (`'` or `’`) or a hyphen:
//! `don't`, `over-eat` and `rock’n’roll` are single tokens, punctuation on
//! its own never is.

use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex::Regex;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]+(?:['’\-][A-Za-z0-9]+)*").expect("valid word pattern"));

/// Lazily tokenize `text` into words, left to right.
///
/// Duplicates are kept and case is preserved. The returned iterator is
/// `Clone`, so a stream can be restarted from any point.
///
/// # Example
///
/// ```rust
/// use sightline_core::tokenize;
///
/// let words: Vec<_> = tokenize("don't over-eat 123").collect();
/// assert_eq!(words, ["don't", "over-eat", "123"]);
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, offset: 0 }
}

/// Iterator over the words of a text. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let Some(found) = WORD_PATTERN.find_at(self.text, self.offset) else {
            self.offset = self.text.len();
            return None;
        };
        self.offset = found.end();
        Some(found.as_str())
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("don't over-eat 123", &["don't", "over-eat", "123"])]
    #[case("Hello, world! Hello.", &["Hello", "world", "Hello"])]
    #[case("rock’n’roll", &["rock’n’roll"])]
    #[case("state-of-the-art", &["state-of-the-art"])]
    #[case("- ' -- '' ...", &[])]
    #[case("trailing- 'leading dangling'", &["trailing", "leading", "dangling"])]
    #[case("a--b", &["a", "b"])]
    #[case("café naïve", &["caf", "na", "ve"])]
    #[case("", &[])]
    fn test_tokenize(#[case] text: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(text).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_restartable() {
        let tokens = tokenize("one two three");
        let mut first = tokens.clone();
        assert_eq!(first.next(), Some("one"));

        let resumed = first.clone();
        assert_eq!(first.collect::<Vec<_>>(), ["two", "three"]);
        assert_eq!(resumed.collect::<Vec<_>>(), ["two", "three"]);
        assert_eq!(tokens.count(), 3);
    }

    #[test]
    fn test_round_trip() {
        let text = "It's a well-known fact: 42 isn't   the-answer... or is it?";
        let tokens: Vec<_> = tokenize(text).collect();
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined).collect::<Vec<_>>(), tokens);
    }

    #[test]
    fn test_fused() {
        let mut tokens = tokenize("only");
        assert_eq!(tokens.next(), Some("only"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
