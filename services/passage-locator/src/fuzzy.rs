//! Best-effort fallback used once windowed matching has failed on a page.
//!
//! The match is only a navigation aid: it lands on the first fragment that
//! contains the first long-enough query token, which may well be a false
//! positive. The reviewer confirms visually.

use shared::text::tokens;

#[derive(Debug, Clone)]
pub struct FuzzyFallbackMatcher {
    min_token_len: usize,
}

impl FuzzyFallbackMatcher {
    pub fn new(min_token_len: usize) -> Self {
        Self {
            min_token_len: min_token_len.max(1),
        }
    }

    /// Position of the first fragment containing the query's first token of
    /// at least `min_token_len` characters. Inputs must be normalized.
    pub fn find(&self, fragments: &[String], query: &str) -> Option<usize> {
        let token = tokens(query, self.min_token_len).next()?;
        fragments.iter().position(|f| f.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn uses_first_qualifying_token() {
        let f = frags(&["net amount", "payable within", "thirty days"]);
        // "the" and "net" are too short
        assert_eq!(
            FuzzyFallbackMatcher::new(4).find(&f, "the net payable amount"),
            Some(1)
        );
    }

    #[test]
    fn only_the_first_token_is_tried() {
        let f = frags(&["invoice date", "section"]);
        assert_eq!(FuzzyFallbackMatcher::new(4).find(&f, "payment section"), None);
    }

    #[test]
    fn stopwords_only_yield_nothing() {
        let f = frags(&["of the and", "a to in"]);
        assert_eq!(FuzzyFallbackMatcher::new(4).find(&f, "of the and a to"), None);
    }

    #[test]
    fn threshold_is_configurable() {
        let f = frags(&["pay net 30"]);
        assert_eq!(FuzzyFallbackMatcher::new(3).find(&f, "net 45"), Some(0));
        assert_eq!(FuzzyFallbackMatcher::new(4).find(&f, "net 45"), None);
    }
}
