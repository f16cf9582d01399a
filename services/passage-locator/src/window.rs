//! Substring search across consecutive text fragments of one page.

use crate::model::{FragmentRange, MatchKind};

/// Finds a normalized query inside normalized page fragments, letting the
/// match span a bounded number of neighbouring fragments.
#[derive(Debug, Clone)]
pub struct FragmentWindowMatcher {
    max_fragments: usize,
    slack: usize,
}

impl FragmentWindowMatcher {
    pub fn new(max_fragments: usize, slack: usize) -> Self {
        Self {
            max_fragments: max_fragments.max(1),
            slack,
        }
    }

    /// Return the range holding the leftmost occurrence of `query`.
    ///
    /// Start positions are tried in order. A start whose fragment contains the
    /// whole query yields a single-fragment range; otherwise the window grows
    /// until it holds an occurrence that begins inside the start fragment.
    /// An occurrence that begins in a later fragment belongs to that later
    /// start, so it is not credited to an earlier window.
    ///
    /// Both `fragments` and `query` must already be normalized. A window is
    /// built by joining fragments with a single space; blank fragments are
    /// never a start and add no text, but still count against the window
    /// size. Growth from a start stops once the window holds
    /// `max_fragments` fragments or its text is longer than
    /// `query.len() + slack`.
    pub fn find(&self, fragments: &[String], query: &str) -> Option<(FragmentRange, MatchKind)> {
        if query.is_empty() {
            return None;
        }

        let limit = query.len() + self.slack;
        for (start, first) in fragments.iter().enumerate() {
            if first.is_empty() {
                continue;
            }
            if first.contains(query) {
                return Some((FragmentRange::single(start), MatchKind::Exact));
            }

            let last = (start + self.max_fragments).min(fragments.len());
            let mut window = first.clone();
            for (end, next) in fragments.iter().enumerate().take(last).skip(start + 1) {
                if next.is_empty() {
                    continue;
                }
                window.push(' ');
                window.push_str(next);
                match window.find(query) {
                    Some(pos) if pos < first.len() => {
                        return Some((FragmentRange { start, end }, MatchKind::Windowed));
                    }
                    // begins in a later fragment, which will own it
                    Some(_) => break,
                    None => {}
                }
                if window.len() > limit {
                    break;
                }
            }
        }
        None
    }
}
