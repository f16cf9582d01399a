use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// 1-based page number.
pub type PageNumber = u32;

/// Opaque reference to a rendered text fragment. Only valid for the render
/// instance of the page that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentHandle(pub u64);

/// One rendering unit of text on a page, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub index: usize,
    pub text: String,
    pub handle: FragmentHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    pub text: String,
    #[serde(default)]
    pub hint_page: Option<PageNumber>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hint_page: None,
        }
    }

    pub fn with_hint(mut self, page: PageNumber) -> Self {
        self.hint_page = Some(page);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchKind {
    /// The whole query sits inside one fragment.
    Exact,
    /// The query spans several consecutive fragments.
    Windowed,
    /// Only a single query token was found.
    Fuzzy,
}

/// Inclusive range of fragment positions on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentRange {
    pub start: usize,
    pub end: usize,
}

impl FragmentRange {
    pub fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub page_number: PageNumber,
    pub fragment_start_index: usize,
    pub fragment_end_index: usize,
    pub match_kind: MatchKind,
}

impl MatchResult {
    pub fn new(page_number: PageNumber, range: FragmentRange, match_kind: MatchKind) -> Self {
        Self {
            page_number,
            fragment_start_index: range.start,
            fragment_end_index: range.end,
            match_kind,
        }
    }

    pub fn range(&self) -> FragmentRange {
        FragmentRange {
            start: self.fragment_start_index,
            end: self.fragment_end_index,
        }
    }
}
