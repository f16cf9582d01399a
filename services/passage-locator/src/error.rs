use thiserror::Error;

use crate::model::{MatchResult, PageNumber};

/// Reasons a locate session ended without a highlight. None of them is fatal;
/// the viewer simply shows no highlight.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("query is empty after normalization")]
    EmptyQuery,
    #[error("passage not found after scanning {pages_scanned} page(s)")]
    NotFound { pages_scanned: u32 },
    #[error("page {page} is outside the document (1..={page_count})")]
    PageOutOfRange { page: PageNumber, page_count: u32 },
    /// Page settled without exposing any fragments. Only ever logged; the scan
    /// treats it as a failed match for that page.
    #[error("page {page} exposed no text after the settle delay")]
    RenderTimeout { page: PageNumber },
    #[error("session {generation} was superseded by a newer locate")]
    Superseded { generation: u64 },
}

impl LocateError {
    /// Superseded sessions are routine and should not be surfaced to users.
    pub fn is_routine(&self) -> bool {
        matches!(self, LocateError::Superseded { .. })
    }
}

pub type LocateOutcome = Result<MatchResult, LocateError>;
