//! Per-session state machine that walks pages until the query is found.

use std::rc::Rc;

use shared::text::normalize;
use tracing::{debug, info, warn};

use crate::config::LocatorConfig;
use crate::error::{LocateError, LocateOutcome};
use crate::fuzzy::FuzzyFallbackMatcher;
use crate::highlight::HighlightController;
use crate::model::{Fragment, FragmentRange, MatchKind, MatchResult, PageNumber, Query};
use crate::session::Session;
use crate::source::DocumentSource;
use crate::window::FragmentWindowMatcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Activating(PageNumber),
    Matching(PageNumber),
    Advancing(PageNumber),
    Found(MatchResult),
    Exhausted,
    Cancelled,
}

pub struct PageScanController {
    source: Rc<dyn DocumentSource>,
    highlight: HighlightController,
    session: Session,
    config: LocatorConfig,
    window: FragmentWindowMatcher,
    fuzzy: FuzzyFallbackMatcher,
    state: ScanState,
}

impl PageScanController {
    pub fn new(
        source: Rc<dyn DocumentSource>,
        highlight: HighlightController,
        session: Session,
        config: LocatorConfig,
    ) -> Self {
        let window = FragmentWindowMatcher::new(config.window_fragments, config.window_slack);
        let fuzzy = FuzzyFallbackMatcher::new(config.fuzzy_min_token_len);
        Self {
            source,
            highlight,
            session,
            config,
            window,
            fuzzy,
            state: ScanState::Idle,
        }
    }

    /// Drive the scan to completion. With a page hint only that page is
    /// tried; without one pages are scanned from 1 upwards. Every page
    /// activation and the final highlight happen only while this session is
    /// still current.
    pub async fn run(mut self, query: Query) -> LocateOutcome {
        let generation = self.session.generation();
        let needle = normalize(&query.text);
        if needle.is_empty() {
            return Err(LocateError::EmptyQuery);
        }

        let page_count = self.source.page_count();
        let first_page = match query.hint_page {
            Some(page) if page == 0 || page > page_count => {
                return Err(LocateError::PageOutOfRange { page, page_count });
            }
            Some(page) => page,
            None if page_count == 0 => return Err(LocateError::NotFound { pages_scanned: 0 }),
            None => 1,
        };
        let exhaustive = query.hint_page.is_none();
        let mut pages_scanned = 0u32;

        loop {
            match self.state.clone() {
                ScanState::Idle => self.transition(ScanState::Activating(first_page)),
                ScanState::Activating(page) => {
                    if !self.session.is_current() {
                        self.transition(ScanState::Cancelled);
                        continue;
                    }
                    self.source.render_page(page);
                    self.source
                        .wait_rendered(page, self.config.settle_delay)
                        .await;
                    self.transition(ScanState::Matching(page));
                }
                ScanState::Matching(page) => {
                    if !self.session.is_current() {
                        self.transition(ScanState::Cancelled);
                        continue;
                    }
                    pages_scanned += 1;
                    let fragments = self.source.fragments(page);
                    let next = match self.match_page(page, &fragments, &needle) {
                        Some(result) if self.session.is_current() => {
                            if self.highlight.apply(result.range(), &fragments) {
                                ScanState::Found(result)
                            } else {
                                warn!(page, "match range does not fit page fragments");
                                self.after_miss(page, exhaustive)
                            }
                        }
                        Some(_) => ScanState::Cancelled,
                        None => self.after_miss(page, exhaustive),
                    };
                    self.transition(next);
                }
                ScanState::Advancing(page) => {
                    if page >= page_count {
                        self.transition(ScanState::Exhausted);
                    } else {
                        self.transition(ScanState::Activating(page + 1));
                    }
                }
                ScanState::Found(result) => {
                    info!(
                        generation,
                        page = result.page_number,
                        start = result.fragment_start_index,
                        end = result.fragment_end_index,
                        kind = %result.match_kind,
                        "passage located"
                    );
                    return Ok(result);
                }
                ScanState::Exhausted => return Err(LocateError::NotFound { pages_scanned }),
                ScanState::Cancelled => return Err(LocateError::Superseded { generation }),
            }
        }
    }

    fn after_miss(&self, page: PageNumber, exhaustive: bool) -> ScanState {
        if exhaustive {
            ScanState::Advancing(page)
        } else {
            ScanState::Exhausted
        }
    }

    fn match_page(&self, page: PageNumber, fragments: &[Fragment], needle: &str) -> Option<MatchResult> {
        if fragments.is_empty() {
            let err = LocateError::RenderTimeout { page };
            warn!(page, %err, "treating page as a miss");
            return None;
        }
        let texts: Vec<String> = fragments.iter().map(|f| normalize(&f.text)).collect();

        if let Some((range, kind)) = self.window.find(&texts, needle) {
            return Some(MatchResult::new(page, range, kind));
        }
        let index = self.fuzzy.find(&texts, needle)?;
        debug!(page, index, "windowed match failed, using fuzzy fallback");
        Some(MatchResult::new(page, FragmentRange::single(index), MatchKind::Fuzzy))
    }

    fn transition(&mut self, next: ScanState) {
        debug!(
            generation = self.session.generation(),
            from = ?self.state,
            to = ?next,
            "scan transition"
        );
        self.state = next;
    }
}
