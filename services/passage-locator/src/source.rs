//! The rendering engine as seen by the locator, plus an in-memory document
//! used by the CLI and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use shared::error::AppError;

use crate::model::{Fragment, FragmentHandle, PageNumber};

/// Document renderer the locator reads from. The locator never mutates
/// document content; it only asks for pages to be rendered and reads their
/// fragments.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Start rendering `page`. Completion is not reported here.
    fn render_page(&self, page: PageNumber);

    /// Fragments of the page's current render instance, in reading order.
    /// Empty when the page has not rendered (yet).
    fn fragments(&self, page: PageNumber) -> Vec<Fragment>;

    fn page_count(&self) -> u32;

    /// Wait until `page` can be read. Sources without a completion signal
    /// fall back to sleeping for `settle`.
    async fn wait_rendered(&self, _page: PageNumber, settle: Duration) {
        tokio::time::sleep(settle).await;
    }
}

#[derive(Debug, Deserialize)]
struct DocumentFile {
    pages: Vec<Vec<String>>,
}

#[derive(Debug, Default)]
struct RenderState {
    epoch: u64,
    rendered: HashMap<PageNumber, u64>,
    log: Vec<PageNumber>,
}

/// Document held entirely in memory. Pages expose fragments only after
/// [`DocumentSource::render_page`] has been called for them, and every render
/// hands out fresh handles.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    pages: Vec<Vec<String>>,
    blank_pages: Vec<PageNumber>,
    state: RefCell<RenderState>,
}

impl InMemoryDocument {
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Parse `{ "pages": [["fragment", ...], ...] }`.
    pub fn from_json(json: &str) -> shared::error::Result<Self> {
        let file: DocumentFile =
            serde_json::from_str(json).map_err(|e| AppError::Document(e.to_string()))?;
        Ok(Self::new(file.pages))
    }

    /// Make `page` render without ever exposing text.
    pub fn with_blank_page(mut self, page: PageNumber) -> Self {
        self.blank_pages.push(page);
        self
    }

    /// Pages in the order they were asked to render.
    pub fn render_log(&self) -> Vec<PageNumber> {
        self.state.borrow().log.clone()
    }

    fn handle(epoch: u64, index: usize) -> FragmentHandle {
        FragmentHandle((epoch << 32) | index as u64)
    }
}

#[async_trait(?Send)]
impl DocumentSource for InMemoryDocument {
    fn render_page(&self, page: PageNumber) {
        let mut state = self.state.borrow_mut();
        state.epoch += 1;
        let epoch = state.epoch;
        state.rendered.insert(page, epoch);
        state.log.push(page);
    }

    fn fragments(&self, page: PageNumber) -> Vec<Fragment> {
        if self.blank_pages.contains(&page) {
            return Vec::new();
        }
        let Some(epoch) = self.state.borrow().rendered.get(&page).copied() else {
            return Vec::new();
        };
        let Some(texts) = page
            .checked_sub(1)
            .and_then(|i| self.pages.get(i as usize))
        else {
            return Vec::new();
        };
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| Fragment {
                index,
                text: text.clone(),
                handle: Self::handle(epoch, index),
            })
            .collect()
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}
