#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use passage_locator::{FragmentHandle, HighlightStyle, HighlightSurface, InMemoryDocument, LocatorConfig};

pub const SETTLE: Duration = Duration::from_millis(300);
pub const DECAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Set(FragmentHandle, HighlightStyle),
    Clear(FragmentHandle),
    Scroll(FragmentHandle),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    /// Styles currently visible, replayed from the event log.
    pub fn styled(&self) -> HashMap<FragmentHandle, HighlightStyle> {
        let mut out = HashMap::new();
        for e in self.events.borrow().iter() {
            match e {
                SurfaceEvent::Set(h, s) => {
                    out.insert(*h, *s);
                }
                SurfaceEvent::Clear(h) => {
                    out.remove(h);
                }
                SurfaceEvent::Scroll(_) => {}
            }
        }
        out
    }
}

impl HighlightSurface for RecordingSurface {
    fn set_style(&self, handle: FragmentHandle, style: HighlightStyle) {
        self.events.borrow_mut().push(SurfaceEvent::Set(handle, style));
    }

    fn clear_style(&self, handle: FragmentHandle) {
        self.events.borrow_mut().push(SurfaceEvent::Clear(handle));
    }

    fn scroll_into_view(&self, handle: FragmentHandle) {
        self.events.borrow_mut().push(SurfaceEvent::Scroll(handle));
    }
}

pub fn config() -> LocatorConfig {
    LocatorConfig {
        window_fragments: 10,
        window_slack: 50,
        fuzzy_min_token_len: 4,
        settle_delay: SETTLE,
        decay_delay: DECAY,
    }
}

/// Three-page contract used by the scan scenarios.
pub fn contract() -> InMemoryDocument {
    InMemoryDocument::new(vec![
        vec![
            "Master Services Agreement".into(),
            "The agreement is entered into by the parties.".into(),
        ],
        vec![
            "Section 4.1  Payment Terms. ".into(),
            "Net 30 days from\ninvoice date.".into(),
        ],
        vec![
            "Section 7 Delivery".into(),
            "The delivery schedule is set out in Annex B.".into(),
        ],
    ])
}
