//! Single owner of the visual highlight. Only one highlight exists at a time;
//! applying a new one replaces the old one and cancels its decay timer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use strum_macros::Display;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::model::{Fragment, FragmentHandle, FragmentRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum HighlightStyle {
    Active,
    /// Softened style after the decay delay; still visible.
    Decayed,
}

/// Presentation layer the highlight is drawn on (the viewer's text layer).
pub trait HighlightSurface {
    fn set_style(&self, handle: FragmentHandle, style: HighlightStyle);
    fn clear_style(&self, handle: FragmentHandle);
    /// Scroll so the fragment sits centered in the viewport.
    fn scroll_into_view(&self, handle: FragmentHandle);
}

#[derive(Debug, Clone)]
pub struct HighlightState {
    pub fragments: Vec<FragmentHandle>,
    pub style: HighlightStyle,
    pub applied_at: Instant,
    pub decay_at: Instant,
}

#[derive(Debug, Default)]
struct Inner {
    state: Option<HighlightState>,
    epoch: u64,
    decay: Option<JoinHandle<()>>,
}

impl Inner {
    fn cancel_decay(&mut self) {
        if let Some(timer) = self.decay.take() {
            timer.abort();
        }
    }
}

/// Cloning yields another handle to the same highlight.
///
/// [`apply`](Self::apply) spawns the decay timer with
/// [`tokio::task::spawn_local`] and therefore must run inside a `LocalSet`.
#[derive(Clone)]
pub struct HighlightController {
    surface: Rc<dyn HighlightSurface>,
    decay_delay: Duration,
    inner: Rc<RefCell<Inner>>,
}

impl HighlightController {
    pub fn new(surface: Rc<dyn HighlightSurface>, decay_delay: Duration) -> Self {
        Self {
            surface,
            decay_delay,
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    /// Highlight the fragments in `range`, replacing any existing highlight.
    /// Returns `false` and leaves the current highlight untouched when the
    /// range does not fit `fragments`.
    pub fn apply(&self, range: FragmentRange, fragments: &[Fragment]) -> bool {
        let Some(selected) = fragments.get(range.start..=range.end) else {
            return false;
        };
        let Some(first) = selected.first() else {
            return false;
        };

        let handles: Vec<FragmentHandle> = selected.iter().map(|f| f.handle).collect();
        let previous = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_decay();
            inner.epoch += 1;
            let epoch = inner.epoch;
            let now = Instant::now();
            let previous = inner.state.replace(HighlightState {
                fragments: handles.clone(),
                style: HighlightStyle::Active,
                applied_at: now,
                decay_at: now + self.decay_delay,
            });
            inner.decay = Some(self.spawn_decay(epoch));
            previous
        };

        // the surface may call back into the controller, so no borrow is held
        if let Some(previous) = previous {
            for handle in previous.fragments {
                self.surface.clear_style(handle);
            }
        }
        for handle in &handles {
            self.surface.set_style(*handle, HighlightStyle::Active);
        }
        self.surface.scroll_into_view(first.handle);
        debug!(start = range.start, end = range.end, "highlight applied");
        true
    }

    /// Remove the current highlight, if any.
    pub fn clear(&self) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_decay();
            inner.epoch += 1;
            inner.state.take()
        };
        if let Some(previous) = previous {
            for handle in previous.fragments {
                self.surface.clear_style(handle);
            }
            debug!("highlight cleared");
        }
    }

    pub fn style(&self) -> Option<HighlightStyle> {
        self.inner.borrow().state.as_ref().map(|s| s.style)
    }

    pub fn state(&self) -> Option<HighlightState> {
        self.inner.borrow().state.clone()
    }

    fn spawn_decay(&self, epoch: u64) -> JoinHandle<()> {
        let inner: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        let surface = Rc::clone(&self.surface);
        let delay = self.decay_delay;
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let decayed = {
                let mut inner = inner.borrow_mut();
                if inner.epoch != epoch {
                    return;
                }
                inner.decay = None;
                inner.state.as_mut().map(|state| {
                    state.style = HighlightStyle::Decayed;
                    state.fragments.clone()
                })
            };
            if let Some(handles) = decayed {
                for handle in handles {
                    surface.set_style(handle, HighlightStyle::Decayed);
                }
                debug!(epoch, "highlight decayed");
            }
        })
    }
}
