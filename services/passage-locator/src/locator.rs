use std::rc::Rc;

use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, Instrument};

use crate::config::LocatorConfig;
use crate::error::LocateOutcome;
use crate::highlight::{HighlightController, HighlightState, HighlightStyle, HighlightSurface};
use crate::model::Query;
use crate::scan::PageScanController;
use crate::session::Generations;
use crate::source::DocumentSource;

/// Entry point for the viewer: locate a quote and highlight it, or clear the
/// highlight.
pub struct PassageLocator {
    source: Rc<dyn DocumentSource>,
    highlight: HighlightController,
    generations: Generations,
    config: LocatorConfig,
}

impl PassageLocator {
    pub fn new(
        source: Rc<dyn DocumentSource>,
        surface: Rc<dyn HighlightSurface>,
        config: LocatorConfig,
    ) -> Self {
        let highlight = HighlightController::new(surface, config.decay_delay);
        Self {
            source,
            highlight,
            generations: Generations::new(),
            config,
        }
    }

    /// Start locating `query`, superseding any session still in flight.
    ///
    /// The returned handle may be dropped; effects (page renders, the
    /// highlight) happen regardless. Awaiting it yields the outcome. Must be
    /// called from within a `LocalSet`.
    pub fn locate(&self, query: Query) -> JoinHandle<LocateOutcome> {
        let session = self.generations.begin();
        let span = info_span!("locate", generation = session.generation(), hint = ?query.hint_page);
        let scan = PageScanController::new(
            Rc::clone(&self.source),
            self.highlight.clone(),
            session,
            self.config.clone(),
        );
        tokio::task::spawn_local(
            async move {
                let outcome = scan.run(query).await;
                match &outcome {
                    Err(e) if e.is_routine() => debug!(%e, "locate dropped"),
                    Err(e) => info!(%e, "locate ended without highlight"),
                    Ok(_) => {}
                }
                outcome
            }
            .instrument(span),
        )
    }

    pub fn clear_highlight(&self) {
        self.highlight.clear();
    }

    pub fn current_generation(&self) -> u64 {
        self.generations.current()
    }

    pub fn highlight_style(&self) -> Option<HighlightStyle> {
        self.highlight.style()
    }

    pub fn highlight_state(&self) -> Option<HighlightState> {
        self.highlight.state()
    }
}
