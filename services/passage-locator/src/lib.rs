//! Locates previously extracted quotes inside a paginated document whose text
//! only exists as per-page, asynchronously rendered fragments, and drives
//! navigation and highlighting of the match.
//!
//! All work runs on a single thread: sessions and highlight decay timers are
//! spawned with [`tokio::task::spawn_local`], so [`PassageLocator::locate`]
//! must be called from within a [`tokio::task::LocalSet`].

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod locator;
pub mod model;
pub mod scan;
pub mod session;
pub mod source;
pub mod window;

pub use config::LocatorConfig;
pub use error::{LocateError, LocateOutcome};
pub use highlight::{HighlightController, HighlightStyle, HighlightSurface};
pub use locator::PassageLocator;
pub use model::{Fragment, FragmentHandle, FragmentRange, MatchKind, MatchResult, PageNumber, Query};
pub use source::{DocumentSource, InMemoryDocument};
