//! Re-exports the shared utilities consumed by the passage locator and its
//! tooling: text normalization, configuration handling and error types.

pub mod config;
pub mod error;
pub mod text;
