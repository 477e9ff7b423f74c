//! Service layer for incremental board view updates.

pub mod updater;

pub use updater::{UpdateScope, ViewUpdater};
