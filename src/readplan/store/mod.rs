//! # Storage Layer
//!
//! The session state that outlives a run is tiny: a theme preference and a set of
//! completed-chapter identifiers. Both live behind the [`KeyValueStore`] trait so the
//! progress tracker and preference store can be tested without a filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per key inside the
//!   data directory, written atomically.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json     # ReadplanConfig
//! ├── progress.json   # JSON array of completion record ids
//! └── theme.json      # "light" | "dark"
//! ```
//!
//! Values are opaque strings to the store; callers own serialization.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Key holding the persisted set of completed chapters.
pub const PROGRESS_KEY: &str = "progress";

/// Abstract durable key-value storage.
pub trait KeyValueStore {
    /// Read the raw value for `key`. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop `key` entirely. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
