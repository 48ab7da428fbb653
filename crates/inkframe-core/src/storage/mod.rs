//! Preference storage
//!
//! A small async key-value interface for the user's persisted choices, with
//! two backends:
//! - [`FileStore`]: a JSON object on disk (the default for real sessions)
//! - [`MemoryStore`]: process-local, for tests and throwaway sessions
//!
//! Every call is fallible. Callers on the theme path recover from failures
//! themselves; nothing here retries.

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::{BackendType, PreferenceStore, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;

#[cfg(test)]
pub use backend::MockPreferenceStore;
