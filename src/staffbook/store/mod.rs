//! # Storage Layer
//!
//! The [`DataStore`] trait lets the API load and persist the [`Model`] without
//! knowing where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per home directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Layout
//!
//! ```text
//! <home>/
//! ├── data.json      # Records, version stamp and the active filter
//! ├── config.json    # Configuration
//! └── images/        # Managed picture directory (default)
//! ```
//!
//! The active filter is stored with the records, so a `filter` issued in one
//! invocation still narrows the view in the next one.

use crate::book::Model;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for model storage.
pub trait DataStore {
    /// Load the model, or an empty one if nothing has been stored yet
    fn load(&self) -> Result<Model>;

    /// Persist the whole model
    fn save(&mut self, model: &Model) -> Result<()>;
}
