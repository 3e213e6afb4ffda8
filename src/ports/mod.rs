//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - Read-only reference library (YAML on disk)
//! - `WizardSessionStore` - In-progress assessment sessions

mod record_store;
mod wizard_session_store;

pub use record_store::{RecordStore, RecordStoreError};
pub use wizard_session_store::{SessionStoreError, WizardSessionStore};
