//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `storage` - Wizard session storage (in-memory)
//! - `yaml` - Reference library read from YAML files

pub mod http;
pub mod storage;
pub mod yaml;

pub use storage::InMemoryWizardSessionStore;
pub use yaml::{RecordFiles, YamlRecordStore};
