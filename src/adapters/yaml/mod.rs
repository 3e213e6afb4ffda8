//! YAML Adapters
//!
//! - **YamlRecordStore** - Reads the reference library from a directory of YAML files

mod record_store;

pub use record_store::{RecordFiles, YamlRecordStore};
