//! Storage Adapters
//!
//! - **InMemoryWizardSessionStore** - Keeps wizard sessions in memory

mod in_memory_session_store;

pub use in_memory_session_store::InMemoryWizardSessionStore;
