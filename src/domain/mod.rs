//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `assessment` - EU AI Act assessment wizard, recommendation and report
//! - `library` - Reference records and their read-only views
//! - `charts` - Serialisable chart descriptions

pub mod assessment;
pub mod charts;
pub mod foundation;
pub mod library;
