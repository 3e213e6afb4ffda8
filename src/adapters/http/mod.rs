//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own HTTP adapter; `router` assembles them.

pub mod assessment;
pub mod error;
pub mod library;
pub mod router;

pub use assessment::{assessment_routes, AssessmentHandlers};
pub use error::ErrorResponse;
pub use library::{library_routes, LibraryHandlers};
pub use router::{app_router, AppState};
