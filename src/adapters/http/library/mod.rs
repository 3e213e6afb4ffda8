//! HTTP adapter for the reference library.

mod dto;
mod handlers;
mod routes;

pub use dto::{PersonasParams, QuestionsParams};
pub use handlers::LibraryHandlers;
pub use routes::library_routes;
