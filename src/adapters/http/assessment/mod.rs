//! HTTP adapter for the assessment wizard.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssessmentOptionsResponse, AssessmentResponse, FieldPromptResponse, OptionResponse,
    StepResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
