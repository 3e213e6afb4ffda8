//! Query parameters for library endpoints. Responses are the library views.

use serde::Deserialize;

/// `?category=&subcategory=`; empty values mean "All".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsParams {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// `?origin=`; empty means "All".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonasParams {
    pub origin: Option<String>,
}

/// Treats an empty query value as absent.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
