//! API request and response types.

use serde::{Deserialize, Serialize};
use unimanage_core::{RoleView, User};

/// `?q=` on the search endpoints and fragments.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `?semester=` on the results page. Missing or `all` shows every semester.
#[derive(Debug, Default, Deserialize)]
pub struct ResultsParams {
    #[serde(default)]
    pub semester: Option<String>,
}

impl ResultsParams {
    pub fn selected(&self) -> Option<&str> {
        self.semester.as_deref().filter(|s| !s.is_empty() && *s != "all")
    }
}

/// Response for `GET /api/view`.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub user: User,
    pub view: RoleView,
}

/// Response for the record search endpoints.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a, T: Serialize> {
    pub query: String,
    pub count: usize,
    pub results: Vec<&'a T>,
}

impl<'a, T: Serialize> SearchResponse<'a, T> {
    pub fn new(query: String, results: Vec<&'a T>) -> Self {
        Self {
            query,
            count: results.len(),
            results,
        }
    }
}
