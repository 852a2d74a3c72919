//! Error types for the dashboard crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use unimanage_core::SessionError;

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to start the server.
    #[error("failed to start dashboard: {0}")]
    StartupFailed(String),

    /// No signed-in session.
    #[error("authentication required")]
    AuthenticationRequired,

    /// The signed-in role may not see this resource.
    #[error("not authorized")]
    NotAuthorized,

    /// Session storage failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            DashboardError::NotAuthorized => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(DashboardError::AuthenticationRequired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(DashboardError::NotAuthorized.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            DashboardError::Session(SessionError::Storage("lock poisoned".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            DashboardError::StartupFailed("port in use".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = DashboardError::NotAuthorized.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
