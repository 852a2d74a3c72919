//! Route definitions for the dashboard.

use crate::state::AppState;
use crate::{auth, handlers};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/students", get(handlers::students))
        .route("/students/rows", get(handlers::student_rows))
        .route("/courses", get(handlers::courses))
        .route("/courses/rows", get(handlers::course_rows))
        .route("/exams", get(handlers::exams))
        .route("/exams/results", get(handlers::results))
        .route("/api/view", get(handlers::api_view))
        .route("/api/students", get(handlers::api_students))
        .route("/api/courses", get(handlers::api_courses))
        .route("/login", get(auth::login_page).post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
