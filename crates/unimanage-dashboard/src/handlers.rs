//! Request handlers for the dashboard.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use chrono::Local;
use unimanage_core::records::CourseSummary;
use unimanage_core::{Course, Searchable, Student, User, fixtures, search, visibility};

use crate::api_types::{ResultsParams, SearchParams, SearchResponse, ViewResponse};
use crate::auth::Session;
use crate::error::DashboardError;
use crate::pages;
use crate::state::AppState;
use crate::templates::Shell;

/// Build the page chrome for `user` at `path` and hand it to a page builder.
pub(crate) fn render<F>(state: &AppState, user: &User, path: &str, page: F) -> String
where
    F: FnOnce(&Shell<'_>) -> String,
{
    let navigation: Vec<_> = visibility::navigation_for(user.role).collect();
    let shell = Shell {
        institution: state.institution(),
        user,
        navigation: &navigation,
        current_path: path,
    };
    page(&shell)
}

fn matching_students(query: &str) -> Vec<&'static Student> {
    search::filter(fixtures::STUDENTS, query, Student::DEFAULT_FIELDS)
}

fn matching_courses(query: &str) -> Vec<&'static Course> {
    search::filter(fixtures::COURSES, query, Course::DEFAULT_FIELDS)
}

// =============================================================================
// Page Handlers (HTML responses)
// =============================================================================

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>, Extension(session): Extension<Session>) -> Html<String> {
    let view = visibility::resolve(Some(session.user.role));
    let now = Local::now().naive_local();
    Html(render(&state, &session.user, "/", |shell| pages::home_page(shell, &view, now)))
}

/// Handler for the students page.
pub async fn students(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let results = matching_students(&params.q);
    Html(render(&state, &session.user, "/students", |shell| {
        pages::students_page(shell, &params.q, &results)
    }))
}

/// Live search fragment for the students table.
pub async fn student_rows(Query(params): Query<SearchParams>) -> Html<String> {
    Html(pages::student_rows(&matching_students(&params.q)))
}

/// Handler for the courses page.
pub async fn courses(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let results = matching_courses(&params.q);
    let summary = CourseSummary::of(fixtures::COURSES);
    Html(render(&state, &session.user, "/courses", |shell| {
        pages::courses_page(shell, &params.q, &results, &summary)
    }))
}

/// Live search fragment for the courses table.
pub async fn course_rows(Query(params): Query<SearchParams>) -> Html<String> {
    Html(pages::course_rows(&matching_courses(&params.q)))
}

/// Handler for the exams & grades page.
pub async fn exams(State(state): State<AppState>, Extension(session): Extension<Session>) -> Html<String> {
    Html(render(&state, &session.user, "/exams", |shell| {
        pages::exams_page(shell, fixtures::EXAMS, fixtures::GRADES, fixtures::TRANSCRIPTS)
    }))
}

/// Handler for the results page. Students see their own semesters, staff
/// see every student's standing.
pub async fn results(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(params): Query<ResultsParams>,
) -> Html<String> {
    let scope = visibility::results_scope(session.user.role);
    let selected = params.selected();
    Html(render(&state, &session.user, "/exams/results", |shell| {
        pages::results_page(
            shell,
            scope,
            selected,
            fixtures::SEMESTER_RESULTS,
            fixtures::STUDENT_STANDINGS,
        )
    }))
}

/// Fallback for unmatched paths.
pub async fn not_found(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    tracing::debug!(path = %uri.path(), "No route");
    let html = render(&state, &session.user, uri.path(), pages::not_found_page);
    (StatusCode::NOT_FOUND, Html(html))
}

// =============================================================================
// API Handlers (JSON responses)
// =============================================================================

/// The resolved view for the signed-in user.
pub async fn api_view(Extension(session): Extension<Session>) -> Json<ViewResponse> {
    let view = visibility::resolve(Some(session.user.role));
    Json(ViewResponse {
        user: session.user,
        view,
    })
}

/// Student search. Follows the same role rule as the students page.
pub async fn api_students(
    Extension(session): Extension<Session>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse<'static, Student>>, DashboardError> {
    if !visibility::permits(session.user.role, "/students") {
        return Err(DashboardError::NotAuthorized);
    }
    let results = matching_students(&params.q);
    Ok(Json(SearchResponse::new(params.q, results)))
}

/// Course search.
pub async fn api_courses(
    Extension(session): Extension<Session>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse<'static, Course>>, DashboardError> {
    if !visibility::permits(session.user.role, "/courses") {
        return Err(DashboardError::NotAuthorized);
    }
    let results = matching_courses(&params.q);
    Ok(Json(SearchResponse::new(params.q, results)))
}
