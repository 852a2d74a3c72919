//! Session middleware and the login/logout handlers.
//!
//! Each browser carries a random session id in a cookie. The signed-in user
//! lives server-side in the shared [`MemorySessionStore`](unimanage_core::MemorySessionStore);
//! every request restores it through a fresh [`SessionGate`](unimanage_core::SessionGate).

use axum::{
    Extension, Form,
    extract::{Query, Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use unimanage_core::{AuthMode, LoginError, SessionStore, User, visibility};
use uuid::Uuid;

use crate::error::DashboardError;
use crate::handlers::render;
use crate::pages;
use crate::state::AppState;
use crate::templates::{bare_layout, escape};

/// The signed-in user for the current request.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub user: User,
}

/// Accounts listed on the login page in demo mode.
const DEMO_ACCOUNTS: [(&str, &str, &str); 4] = [
    ("Admin", "admin@university.edu", "admin123"),
    ("Faculty", "faculty@university.edu", "faculty123"),
    ("Student", "student@university.edu", "student123"),
    ("Dept Head", "dept@university.edu", "dept123"),
];

/// Restores the session, redirects anonymous requests to the login page and
/// enforces the role guard.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if path == "/login" {
        return next.run(request).await;
    }

    let Some(session) = restore_session(&state, request.headers()) else {
        if path.starts_with("/api/") {
            return DashboardError::AuthenticationRequired.into_response();
        }

        let redirect_to = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        return Redirect::to(&format!("/login?redirect={}", urlencoding::encode(redirect_to)))
            .into_response();
    };

    if !visibility::permits(session.user.role, &path) {
        tracing::info!(user_id = %session.user.id, role = %session.user.role, path = %path, "Role not permitted");
        let html = render(&state, &session.user, &path, pages::forbidden_page);
        return (StatusCode::FORBIDDEN, Html(html)).into_response();
    }

    request.extensions_mut().insert(session);
    next.run(request).await
}

/// Look up the user behind the session cookie, if any.
fn restore_session(state: &AppState, headers: &HeaderMap) -> Option<Session> {
    let id = extract_session_cookie(headers, state.cookie_name())?;
    let mut gate = state.session_gate(&id);
    gate.restore();
    let user = gate.user()?.clone();
    Some(Session { id, user })
}

/// Extract the session cookie value from the cookie headers
fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}

/// Only same-site absolute paths are followed after login.
fn safe_redirect(redirect: Option<&str>) -> String {
    redirect
        .filter(|r| r.starts_with('/') && !r.starts_with("//"))
        .unwrap_or("/")
        .to_string()
}

/// Login page query parameters
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Login form data
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Handler for the login page (GET)
pub async fn login_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LoginQuery>,
) -> Response {
    if restore_session(&state, &headers).is_some() {
        return Redirect::to(&safe_redirect(query.redirect.as_deref())).into_response();
    }
    Html(login_page_template(&state, query.redirect.as_deref(), None, "")).into_response()
}

/// Handler for login form submission (POST)
pub async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let session_id = Uuid::new_v4().to_string();
    let mut gate = state.session_gate(&session_id);
    gate.restore();

    match gate.login(&form.email, &form.password).await {
        Ok(_) => {
            // The browser's previous session is replaced, not kept alongside.
            if let Some(previous) = extract_session_cookie(&headers, state.cookie_name()) {
                if let Err(e) = state.sessions().remove(&previous) {
                    tracing::warn!(error = %e, "Failed to drop previous session");
                }
            }

            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
                state.cookie_name(),
                session_id,
                state.session_max_age()
            );
            (
                [(header::SET_COOKIE, cookie)],
                Redirect::to(&safe_redirect(form.redirect.as_deref())),
            )
                .into_response()
        }
        Err(e) => {
            let status = match e {
                LoginError::MissingFields => StatusCode::BAD_REQUEST,
                LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                LoginError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let html = login_page_template(&state, form.redirect.as_deref(), Some(&e.to_string()), &form.email);
            (status, Html(html)).into_response()
        }
    }
}

/// Handler for logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response, DashboardError> {
    let mut gate = state.session_gate(&session.id);
    gate.restore();
    gate.logout()?;

    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        state.cookie_name()
    );
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/login")).into_response())
}

/// Generate the login page HTML
fn login_page_template(state: &AppState, redirect: Option<&str>, error: Option<&str>, email: &str) -> String {
    let error_html = error
        .map(|message| {
            format!(
                r##"<div x-data="{{ open: true }}" x-show="open" class="mb-6 p-4 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
            <div class="flex items-center gap-3">
                <i class="fas fa-exclamation-circle text-red-500"></i>
                <span class="flex-1 text-red-700 dark:text-red-400">{message}</span>
                <button type="button" @click="open = false" class="text-red-400 hover:text-red-600">
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>"##,
                message = escape(message),
            )
        })
        .unwrap_or_default();

    let redirect_input = redirect
        .map(|r| format!(r#"<input type="hidden" name="redirect" value="{}">"#, escape(r)))
        .unwrap_or_default();

    let demo_html = if state.config().auth.mode == AuthMode::Demo {
        let accounts: String = DEMO_ACCOUNTS
            .iter()
            .map(|(role, email, password)| {
                format!(
                    r##"<button type="button" @click="email = '{email}'; password = '{password}'"
                        class="text-left p-3 border border-gray-200 dark:border-gray-700 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                    <p class="font-medium text-sm text-gray-900 dark:text-white">{role}</p>
                    <p class="text-xs text-gray-500">{email}</p>
                </button>"##
                )
            })
            .collect();
        format!(
            r##"<div class="bg-white/95 dark:bg-gray-800 rounded-2xl shadow-xl p-6 mt-6">
            <h3 class="text-sm font-semibold text-gray-900 dark:text-white mb-3">Demo Accounts</h3>
            <div class="grid grid-cols-2 gap-3">{accounts}</div>
        </div>"##
        )
    } else {
        String::new()
    };

    let content = format!(
        r##"<div class="w-full max-w-md" x-data="{{ email: {email}, password: '', submitting: false }}">
        <div class="text-center mb-8">
            <div class="inline-flex items-center justify-center w-16 h-16 bg-white/10 rounded-full mb-4">
                <i class="fas fa-graduation-cap text-3xl text-white"></i>
            </div>
            <h1 class="text-3xl font-bold text-white">{institution}</h1>
            <p class="text-primary-200 dark:text-gray-400">University Student Management System</p>
        </div>

        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-2xl p-8">
            <div class="text-center mb-6">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">Sign In</h2>
                <p class="text-gray-500 dark:text-gray-400 mt-1">Enter your credentials to access the system</p>
            </div>

            {error_html}

            <form method="POST" action="/login" class="space-y-5" @submit="submitting = true">
                {redirect_input}

                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">Email</label>
                    <div class="relative">
                        <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                            <i class="fas fa-envelope text-gray-400"></i>
                        </div>
                        <input type="email" id="email" name="email" x-model="email" :readonly="submitting" autofocus
                            class="block w-full pl-10 pr-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500"
                            placeholder="your-email@university.edu">
                    </div>
                </div>

                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">Password</label>
                    <div class="relative" x-data="{{ show: false }}">
                        <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                            <i class="fas fa-lock text-gray-400"></i>
                        </div>
                        <input :type="show ? 'text' : 'password'" id="password" name="password" x-model="password" :readonly="submitting"
                            class="block w-full pl-10 pr-12 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-primary-500 focus:border-primary-500"
                            placeholder="Enter your password">
                        <button type="button" @click="show = !show"
                            class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600 dark:hover:text-gray-300">
                            <i class="fas" :class="show ? 'fa-eye-slash' : 'fa-eye'"></i>
                        </button>
                    </div>
                </div>

                <button type="submit" :disabled="submitting"
                    class="w-full py-3 px-4 bg-primary-600 hover:bg-primary-700 disabled:opacity-60 text-white font-medium rounded-lg shadow-lg transition-all duration-200">
                    <span class="flex items-center justify-center gap-2" x-show="!submitting">
                        <i class="fas fa-sign-in-alt"></i> Sign In
                    </span>
                    <span class="flex items-center justify-center gap-2" x-show="submitting" x-cloak>
                        <i class="fas fa-circle-notch fa-spin"></i> Signing in...
                    </span>
                </button>
            </form>
        </div>

        {demo_html}
    </div>"##,
        email = escape(&serde_json::to_string(email).unwrap_or_default()),
        institution = escape(state.institution()),
    );

    bare_layout(
        &format!("Sign In - {}", state.institution()),
        "bg-gradient-to-br from-primary-600 via-primary-700 to-primary-900 dark:from-gray-900 dark:via-gray-800 dark:to-gray-900 min-h-screen flex items-center justify-center p-4",
        &content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; university_session=abc-123; other=1"),
        );
        assert_eq!(
            extract_session_cookie(&headers, "university_session"),
            Some("abc-123".to_string())
        );
        assert_eq!(extract_session_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_session_cookie_ignores_cleared_value() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("university_session="));
        assert_eq!(extract_session_cookie(&headers, "university_session"), None);
    }

    #[test]
    fn test_safe_redirect() {
        assert_eq!(safe_redirect(Some("/courses?q=cs")), "/courses?q=cs");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }
}
