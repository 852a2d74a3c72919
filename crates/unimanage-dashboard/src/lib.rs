//! # unimanage-dashboard
//!
//! Web dashboard for the UniManage university administration system.
//!
//! Pages:
//! - Dashboard home (role-specific stats, quick actions, recent activity)
//! - Students and courses tables with live search
//! - Exams & grades (schedule, grades, transcripts)
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - Server-rendered HTML, HTMX for search-as-you-type, Alpine.js for small toggles
//! - Tailwind CSS for styling
//!
//! The signed-in user is restored by [`auth::auth_middleware`] and handed to
//! handlers as a [`auth::Session`] request extension.

pub mod api_types;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
