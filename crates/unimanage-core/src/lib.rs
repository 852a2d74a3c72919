//! # unimanage-core
//!
//! Domain layer for the UniManage university dashboard.
//!
//! - [`visibility`]: maps a [`Role`] to the navigation, stat tiles, quick
//!   actions and recent activity that role may see
//! - [`search`]: case-insensitive substring filter over record tables
//! - [`session`]: the session gate (`loading -> unauthenticated <-> authenticated`)
//!   backed by a pluggable [`SessionStore`] and [`Authenticator`]
//! - [`fixtures`]: the static student, course, exam, grade and results tables
//! - [`config`]: YAML configuration shared by the dashboard and the CLI

pub mod auth;
pub mod config;
pub mod fixtures;
pub mod records;
pub mod role;
pub mod search;
pub mod session;
pub mod user;
pub mod visibility;

pub use auth::{AccountAuthenticator, AuthError, Authenticator, DemoAuthenticator};
pub use config::{AuthConfig, AuthMode, ConfigError, DashboardConfig, SessionConfig, UniManageConfig};
pub use records::{
    Course, CourseResult, Exam, GradeRecord, ResultsSummary, SemesterResult, Student, StudentStanding,
    Transcript, TranscriptCourse,
};
pub use role::{Capability, ParseRoleError, Role};
pub use search::{Searchable, filter};
pub use session::{
    FileSessionStore, LoginError, MemorySessionStore, SessionError, SessionGate, SessionState,
    SessionStore,
};
pub use user::{Profile, User};
pub use visibility::{
    ActivityEntry, ActivityStatus, NavigationEntry, QuickAction, ResultsScope, RoleView, StatTile, Trend,
    resolve, resolve_str, results_scope,
};
