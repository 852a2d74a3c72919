//! Role visibility.
//!
//! Every view asks this module what a role may see instead of switching on
//! the role itself. All tables are static; [`resolve`] only selects from them.

mod tables;

use crate::role::{Capability, Role};
use serde::Serialize;

pub use tables::NAVIGATION;

/// A sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub href: &'static str,
    /// Font Awesome icon name, without the `fa-` prefix.
    pub icon: &'static str,
    pub roles: &'static [Role],
}

impl NavigationEntry {
    pub fn permits(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether `path` falls under this entry (`/` only guards itself).
    pub fn covers(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Direction of a stat tile's change indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// A dashboard statistic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatTile {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    /// Change since last month, e.g. `+12%`, `-8`, `0`.
    pub change: &'static str,
}

impl StatTile {
    pub fn trend(&self) -> Trend {
        if self.change.starts_with('+') {
            Trend::Up
        } else if self.change.starts_with('-') {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    /// Page the action opens. `None` renders an inert button.
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Info,
    Warning,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Info => "info",
            ActivityStatus::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub time: &'static str,
    pub action: &'static str,
    pub actor: &'static str,
    pub status: ActivityStatus,
    pub icon: &'static str,
}

/// Everything a role may see on the dashboard shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleView {
    pub navigation: Vec<&'static NavigationEntry>,
    pub stats: &'static [StatTile],
    pub quick_actions: &'static [QuickAction],
    pub activity: &'static [ActivityEntry],
}

impl RoleView {
    pub fn is_empty(&self) -> bool {
        self.navigation.is_empty()
            && self.stats.is_empty()
            && self.quick_actions.is_empty()
            && self.activity.is_empty()
    }
}

/// Resolve the view for a role. `None` (signed out or still loading) yields
/// an empty view.
pub fn resolve(role: Option<Role>) -> RoleView {
    let Some(role) = role else {
        return RoleView::default();
    };

    RoleView {
        navigation: navigation_for(role).collect(),
        stats: tables::stat_tiles(role),
        quick_actions: tables::quick_actions(role),
        activity: tables::recent_activity(role),
    }
}

/// Resolve from a raw role name. Unknown names yield an empty view.
pub fn resolve_str(role: &str) -> RoleView {
    resolve(role.parse().ok())
}

/// Navigation entries visible to `role`, in table order.
pub fn navigation_for(role: Role) -> impl Iterator<Item = &'static NavigationEntry> {
    NAVIGATION.iter().filter(move |entry| entry.permits(role))
}

/// Whether `role` may open `path`. Paths outside the navigation table are
/// not restricted here.
pub fn permits(role: Role, path: &str) -> bool {
    NAVIGATION
        .iter()
        .filter(|entry| entry.covers(path))
        .all(|entry| entry.permits(role))
}

/// Whose results the results page lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsScope {
    /// The signed-in student's own semesters.
    Own,
    /// Standings of every student.
    AllStudents,
}

pub fn results_scope(role: Role) -> ResultsScope {
    if role.can(Capability::ReviewAllResults) {
        ResultsScope::AllStudents
    } else {
        ResultsScope::Own
    }
}

/// Sidebar highlight rule.
pub fn is_active_route(href: &str, current_path: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(href)
    }
}

/// Time-of-day greeting for the welcome banner.
pub fn greeting(hour: u32, name: &str) -> String {
    let salutation = match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{salutation}, {name}!")
}

/// One-line subtitle under the greeting.
pub fn tagline(role: Role) -> &'static str {
    match role {
        Role::Admin => "Manage your university operations efficiently",
        Role::Faculty => "Ready to inspire and educate your students",
        Role::Student => "Continue your academic journey",
        Role::DepartmentHead => "Lead your department to excellence",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(view: &RoleView) -> Vec<&'static str> {
        view.navigation.iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_navigation_table_is_well_formed() {
        for entry in NAVIGATION.iter() {
            assert!(!entry.roles.is_empty(), "{} has no roles", entry.label);
            for role in entry.roles {
                assert!(Role::ALL.contains(role));
            }
        }
    }

    #[test]
    fn test_navigation_is_exact_filter_in_order() {
        for role in Role::ALL {
            let view = resolve(Some(role));
            let expected: Vec<&NavigationEntry> =
                NAVIGATION.iter().filter(|e| e.roles.contains(&role)).collect();
            assert_eq!(view.navigation, expected, "role {role}");
        }
    }

    #[test]
    fn test_every_role_has_tables() {
        for role in Role::ALL {
            let view = resolve(Some(role));
            assert_eq!(view.stats.len(), 4);
            assert_eq!(view.quick_actions.len(), 4);
            assert_eq!(view.activity.len(), 5);
        }
    }

    #[test]
    fn test_absent_or_unknown_role_is_empty() {
        assert!(resolve(None).is_empty());
        assert!(resolve_str("registrar").is_empty());
        assert!(resolve_str("").is_empty());
        assert!(!resolve_str("admin").is_empty());
    }

    #[test]
    fn test_student_navigation() {
        let view = resolve(Some(Role::Student));
        let labels = labels(&view);
        assert!(labels.contains(&"Dashboard"));
        assert!(labels.contains(&"Courses"));
        assert!(labels.contains(&"Finances"));
        assert!(!labels.contains(&"Faculty"));
        assert!(!labels.contains(&"Students"));
    }

    #[test]
    fn test_faculty_navigation() {
        let view = resolve(Some(Role::Faculty));
        assert_eq!(
            labels(&view),
            vec![
                "Dashboard",
                "Students",
                "Courses",
                "Schedule",
                "Exams & Grades",
                "Attendance",
                "Library",
                "Research",
                "Settings",
            ]
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(resolve(Some(Role::Admin)).navigation.len(), NAVIGATION.len());
    }

    #[test]
    fn test_quick_actions_open_permitted_pages() {
        for role in Role::ALL {
            for action in resolve(Some(role)).quick_actions {
                if let Some(href) = action.href {
                    assert!(href.starts_with('/'), "{}", action.label);
                    assert!(permits(role, href), "{role} cannot open {href}");
                }
            }
        }
        let admin = resolve(Some(Role::Admin));
        let reports = admin
            .quick_actions
            .iter()
            .find(|a| a.label == "Financial Reports")
            .unwrap();
        assert_eq!(reports.href, None);
    }

    #[test]
    fn test_stat_trend() {
        let stats = resolve(Some(Role::Faculty)).stats;
        let trends: Vec<Trend> = stats.iter().map(StatTile::trend).collect();
        assert_eq!(trends, vec![Trend::Up, Trend::Up, Trend::Down, Trend::Flat]);
    }

    #[test]
    fn test_permits_paths() {
        assert!(!permits(Role::Student, "/students"));
        assert!(!permits(Role::Student, "/students/rows"));
        assert!(permits(Role::Faculty, "/students"));
        assert!(permits(Role::Student, "/courses"));
        assert!(permits(Role::Student, "/"));
        // Not in the table.
        assert!(permits(Role::Student, "/api/view"));
        // "/studentsx" is not a sub-path of "/students".
        assert!(permits(Role::Student, "/studentsx"));
    }

    #[test]
    fn test_results_scope() {
        assert_eq!(results_scope(Role::Student), ResultsScope::Own);
        for role in [Role::Admin, Role::Faculty, Role::DepartmentHead] {
            assert_eq!(results_scope(role), ResultsScope::AllStudents);
        }
        // Results live under the exams entry, which every role sees.
        for role in Role::ALL {
            assert!(permits(role, "/exams/results"));
        }
    }

    #[test]
    fn test_active_route() {
        assert!(is_active_route("/", "/"));
        assert!(!is_active_route("/", "/courses"));
        assert!(is_active_route("/courses", "/courses"));
        assert!(is_active_route("/exams", "/exams/grades"));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(0, "Ada"), "Good morning, Ada!");
        assert_eq!(greeting(11, "Ada"), "Good morning, Ada!");
        assert_eq!(greeting(12, "Ada"), "Good afternoon, Ada!");
        assert_eq!(greeting(16, "Ada"), "Good afternoon, Ada!");
        assert_eq!(greeting(17, "Ada"), "Good evening, Ada!");
        assert_eq!(greeting(23, "Ada"), "Good evening, Ada!");
    }

    #[test]
    fn test_tagline() {
        assert_eq!(tagline(Role::Student), "Continue your academic journey");
    }
}
