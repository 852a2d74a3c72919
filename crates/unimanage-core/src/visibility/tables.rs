use super::{ActivityEntry, ActivityStatus, NavigationEntry, QuickAction, StatTile};
use super::ActivityStatus::{Info, Success, Warning};
use crate::role::Role;

const EVERYONE: &[Role] = &Role::ALL;
const STAFF: &[Role] = &[Role::Admin, Role::Faculty, Role::DepartmentHead];
const LEADERSHIP: &[Role] = &[Role::Admin, Role::DepartmentHead];
const STUDENT_SERVICES: &[Role] = &[Role::Admin, Role::Student];

/// The sidebar, in display order.
pub static NAVIGATION: [NavigationEntry; 14] = [
    nav("Dashboard", "/", "home", EVERYONE),
    nav("Students", "/students", "users", STAFF),
    nav("Courses", "/courses", "book-open", EVERYONE),
    nav("Schedule", "/schedule", "calendar", EVERYONE),
    nav("Exams & Grades", "/exams", "graduation-cap", EVERYONE),
    nav("Attendance", "/attendance", "calendar-check", EVERYONE),
    nav("Faculty", "/faculty", "chalkboard-teacher", LEADERSHIP),
    nav("Finances", "/finances", "dollar-sign", STUDENT_SERVICES),
    nav("Hostel", "/hostel", "building", STUDENT_SERVICES),
    nav("Transport", "/transport", "car", STUDENT_SERVICES),
    nav("Library", "/library", "bookmark", EVERYONE),
    nav("Research", "/research", "flask", EVERYONE),
    nav("Career Services", "/career", "briefcase", STUDENT_SERVICES),
    nav("Settings", "/settings", "cog", EVERYONE),
];

const fn nav(
    label: &'static str,
    href: &'static str,
    icon: &'static str,
    roles: &'static [Role],
) -> NavigationEntry {
    NavigationEntry {
        label,
        href,
        icon,
        roles,
    }
}

const fn stat(title: &'static str, value: &'static str, icon: &'static str, change: &'static str) -> StatTile {
    StatTile {
        title,
        value,
        icon,
        change,
    }
}

const fn action(label: &'static str, icon: &'static str, href: &'static str) -> QuickAction {
    QuickAction {
        label,
        icon,
        href: Some(href),
    }
}

/// A quick action with no page behind it yet.
const fn inert(label: &'static str, icon: &'static str) -> QuickAction {
    QuickAction { label, icon, href: None }
}

const fn activity(
    time: &'static str,
    action: &'static str,
    actor: &'static str,
    status: ActivityStatus,
    icon: &'static str,
) -> ActivityEntry {
    ActivityEntry {
        time,
        action,
        actor,
        status,
        icon,
    }
}

static ADMIN_STATS: [StatTile; 4] = [
    stat("Total Students", "2,847", "users", "+12%"),
    stat("Faculty Members", "284", "users", "+3%"),
    stat("Active Courses", "156", "book-open", "+8%"),
    stat("Revenue (Monthly)", "$847,392", "dollar-sign", "+15%"),
];

static FACULTY_STATS: [StatTile; 4] = [
    stat("My Courses", "6", "book-open", "+1"),
    stat("Total Students", "248", "users", "+12"),
    stat("Pending Grades", "24", "graduation-cap", "-8"),
    stat("Classes This Week", "18", "calendar", "0"),
];

static STUDENT_STATS: [StatTile; 4] = [
    stat("Enrolled Courses", "6", "book-open", "+1"),
    stat("Current GPA", "3.78", "graduation-cap", "+0.12"),
    stat("Attendance", "94%", "calendar", "+2%"),
    stat("Credits Completed", "84/120", "chart-line", "+6"),
];

static DEPARTMENT_HEAD_STATS: [StatTile; 4] = [
    stat("Department Students", "485", "users", "+18"),
    stat("Faculty Members", "28", "users", "+2"),
    stat("Department Courses", "42", "book-open", "+3"),
    stat("Graduation Rate", "92%", "graduation-cap", "+4%"),
];

pub(super) fn stat_tiles(role: Role) -> &'static [StatTile] {
    match role {
        Role::Admin => &ADMIN_STATS,
        Role::Faculty => &FACULTY_STATS,
        Role::Student => &STUDENT_STATS,
        Role::DepartmentHead => &DEPARTMENT_HEAD_STATS,
    }
}

static ADMIN_ACTIONS: [QuickAction; 4] = [
    action("Manage Students", "users", "/students"),
    action("Course Schedule", "calendar", "/courses"),
    inert("Financial Reports", "chart-line"),
    inert("System Settings", "cog"),
];

static FACULTY_ACTIONS: [QuickAction; 4] = [
    action("My Classes", "book-open", "/courses"),
    action("Grade Students", "users", "/exams"),
    inert("Upload Materials", "upload"),
    inert("View Schedule", "calendar"),
];

static STUDENT_ACTIONS: [QuickAction; 4] = [
    action("My Courses", "book-open", "/courses"),
    action("View Grades", "chart-line", "/exams/results"),
    inert("Course Schedule", "calendar"),
    inert("Library", "bookmark"),
];

static DEPARTMENT_HEAD_ACTIONS: [QuickAction; 4] = [
    action("Dept. Overview", "chart-line", "/"),
    inert("Faculty Management", "users"),
    action("Course Planning", "book-open", "/courses"),
    inert("Budget Review", "calendar"),
];

pub(super) fn quick_actions(role: Role) -> &'static [QuickAction] {
    match role {
        Role::Admin => &ADMIN_ACTIONS,
        Role::Faculty => &FACULTY_ACTIONS,
        Role::Student => &STUDENT_ACTIONS,
        Role::DepartmentHead => &DEPARTMENT_HEAD_ACTIONS,
    }
}

static ADMIN_ACTIVITY: [ActivityEntry; 5] = [
    activity("2 mins ago", "New student enrollment", "Sarah Johnson", Success, "user"),
    activity("15 mins ago", "Course schedule updated", "Dr. Mike Chen", Info, "book-open"),
    activity("1 hour ago", "Payment received", "Alex Rodriguez", Success, "check-circle"),
    activity("2 hours ago", "Faculty leave request", "Prof. Lisa Wang", Warning, "exclamation-circle"),
    activity("3 hours ago", "Exam results published", "Dr. John Smith", Success, "check-circle"),
];

static FACULTY_ACTIVITY: [ActivityEntry; 5] = [
    activity("30 mins ago", "Assignment submitted", "Emily Davis", Info, "book-open"),
    activity("1 hour ago", "Grade entered for Quiz 3", "CS101 Students", Success, "check-circle"),
    activity("2 hours ago", "Student query received", "Mark Thompson", Warning, "exclamation-circle"),
    activity("4 hours ago", "Attendance marked", "CS201 Class", Success, "check-circle"),
    activity("5 hours ago", "Course material uploaded", "Database Systems", Info, "book-open"),
];

static STUDENT_ACTIVITY: [ActivityEntry; 5] = [
    activity("1 hour ago", "Assignment due reminder", "Data Structures", Warning, "exclamation-circle"),
    activity("2 hours ago", "Grade posted", "Calculus II - Quiz 2", Success, "check-circle"),
    activity("1 day ago", "Course material available", "Physics Lab", Info, "book-open"),
    activity("2 days ago", "Fee payment confirmed", "Semester Fee", Success, "check-circle"),
    activity("3 days ago", "Schedule updated", "Linear Algebra", Info, "book-open"),
];

static DEPARTMENT_HEAD_ACTIVITY: [ActivityEntry; 5] = [
    activity("1 hour ago", "Course approval request", "Dr. Anderson", Warning, "exclamation-circle"),
    activity("3 hours ago", "Budget allocation updated", "CS Department", Success, "check-circle"),
    activity("1 day ago", "Faculty meeting scheduled", "All Faculty", Info, "book-open"),
    activity("2 days ago", "Curriculum review completed", "Academic Board", Success, "check-circle"),
    activity("3 days ago", "New faculty interview", "Dr. Sarah Kim", Info, "user"),
];

pub(super) fn recent_activity(role: Role) -> &'static [ActivityEntry] {
    match role {
        Role::Admin => &ADMIN_ACTIVITY,
        Role::Faculty => &FACULTY_ACTIVITY,
        Role::Student => &STUDENT_ACTIVITY,
        Role::DepartmentHead => &DEPARTMENT_HEAD_ACTIVITY,
    }
}
