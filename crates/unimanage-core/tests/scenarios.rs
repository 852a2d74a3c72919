//! End-to-end scenarios across the resolver, the filter and the session gate.
//!
//! Run with: cargo test --package unimanage-core --test scenarios

use std::sync::Arc;
use std::time::Duration;
use unimanage_core::records::Student;
use unimanage_core::search::StudentField;
use unimanage_core::visibility::{self, NAVIGATION};
use unimanage_core::{
    DemoAuthenticator, LoginError, MemorySessionStore, Role, Searchable, SessionGate, fixtures, filter, resolve,
};

/// Test that every role sees exactly the entries that list it, in table order.
#[test]
fn test_navigation_matches_table_for_every_role() {
    for role in Role::ALL {
        let view = resolve(Some(role));
        let expected: Vec<&str> = NAVIGATION
            .iter()
            .filter(|entry| entry.roles.contains(&role))
            .map(|entry| entry.href)
            .collect();
        let actual: Vec<&str> = view.navigation.iter().map(|entry| entry.href).collect();
        assert_eq!(actual, expected, "navigation for {role}");

        for entry in &view.navigation {
            assert!(visibility::permits(role, entry.href));
        }
    }
}

/// Test that a student's sidebar keeps shared entries and drops staff ones.
#[test]
fn test_student_sidebar() {
    let labels: Vec<&str> = resolve(Some(Role::Student))
        .navigation
        .iter()
        .map(|entry| entry.label)
        .collect();
    assert!(labels.contains(&"Dashboard"));
    assert!(labels.contains(&"Courses"));
    assert!(!labels.contains(&"Faculty"));
    assert!(!visibility::permits(Role::Student, "/faculty"));
}

/// Test that signed-out and unknown roles see nothing.
#[test]
fn test_empty_views() {
    assert!(resolve(None).is_empty());
    assert!(visibility::resolve_str("registrar").is_empty());
}

/// Test the filter laws on the fixture table.
#[test]
fn test_filter_laws() {
    let all = filter(fixtures::STUDENTS, "", Student::DEFAULT_FIELDS);
    assert_eq!(all.len(), fixtures::STUDENTS.len());

    for query in ["comp", "CHEN", "stu00", "university.edu", "nobody"] {
        let kept = filter(fixtures::STUDENTS, query, Student::DEFAULT_FIELDS);
        let needle = query.to_lowercase();
        for student in fixtures::STUDENTS {
            let matches = Student::DEFAULT_FIELDS
                .iter()
                .any(|field| student.field_text(*field).to_lowercase().contains(&needle));
            assert_eq!(kept.iter().any(|s| s.id == student.id), matches, "{query} / {}", student.id);
        }

        let owned: Vec<Student> = kept.iter().map(|s| (*s).clone()).collect();
        let again = filter(&owned, query, Student::DEFAULT_FIELDS);
        assert_eq!(again.len(), kept.len());
    }
}

/// Test the "comp" scenario restricted to name and department.
#[test]
fn test_comp_matches_computer_science_only() {
    let ids: Vec<&str> = filter(
        fixtures::STUDENTS,
        "comp",
        &[StudentField::Name, StudentField::Department],
    )
    .iter()
    .map(|s| s.id)
    .collect();
    assert_eq!(ids, ["STU001"]);
}

/// Test that a rejected login leaves the role view empty and a good one fills it.
#[tokio::test]
async fn test_gate_drives_view() {
    let store = Arc::new(MemorySessionStore::new());
    let mut gate = SessionGate::new(
        Arc::clone(&store),
        Arc::new(DemoAuthenticator::new(Duration::ZERO)),
        "browser-1",
    );
    gate.restore();

    let err = gate.login("", "").await.unwrap_err();
    assert!(matches!(err, LoginError::MissingFields));
    assert!(resolve(gate.user().map(|u| u.role)).is_empty());

    gate.login("dept@university.edu", "dept123").await.unwrap();
    let view = resolve(gate.user().map(|u| u.role));
    assert!(view.navigation.iter().any(|entry| entry.label == "Faculty"));
    assert_eq!(view.stats.len(), 4);
}
