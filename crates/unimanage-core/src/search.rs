//! Free-text search over in-memory record tables.

use crate::records::{Course, Student};
use serde::Deserialize;

/// A record that exposes text fields to [`filter`].
pub trait Searchable {
    /// Names the fields that can be searched.
    type Field: Copy + 'static;

    /// Fields searched when the caller does not pick any.
    const DEFAULT_FIELDS: &'static [Self::Field];

    fn field_text(&self, field: Self::Field) -> &str;
}

/// Return the records where at least one of `fields` contains `query`,
/// ignoring case.
///
/// An empty query returns every record. The result keeps the source order.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str, fields: &[T::Field]) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| record.field_text(*field).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Searchable student columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentField {
    Name,
    Id,
    Email,
    Department,
}

impl Searchable for Student {
    type Field = StudentField;

    const DEFAULT_FIELDS: &'static [StudentField] = &[
        StudentField::Name,
        StudentField::Id,
        StudentField::Email,
        StudentField::Department,
    ];

    fn field_text(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => self.name,
            StudentField::Id => self.id,
            StudentField::Email => self.email,
            StudentField::Department => self.department,
        }
    }
}

/// Searchable course columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseField {
    Name,
    Id,
    Instructor,
    Department,
}

impl Searchable for Course {
    type Field = CourseField;

    const DEFAULT_FIELDS: &'static [CourseField] = &[
        CourseField::Name,
        CourseField::Id,
        CourseField::Instructor,
        CourseField::Department,
    ];

    fn field_text(&self, field: CourseField) -> &str {
        match field {
            CourseField::Name => self.name,
            CourseField::Id => self.id,
            CourseField::Instructor => self.instructor,
            CourseField::Department => self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{COURSES, STUDENTS};

    fn ids<T: Searchable>(records: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        records.iter().map(|r| id(*r).to_string()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let result = filter(STUDENTS, "", Student::DEFAULT_FIELDS);
        assert_eq!(result.len(), STUDENTS.len());
        for (got, expected) in result.iter().zip(STUDENTS.iter()) {
            assert!(std::ptr::eq(*got, expected));
        }
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        // Every student name contains a space, no id or email does.
        let result = filter(STUDENTS, " ", &[StudentField::Id, StudentField::Email]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_comp_matches_computer_science_only() {
        let records = &STUDENTS[..2];
        let result = filter(records, "comp", Student::DEFAULT_FIELDS);
        assert_eq!(ids(&result, |s: &Student| s.id), vec!["STU001"]);
    }

    #[test]
    fn test_case_insensitive() {
        let result = filter(STUDENTS, "MICHAEL", Student::DEFAULT_FIELDS);
        assert_eq!(ids(&result, |s: &Student| s.id), vec!["STU002"]);

        let result = filter(COURSES, "math201", Course::DEFAULT_FIELDS);
        assert_eq!(ids(&result, |c: &Course| c.id), vec!["MATH201"]);
    }

    #[test]
    fn test_only_listed_fields_are_searched() {
        // "Junior" is a student's year, which is not searchable.
        assert!(filter(STUDENTS, "junior", Student::DEFAULT_FIELDS).is_empty());
        // Department match is lost when only names are searched.
        assert!(filter(STUDENTS, "physics", &[StudentField::Name]).is_empty());
        assert_eq!(filter(STUDENTS, "physics", &[StudentField::Department]).len(), 1);
    }

    #[test]
    fn test_course_instructor_search() {
        let result = filter(COURSES, "rodriguez", Course::DEFAULT_FIELDS);
        assert_eq!(ids(&result, |c: &Course| c.id), vec!["ENG105"]);
    }

    #[test]
    fn test_results_match_and_rejects_do_not() {
        for query in ["a", "son", "edu", "Eng", "zzz", "STU00"] {
            let result = filter(STUDENTS, query, Student::DEFAULT_FIELDS);
            let needle = query.to_lowercase();
            let matches = |s: &Student| {
                Student::DEFAULT_FIELDS
                    .iter()
                    .any(|f| s.field_text(*f).to_lowercase().contains(&needle))
            };
            for student in STUDENTS {
                let kept = result.iter().any(|r| std::ptr::eq(*r, student));
                assert_eq!(kept, matches(student), "query {query:?}, student {}", student.id);
            }
        }
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let once = filter(COURSES, "o", Course::DEFAULT_FIELDS);
        let positions: Vec<usize> = once
            .iter()
            .map(|c| COURSES.iter().position(|x| std::ptr::eq(x, *c)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        let owned: Vec<Course> = once.iter().map(|c| (*c).clone()).collect();
        let twice = filter(&owned, "o", Course::DEFAULT_FIELDS);
        assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            assert_eq!(a.id, b.id);
        }
    }
}
