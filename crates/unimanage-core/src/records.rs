//! Flat reference records shown in the dashboard tables.
//!
//! Records are read-only; the tables live in [`crate::fixtures`].

use serde::Serialize;

/// Enrollment status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StudentStatus {
    Active,
    Probation,
    Suspended,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "Active",
            StudentStatus::Probation => "Probation",
            StudentStatus::Suspended => "Suspended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub year: &'static str,
    pub gpa: f64,
    pub status: StudentStatus,
    pub enrollment_date: &'static str,
    pub credits: u32,
}

impl Student {
    pub fn gpa_band(&self) -> GpaBand {
        GpaBand::of(self.gpa)
    }
}

/// Coarse GPA classification used to colour GPA values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaBand {
    High,
    Medium,
    Low,
}

impl GpaBand {
    pub fn of(gpa: f64) -> Self {
        if gpa >= 3.5 {
            GpaBand::High
        } else if gpa >= 3.0 {
            GpaBand::Medium
        } else {
            GpaBand::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourseStatus {
    Active,
    Full,
    Draft,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Active => "Active",
            CourseStatus::Full => "Full",
            CourseStatus::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub name: &'static str,
    pub department: &'static str,
    pub instructor: &'static str,
    pub credits: u32,
    pub capacity: u32,
    pub enrolled: u32,
    pub schedule: &'static str,
    pub semester: &'static str,
    pub status: CourseStatus,
    pub room: &'static str,
}

impl Course {
    /// Enrollment as a rounded percentage of capacity. Zero capacity yields 0.
    pub fn utilization_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.enrolled) / f64::from(self.capacity) * 100.0).round() as u32
    }

    pub fn capacity_band(&self) -> CapacityBand {
        CapacityBand::of(self.utilization_percent())
    }
}

/// How close a course is to its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityBand {
    Open,
    Busy,
    Critical,
}

impl CapacityBand {
    pub fn of(percent: u32) -> Self {
        if percent >= 90 {
            CapacityBand::Critical
        } else if percent >= 75 {
            CapacityBand::Busy
        } else {
            CapacityBand::Open
        }
    }
}

/// Aggregate numbers shown above the courses table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CourseSummary {
    pub total_courses: usize,
    pub total_enrolled: u32,
    pub average_utilization: u32,
}

impl CourseSummary {
    pub fn of(courses: &[Course]) -> Self {
        let total_enrolled = courses.iter().map(|c| c.enrolled).sum();
        let average_utilization = if courses.is_empty() {
            0
        } else {
            let sum: u32 = courses.iter().map(Course::utilization_percent).sum();
            (f64::from(sum) / courses.len() as f64).round() as u32
        };
        Self {
            total_courses: courses.len(),
            total_enrolled,
            average_utilization,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamKind {
    Internal,
    Final,
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Scheduled => "Scheduled",
            ExamStatus::Completed => "Completed",
            ExamStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exam {
    pub id: &'static str,
    pub course: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub kind: ExamKind,
    pub status: ExamStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    pub id: &'static str,
    pub student: &'static str,
    pub student_id: &'static str,
    pub course: &'static str,
    pub exam: &'static str,
    pub marks: u32,
    pub total_marks: u32,
    pub grade: &'static str,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptCourse {
    pub code: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub grade: &'static str,
    pub gpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub id: &'static str,
    pub student: &'static str,
    pub student_id: &'static str,
    pub semester: &'static str,
    pub cgpa: f64,
    pub total_credits: u32,
    pub courses: &'static [TranscriptCourse],
}

/// Whether a semester's grades are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemesterStatus {
    Completed,
    InProgress,
}

impl SemesterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SemesterStatus::Completed => "Completed",
            SemesterStatus::InProgress => "In Progress",
        }
    }
}

/// One course line of a semester result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResult {
    pub code: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub grade: &'static str,
    pub gpa: f64,
    pub marks: u32,
    pub total_marks: u32,
}

/// A student's results for one semester.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterResult {
    pub id: &'static str,
    pub semester: &'static str,
    pub year: &'static str,
    pub status: SemesterStatus,
    pub gpa: f64,
    pub cgpa: f64,
    pub total_credits: u32,
    pub earned_credits: u32,
    pub courses: &'static [CourseResult],
}

/// Cumulative standing of one student, as listed for staff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentStanding {
    pub id: &'static str,
    pub name: &'static str,
    pub program: &'static str,
    pub current_semester: &'static str,
    pub cgpa: f64,
    pub total_credits: u32,
    pub active: bool,
}

/// Aggregates shown above a student's semester results. Semesters are
/// ordered newest first, so the current CGPA is the first semester's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub current_cgpa: f64,
    pub average_gpa: f64,
    pub highest_gpa: f64,
    pub earned_credits: u32,
    pub semesters: usize,
}

impl ResultsSummary {
    pub fn of(semesters: &[SemesterResult]) -> Self {
        let average_gpa = if semesters.is_empty() {
            0.0
        } else {
            semesters.iter().map(|s| s.gpa).sum::<f64>() / semesters.len() as f64
        };
        Self {
            current_cgpa: semesters.first().map_or(0.0, |s| s.cgpa),
            average_gpa,
            highest_gpa: semesters.iter().map(|s| s.gpa).fold(0.0, f64::max),
            earned_credits: semesters.iter().map(|s| s.earned_credits).sum(),
            semesters: semesters.len(),
        }
    }
}

/// Colour band for GPA and CGPA values on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultBand {
    Excellent,
    Strong,
    Satisfactory,
    AtRisk,
}

impl ResultBand {
    pub fn of(gpa: f64) -> Self {
        if gpa >= 3.7 {
            ResultBand::Excellent
        } else if gpa >= 3.3 {
            ResultBand::Strong
        } else if gpa >= 3.0 {
            ResultBand::Satisfactory
        } else {
            ResultBand::AtRisk
        }
    }
}

/// Colour tier of a letter grade badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeTier {
    Top,
    High,
    Good,
    Fair,
    Low,
    Poor,
    Failing,
    Neutral,
}

impl GradeTier {
    pub fn of(grade: &str) -> Self {
        match grade {
            "A+" | "A" => GradeTier::Top,
            "A-" => GradeTier::High,
            "B+" => GradeTier::Good,
            "B" => GradeTier::Fair,
            "B-" | "C+" => GradeTier::Low,
            "C" | "C-" => GradeTier::Poor,
            "D" | "F" => GradeTier::Failing,
            _ => GradeTier::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn course(capacity: u32, enrolled: u32) -> Course {
        Course {
            capacity,
            enrolled,
            ..fixtures::COURSES[0].clone()
        }
    }

    #[test]
    fn test_gpa_band_thresholds() {
        assert_eq!(GpaBand::of(3.5), GpaBand::High);
        assert_eq!(GpaBand::of(3.49), GpaBand::Medium);
        assert_eq!(GpaBand::of(3.0), GpaBand::Medium);
        assert_eq!(GpaBand::of(2.99), GpaBand::Low);
    }

    #[test]
    fn test_utilization() {
        assert_eq!(course(120, 95).utilization_percent(), 79);
        assert_eq!(course(80, 75).utilization_percent(), 94);
        assert_eq!(course(0, 10).utilization_percent(), 0);
    }

    #[test]
    fn test_capacity_band() {
        assert_eq!(course(80, 75).capacity_band(), CapacityBand::Critical);
        assert_eq!(course(120, 95).capacity_band(), CapacityBand::Busy);
        assert_eq!(course(60, 30).capacity_band(), CapacityBand::Open);
    }

    #[test]
    fn test_course_summary() {
        let summary = CourseSummary::of(fixtures::COURSES);
        assert_eq!(summary.total_courses, 4);
        assert_eq!(summary.total_enrolled, 95 + 75 + 32 + 45);
        // 79, 94, 80, 75
        assert_eq!(summary.average_utilization, 82);

        let empty = CourseSummary::of(&[]);
        assert_eq!(empty.total_courses, 0);
        assert_eq!(empty.average_utilization, 0);
    }

    #[test]
    fn test_grade_tier() {
        assert_eq!(GradeTier::of("A"), GradeTier::Top);
        assert_eq!(GradeTier::of("A-"), GradeTier::High);
        assert_eq!(GradeTier::of("C+"), GradeTier::Low);
        assert_eq!(GradeTier::of("C-"), GradeTier::Poor);
        assert_eq!(GradeTier::of("D"), GradeTier::Failing);
        assert_eq!(GradeTier::of("F"), GradeTier::Failing);
        assert_eq!(GradeTier::of("P"), GradeTier::Neutral);
    }

    #[test]
    fn test_result_band_thresholds() {
        assert_eq!(ResultBand::of(4.0), ResultBand::Excellent);
        assert_eq!(ResultBand::of(3.7), ResultBand::Excellent);
        assert_eq!(ResultBand::of(3.69), ResultBand::Strong);
        assert_eq!(ResultBand::of(3.3), ResultBand::Strong);
        assert_eq!(ResultBand::of(3.0), ResultBand::Satisfactory);
        assert_eq!(ResultBand::of(2.99), ResultBand::AtRisk);
    }

    #[test]
    fn test_results_summary() {
        let summary = ResultsSummary::of(fixtures::SEMESTER_RESULTS);
        assert_eq!(summary.current_cgpa, 3.68);
        assert_eq!(summary.highest_gpa, 3.75);
        assert_eq!(summary.earned_credits, 18 + 16 + 15);
        assert_eq!(summary.semesters, 3);
        assert!((summary.average_gpa - (3.75 + 3.62 + 3.58) / 3.0).abs() < 1e-9);

        let empty = ResultsSummary::of(&[]);
        assert_eq!(empty.current_cgpa, 0.0);
        assert_eq!(empty.average_gpa, 0.0);
        assert_eq!(empty.highest_gpa, 0.0);
        assert_eq!(empty.earned_credits, 0);
    }
}
