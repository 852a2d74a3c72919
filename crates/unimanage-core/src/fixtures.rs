//! Static reference tables.

use crate::records::{
    Course, CourseResult, CourseStatus, Exam, ExamKind, ExamStatus, GradeRecord, SemesterResult,
    SemesterStatus, Student, StudentStanding, StudentStatus, Transcript, TranscriptCourse,
};

pub static STUDENTS: &[Student] = &[
    Student {
        id: "STU001",
        name: "Emily Johnson",
        email: "emily.johnson@university.edu",
        department: "Computer Science",
        year: "Junior",
        gpa: 3.78,
        status: StudentStatus::Active,
        enrollment_date: "2022-08-15",
        credits: 84,
    },
    Student {
        id: "STU002",
        name: "Michael Chen",
        email: "michael.chen@university.edu",
        department: "Mathematics",
        year: "Senior",
        gpa: 3.92,
        status: StudentStatus::Active,
        enrollment_date: "2021-08-15",
        credits: 105,
    },
    Student {
        id: "STU003",
        name: "Sarah Williams",
        email: "sarah.williams@university.edu",
        department: "Physics",
        year: "Sophomore",
        gpa: 3.65,
        status: StudentStatus::Active,
        enrollment_date: "2023-08-15",
        credits: 45,
    },
    Student {
        id: "STU004",
        name: "David Rodriguez",
        email: "david.rodriguez@university.edu",
        department: "Engineering",
        year: "Freshman",
        gpa: 3.45,
        status: StudentStatus::Probation,
        enrollment_date: "2024-08-15",
        credits: 15,
    },
];

pub static COURSES: &[Course] = &[
    Course {
        id: "CS101",
        name: "Introduction to Computer Science",
        department: "Computer Science",
        instructor: "Dr. Sarah Johnson",
        credits: 3,
        capacity: 120,
        enrolled: 95,
        schedule: "MWF 9:00-10:00 AM",
        semester: "Fall 2024",
        status: CourseStatus::Active,
        room: "CS Building - Room 101",
    },
    Course {
        id: "MATH201",
        name: "Calculus II",
        department: "Mathematics",
        instructor: "Prof. Michael Chen",
        credits: 4,
        capacity: 80,
        enrolled: 75,
        schedule: "TTh 11:00-12:30 PM",
        semester: "Fall 2024",
        status: CourseStatus::Active,
        room: "Math Building - Room 205",
    },
    Course {
        id: "PHYS301",
        name: "Quantum Physics",
        department: "Physics",
        instructor: "Dr. Lisa Wang",
        credits: 3,
        capacity: 40,
        enrolled: 32,
        schedule: "MWF 2:00-3:00 PM",
        semester: "Fall 2024",
        status: CourseStatus::Active,
        room: "Physics Lab 301",
    },
    Course {
        id: "ENG105",
        name: "Technical Writing",
        department: "Engineering",
        instructor: "Prof. David Rodriguez",
        credits: 2,
        capacity: 60,
        enrolled: 45,
        schedule: "Th 1:00-3:00 PM",
        semester: "Fall 2024",
        status: CourseStatus::Active,
        room: "Engineering Building - Room 150",
    },
];

pub static EXAMS: &[Exam] = &[
    Exam {
        id: "1",
        course: "Computer Science 101",
        title: "Midterm Exam",
        date: "2024-02-15",
        time: "09:00 AM",
        duration: "3 hours",
        location: "Room A-101",
        kind: ExamKind::Internal,
        status: ExamStatus::Scheduled,
    },
    Exam {
        id: "2",
        course: "Mathematics 201",
        title: "Final Exam",
        date: "2024-02-20",
        time: "02:00 PM",
        duration: "3 hours",
        location: "Hall B",
        kind: ExamKind::Final,
        status: ExamStatus::Scheduled,
    },
    Exam {
        id: "3",
        course: "Physics 101",
        title: "Quiz 1",
        date: "2024-02-10",
        time: "11:00 AM",
        duration: "1 hour",
        location: "Room C-205",
        kind: ExamKind::Quiz,
        status: ExamStatus::Completed,
    },
];

pub static GRADES: &[GradeRecord] = &[
    GradeRecord {
        id: "1",
        student: "John Doe",
        student_id: "STU2024001",
        course: "Computer Science 101",
        exam: "Midterm Exam",
        marks: 85,
        total_marks: 100,
        grade: "A-",
        gpa: 3.7,
    },
    GradeRecord {
        id: "2",
        student: "Jane Smith",
        student_id: "STU2024002",
        course: "Mathematics 201",
        exam: "Final Exam",
        marks: 92,
        total_marks: 100,
        grade: "A",
        gpa: 4.0,
    },
    GradeRecord {
        id: "3",
        student: "Mike Johnson",
        student_id: "STU2024003",
        course: "Physics 101",
        exam: "Quiz 1",
        marks: 78,
        total_marks: 100,
        grade: "B+",
        gpa: 3.3,
    },
];

pub static TRANSCRIPTS: &[Transcript] = &[Transcript {
    id: "1",
    student: "John Doe",
    student_id: "STU2024001",
    semester: "Fall 2024",
    cgpa: 3.75,
    total_credits: 18,
    courses: &[
        TranscriptCourse {
            code: "CS101",
            name: "Computer Science 101",
            credits: 3,
            grade: "A-",
            gpa: 3.7,
        },
        TranscriptCourse {
            code: "MATH201",
            name: "Mathematics 201",
            credits: 4,
            grade: "B+",
            gpa: 3.3,
        },
        TranscriptCourse {
            code: "PHYS101",
            name: "Physics 101",
            credits: 3,
            grade: "A",
            gpa: 4.0,
        },
    ],
}];

/// Semester results of the signed-in student, newest first.
pub static SEMESTER_RESULTS: &[SemesterResult] = &[
    SemesterResult {
        id: "1",
        semester: "Fall 2024",
        year: "2024",
        status: SemesterStatus::Completed,
        gpa: 3.75,
        cgpa: 3.68,
        total_credits: 18,
        earned_credits: 18,
        courses: &[
            CourseResult {
                code: "CS101",
                name: "Introduction to Computer Science",
                credits: 3,
                grade: "A-",
                gpa: 3.7,
                marks: 85,
                total_marks: 100,
            },
            CourseResult {
                code: "MATH201",
                name: "Calculus II",
                credits: 4,
                grade: "B+",
                gpa: 3.3,
                marks: 78,
                total_marks: 100,
            },
            CourseResult {
                code: "PHYS101",
                name: "Physics I",
                credits: 3,
                grade: "A",
                gpa: 4.0,
                marks: 92,
                total_marks: 100,
            },
            CourseResult {
                code: "ENG102",
                name: "English Composition",
                credits: 3,
                grade: "A-",
                gpa: 3.7,
                marks: 88,
                total_marks: 100,
            },
            CourseResult {
                code: "HIST201",
                name: "World History",
                credits: 3,
                grade: "B+",
                gpa: 3.3,
                marks: 82,
                total_marks: 100,
            },
            CourseResult {
                code: "LAB101",
                name: "Computer Lab",
                credits: 2,
                grade: "A",
                gpa: 4.0,
                marks: 95,
                total_marks: 100,
            },
        ],
    },
    SemesterResult {
        id: "2",
        semester: "Spring 2024",
        year: "2024",
        status: SemesterStatus::Completed,
        gpa: 3.62,
        cgpa: 3.65,
        total_credits: 16,
        earned_credits: 16,
        courses: &[
            CourseResult {
                code: "CS102",
                name: "Data Structures",
                credits: 3,
                grade: "B+",
                gpa: 3.3,
                marks: 81,
                total_marks: 100,
            },
            CourseResult {
                code: "MATH202",
                name: "Linear Algebra",
                credits: 3,
                grade: "A-",
                gpa: 3.7,
                marks: 87,
                total_marks: 100,
            },
            CourseResult {
                code: "PHYS102",
                name: "Physics II",
                credits: 3,
                grade: "A",
                gpa: 4.0,
                marks: 91,
                total_marks: 100,
            },
            CourseResult {
                code: "CHEM101",
                name: "General Chemistry",
                credits: 4,
                grade: "B",
                gpa: 3.0,
                marks: 75,
                total_marks: 100,
            },
            CourseResult {
                code: "PE101",
                name: "Physical Education",
                credits: 1,
                grade: "A",
                gpa: 4.0,
                marks: 98,
                total_marks: 100,
            },
            CourseResult {
                code: "LAB102",
                name: "Physics Lab",
                credits: 2,
                grade: "A-",
                gpa: 3.7,
                marks: 89,
                total_marks: 100,
            },
        ],
    },
    SemesterResult {
        id: "3",
        semester: "Fall 2023",
        year: "2023",
        status: SemesterStatus::Completed,
        gpa: 3.58,
        cgpa: 3.62,
        total_credits: 15,
        earned_credits: 15,
        courses: &[
            CourseResult {
                code: "CS100",
                name: "Programming Fundamentals",
                credits: 3,
                grade: "A-",
                gpa: 3.7,
                marks: 86,
                total_marks: 100,
            },
            CourseResult {
                code: "MATH101",
                name: "Calculus I",
                credits: 4,
                grade: "B+",
                gpa: 3.3,
                marks: 79,
                total_marks: 100,
            },
            CourseResult {
                code: "ENG101",
                name: "English Literature",
                credits: 3,
                grade: "A",
                gpa: 4.0,
                marks: 93,
                total_marks: 100,
            },
            CourseResult {
                code: "BIO101",
                name: "General Biology",
                credits: 3,
                grade: "B",
                gpa: 3.0,
                marks: 76,
                total_marks: 100,
            },
            CourseResult {
                code: "SOC101",
                name: "Introduction to Sociology",
                credits: 2,
                grade: "A-",
                gpa: 3.7,
                marks: 88,
                total_marks: 100,
            },
        ],
    },
];

pub static STUDENT_STANDINGS: &[StudentStanding] = &[
    StudentStanding {
        id: "STU2024001",
        name: "John Doe",
        program: "Computer Science",
        current_semester: "Fall 2024",
        cgpa: 3.68,
        total_credits: 49,
        active: true,
    },
    StudentStanding {
        id: "STU2024002",
        name: "Jane Smith",
        program: "Mathematics",
        current_semester: "Fall 2024",
        cgpa: 3.85,
        total_credits: 52,
        active: true,
    },
    StudentStanding {
        id: "STU2024003",
        name: "Mike Johnson",
        program: "Physics",
        current_semester: "Fall 2024",
        cgpa: 3.42,
        total_credits: 46,
        active: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_ids_are_unique() {
        let students: HashSet<_> = STUDENTS.iter().map(|s| s.id).collect();
        assert_eq!(students.len(), STUDENTS.len());
        let courses: HashSet<_> = COURSES.iter().map(|c| c.id).collect();
        assert_eq!(courses.len(), COURSES.len());
    }

    #[test]
    fn test_grades_reference_known_exams() {
        for grade in GRADES {
            assert!(EXAMS.iter().any(|e| e.title == grade.exam && e.course == grade.course));
            assert!(grade.marks <= grade.total_marks);
        }
    }

    #[test]
    fn test_semester_credits_add_up() {
        for semester in SEMESTER_RESULTS {
            let credits: u32 = semester.courses.iter().map(|c| c.credits).sum();
            assert_eq!(credits, semester.total_credits, "{}", semester.semester);
            assert!(semester.earned_credits <= semester.total_credits);
        }
        let ids: HashSet<_> = SEMESTER_RESULTS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SEMESTER_RESULTS.len());
    }
}
