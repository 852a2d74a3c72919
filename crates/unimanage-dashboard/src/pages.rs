//! Page templates for dashboard views.

use crate::templates::{
    Shell, badge, button, card, empty_state, escape, input, layout, search_box, stat_tile, stats_card, table,
    tabs,
};
use chrono::{NaiveDateTime, Timelike};
use unimanage_core::records::{
    CapacityBand, CourseStatus, CourseSummary, ExamStatus, GpaBand, GradeTier, ResultBand, ResultsSummary,
    SemesterResult, SemesterStatus, StudentStanding, StudentStatus,
};
use unimanage_core::visibility::{self, ResultsScope, RoleView};
use unimanage_core::{Capability, Course, Exam, GradeRecord, Role, Student, Transcript, fixtures};

/// Page header with a title, subtitle and optional action buttons.
fn page_header(title: &str, subtitle: &str, actions: &str) -> String {
    format!(
        r##"<div class="mb-8 flex flex-col sm:flex-row sm:items-center justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">{title}</h1>
                <p class="mt-2 text-gray-600 dark:text-gray-400">{subtitle}</p>
            </div>
            <div class="flex gap-2">{actions}</div>
        </div>"##,
        title = escape(title),
        subtitle = escape(subtitle),
    )
}

// =============================================================================
// Home Page
// =============================================================================

pub fn home_page(shell: &Shell<'_>, view: &RoleView, now: NaiveDateTime) -> String {
    let user = shell.user;
    let banner = format!(
        r##"<div class="bg-gradient-to-r from-primary-700 to-primary-500 rounded-xl p-6 text-white mb-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{greeting}</h1>
                    <p class="mt-2 text-primary-100">{tagline}</p>
                </div>
                <div class="flex items-center gap-2 text-sm">
                    <i class="fas fa-clock"></i>
                    <span>{date}</span>
                </div>
            </div>
        </div>"##,
        greeting = escape(&visibility::greeting(now.hour(), &user.name)),
        tagline = visibility::tagline(user.role),
        date = now.format("%A, %B %-d, %Y"),
    );

    let stats: String = view.stats.iter().map(stat_tile).collect();

    let actions: String = view
        .quick_actions
        .iter()
        .map(|action| {
            let inner = format!(
                r##"<i class="fas fa-{icon} w-5 text-primary-600"></i>
                    <span class="text-gray-900 dark:text-white">{label}</span>"##,
                icon = action.icon,
                label = escape(action.label),
            );
            let class = "flex w-full items-center gap-3 p-3 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors";
            match action.href {
                Some(href) => format!(r##"<a href="{href}" class="{class}">{inner}</a>"##),
                None => format!(r##"<button type="button" class="{class} text-left">{inner}</button>"##),
            }
        })
        .collect();

    let activity: String = view
        .activity
        .iter()
        .map(|entry| {
            let color = match entry.status {
                visibility::ActivityStatus::Success => "green",
                visibility::ActivityStatus::Info => "blue",
                visibility::ActivityStatus::Warning => "yellow",
            };
            format!(
                r##"<div class="flex items-start gap-4 py-3 border-b border-gray-100 dark:border-gray-700 last:border-b-0">
                    <div class="w-10 h-10 rounded-full bg-{color}-100 dark:bg-{color}-900/30 flex items-center justify-center shrink-0">
                        <i class="fas fa-{icon} text-{color}-500"></i>
                    </div>
                    <div class="flex-1 min-w-0">
                        <p class="font-medium text-gray-900 dark:text-white">{action}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{actor}</p>
                    </div>
                    <span class="text-xs text-gray-400 whitespace-nowrap">{time}</span>
                </div>"##,
                icon = entry.icon,
                action = escape(entry.action),
                actor = escape(entry.actor),
                time = escape(entry.time),
            )
        })
        .collect();

    let events = card(
        "Upcoming Events",
        r##"<div class="space-y-3">
            <div class="flex justify-between items-center py-2 border-b border-gray-100 dark:border-gray-700">
                <div><p class="font-medium text-gray-900 dark:text-white">Midterm Exams</p><p class="text-sm text-gray-500">Starting next week</p></div>
                <span class="text-sm text-yellow-600">Oct 15-19</span>
            </div>
            <div class="flex justify-between items-center py-2 border-b border-gray-100 dark:border-gray-700">
                <div><p class="font-medium text-gray-900 dark:text-white">Faculty Meeting</p><p class="text-sm text-gray-500">Monthly review</p></div>
                <span class="text-sm text-yellow-600">Oct 25</span>
            </div>
            <div class="flex justify-between items-center py-2">
                <div><p class="font-medium text-gray-900 dark:text-white">Registration Opens</p><p class="text-sm text-gray-500">Spring 2025</p></div>
                <span class="text-sm text-yellow-600">Nov 1</span>
            </div>
        </div>"##,
    );

    let highlights: String = [
        ("Overall Satisfaction", "94%", "green"),
        ("Course Completion Rate", "89%", "primary"),
        ("System Uptime", "99.7%", "yellow"),
    ]
    .iter()
    .map(|(label, value, color)| {
        format!(
            r##"<div>
                <div class="flex justify-between items-center mb-2">
                    <span class="text-sm text-gray-700 dark:text-gray-300">{label}</span>
                    <span class="text-sm font-semibold text-gray-900 dark:text-white">{value}</span>
                </div>
                <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2">
                    <div class="bg-{color}-500 h-2 rounded-full" style="width: {value}"></div>
                </div>
            </div>"##
        )
    })
    .collect();

    let content = format!(
        r##"{banner}

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {stats}
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
            <div class="lg:col-span-1">{quick_actions}</div>
            <div class="lg:col-span-2">{recent_activity}</div>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {events}
            {performance}
        </div>"##,
        quick_actions = card("Quick Actions", &format!(r#"<div class="space-y-1">{actions}</div>"#)),
        recent_activity = card("Recent Activity", &activity),
        performance = card("Performance Highlights", &format!(r#"<div class="space-y-4">{highlights}</div>"#)),
    );

    layout("Dashboard", shell, &content)
}

// =============================================================================
// Students
// =============================================================================

pub fn students_page(shell: &Shell<'_>, query: &str, students: &[&Student]) -> String {
    let header = page_header(
        "Students",
        "Manage student records and information",
        &format!(
            "{}{}",
            button(r#"<i class="fas fa-download"></i> Export"#, "secondary", r#"type="button""#),
            button(r#"<i class="fas fa-plus"></i> Add Student"#, "primary", r#"type="button""#),
        ),
    );

    let content = format!(
        r##"{header}
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            {search}
            <div id="student-results">
                {rows}
            </div>
        </div>"##,
        search = search_box(
            "/students/rows",
            "student-results",
            query,
            "Search by name, ID, email, or department...",
        ),
        rows = student_rows(students),
    );

    layout("Students", shell, &content)
}

/// The student table with its result count. Served alone as the live
/// search fragment.
pub fn student_rows(students: &[&Student]) -> String {
    if students.is_empty() {
        return empty_state("user-slash", "No students found", "Try a different search term.", None);
    }

    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|s| {
            let gpa_color = match s.gpa_band() {
                GpaBand::High => "text-green-600",
                GpaBand::Medium => "text-yellow-600",
                GpaBand::Low => "text-red-600",
            };
            let status_color = match s.status {
                StudentStatus::Active => "green",
                StudentStatus::Probation => "yellow",
                StudentStatus::Suspended => "red",
            };
            vec![
                format!(r#"<span class="font-mono">{}</span>"#, escape(s.id)),
                format!(
                    r#"<div><p class="font-medium">{}</p><p class="text-xs text-gray-500">{}</p></div>"#,
                    escape(s.name),
                    escape(s.email)
                ),
                escape(s.department),
                escape(s.year),
                format!(r#"<span class="font-semibold {gpa_color}">{:.2}</span>"#, s.gpa),
                s.credits.to_string(),
                badge(s.status.as_str(), status_color),
            ]
        })
        .collect();

    format!(
        r##"<h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">All Students ({count})</h3>
        {table}"##,
        count = students.len(),
        table = table(
            &["Student ID", "Name", "Department", "Year", "GPA", "Credits", "Status"],
            &rows
        ),
    )
}

// =============================================================================
// Courses
// =============================================================================

pub fn courses_page(shell: &Shell<'_>, query: &str, courses: &[&Course], summary: &CourseSummary) -> String {
    let header = page_header(
        "Courses",
        "Manage course catalog and schedules",
        &format!(
            "{}{}",
            button(r#"<i class="fas fa-calendar"></i> Schedule"#, "secondary", r#"type="button""#),
            button(r#"<i class="fas fa-plus"></i> Add Course"#, "primary", r#"type="button""#),
        ),
    );

    let content = format!(
        r##"{header}
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
            {total}
            {enrolled}
            {capacity}
        </div>
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            {search}
            <div id="course-results">
                {rows}
            </div>
        </div>"##,
        total = stats_card("Total Courses", &summary.total_courses.to_string(), "book-open", "blue"),
        enrolled = stats_card("Total Enrollments", &summary.total_enrolled.to_string(), "users", "green"),
        capacity = stats_card(
            "Average Capacity",
            &format!("{}%", summary.average_utilization),
            "clock",
            "yellow"
        ),
        search = search_box(
            "/courses/rows",
            "course-results",
            query,
            "Search by course name, ID, instructor, or department...",
        ),
        rows = course_rows(courses),
    );

    layout("Courses", shell, &content)
}

/// The course table with its result count.
pub fn course_rows(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return empty_state("book", "No courses found", "Try a different search term.", None);
    }

    let rows: Vec<Vec<String>> = courses
        .iter()
        .map(|c| {
            let capacity_color = match c.capacity_band() {
                CapacityBand::Critical => "text-red-600",
                CapacityBand::Busy => "text-yellow-600",
                CapacityBand::Open => "text-green-600",
            };
            let status_color = match c.status {
                CourseStatus::Active => "green",
                CourseStatus::Full => "red",
                CourseStatus::Draft => "gray",
            };
            vec![
                format!(
                    r#"<div><p class="font-medium">{}</p><p class="text-xs text-gray-500">{} &middot; {} credits</p></div>"#,
                    escape(c.name),
                    escape(c.id),
                    c.credits
                ),
                escape(c.instructor),
                escape(c.department),
                format!(
                    r#"<span class="font-semibold {capacity_color}">{}/{}</span> <span class="text-xs text-gray-500">({}%)</span>"#,
                    c.enrolled,
                    c.capacity,
                    c.utilization_percent()
                ),
                format!(
                    r#"<div><p>{}</p><p class="text-xs text-gray-500">{}</p></div>"#,
                    escape(c.schedule),
                    escape(c.room)
                ),
                badge(c.status.as_str(), status_color),
            ]
        })
        .collect();

    format!(
        r##"<h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">All Courses ({count})</h3>
        {table}"##,
        count = courses.len(),
        table = table(
            &["Course", "Instructor", "Department", "Enrollment", "Schedule", "Status"],
            &rows
        ),
    )
}

// =============================================================================
// Exams & Grades
// =============================================================================

fn grade_badge(grade: &str) -> String {
    let color = match GradeTier::of(grade) {
        GradeTier::Top | GradeTier::High => "green",
        GradeTier::Good | GradeTier::Fair => "blue",
        GradeTier::Low => "yellow",
        GradeTier::Poor => "orange",
        GradeTier::Failing => "red",
        GradeTier::Neutral => "gray",
    };
    badge(grade, color)
}

fn exam_status_badge(status: ExamStatus) -> String {
    let color = match status {
        ExamStatus::Scheduled => "blue",
        ExamStatus::Completed => "green",
        ExamStatus::Cancelled => "red",
    };
    badge(status.label(), color)
}

pub fn exams_page(
    shell: &Shell<'_>,
    exams: &[Exam],
    grades: &[GradeRecord],
    transcripts: &[Transcript],
) -> String {
    let role = shell.user.role;

    let results_link = r#"<a href="/exams/results" class="bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-200 px-4 py-2 rounded-lg font-medium transition-colors"><i class="fas fa-trophy"></i> Results</a>"#;
    let schedule_action = if role.can(Capability::ScheduleExams) {
        button(
            r#"<i class="fas fa-plus"></i> Schedule Exam"#,
            "primary",
            r#"type="button" @click="scheduling = !scheduling""#,
        )
    } else {
        String::new()
    };
    let actions = format!("{results_link}{schedule_action}");

    let content = format!(
        r##"<div x-data="{{ scheduling: false }}">
            {header}
            {schedule_form}
            {tabs}
        </div>"##,
        header = page_header(
            "Exams & Grades",
            "Manage examinations, grades, and academic performance",
            &actions,
        ),
        schedule_form = schedule_exam_panel(role),
        tabs = tabs(
            "exam-tabs",
            &[
                ("exams", "Exam Schedule", exam_schedule_tab(exams)),
                ("grades", "Grades & Results", grades_tab(role, exams, grades)),
                ("transcripts", "Transcripts", transcripts_tab(transcripts)),
            ],
        ),
    );

    layout("Exams & Grades", shell, &content)
}

fn schedule_exam_panel(role: Role) -> String {
    if !role.can(Capability::ScheduleExams) {
        return String::new();
    }

    let options: String = fixtures::COURSES
        .iter()
        .map(|c| format!(r#"<option value="{id}">{id} - {name}</option>"#, id = escape(c.id), name = escape(c.name)))
        .collect();

    format!(
        r##"<div x-show="scheduling" x-cloak class="mb-6">
            {card}
        </div>"##,
        card = card(
            "Schedule New Exam",
            &format!(
                r##"<div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="space-y-1">
                        <label for="course" class="block text-sm font-medium text-gray-700 dark:text-gray-300">Course</label>
                        <select id="course" name="course" class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                            {options}
                        </select>
                    </div>
                    {title}
                    {date}
                    {time}
                    {location}
                </div>
                <div class="mt-4">{submit}</div>"##,
                title = input("title", "Exam Title", "text", "", "e.g., Midterm Exam"),
                date = input("date", "Date", "date", "", ""),
                time = input("time", "Time", "time", "", ""),
                location = input("location", "Location", "text", "", "e.g., Room A-101"),
                submit = button(
                    "Schedule Exam",
                    "primary",
                    r#"type="button" @click="scheduling = false; showToast('The exam has been successfully scheduled.')""#,
                ),
            ),
        ),
    )
}

fn exam_schedule_tab(exams: &[Exam]) -> String {
    let rows: Vec<Vec<String>> = exams
        .iter()
        .map(|e| {
            vec![
                format!(r#"<span class="font-medium">{}</span>"#, escape(e.course)),
                escape(e.title),
                format!(
                    r#"<i class="fas fa-calendar text-gray-400"></i> {} <i class="fas fa-clock text-gray-400 ml-2"></i> {}"#,
                    escape(e.date),
                    escape(e.time)
                ),
                escape(e.duration),
                escape(e.location),
                exam_status_badge(e.status),
            ]
        })
        .collect();

    card(
        "Examination Schedule",
        &table(&["Course", "Exam Title", "Date & Time", "Duration", "Location", "Status"], &rows),
    )
}

fn grades_tab(role: Role, exams: &[Exam], grades: &[GradeRecord]) -> String {
    let entry_panel = if role.can(Capability::EnterGrades) {
        let options: String = exams
            .iter()
            .map(|e| format!(r#"<option value="{}">{} - {}</option>"#, escape(e.id), escape(e.course), escape(e.title)))
            .collect();
        card(
            "Enter Grades",
            &format!(
                r##"<div class="space-y-4">
                    {student}
                    <div class="space-y-1">
                        <label for="exam" class="block text-sm font-medium text-gray-700 dark:text-gray-300">Exam</label>
                        <select id="exam" name="exam" class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                            {options}
                        </select>
                    </div>
                    {marks}
                    {submit}
                </div>"##,
                student = input("student", "Student ID", "text", "", "Enter student ID"),
                marks = input("marks", "Marks Obtained", "number", "", "Enter marks"),
                submit = button(
                    "Submit Grade",
                    "primary",
                    r#"type="button" onclick="showToast('Student grade has been recorded successfully.')""#,
                ),
            ),
        )
    } else {
        String::new()
    };

    let recent: String = grades
        .iter()
        .take(5)
        .map(|g| {
            format!(
                r##"<div class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-700 rounded-lg">
                    <div>
                        <p class="font-medium text-gray-900 dark:text-white">{student}</p>
                        <p class="text-sm text-gray-500">{course}</p>
                        <p class="text-sm text-gray-500">{exam}</p>
                    </div>
                    <div class="text-right">
                        <div class="flex items-center gap-2">
                            <span class="font-bold">{marks}/{total}</span>
                            {grade}
                        </div>
                        <p class="text-sm text-gray-500">GPA: {gpa:.1}</p>
                    </div>
                </div>"##,
                student = escape(g.student),
                course = escape(g.course),
                exam = escape(g.exam),
                marks = g.marks,
                total = g.total_marks,
                grade = grade_badge(g.grade),
                gpa = g.gpa,
            )
        })
        .collect();

    let rows: Vec<Vec<String>> = grades
        .iter()
        .map(|g| {
            vec![
                format!(
                    r#"<div><p class="font-medium">{}</p><p class="text-xs text-gray-500">{}</p></div>"#,
                    escape(g.student),
                    escape(g.student_id)
                ),
                escape(g.course),
                escape(g.exam),
                format!("{}/{}", g.marks, g.total_marks),
                grade_badge(g.grade),
                format!("{:.1}", g.gpa),
            ]
        })
        .collect();

    format!(
        r##"<div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6">
            {entry_panel}
            {recent}
        </div>
        {all}"##,
        recent = card("Recent Grades", &format!(r#"<div class="space-y-4">{recent}</div>"#)),
        all = card(
            "All Grades",
            &table(&["Student", "Course", "Exam", "Marks", "Grade", "GPA"], &rows)
        ),
    )
}

fn transcripts_tab(transcripts: &[Transcript]) -> String {
    let body: String = transcripts
        .iter()
        .map(|t| {
            let rows: Vec<Vec<String>> = t
                .courses
                .iter()
                .map(|c| {
                    vec![
                        escape(c.code),
                        escape(c.name),
                        c.credits.to_string(),
                        grade_badge(c.grade),
                        format!("{:.1}", c.gpa),
                    ]
                })
                .collect();
            format!(
                r##"<div class="border border-gray-200 dark:border-gray-700 rounded-lg p-6 space-y-4 mb-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h3 class="font-semibold text-lg text-gray-900 dark:text-white">{student}</h3>
                            <p class="text-gray-500">{student_id} &bull; {semester}</p>
                        </div>
                        <div class="text-right">
                            <p class="text-2xl font-bold text-primary-700 dark:text-primary-400">CGPA: {cgpa:.2}</p>
                            <p class="text-sm text-gray-500">Credits: {credits}</p>
                        </div>
                    </div>
                    <h4 class="font-medium text-gray-900 dark:text-white">Course Details</h4>
                    {table}
                    <div class="flex justify-end">{download}</div>
                </div>"##,
                student = escape(t.student),
                student_id = escape(t.student_id),
                semester = escape(t.semester),
                cgpa = t.cgpa,
                credits = t.total_credits,
                table = table(&["Course Code", "Course Name", "Credits", "Grade", "GPA"], &rows),
                download = button(
                    r#"<i class="fas fa-download"></i> Download Transcript"#,
                    "primary",
                    r#"type="button" onclick="showToast('Student transcript is being prepared for download.')""#,
                ),
            )
        })
        .collect();

    card("Student Transcripts", &body)
}

// =============================================================================
// Results
// =============================================================================

fn result_color(gpa: f64) -> &'static str {
    match ResultBand::of(gpa) {
        ResultBand::Excellent => "green",
        ResultBand::Strong => "blue",
        ResultBand::Satisfactory => "yellow",
        ResultBand::AtRisk => "red",
    }
}

fn result_value(gpa: f64) -> String {
    format!(
        r#"<span class="font-semibold text-{color}-600">{gpa:.2}</span>"#,
        color = result_color(gpa)
    )
}

/// Results under the exams section. `selected` narrows a student's
/// semesters to one id; the summary always covers every semester.
pub fn results_page(
    shell: &Shell<'_>,
    scope: ResultsScope,
    selected: Option<&str>,
    semesters: &[SemesterResult],
    standings: &[StudentStanding],
) -> String {
    let content = match scope {
        ResultsScope::Own => own_results(selected, semesters),
        ResultsScope::AllStudents => all_results(standings),
    };
    layout("Results", shell, &content)
}

fn own_results(selected: Option<&str>, semesters: &[SemesterResult]) -> String {
    let header = page_header(
        "My Results",
        "View your academic performance and semester results",
        &button(
            r#"<i class="fas fa-download"></i> Download Complete Transcript"#,
            "primary",
            r#"type="button" onclick="showToast('Complete transcript is being prepared.')""#,
        ),
    );

    let summary = ResultsSummary::of(semesters);
    let tiles = format!(
        "{}{}{}{}",
        stats_card(
            "Current CGPA",
            &format!("{:.2}", summary.current_cgpa),
            "trophy",
            result_color(summary.current_cgpa)
        ),
        stats_card(
            "Highest GPA",
            &format!("{:.2}", summary.highest_gpa),
            "chart-line",
            result_color(summary.highest_gpa)
        ),
        stats_card("Total Credits", &summary.earned_credits.to_string(), "award", "purple"),
        stats_card("Completed Semesters", &summary.semesters.to_string(), "bullseye", "blue"),
    );

    let options: String = semesters
        .iter()
        .map(|sem| {
            format!(
                r#"<option value="{id}"{selected}>{label}</option>"#,
                id = escape(sem.id),
                selected = if selected == Some(sem.id) { " selected" } else { "" },
                label = escape(sem.semester),
            )
        })
        .collect();
    let selector = format!(
        r##"<form method="get" action="/exams/results" class="mb-6 flex items-center gap-3">
            <label for="semester" class="text-sm font-medium text-gray-700 dark:text-gray-300">Semester</label>
            <select id="semester" name="semester" onchange="this.form.submit()"
                class="px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                <option value="all">All Semesters</option>
                {options}
            </select>
        </form>"##
    );

    let shown: Vec<&SemesterResult> = semesters
        .iter()
        .filter(|sem| selected.is_none_or(|id| sem.id == id))
        .collect();
    let body = if shown.is_empty() {
        empty_state(
            "calendar-times",
            "No results for this semester",
            "Choose another semester.",
            Some(("All Semesters", "/exams/results")),
        )
    } else {
        shown.iter().map(|sem| semester_card(sem)).collect()
    };

    format!(
        r##"{header}
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">{tiles}</div>
        {selector}
        <div class="space-y-6">{body}</div>"##
    )
}

fn semester_card(sem: &SemesterResult) -> String {
    let rows: Vec<Vec<String>> = sem
        .courses
        .iter()
        .map(|c| {
            vec![
                format!(r#"<span class="font-medium">{}</span>"#, escape(c.code)),
                escape(c.name),
                c.credits.to_string(),
                format!("{}/{}", c.marks, c.total_marks),
                grade_badge(c.grade),
                result_value(c.gpa),
            ]
        })
        .collect();

    let status_color = match sem.status {
        SemesterStatus::Completed => "green",
        SemesterStatus::InProgress => "gray",
    };

    format!(
        r##"<div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 overflow-hidden">
            <div class="px-6 py-4 border-b border-gray-200 dark:border-gray-700 bg-primary-50 dark:bg-gray-900/40 flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-semibold text-gray-900 dark:text-white"><i class="fas fa-calendar"></i> {semester}</h3>
                    <p class="text-sm text-gray-500">{earned} Credits &bull; GPA: {gpa:.2} &bull; CGPA: {cgpa:.2}</p>
                </div>
                <div class="flex items-center gap-2">
                    {status}
                    {download}
                </div>
            </div>
            <div class="p-6">
                {table}
                <div class="mt-4 p-4 bg-gray-50 dark:bg-gray-700/30 rounded-lg grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                    <div><p class="text-sm text-gray-500">Semester GPA</p><p class="text-lg">{gpa_value}</p></div>
                    <div><p class="text-sm text-gray-500">Cumulative GPA</p><p class="text-lg">{cgpa_value}</p></div>
                    <div><p class="text-sm text-gray-500">Credits Earned</p><p class="text-lg font-bold">{earned}</p></div>
                    <div><p class="text-sm text-gray-500">Total Credits</p><p class="text-lg font-bold">{total}</p></div>
                </div>
            </div>
        </div>"##,
        semester = escape(sem.semester),
        earned = sem.earned_credits,
        total = sem.total_credits,
        gpa = sem.gpa,
        cgpa = sem.cgpa,
        status = badge(sem.status.label(), status_color),
        download = button(
            r#"<i class="fas fa-download"></i> Download"#,
            "secondary",
            r#"type="button" onclick="showToast('Semester transcript is being prepared.')""#,
        ),
        table = table(&["Course Code", "Course Name", "Credits", "Marks", "Grade", "GPA"], &rows),
        gpa_value = result_value(sem.gpa),
        cgpa_value = result_value(sem.cgpa),
    )
}

fn all_results(standings: &[StudentStanding]) -> String {
    let header = page_header("Student Results", "View and manage student academic results", "");

    let rows: Vec<Vec<String>> = standings
        .iter()
        .map(|s| {
            vec![
                format!(r#"<span class="font-mono">{}</span>"#, escape(s.id)),
                escape(s.name),
                escape(s.program),
                escape(s.current_semester),
                result_value(s.cgpa),
                s.total_credits.to_string(),
                if s.active {
                    badge("active", "green")
                } else {
                    badge("inactive", "gray")
                },
                format!(
                    "{}{}",
                    button(r#"<i class="fas fa-file-alt"></i>"#, "secondary", r#"type="button""#),
                    button(r#"<i class="fas fa-download"></i>"#, "secondary", r#"type="button""#),
                ),
            ]
        })
        .collect();

    let overview = card(
        "Student Performance Overview",
        &table(
            &[
                "Student ID",
                "Name",
                "Program",
                "Current Semester",
                "CGPA",
                "Total Credits",
                "Status",
                "Actions",
            ],
            &rows,
        ),
    );

    let options: String = standings
        .iter()
        .map(|s| {
            format!(
                r#"<option value="{id}">{name} ({id})</option>"#,
                id = escape(s.id),
                name = escape(s.name)
            )
        })
        .collect();
    let individual = card(
        "Individual Student Results",
        &format!(
            r##"<div x-data="{{ student: '' }}" class="flex gap-4">
                <select x-model="student" class="w-72 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-800 text-gray-900 dark:text-white">
                    <option value="">Select a student</option>
                    {options}
                </select>
                {view}
            </div>"##,
            view = button("View Results", "primary", r#"type="button" :disabled="!student""#),
        ),
    );

    format!(
        "{header}{tabs}",
        tabs = tabs(
            "result-tabs",
            &[
                ("overview", "Overview", overview),
                ("individual", "Individual Results", individual),
            ],
        ),
    )
}

// =============================================================================
// Errors
// =============================================================================

pub fn not_found_page(shell: &Shell<'_>) -> String {
    let content = empty_state(
        "exclamation-triangle",
        "404",
        &format!("Oops! Page not found: {}", shell.current_path),
        Some(("Return to Home", "/")),
    );
    layout("Not Found", shell, &content)
}

pub fn forbidden_page(shell: &Shell<'_>) -> String {
    let content = empty_state(
        "lock",
        "Not authorized",
        &format!("Your role ({}) does not have access to this page.", shell.user.role.label()),
        Some(("Return to Home", "/")),
    );
    layout("Not Authorized", shell, &content)
}
