//! `unimanage overview | students | courses`

use anyhow::bail;
use unimanage_core::{Course, Searchable, Student, UniManageConfig, fixtures, search, visibility};

use super::session::current_user;

pub fn overview(config: &UniManageConfig, role: Option<&str>) -> anyhow::Result<()> {
    let view = match role {
        Some(role) => {
            let view = visibility::resolve_str(role);
            if view.is_empty() {
                tracing::warn!(role = %role, "Unknown role, nothing is visible");
            }
            view
        }
        None => {
            let Some(user) = current_user(config) else {
                bail!("not signed in; pass --role or run `unimanage login` first");
            };
            visibility::resolve(Some(user.role))
        }
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

pub fn students(query: &str, json: bool) -> anyhow::Result<()> {
    let results = search::filter(fixtures::STUDENTS, query, Student::DEFAULT_FIELDS);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.to_string(),
                s.department.to_string(),
                s.year.to_string(),
                format!("{:.2}", s.gpa),
                s.status.as_str().to_string(),
            ]
        })
        .collect();
    print!("{}", render_table(&["ID", "NAME", "DEPARTMENT", "YEAR", "GPA", "STATUS"], &rows));
    println!("{} of {} students", results.len(), fixtures::STUDENTS.len());
    Ok(())
}

pub fn courses(query: &str, json: bool) -> anyhow::Result<()> {
    let results = search::filter(fixtures::COURSES, query, Course::DEFAULT_FIELDS);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.to_string(),
                c.instructor.to_string(),
                format!("{}/{} ({}%)", c.enrolled, c.capacity, c.utilization_percent()),
                c.status.as_str().to_string(),
            ]
        })
        .collect();
    print!("{}", render_table(&["ID", "NAME", "INSTRUCTOR", "ENROLLED", "STATUS"], &rows));
    println!("{} of {} courses", results.len(), fixtures::COURSES.len());
    Ok(())
}

/// Left-aligned columns separated by two spaces.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(headers.to_vec());
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}
