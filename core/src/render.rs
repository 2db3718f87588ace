//! Plain-text rendering of the screen: form on top, table below.
//!
//! `render` is a pure function of a `View` snapshot, so every state the
//! controller can be in (including the pending labels) can be checked
//! without driving real requests.

use crate::crud::{Mode, Phase};
use crate::form::{Field, FormState};
use crate::list::ListState;
use crate::types::Student;

pub const TITLE: &str = "Student Management System";
pub const LOADING: &str = "Loading students...";
pub const EMPTY_MESSAGE: &str = "No students found.";

const COLUMNS: [&str; 5] = ["Name", "Email", "Phone", "Age", "Actions"];

#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub list: &'a ListState,
    pub form: &'a FormState,
    pub mode: Mode,
    pub phase: Phase,
}

pub fn render(view: &View<'_>) -> String {
    let students = match view.list {
        ListState::Loading => return LOADING.to_string(),
        ListState::Failed(message) => return format!("Error: {message}"),
        ListState::Ready(students) => students,
    };

    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len()), String::new()];
    for field in Field::ALL {
        lines.push(format!(
            "{:<7}[{}]",
            format!("{}:", field.label()),
            view.form.get(field)
        ));
    }
    lines.push(format!("< {} >", submit_label(view.mode, view.phase)));
    lines.push(String::new());
    lines.extend(table(students, view.phase));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn submit_label(mode: Mode, phase: Phase) -> &'static str {
    let pending = phase == Phase::Submitting;
    match (mode, pending) {
        (Mode::Create, false) => "Add Student",
        (Mode::Create, true) => "Adding...",
        (Mode::Edit(_), false) => "Update Student",
        (Mode::Edit(_), true) => "Updating...",
    }
}

fn actions(student: &Student, phase: Phase) -> String {
    if phase == Phase::Deleting(student.id) {
        "[Edit] [Deleting...]".to_string()
    } else {
        "[Edit] [Delete]".to_string()
    }
}

fn table(students: &[Student], phase: Phase) -> Vec<String> {
    let rows: Vec<[String; 5]> = students
        .iter()
        .map(|s| {
            [
                s.name.clone(),
                s.email.clone(),
                s.phone.clone(),
                s.age.to_string(),
                actions(s, phase),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    // The placeholder row spans every column; make sure it fits.
    let spanned = widths.iter().sum::<usize>() + 3 * (COLUMNS.len() - 1);
    let shortfall = EMPTY_MESSAGE.len().saturating_sub(spanned);
    widths[COLUMNS.len() - 1] += shortfall;
    let spanned = spanned + shortfall;

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut out = vec![border.clone()];
    out.push(line(&COLUMNS.map(String::from)[..]));
    out.push(border.clone());
    if rows.is_empty() {
        out.push(format!("| {EMPTY_MESSAGE:<spanned$} |"));
    } else {
        out.extend(rows.iter().map(|row| line(&row[..])));
    }
    out.push(border);
    out
}
