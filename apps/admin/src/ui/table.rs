//! Plain-text rendering of a [`RecordSetView`].

use std::fmt::Write as _;

use shared::{
    domain::EditableField,
    protocol::{MemberRow, RecordSetView},
};

const HEADERS: [&str; 6] = ["Sel", "ID", "Name", "Email", "Role", "Actions"];

pub fn render_view(view: &RecordSetView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Search: \"{}\"  ({} of {} members)",
        view.search_term, view.filtered_count, view.total_count
    );

    let rows: Vec<[String; 6]> = view
        .visible_rows
        .iter()
        .map(|row| render_row(row, view))
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    if rows.is_empty() {
        let _ = writeln!(out, "(no members)");
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    let _ = writeln!(out, "{}", pager_line(view));
    if !view.selected_ids.is_empty() {
        let _ = writeln!(out, "Selected: {} row(s)", view.selected_ids.len());
    }
    if let Some(error) = &view.last_error {
        let _ = writeln!(out, "error: {}", error.message);
    }
    out
}

fn render_row(row: &MemberRow, view: &RecordSetView) -> [String; 6] {
    let member = &row.member;
    let cell = |field: EditableField| {
        if row.editing {
            let draft = view
                .editing_state
                .get(&member.id)
                .and_then(|patch| patch.get(field))
                .unwrap_or_else(|| member.field(field));
            format!("<{draft}>")
        } else {
            member.field(field).to_string()
        }
    };
    let actions = if row.editing {
        "save | cancel | delete"
    } else {
        "edit | delete"
    };

    [
        if row.selected { "[x]" } else { "[ ]" }.to_string(),
        member.id.to_string(),
        cell(EditableField::Name),
        cell(EditableField::Email),
        cell(EditableField::Role),
        actions.to_string(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

/// `|< < 1 [2] 3 > >|`, with unavailable moves shown as `-`.
pub fn pager_line(view: &RecordSetView) -> String {
    let back = |label: &str| {
        if view.is_first_page() {
            "-".to_string()
        } else {
            label.to_string()
        }
    };
    let forward = |label: &str| {
        if view.is_last_page() {
            "-".to_string()
        } else {
            label.to_string()
        }
    };

    let mut parts = vec![back("|<"), back("<")];
    parts.extend(view.page_numbers.iter().map(|page| {
        if *page == view.current_page {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));
    parts.push(forward(">"));
    parts.push(forward(">|"));
    parts.join(" ")
}

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod tests;
