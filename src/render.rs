//! Terminal rendering.

use owo_colors::OwoColorize;
use sharedcal_core::board::UserTotals;
use sharedcal_core::grid::{CalendarCell, weeks};
use sharedcal_core::records::{CalendarEvent, DiaryEntry, TodoItem};
use sharedcal_core::{DateCountMap, MonthCursor};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const CELL_WIDTH: usize = 4;

/// Plain text for one cell: day number, `*` if it has events, blank for padding.
fn cell_text(cell: &CalendarCell, counts: &DateCountMap) -> String {
    match cell.day() {
        Some(day) => {
            let marker = if counts.has_events(cell) { "*" } else { " " };
            format!("{:>3}{}", day, marker)
        }
        None => " ".repeat(CELL_WIDTH),
    }
}

pub fn render_month(
    cursor: &MonthCursor,
    cells: &[CalendarCell],
    counts: &DateCountMap,
    selected: Option<&str>,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{:^width$}", cursor.label(), width = CELL_WIDTH * 7).bold().to_string());
    lines.push(
        WEEKDAYS
            .iter()
            .map(|d| format!("{:>3} ", d))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for row in weeks(cells) {
        let line: String = row
            .iter()
            .map(|cell| {
                let text = cell_text(cell, counts);
                if cell.is_today {
                    text.reversed().to_string()
                } else if selected.is_some() && cell.iso_date.as_deref() == selected {
                    text.underline().to_string()
                } else if counts.has_events(cell) {
                    text.cyan().to_string()
                } else {
                    text
                }
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}

pub fn render_event(event: &CalendarEvent) -> String {
    let mut line = format!(
        "{} {} {}",
        event.date.bold(),
        event.title,
        format!("[{}]", event.created_by).dimmed()
    );
    if let Some(place) = &event.location_name {
        line.push_str(&format!(" @ {}", place));
    }
    if !event.description.is_empty() {
        line.push_str(&format!("\n    {}", event.description.dimmed()));
    }
    line.push_str(&format!("\n    {}", event.id.dimmed()));
    line
}

pub fn render_todo(todo: &TodoItem) -> String {
    let check = if todo.completed { "[x]" } else { "[ ]" };
    let text = if todo.completed {
        todo.text.strikethrough().dimmed().to_string()
    } else {
        todo.text.clone()
    };
    format!(
        "{} {} {} {}",
        check,
        text,
        format!("[{}]", todo.created_by).dimmed(),
        todo.id.dimmed()
    )
}

pub fn render_diary(entry: &DiaryEntry) -> String {
    format!(
        "{} {}\n    {}\n    {}",
        entry.date.bold(),
        entry.created_at.format("%H:%M UTC").dimmed(),
        entry.content,
        entry.id.dimmed()
    )
}

pub fn render_totals(name: &str, totals: UserTotals) -> String {
    format!(
        "{}: {} events, {} todos, {} diary entries",
        name.bold(),
        totals.events,
        totals.todos,
        totals.diaries
    )
}
