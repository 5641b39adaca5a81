//! Plain-text rendering of records and messages.
//!
//! Column widths are measured in terminal cells, not bytes or chars, so
//! Cyrillic or CJK titles line up with ASCII ones.

use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::{Record, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_MAX_WIDTH: usize = 40;
const AUTHOR_MAX_WIDTH: usize = 28;
const GAP: &str = "  ";

pub fn render_records(records: &[Record]) -> String {
    let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    let titles: Vec<String> = records
        .iter()
        .map(|r| truncate_to_width(&r.title, TITLE_MAX_WIDTH))
        .collect();
    let authors: Vec<String> = records
        .iter()
        .map(|r| truncate_to_width(&r.author, AUTHOR_MAX_WIDTH))
        .collect();
    let years: Vec<String> = records.iter().map(|r| r.year.to_string()).collect();

    let id_w = column_width("ID", &ids);
    let title_w = column_width("Title", &titles);
    let author_w = column_width("Author", &authors);
    let year_w = column_width("Year", &years);

    let mut out = String::new();
    let header = format!(
        "{}{GAP}{}{GAP}{}{GAP}{}{GAP}Status",
        pad_left("ID", id_w),
        pad_right("Title", title_w),
        pad_right("Author", author_w),
        pad_left("Year", year_w),
    );
    out.push_str(&format!("{}\n", header.bold()));

    for (i, record) in records.iter().enumerate() {
        let status = match record.status.as_str() {
            STATUS_AVAILABLE => record.status.green(),
            STATUS_CHECKED_OUT => record.status.yellow(),
            _ => record.status.normal(),
        };
        out.push_str(&format!(
            "{}{GAP}{}{GAP}{}{GAP}{}{GAP}{}\n",
            pad_left(&ids[i], id_w).dimmed(),
            pad_right(&titles[i], title_w),
            pad_right(&authors[i], author_w),
            pad_left(&years[i], year_w),
            status
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

fn column_width(header: &str, cells: &[String]) -> usize {
    cells
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
