use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::{API_ACTION_COMPLETE, API_ACTION_ITEMS, API_BASE, API_NOTES, API_NOTES_EXTRACT, API_NOTES_SEARCH, QUERY_SEARCH, STATUS_NO_CONTENT};
use crate::types::{ActionItem, Note, ResponseKind};

// Same set as `encodeURIComponent`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn response_kind(status: u16) -> ResponseKind {
    match status {
        STATUS_NO_CONTENT => ResponseKind::NoContent,
        200..=299 => ResponseKind::Json,
        _ => ResponseKind::Failure,
    }
}

/// Trimmed search term, `None` when nothing is left.
pub fn search_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

pub fn url_notes() -> String {
    format!("{API_BASE}/{API_NOTES}/")
}

pub fn url_notes_search(query: &str) -> String {
    let query = utf8_percent_encode(query, QUERY_VALUE);
    format!("{API_BASE}/{API_NOTES}/{API_NOTES_SEARCH}/?{QUERY_SEARCH}={query}")
}

pub fn url_notes_load(query: Option<&str>) -> String {
    match query {
        Some(query) => url_notes_search(query),
        None => url_notes(),
    }
}

pub fn url_note(id: i64) -> String {
    format!("{API_BASE}/{API_NOTES}/{id}")
}

pub fn url_note_extract(id: i64) -> String {
    format!("{API_BASE}/{API_NOTES}/{id}/{API_NOTES_EXTRACT}")
}

pub fn url_action_items() -> String {
    format!("{API_BASE}/{API_ACTION_ITEMS}/")
}

pub fn url_action_complete(id: i64) -> String {
    format!("{API_BASE}/{API_ACTION_ITEMS}/{id}/{API_ACTION_COMPLETE}")
}

pub fn view_note(note: &Note) -> String {
    format!("{}: {}", note.title, note.content)
}

pub fn view_action(item: &ActionItem) -> String {
    let status = if item.completed { "done" } else { "open" };
    format!("{} [{status}]", item.description)
}
