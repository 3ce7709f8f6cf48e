/// Prefix put in front of every route, e.g. `http://localhost:8000`.
/// Empty means the page origin.
pub const API_BASE: &str = match option_env!("NOTES_API_BASE") {
    Some(base) => base,
    None => "",
};

pub static API_NOTES: &'static str = "notes";
pub static API_NOTES_SEARCH: &'static str = "search";
pub static API_NOTES_EXTRACT: &'static str = "extract";
pub static API_ACTION_ITEMS: &'static str = "action-items";
pub static API_ACTION_COMPLETE: &'static str = "complete";

pub static QUERY_SEARCH: &'static str = "q";

pub static HEADER_CONTENT_TYPE: &'static str = "Content-Type";
pub static MIME_JSON: &'static str = "application/json";

pub const STATUS_NO_CONTENT: u16 = 204;
