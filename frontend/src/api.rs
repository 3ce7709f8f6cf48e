use shared::error::ApiError;
use shared::types::{ActionItem, ActionItemCreate, Note, NoteCreate, NoteExtract, NoteUpdate};
use shared::utils::{url_action_complete, url_action_items, url_note, url_note_extract, url_notes, url_notes_load};

use crate::connect_fetch::{fetch_empty, fetch_json, FetchOptions, METHOD_DELETE, METHOD_GET, METHOD_POST, METHOD_PUT};

/// Endpoints of the notes service. One call, one request.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn notes_list(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError>;
    async fn note_create(&self, data: &NoteCreate) -> Result<Note, ApiError>;
    async fn note_update(&self, id: i64, data: &NoteUpdate) -> Result<Note, ApiError>;
    async fn note_delete(&self, id: i64) -> Result<(), ApiError>;
    async fn note_extract(&self, id: i64) -> Result<NoteExtract, ApiError>;
    async fn actions_list(&self) -> Result<Vec<ActionItem>, ApiError>;
    async fn action_create(&self, data: &ActionItemCreate) -> Result<ActionItem, ApiError>;
    async fn action_complete(&self, id: i64) -> Result<(), ApiError>;
}

/// The browser `fetch` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

fn required<T>(url: &str, data: Option<T>) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::other(format!("{url}: empty response")))
}

impl NotesApi for HttpApi {
    async fn notes_list(&self, query: Option<&str>) -> Result<Vec<Note>, ApiError> {
        let url = url_notes_load(query);
        let notes = fetch_json(&url, FetchOptions::method(METHOD_GET)).await?;
        Ok(notes.unwrap_or_default())
    }

    async fn note_create(&self, data: &NoteCreate) -> Result<Note, ApiError> {
        let url = url_notes();
        let note = fetch_json(&url, FetchOptions::json(METHOD_POST, data)?).await?;
        required(&url, note)
    }

    async fn note_update(&self, id: i64, data: &NoteUpdate) -> Result<Note, ApiError> {
        let url = url_note(id);
        let note = fetch_json(&url, FetchOptions::json(METHOD_PUT, data)?).await?;
        required(&url, note)
    }

    async fn note_delete(&self, id: i64) -> Result<(), ApiError> {
        fetch_empty(&url_note(id), FetchOptions::method(METHOD_DELETE)).await
    }

    async fn note_extract(&self, id: i64) -> Result<NoteExtract, ApiError> {
        let url = url_note_extract(id);
        let extract = fetch_json(&url, FetchOptions::method(METHOD_POST)).await?;
        Ok(extract.unwrap_or_default())
    }

    async fn actions_list(&self) -> Result<Vec<ActionItem>, ApiError> {
        let items = fetch_json(&url_action_items(), FetchOptions::method(METHOD_GET)).await?;
        Ok(items.unwrap_or_default())
    }

    async fn action_create(&self, data: &ActionItemCreate) -> Result<ActionItem, ApiError> {
        let url = url_action_items();
        let item = fetch_json(&url, FetchOptions::json(METHOD_POST, data)?).await?;
        required(&url, item)
    }

    async fn action_complete(&self, id: i64) -> Result<(), ApiError> {
        fetch_empty(&url_action_complete(id), FetchOptions::method(METHOD_PUT)).await
    }
}
