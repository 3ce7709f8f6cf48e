use futures_signals::signal_vec::MutableVec;

use shared::error::ApiError;
use shared::types::{Note, NoteCreate, NoteExtract, NoteUpdate};
use shared::utils::search_query;

use crate::api::NotesApi;

/// Empties the list, then fills it with whatever the server answers for
/// `query` (full collection when `None`).
pub async fn load_notes<A: NotesApi>(api: &A, notes: &MutableVec<Note>, query: Option<&str>) -> Result<(), ApiError> {
    notes.lock_mut().clear();
    let list = api.notes_list(query).await?;
    notes.lock_mut().replace_cloned(list);
    Ok(())
}

pub async fn search_notes<A: NotesApi>(api: &A, notes: &MutableVec<Note>, raw: &str) -> Result<(), ApiError> {
    load_notes(api, notes, search_query(raw).as_deref()).await
}

/// `reset` runs between the create request and the reload.
pub async fn create_note<A, F>(api: &A, notes: &MutableVec<Note>, data: NoteCreate, reset: F) -> Result<Note, ApiError>
    where
        A: NotesApi,
        F: FnOnce()
{
    let note = api.note_create(&data).await?;
    reset();
    load_notes(api, notes, None).await?;
    Ok(note)
}

/// `reply` is the prompt answer; `None` (cancelled) sends nothing.
/// Returns whether an update went out.
pub async fn edit_note<A: NotesApi>(api: &A, notes: &MutableVec<Note>, id: i64, reply: Option<String>, query: Option<&str>) -> Result<bool, ApiError> {
    let content = match reply {
        Some(content) => content,
        None => return Ok(false),
    };
    api.note_update(id, &NoteUpdate::content(content)).await?;
    load_notes(api, notes, query).await?;
    Ok(true)
}

pub async fn delete_note<A: NotesApi>(api: &A, notes: &MutableVec<Note>, id: i64, confirmed: bool, query: Option<&str>) -> Result<bool, ApiError> {
    if !confirmed {
        return Ok(false);
    }
    api.note_delete(id).await?;
    load_notes(api, notes, query).await?;
    Ok(true)
}

pub async fn extract_note<A: NotesApi>(api: &A, id: i64) -> Result<NoteExtract, ApiError> {
    api.note_extract(id).await
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use shared::utils::view_note;

    use crate::api::fake::FakeApi;

    use super::*;

    fn rendered(notes: &MutableVec<Note>) -> Vec<String> {
        notes.lock_ref().iter().map(view_note).collect()
    }

    fn ids(notes: &MutableVec<Note>) -> Vec<i64> {
        notes.lock_ref().iter().map(|note| note.id).collect()
    }

    fn server() -> FakeApi {
        FakeApi::new()
            .with_note("Shopping", "milk, eggs")
            .with_note("Work", "Quarterly report")
            .with_note("Ideas", "A shopping app")
    }

    #[test]
    fn load_renders_every_note() {
        let api = server();
        let notes = MutableVec::new();
        block_on(load_notes(&api, &notes, None)).unwrap();

        assert_eq!(rendered(&notes), vec![
            "Shopping: milk, eggs".to_string(),
            "Work: Quarterly report".to_string(),
            "Ideas: A shopping app".to_string(),
        ]);
        assert_eq!(api.take_requests(), vec!["GET /notes/".to_string()]);
    }

    #[test]
    fn load_replaces_previous_render() {
        let api = server();
        let notes = MutableVec::new_with_values(vec![Note { id: 99, title: "stale".to_string(), content: "x".to_string() }]);
        block_on(load_notes(&api, &notes, None)).unwrap();
        assert_eq!(ids(&notes), vec![1, 2, 3]);
    }

    #[test]
    fn search_shows_the_server_subset() {
        let api = server();
        let notes = MutableVec::new();
        block_on(search_notes(&api, &notes, "  shopping ")).unwrap();

        let expected = block_on(api.notes_list(Some("shopping"))).unwrap();
        assert_eq!(notes.lock_ref().to_vec(), expected);
        assert_eq!(ids(&notes), vec![1, 3]);
        assert_eq!(api.take_requests()[0], "GET /notes/search/?q=shopping");
    }

    #[test]
    fn blank_search_reloads_everything() {
        let api = server();
        let notes = MutableVec::new();
        block_on(search_notes(&api, &notes, "   ")).unwrap();

        assert_eq!(ids(&notes), vec![1, 2, 3]);
        assert_eq!(api.take_requests(), vec!["GET /notes/".to_string()]);
    }

    #[test]
    fn created_note_appears_in_next_reload() {
        let api = FakeApi::new();
        let notes = MutableVec::new();
        let reset = Cell::new(false);

        let note = block_on(create_note(&api, &notes, NoteCreate {
            title: "Shopping".to_string(),
            content: "milk, eggs".to_string(),
        }, || reset.set(true))).unwrap();

        assert!(reset.get());
        assert_eq!(api.take_requests(), vec!["POST /notes/".to_string(), "GET /notes/".to_string()]);
        assert_eq!(ids(&notes), vec![note.id]);
        assert_eq!(rendered(&notes), vec!["Shopping: milk, eggs".to_string()]);
    }

    #[test]
    fn rejected_create_keeps_form_and_list() {
        let api = server();
        let notes = MutableVec::new();
        block_on(load_notes(&api, &notes, None)).unwrap();
        api.take_requests();
        let reset = Cell::new(false);

        let err = block_on(create_note(&api, &notes, NoteCreate {
            title: "".to_string(),
            content: "body".to_string(),
        }, || reset.set(true))).unwrap_err();

        assert_eq!(err.status, Some(422));
        assert!(!reset.get());
        assert_eq!(ids(&notes), vec![1, 2, 3]);
        assert_eq!(api.take_requests(), vec!["POST /notes/".to_string()]);
    }

    #[test]
    fn cancelled_edit_changes_nothing() {
        let api = server();
        let notes = MutableVec::new();
        block_on(load_notes(&api, &notes, None)).unwrap();
        api.take_requests();
        let before = api.notes();

        let sent = block_on(edit_note(&api, &notes, 1, None, None)).unwrap();

        assert!(!sent);
        assert!(api.take_requests().is_empty());
        assert_eq!(api.notes(), before);
        assert_eq!(notes.lock_ref().to_vec(), before);
    }

    #[test]
    fn edit_updates_content_and_keeps_query() {
        let api = server();
        let notes = MutableVec::new();

        let sent = block_on(edit_note(&api, &notes, 1, Some("bread".to_string()), Some("shop"))).unwrap();

        assert!(sent);
        assert_eq!(api.take_requests(), vec!["PUT /notes/1".to_string(), "GET /notes/search/?q=shop".to_string()]);
        assert_eq!(rendered(&notes), vec!["Shopping: bread".to_string(), "Ideas: A shopping app".to_string()]);
    }

    #[test]
    fn edit_of_missing_note_reports_server_text() {
        let api = server();
        let notes = MutableVec::new();

        let err = block_on(edit_note(&api, &notes, 42, Some("x".to_string()), None)).unwrap_err();

        assert_eq!(err.to_string(), "Note not found");
        assert_eq!(api.take_requests(), vec!["PUT /notes/42".to_string()]);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let api = server();
        let notes = MutableVec::new();
        block_on(load_notes(&api, &notes, None)).unwrap();
        api.take_requests();

        let sent = block_on(delete_note(&api, &notes, 2, false, None)).unwrap();

        assert!(!sent);
        assert!(api.take_requests().is_empty());
        assert_eq!(api.notes().len(), 3);
        assert_eq!(ids(&notes), vec![1, 2, 3]);
    }

    #[test]
    fn deleted_note_is_gone_from_next_reload() {
        let api = server();
        let notes = MutableVec::new();

        let sent = block_on(delete_note(&api, &notes, 2, true, None)).unwrap();

        assert!(sent);
        assert_eq!(api.take_requests(), vec!["DELETE /notes/2".to_string(), "GET /notes/".to_string()]);
        assert!(!ids(&notes).contains(&2));
        assert_eq!(ids(&notes), vec![1, 3]);
    }

    #[test]
    fn delete_during_search_keeps_the_filter() {
        let api = server();
        let notes = MutableVec::new();

        block_on(delete_note(&api, &notes, 1, true, Some("shopping"))).unwrap();

        assert_eq!(api.take_requests()[1], "GET /notes/search/?q=shopping");
        assert_eq!(ids(&notes), vec![3]);
    }

    #[test]
    fn failed_load_leaves_list_empty() {
        let api = server();
        let notes = MutableVec::new();
        block_on(load_notes(&api, &notes, None)).unwrap();

        api.fail_next(ApiError::status(500, "Internal Server Error"));
        let err = block_on(load_notes(&api, &notes, None)).unwrap_err();

        assert_eq!(err.to_string(), "Internal Server Error");
        assert!(notes.lock_ref().is_empty());
    }

    #[test]
    fn extract_returns_tags_and_candidates() {
        let api = FakeApi::new().with_note("Extract", "TODO: do something #work\nplain line\nCall mom!");

        let extract = block_on(extract_note(&api, 1)).unwrap();

        assert_eq!(extract.tags, vec!["work".to_string()]);
        assert_eq!(extract.action_items, vec!["TODO: do something #work".to_string(), "Call mom!".to_string()]);
        assert_eq!(api.take_requests(), vec!["POST /notes/1/extract".to_string()]);
    }
}
